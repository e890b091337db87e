//! Classification of non-2xx responses into typed API errors.

use serde_json::Value;

use crate::error::ApiError;

/// Classify an error response.
///
/// Total over `(status, body)`: an empty or unparsable body still yields an
/// error carrying the status and its kind, with no message. Fields of a JSON
/// body are read independently, so one malformed field never hides the
/// others.
pub fn classify(status: u16, body: &[u8]) -> ApiError {
    let error = ApiError::new(status);

    let Ok(parsed) = serde_json::from_slice::<Value>(body) else {
        return error;
    };

    ApiError {
        message: string_field(&parsed, "message"),
        error_type: string_field(&parsed, "category")
            .or_else(|| string_field(&parsed, "errorType")),
        correlation_id: string_field(&parsed, "correlationId"),
        ..error
    }
}

/// A non-empty string field of a JSON object.
fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    #[test]
    fn not_found_with_message() {
        let err = classify(404, br#"{"message":"Contact not found"}"#);
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message.as_deref(), Some("Contact not found"));
        assert!(err.to_string().contains("Contact not found"));
    }

    #[test]
    fn full_error_body() {
        let body = br#"{
            "status": "error",
            "message": "Property values were not valid",
            "correlationId": "b8b3d4c6-1a2b",
            "category": "VALIDATION_ERROR"
        }"#;
        let err = classify(400, body);
        assert_eq!(err.kind, ApiErrorKind::BadRequest);
        assert_eq!(err.error_type.as_deref(), Some("VALIDATION_ERROR"));
        assert_eq!(err.correlation_id.as_deref(), Some("b8b3d4c6-1a2b"));
    }

    #[test]
    fn empty_body_yields_bare_kind() {
        let err = classify(404, b"");
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.status, 404);
        assert!(err.message.is_none());
    }

    #[test]
    fn non_json_body_yields_bare_kind() {
        let err = classify(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.kind, ApiErrorKind::ServerError);
        assert!(err.message.is_none());
    }

    #[test]
    fn unlisted_status_keeps_exact_code() {
        for status in [402u16, 405, 409, 410, 418, 422, 451] {
            let err = classify(status, br#"{"message":"nope","errorType":"CONFLICT"}"#);
            assert_eq!(err.kind, ApiErrorKind::Other);
            assert_eq!(err.status, status);
            assert_eq!(err.error_type.as_deref(), Some("CONFLICT"));
        }
    }

    #[test]
    fn category_wins_over_error_type() {
        let body = br#"{
            "message": "Contact not found",
            "category": "OBJECT_NOT_FOUND",
            "errorType": "NOT_FOUND"
        }"#;
        let err = classify(404, body);
        assert_eq!(err.message.as_deref(), Some("Contact not found"));
        assert_eq!(err.error_type.as_deref(), Some("OBJECT_NOT_FOUND"));
    }

    #[test]
    fn malformed_field_keeps_message() {
        let err = classify(404, br#"{"message":"Contact not found","correlationId":12345}"#);
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.message.as_deref(), Some("Contact not found"));
        assert!(err.correlation_id.is_none());
    }

    #[test]
    fn non_object_json_yields_bare_kind() {
        let err = classify(400, br#"["unexpected"]"#);
        assert_eq!(err.kind, ApiErrorKind::BadRequest);
        assert!(err.message.is_none());
    }

    #[test]
    fn server_error_range() {
        for status in 500u16..600 {
            assert_eq!(classify(status, b"{}").kind, ApiErrorKind::ServerError);
        }
    }
}
