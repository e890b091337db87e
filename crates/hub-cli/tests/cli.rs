//! CLI tests against a mock API server.
//!
//! Each test starts a wiremock server and points the `hub` binary at it
//! with `--base-url`, so no network access or real token is needed.

use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `server` with a static token.
async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hub"))
        .args(["--base-url", &server.uri(), "--token", "pat-test"])
        .args(args)
        .env_remove("HUB_ACCESS_TOKEN")
        .env_remove("HUB_BASE_URL")
        .env("NO_COLOR", "1")
        .output()
        .await
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[tokio::test]
async fn list_prints_rows_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .and(header("authorization", "Bearer pat-test"))
        .and(query_param("limit", "2"))
        .and(query_param("properties", "email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "1", "properties": {"email": "a@example.com"}},
                {"id": "2", "properties": {"email": "b@example.com"}}
            ],
            "paging": {"next": {"after": "2"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["objects", "list", "contacts", "--limit", "2", "--properties", "email"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("1\ta@example.com"));
    assert!(out.contains("2\tb@example.com"));
    assert!(stderr(&output).contains("Next cursor: 2"));
}

#[tokio::test]
async fn get_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/deals/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "properties": {"amount": "100"}
        })))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["objects", "get", "deals", "42", "--json"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let record: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(record["id"], "42");
    assert_eq!(record["properties"]["amount"], "100");
}

#[tokio::test]
async fn get_with_blank_id_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["objects", "get", "contacts", " "]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("id is required"));
}

#[tokio::test]
async fn not_found_reports_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Object not found",
            "category": "OBJECT_NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["objects", "get", "contacts", "404"]).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Failed to get contacts 404"));
    assert!(err.contains("Object not found"));
}

#[tokio::test]
async fn unauthorized_prints_token_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["objects", "list", "contacts"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("check the token"));
}

#[tokio::test]
async fn create_sends_properties() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts"))
        .and(body_json(json!({"properties": {"email": "new@example.com"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "7",
            "properties": {"email": "new@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["objects", "create", "contacts", "--set", "email=new@example.com"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Created contacts 7"));
}

#[tokio::test]
async fn search_builds_filter_groups() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/crm/v3/objects/contacts/search"))
        .and(body_json(json!({
            "filterGroups": [
                {"filters": [{"propertyName": "lifecyclestage", "operator": "EQ", "value": "lead"}]}
            ],
            "sorts": [{"propertyName": "createdate", "direction": "DESCENDING"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "results": [{"id": "5", "properties": {"lifecyclestage": "lead"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &[
            "objects",
            "search",
            "contacts",
            "--filter",
            "lifecyclestage:EQ:lead",
            "--sort",
            "createdate:desc",
        ],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("5\tlead"));
    assert!(stderr(&output).contains("Total: 1"));
}

#[tokio::test]
async fn graphql_query_prints_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collector/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"CRM": {"contact_collection": {"total": 3}}}
        })))
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &["graphql", "query", "{ CRM { contact_collection { total } } }"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let data: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(data["CRM"]["contact_collection"]["total"], 3);
}

#[tokio::test]
async fn graphql_errors_exit_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/collector/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Unknown field 'nope'"}]
        })))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["graphql", "query", "{ nope }"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown field 'nope'"));
}

#[tokio::test]
async fn missing_token_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = Command::new(env!("CARGO_BIN_EXE_hub"))
        .args(["--base-url", &server.uri(), "objects", "list", "contacts"])
        .env_remove("HUB_ACCESS_TOKEN")
        .env("NO_COLOR", "1")
        .output()
        .await
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("HUB_ACCESS_TOKEN"));
}
