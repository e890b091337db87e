//! Resource addressing and record types.
//!
//! Validated types here enforce their invariants at construction time, so
//! client operations can reject bad input before touching the network.

mod base_url;
mod family;
mod options;
mod record;
mod resource_type;

pub use base_url::{BaseUrl, DEFAULT_BASE_URL};
pub use family::ApiFamily;
pub use options::{ListOptions, join_properties};
pub use record::{NextPage, Page, Paging, Record};
pub use resource_type::ResourceType;
