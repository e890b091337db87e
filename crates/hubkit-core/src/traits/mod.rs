//! Core traits for transport behavior.

mod transport;

pub use transport::{Method, Transport};
