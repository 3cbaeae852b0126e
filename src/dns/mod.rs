//! Hostname resolution.
//!
//! Every destination the scanner contacts is resolved here first so its
//! addresses can be checked against the SSRF policy.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host, resolve_url_host};
