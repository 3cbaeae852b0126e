//! SSRF containment.
//!
//! This module provides:
//! - `is_public_ip()` - the address check applied to every redirect hop
//! - `AddressPolicy` - which address classes a scan may contact
//! - `SafeResolver` - a `reqwest` DNS resolver that refuses non-public answers,
//!   so a rebinding between the hop check and the connect is also refused

mod safe_resolver;

pub use safe_resolver::{is_public_ip, AddressPolicy, SafeResolver};
