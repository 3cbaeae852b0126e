//! Error handling.
//!
//! This module provides:
//! - Library error types (`InitializationError`, `ScanError`)
//! - Closed failure kinds for each network component
//!
//! Only `ScanError` is ever returned to the caller of a scan; the component
//! failure kinds are stored on reports.

mod types;

// Re-export public API
pub use types::{
    CertificateFailure, ClassifierError, InitializationError, ScanError, TraceFailure,
    WhoisFailure,
};
