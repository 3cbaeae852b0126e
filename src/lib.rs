//! urlscope library: URL risk verdicts
//!
//! This library scans a single URL and fuses lexical, redirect, certificate,
//! reputation, content and classifier signals into a 0-100 risk score, a
//! verdict tier and a list of human-readable reasons.
//!
//! # Example
//!
//! ```no_run
//! use urlscope::{Config, Scanner};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = Scanner::from_config(Config::default())?;
//!
//! let result = scanner.scan("faceb0ok.com/login").await?;
//! println!("{} ({}): {:?}", result.verdict, result.risk_score, result.reasoning);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod content;
mod dns;
pub mod domain;
mod error_handling;
pub mod fingerprint;
pub mod fusion;
pub mod initialization;
pub mod lexical;
pub mod model;
pub mod models;
pub mod normalize;
pub mod reputation;
mod scan;
pub mod security;
pub mod tls;
pub mod trace;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    CertificateFailure, ClassifierError, InitializationError, ScanError, TraceFailure,
    WhoisFailure,
};
pub use models::{Finding, FindingCategory, ScanResult, Verdict};
pub use scan::{ScanContext, Scanner};
