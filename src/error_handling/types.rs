//! Error type definitions.
//!
//! Library-level errors (`InitializationError`, `ScanError`) plus one closed
//! failure kind per network component. Component failures never cross the
//! component boundary as `Err`: they are recorded on the component's report
//! and turned into a finding.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error building the TLS client configuration.
    #[error("TLS configuration error: {0}")]
    TlsConfigError(#[from] rustls::Error),
}

/// Errors surfaced by a scan.
///
/// Everything else that can go wrong during a scan is absorbed into the
/// affected component's report.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The input has no usable hostname; no network check was attempted.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A check task died unexpectedly (panic or runtime shutdown).
    #[error("Internal fault during {stage}: {message}")]
    Internal {
        /// Pipeline stage that failed
        stage: &'static str,
        /// Underlying cause
        message: String,
    },
}

/// Why a redirect trace stopped without reaching a page.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TraceFailure {
    /// The URL being requested has no host component.
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// The hop's hostname could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Hostname being resolved
        host: String,
        /// Resolver error
        message: String,
    },

    /// The HTTP request failed at the transport level (connect, TLS, timeout).
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// URL being requested
        url: String,
        /// Client error
        message: String,
    },

    /// A `Location` header could not be resolved against the current URL.
    #[error("Invalid redirect target '{location}': {message}")]
    InvalidLocation {
        /// Raw header value
        location: String,
        /// Parse error
        message: String,
    },
}

/// Why a certificate inspection produced no (or a degraded) certificate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CertificateFailure {
    /// The hostname is not a valid TLS server name.
    #[error("Invalid server name: {0}")]
    InvalidHostname(String),

    /// TCP connection to port 443 failed.
    #[error("Connection to port 443 failed: {0}")]
    Connect(String),

    /// The check exceeded its time budget.
    #[error("TLS check timed out")]
    Timeout,

    /// The handshake failed for a reason other than certificate validation.
    #[error("TLS handshake failed: {0}")]
    Handshake(String),

    /// The server presented a certificate that did not validate.
    #[error("Certificate verification failed: {0}")]
    InvalidCertificate(String),

    /// The handshake completed without a peer certificate.
    #[error("No peer certificate presented")]
    NoCertificate,

    /// The certificate could not be parsed.
    #[error("Certificate parse error: {0}")]
    Parse(String),
}

/// Why a WHOIS lookup produced no record.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WhoisFailure {
    /// The lookup exceeded its time budget.
    #[error("WHOIS lookup timed out")]
    Timeout,

    /// The WHOIS client could not be set up.
    #[error("WHOIS client unavailable: {0}")]
    Client(String),

    /// The RDAP/WHOIS exchange failed.
    #[error("WHOIS lookup failed: {0}")]
    Lookup(String),

    /// The server answered with nothing usable.
    #[error("Empty WHOIS response")]
    EmptyResponse,

    /// The lookup worker terminated abnormally.
    #[error("WHOIS worker failed: {0}")]
    Worker(String),
}

/// Why the classifier could not produce a probability.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// No artifact at the configured path.
    #[error("Classifier artifact not found: {0}")]
    Missing(String),

    /// The artifact exists but could not be decoded.
    #[error("Classifier artifact is malformed: {0}")]
    Malformed(String),

    /// The artifact decoded but inference failed for this input.
    #[error("Inference failed: {0}")]
    Inference(String),
}
