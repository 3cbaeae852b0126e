//! TLS certificate posture of a scan target.
//!
//! The inspector opens a TLS session to port 443 and grades the leaf
//! certificate:
//! - issuer (free/automated authorities are flagged)
//! - age since `notBefore` (very new certificates are flagged)
//! - validation tier (DV vs OV/EV)
//!
//! Like the redirect tracer, it resolves the host itself and connects to a
//! checked address, so it never opens a socket to a non-public host.
//!
//! Uses `tokio-rustls` for the handshake and `x509-parser` for the certificate.

mod extract;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;
use rustls::crypto::ring::default_provider;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::Config;
use crate::dns::resolve_host;
use crate::error_handling::{CertificateFailure, InitializationError};
use crate::models::{CertificateReport, Finding, FindingCategory};
use crate::security::AddressPolicy;

use extract::{assess, assess_failure, parse_certificate};

const HTTPS_PORT: u16 = 443;

/// Grades the TLS certificate of a host.
#[derive(Clone)]
pub struct CertificateInspector {
    connector: TlsConnector,
    resolver: Arc<TokioAsyncResolver>,
    policy: AddressPolicy,
    timeout: Duration,
    port: u16,
}

impl CertificateInspector {
    /// Creates an inspector that trusts the Mozilla root program (`webpki-roots`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS client configuration cannot be built.
    pub fn new(
        resolver: Arc<TokioAsyncResolver>,
        config: &Config,
    ) -> Result<Self, InitializationError> {
        let mut root_store = RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let tls_config = ClientConfig::builder_with_provider(Arc::new(default_provider()))
            .with_safe_default_protocol_versions()?
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Ok(Self {
            connector: TlsConnector::from(Arc::new(tls_config)),
            resolver,
            policy: AddressPolicy::PublicOnly,
            timeout: config.check_timeout,
            port: HTTPS_PORT,
        })
    }

    pub(crate) fn with_policy(mut self, policy: AddressPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Connects to a port other than 443 (local fixtures).
    #[cfg(test)]
    pub(crate) fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Inspects the certificate served by `host` on port 443.
    ///
    /// Never fails: connection, handshake, validation and parse problems are
    /// all reported as a finding on the returned report. Resolution, connect
    /// and handshake share one per-check timeout.
    ///
    /// # Arguments
    ///
    /// * `host` - ASCII hostname or IP literal (no port, no brackets)
    pub async fn inspect(&self, host: &str) -> CertificateReport {
        match tokio::time::timeout(self.timeout, self.inspect_unbounded(host)).await {
            Ok(report) => report,
            Err(_) => {
                log::warn!("Certificate check for {host} timed out after {:?}", self.timeout);
                assess_failure(CertificateFailure::Timeout)
            }
        }
    }

    async fn inspect_unbounded(&self, host: &str) -> CertificateReport {
        let address = match self.checked_address(host).await {
            Ok(address) => address,
            Err(report) => return report,
        };

        let leaf = match self.fetch_leaf(host, address).await {
            Ok(der) => der,
            Err(failure) => {
                log::warn!("Certificate check for {host} failed: {failure}");
                return assess_failure(failure);
            }
        };

        match parse_certificate(&leaf) {
            Ok(facts) => {
                log::debug!(
                    "Certificate for {host}: issuer {:?}, notBefore {}",
                    facts.issuer_cn,
                    facts.not_before
                );
                assess(facts, chrono::Utc::now())
            }
            Err(failure) => {
                log::warn!("Certificate for {host} could not be parsed: {failure}");
                assess_failure(failure)
            }
        }
    }

    /// Resolves `host` and returns the first address, or a finished report
    /// when it cannot or must not be contacted.
    async fn checked_address(&self, host: &str) -> Result<IpAddr, CertificateReport> {
        let ips = resolve_host(host, &self.resolver)
            .await
            .map_err(|e| assess_failure(CertificateFailure::Connect(format!("{e:#}"))))?;

        if let Some(ip) = ips.iter().find(|ip| !self.policy.permits(**ip)) {
            log::warn!("Refusing TLS connection to {host}: {ip} is not a public address");
            return Err(CertificateReport::not_run(Finding::new(
                FindingCategory::CertificateSkipped,
                "Certificate check skipped (non-public address)",
            )));
        }

        // Resolution never returns an empty list
        ips.first()
            .copied()
            .ok_or_else(|| assess_failure(CertificateFailure::Connect(format!("no address for {host}"))))
    }

    /// Performs the handshake and returns the DER of the leaf certificate.
    async fn fetch_leaf(&self, host: &str, address: IpAddr) -> Result<Vec<u8>, CertificateFailure> {
        let server_name = ServerName::try_from(host.to_string())
            .map_err(|e| CertificateFailure::InvalidHostname(format!("{host}: {e}")))?;

        let sock = TcpStream::connect(SocketAddr::new(address, self.port))
            .await
            .map_err(|e| CertificateFailure::Connect(e.to_string()))?;

        let tls_stream = self
            .connector
            .connect(server_name, sock)
            .await
            .map_err(classify_handshake_error)?;

        let (_, session) = tls_stream.get_ref();
        session
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(|cert| cert.as_ref().to_vec())
            .ok_or(CertificateFailure::NoCertificate)
    }
}

/// Separates certificate validation failures from other handshake errors.
fn classify_handshake_error(error: std::io::Error) -> CertificateFailure {
    let tls_error = error
        .get_ref()
        .and_then(|inner| inner.downcast_ref::<rustls::Error>());
    match tls_error {
        Some(rustls::Error::InvalidCertificate(reason)) => {
            CertificateFailure::InvalidCertificate(format!("{reason:?}"))
        }
        _ => CertificateFailure::Handshake(error.to_string()),
    }
}
