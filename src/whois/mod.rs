//! Domain registration lookups using the whois-service crate.
//!
//! `whois-service` tries RDAP first and falls back to port-43 WHOIS with IANA
//! server discovery. This module turns its response into a `WhoisRecord`
//! (see `parse`).
//!
//! Lookups carry no deadline of their own: the reputation checker runs them on
//! a bounded worker and aborts it when its budget runs out.

mod parse;

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use tokio::sync::OnceCell;
use whois_service::{WhoisError, WhoisResponse};

use crate::error_handling::WhoisFailure;

use parse::record_from_parts;

/// Registration facts from one WHOIS answer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhoisRecord {
    /// Every distinct creation date found
    pub creation_dates: Vec<DateTime<Utc>>,
    pub registrar: Option<String>,
}

impl WhoisRecord {
    /// The earliest creation date, if any was published.
    pub fn earliest_creation(&self) -> Option<DateTime<Utc>> {
        self.creation_dates.iter().min().copied()
    }
}

/// Source of domain registration records.
pub trait RegistrationLookup: Send + Sync {
    /// Looks up a registrable domain (e.g. "example.com").
    fn lookup<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, WhoisFailure>>;
}

impl From<WhoisError> for WhoisFailure {
    fn from(e: WhoisError) -> Self {
        match e {
            WhoisError::Timeout => WhoisFailure::Timeout,
            other => WhoisFailure::Lookup(other.to_string()),
        }
    }
}

/// Converts a `whois-service` response into a record.
///
/// # Errors
///
/// Returns `WhoisFailure::EmptyResponse` if the answer has neither parsed
/// fields nor raw text.
fn convert_response(response: &WhoisResponse) -> Result<WhoisRecord, WhoisFailure> {
    if response.parsed_data.is_none() && response.raw_data.trim().is_empty() {
        return Err(WhoisFailure::EmptyResponse);
    }
    Ok(record_from_parts(
        response.parsed_data.as_ref(),
        &response.raw_data,
    ))
}

/// `RegistrationLookup` backed by `whois_service::WhoisClient`.
///
/// The underlying client is created on first use and shared afterwards.
#[derive(Default)]
pub struct WhoisClient {
    client: OnceCell<whois_service::WhoisClient>,
}

impl WhoisClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn client(&self) -> Result<&whois_service::WhoisClient, WhoisFailure> {
        self.client
            .get_or_try_init(|| async {
                whois_service::WhoisClient::new()
                    .await
                    .map_err(|e| WhoisFailure::Client(e.to_string()))
            })
            .await
    }
}

impl RegistrationLookup for WhoisClient {
    fn lookup<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<WhoisRecord, WhoisFailure>> {
        Box::pin(async move {
            let client = self.client().await?;
            log::debug!("Starting WHOIS lookup for {domain}");
            let response = client.lookup(domain).await?;
            let record = convert_response(&response)?;
            log::debug!(
                "WHOIS for {domain} via {}: {} creation date(s), registrar {:?}",
                response.whois_server,
                record.creation_dates.len(),
                record.registrar
            );
            Ok(record)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_creation_of_empty_record() {
        assert_eq!(WhoisRecord::default().earliest_creation(), None);
    }

    #[test]
    fn test_timeout_keeps_its_kind() {
        assert_eq!(WhoisFailure::from(WhoisError::Timeout), WhoisFailure::Timeout);
        assert_eq!(
            WhoisFailure::from(WhoisError::InvalidDomain("x".to_string())),
            WhoisFailure::Lookup("Invalid domain: x".to_string())
        );
    }

    #[tokio::test]
    #[ignore] // requires network access
    async fn test_lookup_real_domain() {
        let record = WhoisClient::new().lookup("example.com").await.unwrap();
        assert!(record.earliest_creation().is_some());
    }
}
