//! Redirect chain tracing under SSRF containment.
//!
//! The tracer follows redirects by hand, one request per hop, so that every
//! destination is resolved and checked against the address policy *before*
//! it is contacted. The HTTP client additionally resolves through
//! `SafeResolver`, so a DNS answer that changes between the check and the
//! connect is refused as well.
//!
//! Terminal states:
//! - `Reached`: a non-redirect response arrived (body captured for 200)
//! - `Blocked`: a hop resolved to a non-public address
//! - `NetworkError`: DNS, transport or `Location` failure
//! - `HopLimitExceeded`: still redirecting after `max_redirects` requests

use std::collections::HashSet;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;
use reqwest::header::LOCATION;
use reqwest::StatusCode;
use url::Url;

use crate::config::{Config, HIGH_HOP_COUNT};
use crate::dns::resolve_url_host;
use crate::domain::site_of;
use crate::error_handling::TraceFailure;
use crate::models::{Finding, FindingCategory, RedirectTrace, TraceOutcome};
use crate::security::AddressPolicy;

/// Why a hop was not requested.
enum HopRejection {
    Blocked(std::net::IpAddr),
    Failed(TraceFailure),
}

/// Follows redirect chains one hop at a time.
#[derive(Clone)]
pub struct RedirectTracer {
    client: Arc<reqwest::Client>,
    resolver: Arc<TokioAsyncResolver>,
    policy: AddressPolicy,
    max_redirects: usize,
    capture_limit: usize,
}

impl RedirectTracer {
    /// Creates a tracer that only contacts public addresses.
    ///
    /// `client` must have automatic redirects disabled.
    pub fn new(
        client: Arc<reqwest::Client>,
        resolver: Arc<TokioAsyncResolver>,
        config: &Config,
    ) -> Self {
        Self {
            client,
            resolver,
            policy: AddressPolicy::PublicOnly,
            max_redirects: config.max_redirects,
            capture_limit: config.html_capture_limit,
        }
    }

    /// Replaces the address policy (local fixtures need loopback).
    pub(crate) fn with_policy(mut self, policy: AddressPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Traces `start_url` to its final destination.
    ///
    /// Never fails: every failure mode is a terminal state of the returned
    /// trace plus a finding. Non-web schemes are not traced.
    pub async fn trace(&self, start_url: &str) -> RedirectTrace {
        let mut current = match Url::parse(start_url) {
            Ok(url) => url,
            Err(e) => {
                let failure = TraceFailure::InvalidLocation {
                    location: start_url.to_string(),
                    message: e.to_string(),
                };
                let trace = RedirectTrace {
                    final_url: start_url.to_string(),
                    ..Default::default()
                };
                return Self::failed(trace, failure);
            }
        };

        if !matches!(current.scheme(), "http" | "https") {
            return RedirectTrace::not_run(
                start_url,
                Finding::new(
                    FindingCategory::TraceSkipped,
                    format!("Redirect trace skipped ({} link)", current.scheme()),
                ),
            );
        }

        let mut trace = RedirectTrace {
            final_url: current.to_string(),
            ..Default::default()
        };
        let mut outcome = None;

        for _ in 0..self.max_redirects {
            trace.chain.push(current.host_str().unwrap_or_default().to_string());
            trace.hops.push(current.to_string());
            trace.final_url = current.to_string();

            match self.check_hop(&current).await {
                Ok(()) => {}
                Err(HopRejection::Blocked(ip)) => {
                    log::warn!("Refusing hop to {current}: {ip} is not a public address");
                    trace.warnings.push(Finding::new(
                        FindingCategory::SsrfBlocked,
                        "Blocked: redirected to private IP",
                    ));
                    outcome = Some(TraceOutcome::Blocked);
                    break;
                }
                Err(HopRejection::Failed(failure)) => {
                    trace = Self::failed(trace, failure);
                    outcome = Some(TraceOutcome::NetworkError);
                    break;
                }
            }

            log::debug!("Requesting hop {}: {current}", trace.hop_count);
            let response = match self.client.get(current.clone()).send().await {
                Ok(response) => response,
                Err(e) => {
                    let failure = TraceFailure::Transport {
                        url: current.to_string(),
                        message: e.to_string(),
                    };
                    trace = Self::failed(trace, failure);
                    outcome = Some(TraceOutcome::NetworkError);
                    break;
                }
            };

            let status = response.status();
            trace.status = Some(status.as_u16());

            if status.is_redirection() {
                if let Some(location) = response.headers().get(LOCATION) {
                    let location = String::from_utf8_lossy(location.as_bytes()).into_owned();
                    match current.join(&location) {
                        Ok(next) => {
                            log::debug!("{status} redirect: {current} -> {next}");
                            trace.hop_count += 1;
                            current = next;
                            continue;
                        }
                        Err(e) => {
                            let failure = TraceFailure::InvalidLocation {
                                location,
                                message: e.to_string(),
                            };
                            trace = Self::failed(trace, failure);
                            outcome = Some(TraceOutcome::NetworkError);
                            break;
                        }
                    }
                }
                log::debug!("{status} from {current} without a Location header");
            }

            if status == StatusCode::OK {
                match read_capped(response, self.capture_limit).await {
                    Ok(html) => trace.html_snapshot = html,
                    Err(e) => log::warn!("Failed to read body of {current}: {e}"),
                }
            }
            outcome = Some(TraceOutcome::Reached);
            break;
        }

        trace.outcome = match outcome {
            Some(outcome) => outcome,
            None => {
                // Loop exhausted while still redirecting; `current` was never requested
                trace.final_url = current.to_string();
                trace.warnings.push(Finding::new(
                    FindingCategory::RedirectLimit,
                    "Redirect Loop Detected",
                ));
                TraceOutcome::HopLimitExceeded
            }
        };

        if trace.hop_count > HIGH_HOP_COUNT {
            trace.warnings.push(Finding::new(
                FindingCategory::HighHopCount,
                format!("High Hop Count (>{HIGH_HOP_COUNT})"),
            ));
        }

        trace.cross_domain = is_cross_domain(&trace.chain);
        if trace.cross_domain {
            trace.warnings.push(Finding::new(
                FindingCategory::CrossDomainRedirect,
                "Cross-Domain Redirect Detected",
            ));
        }

        log::debug!(
            "Trace of {start_url} ended {:?} after {} hop(s) at {}",
            trace.outcome,
            trace.hop_count,
            trace.final_url
        );
        trace
    }

    /// Resolves the hop's host and applies the address policy to every answer.
    async fn check_hop(&self, url: &Url) -> Result<(), HopRejection> {
        let Some(host) = url.host_str() else {
            return Err(HopRejection::Failed(TraceFailure::MissingHost(
                url.to_string(),
            )));
        };

        let ips = resolve_url_host(url, &self.resolver).await.map_err(|e| {
            HopRejection::Failed(TraceFailure::Dns {
                host: host.to_string(),
                message: format!("{e:#}"),
            })
        })?;

        match ips.into_iter().find(|ip| !self.policy.permits(*ip)) {
            Some(ip) => Err(HopRejection::Blocked(ip)),
            None => Ok(()),
        }
    }

    fn failed(mut trace: RedirectTrace, failure: TraceFailure) -> RedirectTrace {
        log::warn!("Trace failed: {failure}");
        trace.warnings.push(Finding::new(
            FindingCategory::TraceError,
            format!("Trace Error: {failure}"),
        ));
        trace.outcome = TraceOutcome::NetworkError;
        trace.failure = Some(failure);
        trace
    }
}

/// More than one distinct site (registrable domain, else host) in the chain.
pub fn is_cross_domain(chain: &[String]) -> bool {
    let sites: HashSet<String> = chain
        .iter()
        .filter(|host| !host.is_empty())
        .map(|host| site_of(host))
        .collect();
    sites.len() > 1
}

/// Reads at most `limit` bytes of the body, chunk by chunk.
async fn read_capped(mut response: reqwest::Response, limit: usize) -> Result<String, reqwest::Error> {
    let mut body: Vec<u8> = Vec::with_capacity(limit.min(64 * 1024));
    while let Some(chunk) = response.chunk().await? {
        let remaining = limit - body.len();
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    let mut text = String::from_utf8_lossy(&body).into_owned();
    if text.len() > limit {
        // Lossy replacement can widen a truncated trailing sequence
        let mut cut = limit;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    Ok(text)
}
