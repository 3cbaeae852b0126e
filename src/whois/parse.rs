//! Conversion of `whois-service` responses into `WhoisRecord`s.
//!
//! The structured creation date is used when present. Registries disagree on
//! labels and date formats, so the raw text is also scanned for creation-date
//! lines and the earliest date wins.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use whois_service::ParsedWhoisData;

use super::WhoisRecord;

/// Raw-text labels that carry a domain's creation date (lowercase).
const CREATION_LABELS: &[&str] = &[
    "creation date",
    "created",
    "created on",
    "domain registration date",
    "registration date",
    "registration time",
    "registered",
    "registered on",
    "domain record activated",
];

/// Builds a record from the parsed fields and the raw answer.
pub(crate) fn record_from_parts(parsed: Option<&ParsedWhoisData>, raw: &str) -> WhoisRecord {
    let mut creation_dates: Vec<DateTime<Utc>> = parsed
        .and_then(|p| p.creation_date.as_deref())
        .and_then(parse_date_string)
        .into_iter()
        .collect();

    for (label, value) in labelled_lines(raw) {
        if !CREATION_LABELS.contains(&label.as_str()) {
            continue;
        }
        match parse_date_string(value) {
            Some(date) if !creation_dates.contains(&date) => creation_dates.push(date),
            Some(_) => {}
            None => log::debug!("Unrecognized WHOIS date '{value}'"),
        }
    }

    let registrar = parsed
        .and_then(|p| p.registrar.clone())
        .filter(|r| !r.trim().is_empty())
        .or_else(|| {
            labelled_lines(raw)
                .find(|(label, _)| label == "registrar")
                .map(|(_, value)| value.to_string())
        });

    WhoisRecord {
        creation_dates,
        registrar,
    }
}

/// `label: value` lines with a non-empty value; labels are lowercased.
fn labelled_lines(raw: &str) -> impl Iterator<Item = (String, &str)> + '_ {
    raw.lines().filter_map(|line| {
        let (label, value) = line.split_once(':')?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some((label.trim().to_ascii_lowercase(), value))
    })
}

/// Attempts to parse a date string in various formats.
///
/// Values often carry a trailing zone name (`UTC`, `(JST)`); when the full
/// value does not parse, trailing tokens are dropped one at a time.
fn parse_date_string(value: &str) -> Option<DateTime<Utc>> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    (1..=tokens.len())
        .rev()
        .find_map(|n| parse_exact(&tokens[..n].join(" ")))
}

fn parse_exact(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%Y.%m.%d",
        "%Y/%m/%d",
        "%d-%b-%Y",
        "%d.%m.%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
