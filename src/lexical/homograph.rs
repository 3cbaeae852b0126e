//! IDN homograph indicators.

use crate::models::HomographReport;

/// ACE prefix marking a punycode label.
const PUNYCODE_PREFIX: &str = "xn--";

/// Inspects a hostname for punycode labels or non-ASCII code points.
///
/// `raw_hostname` is the decoded hostname before IDNA conversion and
/// `ascii_hostname` its ASCII form. Punycode is decoded for display when
/// possible; a decode failure only leaves `display_hostname` unset.
pub fn inspect_hostname(raw_hostname: &str, ascii_hostname: &str) -> HomographReport {
    let is_punycode = ascii_hostname
        .split('.')
        .chain(raw_hostname.split('.'))
        .any(|label| label.to_ascii_lowercase().starts_with(PUNYCODE_PREFIX));
    let has_unicode = !raw_hostname.is_ascii();

    let display_hostname = if has_unicode {
        Some(raw_hostname.to_string())
    } else if is_punycode {
        let (unicode, result) = idna::domain_to_unicode(ascii_hostname);
        match result {
            Ok(()) => Some(unicode),
            Err(e) => {
                log::debug!("Punycode decode failed for {ascii_hostname}: {e:?}");
                None
            }
        }
    } else {
        None
    };

    HomographReport {
        is_punycode,
        has_unicode,
        display_hostname,
    }
}
