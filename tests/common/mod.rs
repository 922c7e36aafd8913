//! Shared helpers for integration tests.

use url_template_matcher::{parse_url, MatchResult, ParseOptions};

#[allow(dead_code)]
pub const ORIGIN: &str = "https://localhost:3000";

/// Install the test subscriber once per test binary.
pub fn init_logging() {
    let _ = url_template_matcher::observability::logging::init("url_template_matcher=trace");
}

/// Match `path` (appended to [`ORIGIN`]) against `template` with default options.
#[allow(dead_code)]
pub fn match_path(template: &str, path: &str) -> MatchResult {
    match_path_with(template, path, ParseOptions::default())
}

#[allow(dead_code)]
pub fn match_path_with(template: &str, path: &str, options: ParseOptions) -> MatchResult {
    init_logging();
    parse_url(template, &format!("{}{}", ORIGIN, path), &options)
        .unwrap_or_else(|e| panic!("template '{}' against '{}' failed: {}", template, path, e))
}

/// Bindings of a successful match as owned pairs, in template order.
#[allow(dead_code)]
pub fn bindings(result: &MatchResult) -> Vec<(String, String)> {
    result
        .variables()
        .expect("expected a match")
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
