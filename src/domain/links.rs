use regex::Regex;
use url::Url;

/// Fixed shape of an opportunity URL. Anything pasted by the user that does
/// not match this is dropped, which also splits URLs glued together without
/// separators.
const OPPORTUNITY_URL_PATTERN: &str =
    r"https?://aiesec\.org/opportunity/(?:global-talent|global-teacher)/\d+";

pub fn extract_opportunity_urls(raw: &str) -> Vec<String> {
    let pattern = Regex::new(OPPORTUNITY_URL_PATTERN).unwrap();
    pattern
        .find_iter(raw)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Trailing numeric ID, used to name the single-URL export file.
pub fn opportunity_id(url: &str) -> String {
    let pattern = Regex::new(r"/(\d+)$").unwrap();
    pattern
        .captures(url)
        .map(|captures| captures[1].to_string())
        .unwrap_or_else(|| "unknown_id".to_string())
}

pub fn is_valid_opportunity_url(input: &str) -> bool {
    if !(input.starts_with("http://") || input.starts_with("https://")) {
        return false;
    }
    Url::parse(input).is_ok()
}
