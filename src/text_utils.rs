use chrono::{DateTime, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ILLEGAL_CHARS_REGEX: Regex = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
    static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHEN_RUN_REGEX: Regex = Regex::new(r"--+").unwrap();
}

/// Marker emitted for a date that could not be parsed. Kept as-is in the
/// output so a broken export is visible in the generated frontmatter.
pub const MALFORMED_DATE: &str = "NaN-NaN-NaN";

/// Formats an export date as YYYY-MM-DD. Accepts the wp:post_date form
/// ("2026-01-20 11:25:10") and the RFC-2822 pubDate form.
pub fn format_date(date_str: &str) -> String {
    if let Ok(date_time) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return date_time.format("%Y-%m-%d").to_string();
    }
    if let Ok(date_time) = DateTime::parse_from_rfc2822(date_str) {
        return date_time.format("%Y-%m-%d").to_string();
    }
    MALFORMED_DATE.to_string()
}

/// Turns a post title into a filesystem-safe file stem. The caller is
/// responsible for the .md extension.
pub fn sanitize_filename(title: &str) -> String {
    let decoded = match urlencoding::decode(title) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            spdlog::warn!("Failed to decode filename: {}", title);
            title.to_string()
        }
    };

    let stem = ILLEGAL_CHARS_REGEX.replace_all(&decoded, "");
    let stem = WHITESPACE_RUN_REGEX.replace_all(&stem, "-");
    let stem = HYPHEN_RUN_REGEX.replace_all(&stem, "-");
    stem.trim_matches('-').to_string()
}
