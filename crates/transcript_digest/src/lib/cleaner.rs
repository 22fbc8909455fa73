//! # Transcript Cleaner
//!
//! Strips the timing and style markup that YouTube caption tracks embed in
//! segment text, and normalizes whitespace so downstream summarizers see
//! plain prose.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Segment;

/// Inline timing markers, e.g. `<00:00:11.200>`.
static TIMING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\d{2}:\d{2}:\d{2}\.\d{3}>").unwrap());

/// Opening or closing style tags, e.g. `<c>` / `</c>`.
static STYLE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-z][^>]*>").unwrap());

/// Anything angle-bracketed that survived the first two passes.
static ANGLE_BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans a single caption string.
///
/// Removal order matters: timing markers first, then style tags, then any
/// leftover angle-bracketed content, then whitespace normalization.
pub fn clean_text(text: &str) -> String {
    let text = TIMING_TAG_RE.replace_all(text, "");
    let text = STYLE_TAG_RE.replace_all(&text, "");
    let text = ANGLE_BRACKET_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Cleans every segment and joins the non-empty results with a single space.
///
/// Total function: empty input yields an empty string.
pub fn clean_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| clean_text(&segment.text))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
