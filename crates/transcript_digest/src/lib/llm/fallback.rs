//! Deterministic extractive pseudo-summary, used when no LLM is reachable.

use std::convert::Infallible;

use crate::{Summarizer, SummaryResponse};

const EXCERPT_WORDS: usize = 100;
const MIN_WORDS_FOR_EXCERPTS: usize = 50;

/// Offline stand-in for the LLM adapter. Never fails.
pub struct FallbackSummarizer;

impl Summarizer for FallbackSummarizer {
    const SUMMARIZER_MODEL: &'static str = "excerpt-fallback";

    type Error = Infallible;

    async fn summarize(
        &self,
        text: &str,
        title: Option<&str>,
    ) -> Result<SummaryResponse, Self::Error> {
        Ok(SummaryResponse {
            summary: excerpt_summary(text, title),
        })
    }
}

/// Builds a fixed-format report from word counts and three excerpts taken
/// from the beginning, middle, and end of the transcript.
///
/// Transcripts under 50 words get a short notice stating the exact count.
pub fn excerpt_summary(text: &str, title: Option<&str>) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let total = words.len();

    if total < MIN_WORDS_FOR_EXCERPTS {
        return format!(
            "This video has very little spoken content. \
             The transcript contains only {total} words."
        );
    }

    let beginning = words[..EXCERPT_WORDS.min(total)].join(" ");
    let middle_start = (total / 2).saturating_sub(EXCERPT_WORDS / 2);
    let middle = words[middle_start..(middle_start + EXCERPT_WORDS).min(total)].join(" ");
    let end = words[total.saturating_sub(EXCERPT_WORDS)..].join(" ");

    let title_line = title
        .map(|t| format!("Video: {t}\n\n"))
        .unwrap_or_default();

    format!(
        "{title_line}This is a basic summary as the AI summarization service is unavailable.\n\
         \n\
         The video contains approximately {total} words of spoken content.\n\
         \n\
         Beginning excerpt: {beginning}...\n\
         \n\
         Middle excerpt: {middle}...\n\
         \n\
         Ending excerpt: {end}...\n"
    )
}
