use std::{fmt::Debug, future::Future};

/// Anything that can turn a cleaned transcript into prose.
///
/// Implemented by the Azure OpenAI adapter and the offline excerpt fallback,
/// and by fakes in tests.
pub trait Summarizer {
    /// Transcript characters included per request, to respect provider
    /// token limits.
    const PROMPT_CHAR_BUDGET: usize = 10_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        text: &str,
        title: Option<&str>,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
