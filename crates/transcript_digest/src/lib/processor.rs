pub mod builder;

use crate::{
    api::TranscriptSource, cleaner::clean_segments, excerpt_summary, types::SummaryResult,
    Summarizer,
};

/// How the pipeline reacts when the LLM provider fails or is unreachable.
///
/// Resolved once at startup and passed in; there is no runtime toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmErrorPolicy {
    /// Substitute the deterministic excerpt summary.
    #[default]
    Fallback,
    /// Abort the run with the provider error.
    Abort,
}

/// The core transcript digest pipeline: fetch, clean, summarize.
pub struct DigestProcessor<S, M>
where
    S: TranscriptSource,
    M: Summarizer,
{
    source: S,
    summarizer: M,
    on_llm_error: LlmErrorPolicy,
}

impl<S, M> DigestProcessor<S, M>
where
    S: TranscriptSource,
    M: Summarizer,
{
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, video_id: &str) -> anyhow::Result<SummaryResult> {
        let segments = self
            .source
            .fetch_transcript(video_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch transcript: {e:?}"))?;
        tracing::info!(segments = segments.len(), "Fetched transcript");

        // a missing title only degrades the output, it never aborts the run
        let title = match self.source.fetch_video(video_id).await {
            Ok(details) => Some(details.title),
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to fetch video details");
                None
            }
        };

        let text = clean_segments(&segments);
        tracing::info!(chars = text.len(), "Cleaned transcript");

        let summary = match self.summarizer.summarize(&text, title.as_deref()).await {
            Ok(resp) => resp.summary,
            Err(e) => match self.on_llm_error {
                LlmErrorPolicy::Fallback => {
                    tracing::warn!(error = ?e, "Summarizer failed, using excerpt fallback");
                    excerpt_summary(&text, title.as_deref())
                }
                LlmErrorPolicy::Abort => {
                    anyhow::bail!("Failed to summarize transcript: {e:?}")
                }
            },
        };

        Ok(SummaryResult {
            video_id: video_id.to_string(),
            title,
            summary,
        })
    }
}
