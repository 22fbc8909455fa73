use crate::{api::TranscriptSource, DigestProcessor, LlmErrorPolicy, Summarizer};

pub struct DigestProcessorBuilder<S = (), M = ()> {
    source: S,
    summarizer: M,
    on_llm_error: LlmErrorPolicy,
}

impl DigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            source: (),
            summarizer: (),
            on_llm_error: LlmErrorPolicy::Fallback,
        }
    }
}

impl Default for DigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M> DigestProcessorBuilder<S, M> {
    pub fn source<S2: TranscriptSource>(self, source: S2) -> DigestProcessorBuilder<S2, M> {
        DigestProcessorBuilder {
            source,
            summarizer: self.summarizer,
            on_llm_error: self.on_llm_error,
        }
    }

    pub fn summarizer<M2: Summarizer>(self, summarizer: M2) -> DigestProcessorBuilder<S, M2> {
        DigestProcessorBuilder {
            source: self.source,
            summarizer,
            on_llm_error: self.on_llm_error,
        }
    }

    pub fn on_llm_error(mut self, policy: LlmErrorPolicy) -> Self {
        self.on_llm_error = policy;
        self
    }
}

impl<S, M> DigestProcessorBuilder<S, M>
where
    S: TranscriptSource,
    M: Summarizer,
{
    pub fn build(self) -> DigestProcessor<S, M> {
        DigestProcessor {
            source: self.source,
            summarizer: self.summarizer,
            on_llm_error: self.on_llm_error,
        }
    }
}
