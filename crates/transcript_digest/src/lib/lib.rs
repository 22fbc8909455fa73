pub mod api;
pub mod cleaner;
mod llm;
mod processor;
pub mod tracing;
pub mod types;

pub use llm::azure_openai;
pub use llm::{
    fallback::{excerpt_summary, FallbackSummarizer},
    summarizer::{Summarizer, SummaryResponse},
};
pub use processor::{builder::DigestProcessorBuilder, DigestProcessor, LlmErrorPolicy};
