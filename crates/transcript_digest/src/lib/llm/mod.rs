pub mod azure_openai;
pub mod fallback;
pub mod summarizer;
