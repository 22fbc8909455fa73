pub mod source;
pub mod summarizer;
