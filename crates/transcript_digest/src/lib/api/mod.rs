pub mod client;

use std::{fmt::Debug, future::Future};

use crate::types::Segment;

pub use client::{ApiClient, ApiError};

/// Narrow capability interface over the web app's YouTube endpoints, so the
/// pipeline can be exercised against fakes in tests.
pub trait TranscriptSource {
    type Error: Debug;

    /// Fetches the ordered caption segments for a video.
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<Segment>, Self::Error>>;

    /// Fetches video metadata. Callers treat failure here as non-fatal.
    fn fetch_video(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoDetails, Self::Error>>;
}

#[derive(Debug, Clone)]
pub struct VideoDetails {
    pub title: String,
}
