use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::types::Segment;

use super::{TranscriptSource, VideoDetails};

/// reqwest-backed client for the local web app's YouTube API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Failed to fetch transcript: {0}")]
    MissingTranscript(String),
    #[error("No video details found")]
    MissingVideoDetails,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, url, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Api { status, message });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    pub success: bool,
    #[serde(default)]
    pub transcript: Vec<Segment>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct VideoItem {
    pub snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
}

impl TranscriptSource for ApiClient {
    type Error = ApiError;

    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<Segment>, Self::Error> {
        let resp: TranscriptResponse = self
            .get_json(&format!("/api/youtube/transcript/{video_id}"))
            .await?;

        // the API signals soft failure through the success marker
        if !resp.success || resp.transcript.is_empty() {
            let message = resp.message.unwrap_or_else(|| "Unknown error".to_string());
            return Err(ApiError::MissingTranscript(message));
        }

        Ok(resp.transcript)
    }

    async fn fetch_video(&self, video_id: &str) -> Result<VideoDetails, Self::Error> {
        let resp: VideoListResponse = self
            .get_json(&format!("/api/youtube/video/{video_id}"))
            .await?;

        let item = resp
            .items
            .into_iter()
            .next()
            .ok_or(ApiError::MissingVideoDetails)?;

        Ok(VideoDetails {
            title: item.snippet.title,
        })
    }
}
