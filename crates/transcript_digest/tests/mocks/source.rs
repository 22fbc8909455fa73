use std::sync::{Arc, Mutex};

use transcript_digest::{
    api::{TranscriptSource, VideoDetails},
    types::Segment,
};

#[derive(Clone, Default)]
pub struct MockTranscriptSource {
    pub segments: Vec<Segment>,
    pub title: Option<String>,
    pub transcript_fail_with: Option<String>,
    pub video_fail_with: Option<String>,
    pub transcript_calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscriptSource {
    pub fn new(segments: Vec<Segment>, title: &str) -> Self {
        Self {
            segments,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn missing_transcript(msg: &str) -> Self {
        Self {
            transcript_fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn without_video_details(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            video_fail_with: Some("No video details found".to_string()),
            ..Default::default()
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    type Error = anyhow::Error;

    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<Segment>, Self::Error> {
        self.transcript_calls
            .lock()
            .unwrap()
            .push(video_id.to_string());
        if let Some(ref msg) = self.transcript_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.segments.clone())
    }

    async fn fetch_video(&self, _video_id: &str) -> Result<VideoDetails, Self::Error> {
        if let Some(ref msg) = self.video_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(VideoDetails {
            title: self.title.clone().unwrap_or_default(),
        })
    }
}
