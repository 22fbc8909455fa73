use serde::{Deserialize, Serialize};

/// One timed caption unit as returned by the transcript API.
///
/// Segments arrive in chronological order. The timing fields are optional
/// because some caption sources only provide text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub duration: Option<f64>,
}

/// The final product of a run. Written to stdout or a JSON file, never stored.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub video_id: String,
    pub title: Option<String>,
    pub summary: String,
}
