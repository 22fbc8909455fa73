use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

/// Thin client over an Azure OpenAI chat-completions deployment.
pub struct AzureOpenAIClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AzureOpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Provider returned no message content")]
    EmptyResponse,
}

impl AzureOpenAIClient {
    const SYSTEM_PROMPT: &str = include_str!("./prompts/system_0.txt");

    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        api_version: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            api_version: api_version.into(),
            deployment: deployment.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    async fn send_completion_request(
        &self,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, AzureOpenAIError> {
        let body = serde_json::json!({
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT.trim()
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ],
            "temperature": 0.3,
            "max_tokens": 500
        });

        let resp = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(AzureOpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for AzureOpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-4-1";

    type Error = AzureOpenAIError;

    async fn summarize(
        &self,
        text: &str,
        title: Option<&str>,
    ) -> Result<SummaryResponse, Self::Error> {
        let prompt = build_prompt(text, title, Self::PROMPT_CHAR_BUDGET);

        let response = self
            .send_completion_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or(AzureOpenAIError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}

fn build_prompt(text: &str, title: Option<&str>, budget: usize) -> String {
    let title = title.unwrap_or("Untitled Video");
    let transcript = truncate_chars(text, budget);

    format!(
        "You are tasked with creating a concise summary of the following video transcript.\n\
         \n\
         The video title is: \"{title}\"\n\
         \n\
         Based on the transcript, provide:\n\
         1. A brief 2-3 sentence summary of what the video is about\n\
         2. 3-5 key points or main takeaways from the content\n\
         3. The overall tone or style of the video (educational, entertainment, tutorial, etc.)\n\
         \n\
         Format your response in clear, well-organized paragraphs.\n\
         \n\
         Here is the transcript:\n\
         {transcript}"
    )
}

/// Truncates to at most `budget` characters, on a char boundary.
fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let text = "é".repeat(20);
        assert_eq!(truncate_chars(&text, 5), "ééééé");
        assert_eq!(truncate_chars(&text, 100), text);
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_build_prompt_includes_title_and_truncated_transcript() {
        let text = "a".repeat(20_000);
        let prompt = build_prompt(&text, Some("Rust in 10 Minutes"), 10_000);

        assert!(prompt.contains("The video title is: \"Rust in 10 Minutes\""));
        assert!(prompt.len() < 11_000);

        let untitled = build_prompt("short transcript", None, 10_000);
        assert!(untitled.contains("\"Untitled Video\""));
        assert!(untitled.ends_with("short transcript"));
    }

    #[test]
    fn test_completion_response_deserializes() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "A summary." },
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let resp: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.choices[0].message.content.as_deref(),
            Some("A summary.")
        );
    }

    #[test]
    fn test_completions_url_shape() {
        let client = AzureOpenAIClient::new(
            "https://example.openai.azure.com/",
            "key",
            "2024-12-01-preview",
            "gpt-4-1",
        );
        assert_eq!(
            client.completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4-1/chat/completions?api-version=2024-12-01-preview"
        );
    }
}
