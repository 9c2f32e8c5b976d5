//! Google Generative AI (Gemini) client.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GeneratorError, ScheduleGenerator};

/// Calls the `generateContent` endpoint of the Google Generative AI API.
pub struct GeminiGenerator {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
            model,
        }
    }
}

// === Wire types ===

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[async_trait]
impl ScheduleGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %self.model, "sending generation request");

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_body: Option<serde_json::Value> = response.json().await.ok();
            let message = error_body
                .as_ref()
                .and_then(|v| v.get("error").and_then(|e| e.get("message")))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeneratorError::EmptyResponse)
    }
}
