//! Gemini `generateContent` extractor

use super::schema::{SYSTEM_INSTRUCTION, response_schema, transcript_prompt};
use super::{ExtractionError, InsightExtractor, map_payload};
use crate::insight::ExtractedData;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub struct GeminiExtractor {
    client: Client,
    config: GeminiConfig,
}

impl GeminiExtractor {
    /// Create an extractor with its own HTTP client
    ///
    /// # Arguments
    /// * `config` - API location, model, key and request timeout
    pub fn new(config: GeminiConfig) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body for `transcript`
    pub fn request_payload(transcript: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": transcript_prompt(transcript) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }

    /// Pull the model's text out of a `generateContent` response
    ///
    /// Text parts of the first candidate are concatenated.
    pub fn response_text(response: &Value) -> Result<String, ExtractionError> {
        if let Some(error) = response.get("error") {
            return Err(ExtractionError::Api {
                status: error["code"].as_u64().and_then(|c| u16::try_from(c).ok()).unwrap_or(0),
                message: error["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let text: String = response["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|part| part["text"].as_str()).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl InsightExtractor for GeminiExtractor {
    async fn extract(&self, transcript: &str) -> Result<ExtractedData, ExtractionError> {
        if transcript.trim().is_empty() {
            return Err(ExtractionError::EmptyTranscript);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExtractionError::MissingApiKey)?;

        debug!(
            "Requesting extraction: model={}, transcript_len={}",
            self.config.model,
            transcript.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_payload(transcript))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Value = serde_json::from_str(&body)?;
        let text = Self::response_text(&envelope)?;
        let payload: Value = serde_json::from_str(&text)?;
        let data = map_payload(&payload)?;

        info!(
            "Extracted {} signal(s), {} insight(s), {} opportunity(ies), {} idea(s)",
            data.signals().len(),
            data.insights().len(),
            data.opportunities().len(),
            data.ideas().len()
        );
        Ok(data)
    }
}
