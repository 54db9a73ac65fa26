//! Insight extraction from interview transcripts
//!
//! An [`InsightExtractor`] turns a transcript into a fresh [`ExtractedData`].
//! Extraction is all-or-nothing: any transport, API, parse or schema problem
//! is reported as one [`ExtractionError`] and no partial data is returned.

mod gemini;
mod payload;
mod schema;

pub use gemini::{GeminiConfig, GeminiExtractor};
pub use payload::map_payload;
pub use schema::{SYSTEM_INSTRUCTION, response_schema};

use crate::insight::ExtractedData;
use async_trait::async_trait;
use thiserror::Error;

/// Message shown to the user for any extraction failure
pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to process the transcript. The model may have returned an invalid format or the request failed.";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("transcript is empty")]
    EmptyTranscript,

    #[error("API key is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("model output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model output does not match the schema: {0}")]
    Schema(String),
}

impl ExtractionError {
    /// The single human-readable message surfaced to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractionError::EmptyTranscript => "Paste a transcript before generating insights.",
            _ => EXTRACTION_FAILED_MESSAGE,
        }
    }
}

/// Source of extracted insights for a transcript
#[async_trait]
pub trait InsightExtractor: Send + Sync {
    /// Extract signals, insights, opportunities and ideas from `transcript`
    ///
    /// Every returned item carries a freshly minted id, the category of the
    /// bucket it was returned under, and no OKR links.
    async fn extract(&self, transcript: &str) -> Result<ExtractedData, ExtractionError>;
}
