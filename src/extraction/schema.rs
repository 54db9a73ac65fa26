//! Prompt and structured-output schema sent with every extraction request

use serde_json::{Value, json};

pub const SYSTEM_INSTRUCTION: &str = r#"You are an expert product manager AI assistant for a product called "Zentrik". Your task is to analyze a user interview transcript and extract key information into four categories: Signals, Insights, Opportunities, and Ideas.

- **Signals**: Direct quotes or observations from the user. What did they say or do?
- **Insights**: The "why" behind the signals. What are the underlying user needs, pain points, or motivations?
- **Opportunities**: Potential areas for product improvement based on the insights. How might we solve the user's problem?
- **Ideas**: Concrete, actionable suggestions for features or changes.

Please provide the output in JSON format, adhering to the provided schema. Ensure that the text for each item is concise and directly related to the transcript."#;

/// User turn wrapping the transcript
pub(crate) fn transcript_prompt(transcript: &str) -> String {
    format!("Here is the transcript: {}", transcript)
}

fn text_only_array(description: &str, text_description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": {
            "type": "OBJECT",
            "properties": {
                "text": { "type": "STRING", "description": text_description }
            },
            "required": ["text"]
        }
    })
}

/// Structured-output schema with the four category arrays
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "signals": {
                "type": "ARRAY",
                "description": "Direct quotes or observations from the user. What did they say or do?",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "speaker": {
                            "type": "STRING",
                            "description": "The speaker who said this. e.g., 'User A' or 'PM'"
                        },
                        "text": {
                            "type": "STRING",
                            "description": "The verbatim quote or observation from the transcript."
                        }
                    },
                    "required": ["speaker", "text"]
                }
            },
            "insights": text_only_array(
                "The 'why' behind the signals. What are the underlying user needs, pain points, or motivations?",
                "A summary of a key user pain point, motivation, or behavior derived from the signals."
            ),
            "opportunities": text_only_array(
                "Potential areas for product improvement based on the insights. How might we solve the user's problem?",
                "A potential area for improvement or a new feature that could address the insights."
            ),
            "ideas": text_only_array(
                "Concrete, actionable suggestions for features or changes.",
                "A concrete, actionable solution or feature concept to explore."
            )
        },
        "required": ["signals", "insights", "opportunities", "ideas"]
    })
}
