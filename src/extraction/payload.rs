use super::ExtractionError;
use crate::insight::{Category, ExtractedData, ExtractedItem};
use serde_json::Value;
use tracing::debug;

/// Map a model payload into a fresh data set
///
/// The payload must be a JSON object. Each category key may be missing or
/// `null` (empty category) but otherwise must be an array of objects with a
/// string `text`. Records whose text is blank are skipped. Signals keep a
/// non-empty `speaker` and fall back to the default; every other category
/// is attributed to the product manager. All other fields are ignored.
///
/// # Arguments
/// * `payload` - Parsed model output
///
/// # Returns
/// The data set with minted ids and no OKR links, or a schema error
pub fn map_payload(payload: &Value) -> Result<ExtractedData, ExtractionError> {
    let record = payload
        .as_object()
        .ok_or_else(|| ExtractionError::Schema("top level is not an object".to_string()))?;

    let mut data = ExtractedData::new();
    for category in Category::ALL {
        let records = match record.get(category.key()) {
            None | Some(Value::Null) => continue,
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(ExtractionError::Schema(format!(
                    "'{}' is not an array",
                    category
                )));
            }
        };

        for (index, raw) in records.iter().enumerate() {
            let text = raw.get("text").and_then(Value::as_str).ok_or_else(|| {
                ExtractionError::Schema(format!("{}[{}] has no text", category, index))
            })?;
            if text.trim().is_empty() {
                debug!("Skipping blank {}[{}]", category, index);
                continue;
            }

            let mut item = ExtractedItem::new(category, text);
            if category == Category::Signals
                && let Some(speaker) = raw
                    .get("speaker")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            {
                item.speaker = speaker.to_string();
            }
            data.push(category, item);
        }
    }

    Ok(data)
}
