//! Serialization and deserialization implementations for ExtractedData
//!
//! Serialization writes the four category arrays in display order.
//! Deserialization goes through the sanitizer, so any JSON object becomes a
//! well-formed data set: invalid items are dropped and missing fields are
//! defaulted. Only a non-object top level is an error.

use super::extracted_data::ExtractedData;
use super::item::Category;
use crate::sanitize::sanitize_container;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for ExtractedData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ExtractedData", Category::ALL.len())?;
        for category in Category::ALL {
            state.serialize_field(category.key(), self.items(category))?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExtractedData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        sanitize_container(&raw).ok_or_else(|| {
            serde::de::Error::custom("expected an object with signals/insights/opportunities/ideas")
        })
    }
}
