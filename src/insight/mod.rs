//! Insight domain models
//!
//! This module contains the extracted-item data model and the four-category
//! container. It is split into submodules:
//! - `item`: Category, ExtractedItem and Okr
//! - `extracted_data`: The per-category container and its copy-on-write edits
//! - `queries`: OKR impact queries over the container
//! - `serde_impl`: Serialization/deserialization implementations

mod extracted_data;
mod item;
mod queries;
mod serde_impl;

// Re-export all public types
pub use extracted_data::ExtractedData;
pub use item::{
    Category, ExtractedItem, Okr, PM_SPEAKER, UNKNOWN_SPEAKER, default_okrs, local_date_today,
    mint_id,
};
