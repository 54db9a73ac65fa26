use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Speaker assigned to signals when the source does not name one
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// Speaker assigned to insights, opportunities and ideas (the product manager)
pub const PM_SPEAKER: &str = "PM";

/// Category of an extracted item
///
/// The serialized form is the lowercase plural used as the bucket key in
/// persisted state and in the extraction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Verbatim observation or quote attributed to a speaker
    Signals,
    /// Underlying need or motivation derived from signals
    Insights,
    /// Candidate problem area for product improvement
    Opportunities,
    /// Concrete proposed solution or feature
    Ideas,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Signals,
        Category::Insights,
        Category::Opportunities,
        Category::Ideas,
    ];

    /// Bucket key used in persisted state and extraction payloads
    pub fn key(self) -> &'static str {
        match self {
            Category::Signals => "signals",
            Category::Insights => "insights",
            Category::Opportunities => "opportunities",
            Category::Ideas => "ideas",
        }
    }

    /// Human-readable column title
    pub fn title(self) -> &'static str {
        match self {
            Category::Signals => "Signals",
            Category::Insights => "Insights",
            Category::Opportunities => "Opportunities",
            Category::Ideas => "Ideas",
        }
    }

    /// Speaker used when an item of this category has none
    pub fn default_speaker(self) -> &'static str {
        match self {
            Category::Signals => UNKNOWN_SPEAKER,
            _ => PM_SPEAKER,
        }
    }

    /// Whether items of this category can be linked to OKRs
    pub fn can_link_okrs(self) -> bool {
        matches!(self, Category::Insights | Category::Opportunities)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signals" | "signal" => Ok(Category::Signals),
            "insights" | "insight" => Ok(Category::Insights),
            "opportunities" | "opportunity" => Ok(Category::Opportunities),
            "ideas" | "idea" => Ok(Category::Ideas),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: signals, insights, opportunities, ideas",
                s
            )),
        }
    }
}

/// Mint a fresh opaque item identifier
pub fn mint_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// One categorized unit of text extracted from a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedItem {
    /// Opaque identifier, stable across edits
    pub id: String,
    /// Category; always matches the bucket the item is stored under
    #[serde(rename = "type")]
    pub category: Category,
    /// Non-empty, trimmed text
    pub text: String,
    /// Who said it, or who authored it
    pub speaker: String,
    /// Ordered OKR identifiers this item impacts
    #[serde(rename = "okrIds")]
    pub okr_ids: Vec<String>,
    /// Tags; `None` means never tagged, an empty list means cleared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ExtractedItem {
    /// Create an item with a minted id, the category's default speaker and no links
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            id: mint_id(),
            category,
            text: text.into().trim().to_string(),
            speaker: category.default_speaker().to_string(),
            okr_ids: Vec::new(),
            tags: None,
            timestamp: None,
        }
    }

    /// Builder-style speaker override
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = speaker.into();
        self
    }

    /// Check if this item is linked to the given OKR
    pub fn is_linked_to(&self, okr_id: &str) -> bool {
        self.okr_ids.iter().any(|id| id == okr_id)
    }
}

/// An objective/key-result an item may be linked to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Okr {
    pub id: String,
    pub text: String,
}

impl Okr {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The OKR catalog used when no configuration overrides it
pub fn default_okrs() -> Vec<Okr> {
    vec![
        Okr::new("okr1", "Improve user activation by 15%"),
        Okr::new("okr2", "Increase feature adoption for search by 20%"),
        Okr::new("okr3", "Reduce onboarding friction and drop-off rate"),
        Okr::new("okr4", "Zentrik is a paid product with clear traction"),
        Okr::new("okr5", "Prove clients reach value quickly and often"),
    ]
}
