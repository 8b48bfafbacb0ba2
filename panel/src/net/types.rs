//! Wire types for the backend REST API.
//!
//! DESIGN
//! ======
//! Decoding is lenient: unknown fields are ignored and optional fields
//! default, since the backend's JSON is consumed without schema validation.
//! The backend writes nullable columns as explicit `null`, so scalar fields
//! default on `null` as well as when absent; one sparse row never costs the
//! whole list. Status strings the client does not recognize are kept.

use serde::{Deserialize, Deserializer, Serialize};

pub type TrendId = i64;
pub type DraftId = i64;
pub type AccountId = i64;

/// Decode `null` as `T::default()`. Pair with `#[serde(default)]` for absent keys.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// TRENDS
// =============================================================================

/// A scraped trend topic with its heat score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendItem {
    pub id: TrendId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hot_score: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_used: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paginated list envelope: `{items, total}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Lifecycle status of a draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DraftStatus {
    #[default]
    Generated,
    Approved,
    Published,
    Other(String),
}

impl DraftStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated => "generated",
            Self::Approved => "approved",
            Self::Published => "published",
            Self::Other(raw) => raw,
        }
    }

    /// `true` once the draft has been published; no further edits or publishes.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl From<String> for DraftStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "generated" | "draft" => Self::Generated,
            "approved" => Self::Approved,
            "published" => Self::Published,
            _ => Self::Other(raw),
        }
    }
}

impl From<DraftStatus> for String {
    fn from(status: DraftStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// AI-generated content derived from a trend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: DraftStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub trend_id: Option<TrendId>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    /// JSON-encoded array of image paths attached at publish time.
    #[serde(default)]
    pub images: Option<String>,
}

impl Draft {
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of attached images; malformed or absent `images` counts as zero.
    #[must_use]
    pub fn image_count(&self) -> usize {
        let Some(raw) = self.images.as_deref() else {
            return 0;
        };
        match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            Ok(images) => images.len(),
            Err(_) => 0,
        }
    }

    /// First `max_chars` characters of the body, for card previews.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() { format!("{head}...") } else { head }
    }
}

/// Full-overwrite body for `PUT /content/update/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftUpdate {
    pub title: String,
    pub content: String,
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// Binding status of a platform account. Missing or `null` status is
/// `Unknown`, which never publishes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    Active,
    #[default]
    Unknown,
    Other(String),
}

impl AccountStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for AccountStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "unknown" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.as_str().to_owned()
    }
}

/// A bound platform account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AccountStatus,
    #[serde(default)]
    pub last_checked_at: Option<String>,
}

impl Account {
    /// Whether this account can publish to `platform`.
    #[must_use]
    pub fn can_publish_to(&self, platform: &str) -> bool {
        self.platform == platform && self.status == AccountStatus::Active
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
