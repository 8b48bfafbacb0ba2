//! Backend API surface consumed by the panels.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Panels do not classify failures
//! beyond "request failed"; the only thing they read out of an error is the
//! backend's `detail` message, which is shown verbatim when present.

use serde_json::Value;

use super::types::{Account, AccountId, Draft, DraftId, DraftUpdate, Page, TrendId, TrendItem};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, reset).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String>, body: String },

    /// The backend reported failure inside a success response.
    #[error("backend reported failure: {}", .detail.as_deref().unwrap_or("unknown error"))]
    Rejected { detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Backend-supplied failure message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } | Self::Rejected { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw response body, extracting `detail`.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = serde_json::from_str::<Value>(&body)
            .map_or(None, |value| extract_detail(&value));
        Self::Status { status, detail, body }
    }
}

/// Pull a displayable message out of an error body.
///
/// String `detail` is returned as-is; structured `detail` (validation error
/// lists) is serialized back to JSON so nothing is lost.
#[must_use]
pub fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

// =============================================================================
// API TRAIT
// =============================================================================

/// Backend operations used by the panels. Enables fakes in tests.
///
/// Mutation responses are returned as opaque JSON; the panels only care that
/// the call succeeded and then re-fetch.
#[async_trait::async_trait]
pub trait PanelApi: Send + Sync {
    /// `GET /trends/list?page&size`
    async fn list_trends(&self, page: u32, size: u32) -> Result<Page<TrendItem>, ApiError>;

    /// `POST /trends/scrape`
    async fn scrape_trends(&self) -> Result<Value, ApiError>;

    /// `POST /content/generate?trend_id=`
    async fn generate_draft(&self, trend_id: TrendId) -> Result<Value, ApiError>;

    /// `GET /content/list`
    async fn list_drafts(&self) -> Result<Vec<Draft>, ApiError>;

    /// `PUT /content/update/{id}` with a full `{title, content}` overwrite.
    async fn update_draft(&self, draft_id: DraftId, update: &DraftUpdate) -> Result<Value, ApiError>;

    /// `GET /content/published`
    async fn list_published(&self) -> Result<Vec<Draft>, ApiError>;

    /// `POST /publish/now?draft_id=&account_id=`
    async fn publish_draft(&self, draft_id: DraftId, account_id: AccountId) -> Result<Value, ApiError>;

    /// `GET /accounts/list`
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError>;

    /// `POST /accounts/bind/{platform}`
    async fn bind_account(&self, platform: &str) -> Result<Value, ApiError>;

    /// `DELETE /accounts/{id}`
    async fn unbind_account(&self, account_id: AccountId) -> Result<Value, ApiError>;
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
