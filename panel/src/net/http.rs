//! `reqwest` implementation of [`PanelApi`].
//!
//! Thin HTTP wrapper over the backend's `/api/v1` routes. No timeouts and no
//! retries: a call either resolves or surfaces its error to the panel.

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{ApiError, PanelApi, extract_detail};
use super::types::{Account, AccountId, Draft, DraftId, DraftUpdate, Page, TrendId, TrendItem};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client rooted at `base_url` (e.g. `http://localhost:8000/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&DraftUpdate>,
    ) -> Result<T, ApiError> {
        let request = self.http.request(method.clone(), self.url(path));
        let request = if query.is_empty() { request } else { request.query(query) };
        let request = if let Some(json) = body { request.json(json) } else { request };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "backend request failed");
            ApiError::Request(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        tracing::debug!(%method, path, status, "backend response");

        if !(200..300).contains(&status) {
            tracing::warn!(%method, path, status, "backend returned error status");
            return Err(ApiError::from_status(status, text));
        }

        parse_body(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    // Empty 2xx bodies decode as JSON null so `Value` responses still succeed.
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Join `segments` into an absolute path, percent-encoding each segment so
/// user input cannot add segments, a query, or a fragment.
fn encoded_path(segments: &[&str]) -> Result<String, ApiError> {
    let mut url = Url::parse("http://backend/").map_err(|e| ApiError::Request(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Request("URL cannot carry path segments".to_owned()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_owned())
}

/// Reject success responses whose body says `{"status": "failed"}`.
///
/// The bind endpoint reports QR-login timeouts this way instead of with an
/// error status.
fn reject_reported_failure(body: Value) -> Result<Value, ApiError> {
    if body.get("status").and_then(Value::as_str) == Some("failed") {
        let detail = body
            .get("error")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .or_else(|| extract_detail(&body));
        return Err(ApiError::Rejected { detail });
    }
    Ok(body)
}

#[async_trait::async_trait]
impl PanelApi for HttpApi {
    async fn list_trends(&self, page: u32, size: u32) -> Result<Page<TrendItem>, ApiError> {
        let query = [("page", page.to_string()), ("size", size.to_string())];
        self.send(Method::GET, "/trends/list", &query, None).await
    }

    async fn scrape_trends(&self) -> Result<Value, ApiError> {
        self.send(Method::POST, "/trends/scrape", &[], None).await
    }

    async fn generate_draft(&self, trend_id: TrendId) -> Result<Value, ApiError> {
        let query = [("trend_id", trend_id.to_string())];
        self.send(Method::POST, "/content/generate", &query, None).await
    }

    async fn list_drafts(&self) -> Result<Vec<Draft>, ApiError> {
        self.send(Method::GET, "/content/list", &[], None).await
    }

    async fn update_draft(&self, draft_id: DraftId, update: &DraftUpdate) -> Result<Value, ApiError> {
        let path = format!("/content/update/{draft_id}");
        self.send(Method::PUT, &path, &[], Some(update)).await
    }

    async fn list_published(&self) -> Result<Vec<Draft>, ApiError> {
        self.send(Method::GET, "/content/published", &[], None).await
    }

    async fn publish_draft(&self, draft_id: DraftId, account_id: AccountId) -> Result<Value, ApiError> {
        let query = [("draft_id", draft_id.to_string()), ("account_id", account_id.to_string())];
        self.send(Method::POST, "/publish/now", &query, None).await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.send(Method::GET, "/accounts/list", &[], None).await
    }

    async fn bind_account(&self, platform: &str) -> Result<Value, ApiError> {
        let path = encoded_path(&["accounts", "bind", platform])?;
        let body: Value = self.send(Method::POST, &path, &[], None).await?;
        reject_reported_failure(body)
    }

    async fn unbind_account(&self, account_id: AccountId) -> Result<Value, ApiError> {
        let path = format!("/accounts/{account_id}");
        self.send(Method::DELETE, &path, &[], None).await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
