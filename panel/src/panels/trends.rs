//! Trend list panel: pagination, scrape, and per-item draft generation.

use std::sync::Arc;

use serde_json::Value;

use super::{Notifier, Outcome, messages};
use crate::net::PanelApi;
use crate::net::types::TrendId;
use crate::state::trends::{GenerateAction, TrendsEvent, TrendsState};

pub struct TrendPanel {
    api: Arc<dyn PanelApi>,
    notifier: Arc<dyn Notifier>,
    state: TrendsState,
}

impl TrendPanel {
    #[must_use]
    pub fn new(api: Arc<dyn PanelApi>, notifier: Arc<dyn Notifier>, page_size: u32) -> Self {
        Self { api, notifier, state: TrendsState::new(page_size) }
    }

    #[must_use]
    pub fn state(&self) -> &TrendsState {
        &self.state
    }

    /// Load the first page, clearing busy flags from any cancelled handler.
    pub async fn mount(&mut self) -> Outcome {
        self.state.apply(TrendsEvent::InFlightCleared);
        self.fetch(1).await
    }

    /// Load `page` (1-indexed) at the panel's page size.
    pub async fn fetch(&mut self, page: u32) -> Outcome {
        let page = page.max(1);
        let size = self.state.pager.size;
        self.state.apply(TrendsEvent::FetchStarted);

        match self.api.list_trends(page, size).await {
            Ok(data) => {
                tracing::debug!(page, size, total = data.total, "trends loaded");
                self.state.apply(TrendsEvent::PageLoaded { page, data });
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "trend fetch failed");
                self.state.apply(TrendsEvent::FetchFailed);
                self.notifier.alert(messages::LOAD_TRENDS_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn next_page(&mut self) -> Outcome {
        match self.state.pager.next_page() {
            Some(page) => self.fetch(page).await,
            None => Outcome::Disabled,
        }
    }

    pub async fn prev_page(&mut self) -> Outcome {
        match self.state.pager.prev_page() {
            Some(page) => self.fetch(page).await,
            None => Outcome::Disabled,
        }
    }

    /// Trigger a backend scrape, then jump back to page 1.
    pub async fn scrape(&mut self) -> Outcome {
        if self.state.scraping {
            return Outcome::Disabled;
        }
        self.state.apply(TrendsEvent::ScrapeStarted);

        let outcome = match self.api.scrape_trends().await {
            Ok(body) => {
                tracing::info!(response = %body, "scrape finished");
                self.fetch(1).await;
                let backend_message = body.get("message").and_then(Value::as_str);
                self.notifier.alert(&messages::scrape_done(backend_message));
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "scrape failed");
                self.notifier.alert(messages::SCRAPE_FAILED);
                Outcome::Failed
            }
        };

        self.state.apply(TrendsEvent::ScrapeFinished);
        outcome
    }

    /// Generate a draft from `trend_id`, then reload the current page so the
    /// item's `is_used` flag reflects the server.
    pub async fn generate(&mut self, trend_id: TrendId) -> Outcome {
        if let Some(item) = self.state.find(trend_id) {
            if matches!(self.state.generate_action(item), GenerateAction::Used | GenerateAction::Pending) {
                return Outcome::Disabled;
            }
        } else if self.state.generating.contains(&trend_id) {
            return Outcome::Disabled;
        }

        self.state.apply(TrendsEvent::GenerateStarted(trend_id));
        match self.api.generate_draft(trend_id).await {
            Ok(body) => {
                tracing::info!(trend_id, response = %body, "draft generated");
                self.state.apply(TrendsEvent::GenerateSucceeded(trend_id));
                self.notifier.alert(messages::GENERATE_DONE);
                self.fetch(self.state.pager.page).await;
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(trend_id, error = %e, "draft generation failed");
                self.state.apply(TrendsEvent::GenerateFailed(trend_id));
                self.notifier.alert(messages::GENERATE_FAILED);
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "trends_test.rs"]
mod tests;
