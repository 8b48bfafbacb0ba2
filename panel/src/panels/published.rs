//! Read-only list of published items.

use std::sync::Arc;

use super::{Notifier, Outcome, messages};
use crate::net::PanelApi;
use crate::state::published::{PublishedEvent, PublishedState};

pub struct PublishedPanel {
    api: Arc<dyn PanelApi>,
    notifier: Arc<dyn Notifier>,
    state: PublishedState,
}

impl PublishedPanel {
    #[must_use]
    pub fn new(api: Arc<dyn PanelApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier, state: PublishedState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &PublishedState {
        &self.state
    }

    pub async fn mount(&mut self) -> Outcome {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Outcome {
        self.state.apply(PublishedEvent::FetchStarted);
        match self.api.list_published().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "published items loaded");
                self.state.apply(PublishedEvent::Loaded(items));
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "published fetch failed");
                self.state.apply(PublishedEvent::FetchFailed);
                self.notifier.alert(messages::LOAD_PUBLISHED_FAILED);
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "published_test.rs"]
mod tests;
