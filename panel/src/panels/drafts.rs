//! Draft panel: edit surface and one-click publish.
//!
//! Publish picks the first active account for the configured platform in
//! list order; there is no account selection. Saves are full overwrites and
//! the grid only ever shows what a re-fetch returned.

use std::sync::Arc;

use super::{Notifier, Outcome, messages};
use crate::net::PanelApi;
use crate::net::types::DraftId;
use crate::state::drafts::{DraftsEvent, DraftsState, EditError};

pub struct DraftPanel {
    api: Arc<dyn PanelApi>,
    notifier: Arc<dyn Notifier>,
    publish_platform: String,
    state: DraftsState,
}

impl DraftPanel {
    #[must_use]
    pub fn new(api: Arc<dyn PanelApi>, notifier: Arc<dyn Notifier>, publish_platform: impl Into<String>) -> Self {
        Self { api, notifier, publish_platform: publish_platform.into(), state: DraftsState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &DraftsState {
        &self.state
    }

    /// Load drafts and the accounts used for publish eligibility, clearing
    /// busy flags from any cancelled handler.
    pub async fn mount(&mut self) -> Outcome {
        self.state.apply(DraftsEvent::InFlightCleared);
        let drafts = self.fetch_drafts().await;
        let accounts = self.fetch_accounts().await;
        if drafts.is_done() && accounts.is_done() { Outcome::Done } else { Outcome::Failed }
    }

    pub async fn fetch_drafts(&mut self) -> Outcome {
        self.state.apply(DraftsEvent::FetchStarted);
        match self.api.list_drafts().await {
            Ok(drafts) => {
                tracing::debug!(count = drafts.len(), "drafts loaded");
                self.state.apply(DraftsEvent::DraftsLoaded(drafts));
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "draft fetch failed");
                self.state.apply(DraftsEvent::FetchFailed);
                self.notifier.alert(messages::LOAD_DRAFTS_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn fetch_accounts(&mut self) -> Outcome {
        match self.api.list_accounts().await {
            Ok(accounts) => {
                self.state.apply(DraftsEvent::AccountsLoaded(accounts));
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "account fetch failed");
                self.notifier.alert(messages::LOAD_ACCOUNTS_FAILED);
                Outcome::Failed
            }
        }
    }

    // =========================================================================
    // EDIT
    // =========================================================================

    /// Open the edit surface (double-click or edit action).
    pub fn open_editor(&mut self, draft_id: DraftId) -> Outcome {
        match self.state.open_editor(draft_id) {
            Ok(_) => Outcome::Done,
            Err(EditError::Published(_) | EditError::NotEditing) => Outcome::Disabled,
            Err(EditError::NotFound(_)) => {
                self.notifier.alert(messages::DRAFT_NOT_FOUND);
                Outcome::Rejected
            }
        }
    }

    pub fn edit_title(&mut self, title: impl Into<String>) {
        self.state.apply(DraftsEvent::TitleEdited(title.into()));
    }

    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.state.apply(DraftsEvent::ContentEdited(content.into()));
    }

    pub fn close_editor(&mut self) {
        self.state.apply(DraftsEvent::EditorClosed);
    }

    /// PUT the editor's title and content, then close it and re-fetch.
    ///
    /// On failure the editor stays open with the user's edits.
    pub async fn save(&mut self) -> Outcome {
        if self.state.saving {
            return Outcome::Disabled;
        }
        let (draft_id, update) = match self.state.pending_update() {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!(error = %e, "save ignored");
                return Outcome::Disabled;
            }
        };

        self.state.apply(DraftsEvent::SaveStarted);
        match self.api.update_draft(draft_id, &update).await {
            Ok(_) => {
                tracing::info!(draft_id, "draft saved");
                self.notifier.alert(messages::SAVE_DONE);
                self.state.apply(DraftsEvent::SaveSucceeded);
                self.fetch_drafts().await;
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(draft_id, error = %e, "draft save failed");
                self.state.apply(DraftsEvent::SaveFailed);
                self.notifier.alert(messages::SAVE_FAILED);
                Outcome::Failed
            }
        }
    }

    // =========================================================================
    // PUBLISH
    // =========================================================================

    /// Publish `draft_id` through the first eligible account after confirmation.
    ///
    /// Without an eligible account the action is rejected and no request is sent.
    pub async fn publish(&mut self, draft_id: DraftId) -> Outcome {
        if self.state.publishing.is_some() {
            return Outcome::Disabled;
        }
        let Some(draft) = self.state.find(draft_id) else {
            self.notifier.alert(messages::DRAFT_NOT_FOUND);
            return Outcome::Rejected;
        };
        if draft.is_published() {
            return Outcome::Disabled;
        }
        let Some(account) = self.state.eligible_account(&self.publish_platform).cloned() else {
            tracing::info!(draft_id, platform = %self.publish_platform, "publish rejected: no eligible account");
            self.notifier.alert(messages::NO_ELIGIBLE_ACCOUNT);
            return Outcome::Rejected;
        };
        if !self.notifier.confirm(&messages::publish_confirm(&account.account_name)) {
            return Outcome::Declined;
        }

        self.notifier.alert(messages::PUBLISH_STARTED);
        self.state.apply(DraftsEvent::PublishStarted(draft_id));
        let outcome = match self.api.publish_draft(draft_id, account.id).await {
            Ok(_) => {
                tracing::info!(draft_id, account_id = account.id, "draft published");
                self.notifier.alert(messages::PUBLISH_DONE);
                self.fetch_drafts().await;
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(draft_id, account_id = account.id, error = %e, "publish failed");
                self.notifier.alert(&messages::publish_failed(e.detail()));
                Outcome::Failed
            }
        };
        self.state.apply(DraftsEvent::PublishFinished);
        outcome
    }
}

#[cfg(test)]
#[path = "drafts_test.rs"]
mod tests;
