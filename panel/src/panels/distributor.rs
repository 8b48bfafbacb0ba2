//! Account bindings panel: list, bind via QR login, unbind.

use std::sync::Arc;

use super::{Notifier, Outcome, messages};
use crate::net::PanelApi;
use crate::net::types::AccountId;
use crate::state::accounts::{AccountsEvent, AccountsState};

pub struct DistributorPanel {
    api: Arc<dyn PanelApi>,
    notifier: Arc<dyn Notifier>,
    state: AccountsState,
}

impl DistributorPanel {
    #[must_use]
    pub fn new(api: Arc<dyn PanelApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier, state: AccountsState::default() }
    }

    #[must_use]
    pub fn state(&self) -> &AccountsState {
        &self.state
    }

    pub async fn mount(&mut self) -> Outcome {
        self.state.apply(AccountsEvent::InFlightCleared);
        self.fetch().await
    }

    pub async fn fetch(&mut self) -> Outcome {
        self.state.apply(AccountsEvent::FetchStarted);
        match self.api.list_accounts().await {
            Ok(accounts) => {
                tracing::debug!(count = accounts.len(), "accounts loaded");
                self.state.apply(AccountsEvent::Loaded(accounts));
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "account fetch failed");
                self.state.apply(AccountsEvent::FetchFailed);
                self.notifier.alert(messages::LOAD_ACCOUNTS_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Start the backend's browser login for `platform`. Blocks until the
    /// backend reports the binding finished or failed.
    pub async fn bind(&mut self, platform: &str) -> Outcome {
        if self.state.binding {
            return Outcome::Disabled;
        }
        self.state.apply(AccountsEvent::BindStarted);
        self.notifier.alert(messages::BIND_STARTED);

        let outcome = match self.api.bind_account(platform).await {
            Ok(body) => {
                tracing::info!(platform, response = %body, "account bound");
                self.notifier.alert(messages::BIND_DONE);
                self.fetch().await;
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(platform, error = %e, "account bind failed");
                self.notifier.alert(messages::BIND_FAILED);
                Outcome::Failed
            }
        };
        self.state.apply(AccountsEvent::BindFinished);
        outcome
    }

    /// Unbind `account_id` after confirmation. Declining sends nothing.
    pub async fn unbind(&mut self, account_id: AccountId) -> Outcome {
        if self.state.unbinding.is_some() {
            return Outcome::Disabled;
        }
        let Some(account) = self.state.find(account_id) else {
            self.notifier.alert(messages::ACCOUNT_NOT_FOUND);
            return Outcome::Rejected;
        };
        if !self.notifier.confirm(&messages::unbind_confirm(&account.account_name)) {
            return Outcome::Declined;
        }

        self.state.apply(AccountsEvent::UnbindStarted(account_id));
        let outcome = match self.api.unbind_account(account_id).await {
            Ok(_) => {
                tracing::info!(account_id, "account unbound");
                self.notifier.alert(messages::UNBIND_DONE);
                self.fetch().await;
                Outcome::Done
            }
            Err(e) => {
                tracing::warn!(account_id, error = %e, "account unbind failed");
                self.notifier.alert(messages::UNBIND_FAILED);
                Outcome::Failed
            }
        };
        self.state.apply(AccountsEvent::UnbindFinished);
        outcome
    }
}

#[cfg(test)]
#[path = "distributor_test.rs"]
mod tests;
