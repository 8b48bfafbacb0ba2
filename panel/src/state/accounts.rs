#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use crate::net::types::{Account, AccountId};

/// Bound account list plus bind/unbind in-flight flags.
#[derive(Clone, Debug, Default)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
    pub loading: bool,
    pub binding: bool,
    pub unbinding: Option<AccountId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountsEvent {
    FetchStarted,
    Loaded(Vec<Account>),
    FetchFailed,
    BindStarted,
    BindFinished,
    UnbindStarted(AccountId),
    UnbindFinished,
    /// Drop busy flags left behind by a handler that never finished.
    InFlightCleared,
}

impl AccountsState {
    pub fn apply(&mut self, event: AccountsEvent) {
        match event {
            AccountsEvent::FetchStarted => self.loading = true,
            AccountsEvent::Loaded(accounts) => {
                self.accounts = accounts;
                self.loading = false;
            }
            AccountsEvent::FetchFailed => self.loading = false,
            AccountsEvent::BindStarted => self.binding = true,
            AccountsEvent::BindFinished => self.binding = false,
            AccountsEvent::UnbindStarted(id) => self.unbinding = Some(id),
            AccountsEvent::UnbindFinished => self.unbinding = None,
            AccountsEvent::InFlightCleared => {
                self.binding = false;
                self.unbinding = None;
            }
        }
    }

    #[must_use]
    pub fn find(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }
}
