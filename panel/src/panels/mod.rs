//! Panel controllers: one per resource collection.
//!
//! DESIGN
//! ======
//! Each panel owns its store, fetches on `mount`, and re-fetches after every
//! successful mutation. Handlers never return errors: failures are reported
//! through the [`Notifier`] and summarized as an [`Outcome`], leaving the
//! store as it was before the failed call.
//!
//! Busy flags in the stores stand in for disabled buttons, so the same
//! mutating action never runs twice at once within a panel. Nothing
//! coordinates across panels. A handler whose future is dropped mid-request
//! leaves its flag set; the next `mount` clears it.

pub mod distributor;
pub mod drafts;
pub mod messages;
pub mod published;
pub mod trends;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use distributor::DistributorPanel;
pub use drafts::DraftPanel;
pub use published::PublishedPanel;
pub use trends::TrendPanel;

/// Blocking alert/confirm surface (modal dialogs, or a terminal).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);

    /// Ask the user to confirm; `false` aborts the action with no request sent.
    fn confirm(&self, message: &str) -> bool;
}

/// How a panel action ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and the list was re-fetched.
    Done,
    /// The control was disabled (in flight, terminal state, or at a boundary).
    Disabled,
    /// A client-side check refused the action before any request.
    Rejected,
    /// The user declined the confirmation.
    Declined,
    /// The request failed and the user was alerted.
    Failed,
}

impl Outcome {
    #[must_use]
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}
