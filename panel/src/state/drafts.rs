#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use crate::net::types::{Account, Draft, DraftId, DraftUpdate};

/// Draft grid state: the list, the accounts used for publish eligibility,
/// and the open edit surface (if any).
#[derive(Clone, Debug, Default)]
pub struct DraftsState {
    pub drafts: Vec<Draft>,
    pub accounts: Vec<Account>,
    pub editor: Option<DraftEditor>,
    pub loading: bool,
    pub saving: bool,
    pub publishing: Option<DraftId>,
}

/// Edit surface pre-populated from a draft. Edits stay local until save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftEditor {
    pub draft_id: DraftId,
    pub title: String,
    pub content: String,
}

impl DraftEditor {
    /// Full-overwrite body; both fields are always sent.
    #[must_use]
    pub fn update(&self) -> DraftUpdate {
        DraftUpdate { title: self.title.clone(), content: self.content.clone() }
    }
}

/// Reasons the edit surface cannot open or act.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("draft {0} not found")]
    NotFound(DraftId),
    #[error("draft {0} is already published")]
    Published(DraftId),
    #[error("no draft is being edited")]
    NotEditing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftsEvent {
    FetchStarted,
    DraftsLoaded(Vec<Draft>),
    AccountsLoaded(Vec<Account>),
    FetchFailed,
    TitleEdited(String),
    ContentEdited(String),
    EditorClosed,
    SaveStarted,
    SaveSucceeded,
    SaveFailed,
    PublishStarted(DraftId),
    PublishFinished,
    /// Drop busy flags left behind by a handler that never finished.
    InFlightCleared,
}

impl DraftsState {
    pub fn apply(&mut self, event: DraftsEvent) {
        match event {
            DraftsEvent::FetchStarted => self.loading = true,
            DraftsEvent::DraftsLoaded(drafts) => {
                self.drafts = drafts;
                self.loading = false;
            }
            DraftsEvent::AccountsLoaded(accounts) => self.accounts = accounts,
            DraftsEvent::FetchFailed => self.loading = false,
            DraftsEvent::TitleEdited(title) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.title = title;
                }
            }
            DraftsEvent::ContentEdited(content) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.content = content;
                }
            }
            DraftsEvent::EditorClosed => self.editor = None,
            DraftsEvent::SaveStarted => self.saving = true,
            DraftsEvent::SaveSucceeded => {
                self.saving = false;
                self.editor = None;
            }
            DraftsEvent::SaveFailed => self.saving = false,
            DraftsEvent::PublishStarted(id) => self.publishing = Some(id),
            DraftsEvent::PublishFinished => self.publishing = None,
            DraftsEvent::InFlightCleared => {
                self.saving = false;
                self.publishing = None;
            }
        }
    }

    #[must_use]
    pub fn find(&self, id: DraftId) -> Option<&Draft> {
        self.drafts.iter().find(|draft| draft.id == id)
    }

    /// Open the edit surface for `id`, replacing any surface already open.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotFound`] for an unknown id and
    /// [`EditError::Published`] for a draft that can no longer change.
    pub fn open_editor(&mut self, id: DraftId) -> Result<&DraftEditor, EditError> {
        let draft = self.find(id).ok_or(EditError::NotFound(id))?;
        if draft.is_published() {
            return Err(EditError::Published(id));
        }
        let editor = DraftEditor { draft_id: draft.id, title: draft.title.clone(), content: draft.content.clone() };
        Ok(self.editor.insert(editor))
    }

    /// Target and body for saving the open edit surface.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotEditing`] when no edit surface is open.
    pub fn pending_update(&self) -> Result<(DraftId, DraftUpdate), EditError> {
        let editor = self.editor.as_ref().ok_or(EditError::NotEditing)?;
        Ok((editor.draft_id, editor.update()))
    }

    /// First account in list order that can publish to `platform`.
    #[must_use]
    pub fn eligible_account(&self, platform: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.can_publish_to(platform))
    }
}
