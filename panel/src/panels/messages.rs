//! User-facing alert and confirmation text.

pub const LOAD_TRENDS_FAILED: &str = "Failed to load trends";
pub const LOAD_DRAFTS_FAILED: &str = "Failed to load drafts";
pub const LOAD_ACCOUNTS_FAILED: &str = "Failed to load accounts";
pub const LOAD_PUBLISHED_FAILED: &str = "Failed to load published items";

pub const SCRAPE_FAILED: &str = "Scrape failed";
pub const GENERATE_DONE: &str = "Draft written and saved to the draft box";
pub const GENERATE_FAILED: &str = "Generation failed, check the backend logs";

pub const SAVE_DONE: &str = "Saved";
pub const SAVE_FAILED: &str = "Save failed, check the backend";
pub const DRAFT_NOT_FOUND: &str = "Draft not found in the current list";

pub const NO_ELIGIBLE_ACCOUNT: &str = "No usable account found, bind one on the accounts page first";
pub const PUBLISH_STARTED: &str = "Publishing through the browser, watch the backend console or the opened window";
pub const PUBLISH_DONE: &str = "Published";
pub const UNKNOWN_ERROR: &str = "unknown error";

pub const BIND_STARTED: &str = "A browser will open for QR login, finish signing in there";
pub const BIND_DONE: &str = "Account bound";
pub const BIND_FAILED: &str = "Binding failed or timed out";
pub const UNBIND_DONE: &str = "Account unbound";
pub const UNBIND_FAILED: &str = "Unbind failed";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found in the current list";

#[must_use]
pub fn scrape_done(backend_message: Option<&str>) -> String {
    match backend_message {
        Some(message) => format!("Scrape complete: {message}"),
        None => "Scrape complete".to_owned(),
    }
}

#[must_use]
pub fn publish_confirm(account_name: &str) -> String {
    format!("Publish this note with account [{account_name}]?")
}

#[must_use]
pub fn publish_failed(detail: Option<&str>) -> String {
    format!("Publish failed: {}", detail.unwrap_or(UNKNOWN_ERROR))
}

#[must_use]
pub fn unbind_confirm(account_name: &str) -> String {
    format!("Unbind account [{account_name}]?")
}
