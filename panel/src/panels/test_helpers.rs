//! In-memory backend and recording notifier for panel tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use super::Notifier;
use crate::net::api::{ApiError, PanelApi};
use crate::net::types::{
    Account, AccountId, AccountStatus, Draft, DraftId, DraftStatus, DraftUpdate, Page, TrendId, TrendItem,
};

// =========================================================================
// FakeApi
// =========================================================================

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub trends: Vec<TrendItem>,
    pub drafts: Vec<Draft>,
    pub accounts: Vec<Account>,
    pub scrape_batch: Vec<TrendItem>,
    pub calls: Vec<String>,
    failures: HashMap<&'static str, Option<String>>,
    next_id: i64,
}

impl FakeBackend {
    fn check(&mut self, op: &'static str) -> Result<(), ApiError> {
        match self.failures.get(op) {
            Some(detail) => {
                let body = json!({ "detail": detail }).to_string();
                Err(ApiError::Status { status: 500, detail: detail.clone(), body })
            }
            None => Ok(()),
        }
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        1000 + self.next_id
    }
}

#[derive(Default)]
pub(crate) struct FakeApi {
    inner: Mutex<FakeBackend>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_trends(count: i64) -> Arc<Self> {
        let api = Self::default();
        api.inner.lock().unwrap().trends = (1..=count).map(|id| trend(id, false)).collect();
        Arc::new(api)
    }

    pub fn backend(&self) -> std::sync::MutexGuard<'_, FakeBackend> {
        self.inner.lock().unwrap()
    }

    /// Make every later call of `op` fail with HTTP 500 and `detail`.
    pub fn fail(&self, op: &'static str, detail: Option<&str>) {
        self.backend().failures.insert(op, detail.map(ToOwned::to_owned));
    }

    pub fn heal(&self, op: &'static str) {
        self.backend().failures.remove(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.backend().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.backend().calls.clear();
    }
}

pub(crate) fn trend(id: TrendId, is_used: bool) -> TrendItem {
    TrendItem {
        id,
        title: format!("trend-{id}"),
        url: format!("https://example.test/{id}"),
        platform: "weibo".into(),
        hot_score: 1000 - id,
        is_used,
        created_at: None,
    }
}

pub(crate) fn draft(id: DraftId, status: DraftStatus) -> Draft {
    Draft {
        id,
        title: format!("title-{id}"),
        content: format!("content-{id}"),
        status,
        created_at: Some("2025-01-01T00:00:00".into()),
        updated_at: None,
        trend_id: None,
        tags: None,
        platform: Some("xhs".into()),
        images: None,
    }
}

pub(crate) fn account(id: AccountId, platform: &str, status: AccountStatus) -> Account {
    Account {
        id,
        platform: platform.into(),
        account_name: format!("User_{id}"),
        status,
        last_checked_at: Some("2025-01-01T00:00:00".into()),
    }
}

fn not_found(what: &str) -> ApiError {
    let detail = format!("{what} not found");
    ApiError::Status { status: 404, body: json!({ "detail": detail }).to_string(), detail: Some(detail) }
}

#[async_trait::async_trait]
impl PanelApi for FakeApi {
    async fn list_trends(&self, page: u32, size: u32) -> Result<Page<TrendItem>, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("GET /trends/list?page={page}&size={size}"));
        b.check("list_trends")?;
        let skip = (page.max(1) as usize - 1) * size as usize;
        let items = b.trends.iter().skip(skip).take(size as usize).cloned().collect();
        Ok(Page { items, total: b.trends.len() as u64 })
    }

    async fn scrape_trends(&self) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push("POST /trends/scrape".into());
        b.check("scrape_trends")?;
        let batch: Vec<TrendItem> = b.scrape_batch.drain(..).collect();
        let count = batch.len();
        for item in batch.into_iter().rev() {
            b.trends.insert(0, item);
        }
        Ok(json!({ "status": "success", "message": format!("stored {count} new trends") }))
    }

    async fn generate_draft(&self, trend_id: TrendId) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("POST /content/generate?trend_id={trend_id}"));
        b.check("generate_draft")?;
        let title = {
            let trend = b.trends.iter_mut().find(|t| t.id == trend_id).ok_or_else(|| not_found("trend"))?;
            trend.is_used = true;
            trend.title.clone()
        };
        let id = b.next_id();
        let mut created = draft(id, DraftStatus::Generated);
        created.title = format!("draft for {title}");
        created.trend_id = Some(trend_id);
        b.drafts.insert(0, created);
        Ok(json!({ "status": "success", "draft_id": id }))
    }

    async fn list_drafts(&self) -> Result<Vec<Draft>, ApiError> {
        let mut b = self.backend();
        b.calls.push("GET /content/list".into());
        b.check("list_drafts")?;
        Ok(b.drafts.clone())
    }

    async fn update_draft(&self, draft_id: DraftId, update: &DraftUpdate) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("PUT /content/update/{draft_id} {}", serde_json::to_string(update).unwrap()));
        b.check("update_draft")?;
        let draft = b.drafts.iter_mut().find(|d| d.id == draft_id).ok_or_else(|| not_found("draft"))?;
        draft.title.clone_from(&update.title);
        draft.content.clone_from(&update.content);
        Ok(json!({ "status": "success" }))
    }

    async fn list_published(&self) -> Result<Vec<Draft>, ApiError> {
        let mut b = self.backend();
        b.calls.push("GET /content/published".into());
        b.check("list_published")?;
        Ok(b.drafts.iter().filter(|d| d.is_published()).cloned().collect())
    }

    async fn publish_draft(&self, draft_id: DraftId, account_id: AccountId) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("POST /publish/now?draft_id={draft_id}&account_id={account_id}"));
        b.check("publish_draft")?;
        let draft = b.drafts.iter_mut().find(|d| d.id == draft_id).ok_or_else(|| not_found("draft"))?;
        draft.status = DraftStatus::Published;
        Ok(json!({ "status": "success" }))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let mut b = self.backend();
        b.calls.push("GET /accounts/list".into());
        b.check("list_accounts")?;
        Ok(b.accounts.clone())
    }

    async fn bind_account(&self, platform: &str) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("POST /accounts/bind/{platform}"));
        b.check("bind_account")?;
        let id = b.next_id();
        b.accounts.insert(0, account(id, platform, AccountStatus::Active));
        Ok(json!({ "status": "success", "account_id": id }))
    }

    async fn unbind_account(&self, account_id: AccountId) -> Result<Value, ApiError> {
        let mut b = self.backend();
        b.calls.push(format!("DELETE /accounts/{account_id}"));
        b.check("unbind_account")?;
        let before = b.accounts.len();
        b.accounts.retain(|a| a.id != account_id);
        if b.accounts.len() == before {
            return Err(not_found("account"));
        }
        Ok(json!({ "status": "success" }))
    }
}

// =========================================================================
// RecordingNotifier
// =========================================================================

pub(crate) struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<String>>,
    answer: bool,
}

impl RecordingNotifier {
    /// Notifier that answers every confirmation with `answer`.
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self { alerts: Mutex::new(Vec::new()), confirms: Mutex::new(Vec::new()), answer })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_owned());
        self.answer
    }
}
