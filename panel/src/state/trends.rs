#[cfg(test)]
#[path = "trends_test.rs"]
mod trends_test;

use std::collections::HashSet;

use super::pagination::Pager;
use crate::net::types::{Page, TrendId, TrendItem};

/// Trend list state: current page of items plus in-flight action flags.
#[derive(Clone, Debug, Default)]
pub struct TrendsState {
    pub items: Vec<TrendItem>,
    pub pager: Pager,
    pub loading: bool,
    pub scraping: bool,
    pub generating: HashSet<TrendId>,
    pub retry: HashSet<TrendId>,
}

/// State transitions for the trend list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrendsEvent {
    FetchStarted,
    PageLoaded { page: u32, data: Page<TrendItem> },
    FetchFailed,
    ScrapeStarted,
    ScrapeFinished,
    GenerateStarted(TrendId),
    GenerateSucceeded(TrendId),
    GenerateFailed(TrendId),
    /// Drop busy flags left behind by a handler that never finished.
    InFlightCleared,
}

/// What the per-item generate control shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateAction {
    Available,
    Pending,
    Retry,
    Used,
}

impl TrendsState {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { pager: Pager::new(page_size), ..Self::default() }
    }

    pub fn apply(&mut self, event: TrendsEvent) {
        match event {
            TrendsEvent::FetchStarted => self.loading = true,
            TrendsEvent::PageLoaded { page, data } => {
                self.items = data.items;
                self.pager.loaded(page, data.total);
                self.loading = false;
            }
            TrendsEvent::FetchFailed => self.loading = false,
            TrendsEvent::ScrapeStarted => self.scraping = true,
            TrendsEvent::ScrapeFinished => self.scraping = false,
            TrendsEvent::GenerateStarted(id) => {
                self.generating.insert(id);
                self.retry.remove(&id);
            }
            TrendsEvent::GenerateSucceeded(id) => {
                self.generating.remove(&id);
            }
            TrendsEvent::GenerateFailed(id) => {
                self.generating.remove(&id);
                self.retry.insert(id);
            }
            TrendsEvent::InFlightCleared => {
                self.scraping = false;
                self.generating.clear();
            }
        }
    }

    #[must_use]
    pub fn find(&self, id: TrendId) -> Option<&TrendItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn generate_action(&self, item: &TrendItem) -> GenerateAction {
        if item.is_used {
            GenerateAction::Used
        } else if self.generating.contains(&item.id) {
            GenerateAction::Pending
        } else if self.retry.contains(&item.id) {
            GenerateAction::Retry
        } else {
            GenerateAction::Available
        }
    }
}
