#[cfg(test)]
#[path = "published_test.rs"]
mod published_test;

use crate::net::types::Draft;

/// Read-only list of published items.
#[derive(Clone, Debug, Default)]
pub struct PublishedState {
    pub items: Vec<Draft>,
    pub loading: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishedEvent {
    FetchStarted,
    Loaded(Vec<Draft>),
    FetchFailed,
}

impl PublishedState {
    pub fn apply(&mut self, event: PublishedEvent) {
        match event {
            PublishedEvent::FetchStarted => self.loading = true,
            PublishedEvent::Loaded(items) => {
                self.items = items;
                self.loading = false;
            }
            PublishedEvent::FetchFailed => self.loading = false,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }
}
