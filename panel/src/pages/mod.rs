//! Static mock-backed pages. These have no backend integration.

pub mod analytics;
pub mod dashboard;
pub mod optimization;
