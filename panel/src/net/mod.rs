//! Network layer: wire types, the `PanelApi` trait, and its HTTP client.

pub mod api;
pub mod http;
pub mod types;

pub use api::{ApiError, PanelApi};
pub use http::HttpApi;
