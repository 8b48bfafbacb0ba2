//! # panel
//!
//! Control panel core for the social automation backend: trends, drafts,
//! account bindings, and published items.
//!
//! This crate contains the typed HTTP client, per-resource state stores, the
//! panel controllers that drive the trend → draft → publish workflow, and the
//! static mock-backed pages. Rendering lives in the `cli` crate.

pub mod config;
pub mod net;
pub mod pages;
pub mod panels;
pub mod state;
