//! Per-resource client state stores.
//!
//! DESIGN
//! ======
//! One store per resource (`trends`, `drafts`, `accounts`, `published`), each
//! mutated only through its event enum via `apply`. Panel controllers run the
//! network calls and feed the results back in as events, so a store never
//! holds anything the server has not confirmed except the open edit surface.

pub mod accounts;
pub mod drafts;
pub mod pagination;
pub mod published;
pub mod trends;
