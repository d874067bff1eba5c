// Public fallible APIs in this crate share one concrete error contract (`IsuumoError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod catalog;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reco_cache;
pub mod search;
pub mod state;

pub use catalog::SearchConditions;
pub use client::Isuumo;
pub use config::AppConfig;
pub use error::{ErrorPayload, IsuumoError, Result};
