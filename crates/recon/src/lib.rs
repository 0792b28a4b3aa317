//! `junkcheck-recon` — Two-source vehicle report reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded report records and reference rows,
//! returns a verdict. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod reference;
pub mod resolve;

pub use config::CheckConfig;
pub use engine::reconcile;
pub use error::ConfigError;
pub use model::Verdict;
pub use resolve::{resolve_status, JUNK, NOT_JUNK};
