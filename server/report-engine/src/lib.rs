//! Smart Hospital Report Engine: deterministic, rule-based narrative reports.
//!
//! Normalizes a possibly malformed or double-encoded JSON record, resolves its
//! KPIs (substituting canonical estimates when none are supplied), and renders
//! either a status report or a lessons-learned document as JSON.
//!
//! No DB, no network; pure computation. The fallback period date is injected
//! by the caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod kpis;
pub mod lessons;
pub mod normalize;
pub mod output;
pub mod report;
pub mod types;

use chrono::NaiveDate;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use kpis::{resolve_kpis, Field, Kpis, Metric};
pub use normalize::{normalize, Record};
pub use types::{Action, RenderResult};

/// Run the engine with default configuration (no I/O).
pub fn run(action: Action, raw: &str, today: NaiveDate) -> RenderResult {
  Engine::with_defaults().process(action, raw, today)
}
