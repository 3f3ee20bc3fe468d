//! Structured error types for the report engine.
//!
//! Rendering itself never fails; only the process boundary (reading stdin,
//! writing stdout) can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
