//! JSON output: UTF-8 bytes, non-ASCII kept literal.

use std::io::Write;

use crate::error::EngineError;
use crate::types::RenderResult;

/// Encode a render result as compact JSON bytes.
pub fn serialize(result: &RenderResult) -> Result<Vec<u8>, EngineError> {
  Ok(serde_json::to_vec(result)?)
}

/// Write the full document and flush. Returns the number of bytes written.
pub fn write_result<W: Write>(result: &RenderResult, mut out: W) -> Result<usize, EngineError> {
  let bytes = serialize(result)?;
  out.write_all(&bytes)?;
  out.flush()?;
  tracing::debug!(bytes = bytes.len(), "output written");
  Ok(bytes.len())
}
