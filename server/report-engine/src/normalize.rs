//! Normalize an untrusted stdin blob into a structured Record.
//!
//! Accepted shapes:
//! - empty / whitespace-only text -> `{}`
//! - JSON object or array -> returned as-is
//! - JSON string whose content is itself a JSON object or array (double
//!   encoding) -> the inner container, unwrapped exactly once
//! - anything else (invalid JSON, scalars, deeper encodings) -> `{}`

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Normalized input: always a JSON object or array, never a bare scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Value);

impl Record {
  /// The "could not normalize" sentinel.
  pub fn empty() -> Self {
    Self(Value::Object(Map::new()))
  }

  /// Wrap a value, keeping it only if it is a container.
  pub fn from_value(value: Value) -> Option<Self> {
    match value {
      Value::Object(_) | Value::Array(_) => Some(Self(value)),
      _ => None,
    }
  }

  pub fn as_value(&self) -> &Value {
    &self.0
  }

  /// Look up a top-level key; arrays have no keys.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.0.as_object().and_then(|m| m.get(key))
  }

  pub fn kpis(&self) -> Option<&Value> {
    self.get("kpis")
  }

  /// Period label as text, if one was supplied in a usable form.
  pub fn periodo(&self) -> Option<String> {
    match self.get("periodo")? {
      Value::String(s) => Some(s.clone()),
      v @ (Value::Number(_) | Value::Bool(_)) => Some(v.to_string()),
      _ => None,
    }
  }

  /// Supplied period label, or `today` as an ISO date.
  pub fn periodo_or(&self, today: NaiveDate) -> String {
    self
      .periodo()
      .unwrap_or_else(|| today.format("%Y-%m-%d").to_string())
  }
}

impl Default for Record {
  fn default() -> Self {
    Self::empty()
  }
}

/// Parse raw input into a Record. Total: never fails, never recurses past one
/// extra layer of string encoding.
pub fn normalize(raw: &str) -> Record {
  if raw.trim().is_empty() {
    tracing::debug!("empty input, using empty record");
    return Record::empty();
  }

  let first: Value = match serde_json::from_str(raw) {
    Ok(v) => v,
    Err(e) => {
      tracing::debug!(error = %e, "input is not valid JSON, using empty record");
      return Record::empty();
    }
  };

  let inner = match first {
    Value::String(s) => s,
    other => {
      return Record::from_value(other).unwrap_or_else(|| {
        tracing::debug!("input is a JSON scalar, using empty record");
        Record::empty()
      });
    }
  };

  // Second and final stage: the payload was JSON-encoded as a string literal.
  match serde_json::from_str::<Value>(&inner) {
    Ok(v) => Record::from_value(v).unwrap_or_else(|| {
      tracing::debug!("double-encoded input is not a container, using empty record");
      Record::empty()
    }),
    Err(e) => {
      tracing::debug!(error = %e, "double-encoded input is not valid JSON, using empty record");
      Record::empty()
    }
  }
}
