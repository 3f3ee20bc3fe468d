//! Number formatting helpers shared by both renderers.

use serde_json::Value;

use crate::kpis::Metric;

/// Ratio as a whole percentage: `0.87` -> `87%`.
pub fn percent(ratio: f64) -> String {
  format!("{:.0}%", ratio * 100.0)
}

/// Round to a fixed number of decimal places. Values too large to scale are
/// returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  let rounded = (value * factor).round() / factor;
  if rounded.is_finite() {
    rounded
  } else {
    value
  }
}

/// Integer part, saturating at the i64 range.
pub fn truncate(value: f64) -> i64 {
  value.trunc() as i64
}

/// Currency text: `<prefix> 1,580,000.00`.
///
/// Absent values render as zero; values that are not numbers degrade to their
/// plain text after the prefix.
pub fn currency(metric: &Metric, prefix: &str) -> String {
  match metric {
    Metric::Number(v) => format!("{} {}", prefix, group_thousands(*v)),
    Metric::Absent => format!("{} {}", prefix, group_thousands(0.0)),
    Metric::Other(Value::String(s)) => format!("{} {}", prefix, s),
    Metric::Other(v) => format!("{} {}", prefix, v),
  }
}

/// Two decimals, comma-grouped thousands.
fn group_thousands(value: f64) -> String {
  let fixed = format!("{:.2}", value.abs());
  let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

  let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
  if value < 0.0 {
    grouped.push('-');
  }
  let len = int_part.len();
  for (i, ch) in int_part.chars().enumerate() {
    if i > 0 && (len - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  grouped.push('.');
  grouped.push_str(frac);
  grouped
}
