//! Engine configuration with sane defaults.

/// Environment variable holding a `tracing` filter directive for diagnostics.
pub const LOG_ENV: &str = "REPORT_ENGINE_LOG";

/// Tunable thresholds for the lessons narrative and currency rendering.
#[derive(Debug, Clone)]
pub struct Config {
  /// Occupancy strictly below this counts as stable bed management.
  pub stable_occupancy_below: f64,
  /// Occupancy strictly above this is flagged as critical.
  pub critical_occupancy_above: f64,
  /// Wait time (minutes) strictly above this is flagged.
  pub wait_time_alert_minutes: f64,
  /// 30-day readmission rate strictly above this is flagged.
  pub readmission_alert_above: f64,
  /// Prefix for every currency amount.
  pub currency_prefix: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      stable_occupancy_below: 0.85,
      critical_occupancy_above: 0.90,
      wait_time_alert_minutes: 30.0,
      readmission_alert_above: 0.10,
      currency_prefix: "R$".to_string(),
    }
  }
}

/// Log filter for the binary: `REPORT_ENGINE_LOG` if set, otherwise `off`.
///
/// Callers commonly merge stderr into stdout, so diagnostics stay silent unless
/// explicitly requested.
pub fn log_filter() -> String {
  std::env::var(LOG_ENV)
    .ok()
    .filter(|v| !v.trim().is_empty())
    .unwrap_or_else(|| "off".to_string())
}
