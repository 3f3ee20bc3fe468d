//! Core types for the report engine (action selector + JSON output contracts).

use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Action selector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
  #[default]
  GenerateReport,
  GenerateLessons,
}

impl Action {
  /// Case-insensitive; anything unrecognized selects the status report.
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "generate_lessons" => Self::GenerateLessons,
      _ => Self::GenerateReport,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::GenerateReport => "generate_report",
      Self::GenerateLessons => "generate_lessons",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// KPIs echoed back with the status report, rounded to fixed precisions.
/// Environmental fields pass through untouched (null when absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadKpis {
  pub taxa_ocupacao: f64,
  pub los_h: f64,
  pub tempo_espera_min: f64,
  pub readmissao_30d: f64,
  pub nps: i64,
  pub receita_total: f64,
  pub margem_total: f64,
  pub co2_pico: Value,
  pub energia_pico_kw: Value,
  pub temp_media: Value,
  pub umi_media: Value,
  pub o2_medio: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
  pub periodo: String,
  pub kpis: PayloadKpis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
  pub relatorio: String,
  pub payload: ReportPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonsReport {
  pub licoes: String,
}

/// Exactly one renderer's result; serializes as that renderer's object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderResult {
  Report(StatusReport),
  Lessons(LessonsReport),
}
