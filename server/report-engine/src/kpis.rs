//! KPI resolution: canonical defaults plus tagged per-field lookup.

use std::sync::LazyLock;

use serde_json::{json, Map, Value};

/// Every KPI field the renderers reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  TaxaOcupacao,
  LosH,
  TempoEsperaMin,
  Readmissao30d,
  Nps,
  ReceitaTotal,
  MargemTotal,
  Co2Pico,
  EnergiaPicoKw,
  TempMedia,
  UmiMedia,
  O2Medio,
}

impl Field {
  pub const ALL: [Field; 12] = [
    Field::TaxaOcupacao,
    Field::LosH,
    Field::TempoEsperaMin,
    Field::Readmissao30d,
    Field::Nps,
    Field::ReceitaTotal,
    Field::MargemTotal,
    Field::Co2Pico,
    Field::EnergiaPicoKw,
    Field::TempMedia,
    Field::UmiMedia,
    Field::O2Medio,
  ];

  /// JSON key of the field.
  pub fn key(self) -> &'static str {
    match self {
      Self::TaxaOcupacao => "taxa_ocupacao",
      Self::LosH => "los_h",
      Self::TempoEsperaMin => "tempo_espera_min",
      Self::Readmissao30d => "readmissao_30d",
      Self::Nps => "nps",
      Self::ReceitaTotal => "receita_total",
      Self::MargemTotal => "margem_total",
      Self::Co2Pico => "co2_pico",
      Self::EnergiaPicoKw => "energia_pico_kw",
      Self::TempMedia => "temp_media",
      Self::UmiMedia => "umi_media",
      Self::O2Medio => "o2_medio",
    }
  }
}

/// Canonical estimates used when no KPI data is supplied. Built once, never mutated.
static DEFAULT_KPIS: LazyLock<Map<String, Value>> = LazyLock::new(|| {
  let defaults = json!({
    "taxa_ocupacao": 0.87,
    "los_h": 26.4,
    "tempo_espera_min": 32,
    "readmissao_30d": 0.12,
    "nps": 74,
    "receita_total": 1580000.00,
    "margem_total": 247800.00,
    "co2_pico": 1394,
    "energia_pico_kw": 3.29,
    "temp_media": 24.2,
    "umi_media": 48.0,
    "o2_medio": 95.0
  });
  match defaults {
    Value::Object(map) => map,
    _ => Map::new(),
  }
});

/// Result of looking up one KPI field.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
  /// Key missing or explicitly null.
  Absent,
  /// A JSON number, or a string holding a finite decimal number.
  Number(f64),
  /// Present but not usable as a number.
  Other(Value),
}

impl Metric {
  pub fn from_value(value: Option<&Value>) -> Self {
    match value {
      None | Some(Value::Null) => Self::Absent,
      Some(Value::Number(n)) => match n.as_f64() {
        Some(v) => Self::Number(v),
        None => Self::Other(Value::Number(n.clone())),
      },
      Some(Value::String(s)) => match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Self::Number(v),
        _ => Self::Other(Value::String(s.clone())),
      },
      Some(other) => Self::Other(other.clone()),
    }
  }

  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Self::Number(v) => Some(*v),
      _ => None,
    }
  }

  /// Numeric value for arithmetic formatting; anything non-numeric counts as zero.
  pub fn or_zero(&self) -> f64 {
    self.as_f64().unwrap_or(0.0)
  }

  pub fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }
}

/// Resolved KPI map handed to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis(Map<String, Value>);

impl Kpis {
  pub fn defaults() -> Self {
    Self(DEFAULT_KPIS.clone())
  }

  pub fn metric(&self, field: Field) -> Metric {
    Metric::from_value(self.0.get(field.key()))
  }

  /// Raw JSON for pass-through output; absent fields become null.
  pub fn raw(&self, field: Field) -> Value {
    self.0.get(field.key()).cloned().unwrap_or(Value::Null)
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.0
  }
}

/// Use the supplied KPI object as-is when it has entries; otherwise the
/// canonical defaults. Partial maps are not back-filled.
pub fn resolve_kpis(candidate: Option<&Value>) -> Kpis {
  match candidate {
    Some(Value::Object(map)) if !map.is_empty() => Kpis(map.clone()),
    _ => {
      tracing::debug!("no usable kpis supplied, substituting canonical defaults");
      Kpis::defaults()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_or_empty_kpis_resolve_to_defaults() {
    let expected = Kpis::defaults();
    assert_eq!(resolve_kpis(None), expected);
    assert_eq!(resolve_kpis(Some(&json!({}))), expected);
    assert_eq!(resolve_kpis(Some(&json!([1, 2]))), expected);
    assert_eq!(resolve_kpis(Some(&json!("kpis"))), expected);
    assert_eq!(resolve_kpis(Some(&Value::Null)), expected);
  }

  #[test]
  fn defaults_hold_canonical_values() {
    let k = Kpis::defaults();
    assert_eq!(k.as_map().len(), Field::ALL.len());
    assert_eq!(k.metric(Field::TaxaOcupacao), Metric::Number(0.87));
    assert_eq!(k.metric(Field::LosH), Metric::Number(26.4));
    assert_eq!(k.metric(Field::TempoEsperaMin), Metric::Number(32.0));
    assert_eq!(k.metric(Field::Readmissao30d), Metric::Number(0.12));
    assert_eq!(k.metric(Field::Nps), Metric::Number(74.0));
    assert_eq!(k.metric(Field::ReceitaTotal), Metric::Number(1_580_000.0));
    assert_eq!(k.metric(Field::MargemTotal), Metric::Number(247_800.0));
    assert_eq!(k.metric(Field::Co2Pico), Metric::Number(1394.0));
    assert_eq!(k.metric(Field::EnergiaPicoKw), Metric::Number(3.29));
    assert_eq!(k.metric(Field::TempMedia), Metric::Number(24.2));
    assert_eq!(k.metric(Field::UmiMedia), Metric::Number(48.0));
    assert_eq!(k.metric(Field::O2Medio), Metric::Number(95.0));
  }

  #[test]
  fn partial_map_is_not_back_filled() {
    let supplied = json!({"nps": 80});
    let k = resolve_kpis(Some(&supplied));
    assert_eq!(k.as_map().len(), 1);
    assert_eq!(k.metric(Field::Nps), Metric::Number(80.0));
    assert!(k.metric(Field::TaxaOcupacao).is_absent());
    assert_eq!(k.raw(Field::Co2Pico), Value::Null);
  }

  #[test]
  fn metric_distinguishes_zero_null_and_garbage() {
    assert_eq!(Metric::from_value(Some(&json!(0))), Metric::Number(0.0));
    assert_eq!(Metric::from_value(Some(&Value::Null)), Metric::Absent);
    assert_eq!(Metric::from_value(Some(&json!(" 0.5 "))), Metric::Number(0.5));
    assert_eq!(Metric::from_value(Some(&json!("abc"))), Metric::Other(json!("abc")));
    assert_eq!(Metric::from_value(Some(&json!(true))).or_zero(), 0.0);
  }
}
