//! Status report: KPI summary, analytical observations and an actionable insight.

use chrono::NaiveDate;

use crate::config::Config;
use crate::format;
use crate::kpis::{resolve_kpis, Field, Kpis, Metric};
use crate::normalize::Record;
use crate::types::{PayloadKpis, ReportPayload, StatusReport};

/// Marker for optional readings that are not available.
pub const NOT_AVAILABLE: &str = "N/D";

const TITLE: &str = "Correlação: Entrega de Feature vs. Consumo de Energia";
const SUBTITLE: &str =
  "Análise do impacto das entregas relevantes do backlog (ex.: US-05, US-04, US-08).";

const SUMMARY: &str = "A correlação entre consumo energético, CO₂ e acionamento do HVAC é robusta nos dados analisados — há oportunidade de reduzir picos e aumentar eficiência ao priorizar automações e controles descritos nas User Stories referenciadas.";

const ACTIONABLE_INSIGHT: &str = "Insight Acionável: Priorizar a implementação completa da User Story 'US-08' (Automação HVAC por Zona)\n\
pode reduzir picos energéticos observados, estabilizar a carga térmica e melhorar a qualidade do ar. \
Combinar ações da 'US-04' (Monitoramento de CO₂) e 'US-05' (Visão de Consumo de Energia) permitirá validar ganhos e mensurar ROI.\n\
Adicionalmente, as entregas já realizadas (US-10 e US-11) auxiliam na visualização dos resultados e na integração com BI para acompanhamento.";

/// One analytical observation: heading, data-driven reading, fixed interpretation.
struct Observation {
  heading: &'static str,
  reading: String,
  interpretation: &'static str,
}

impl Observation {
  fn lines(self) -> Vec<String> {
    vec![
      self.heading.to_string(),
      self.reading,
      self.interpretation.to_string(),
      String::new(),
    ]
  }
}

/// Build the status report for a normalized record.
pub fn render_report(record: &Record, config: &Config, today: NaiveDate) -> StatusReport {
  let periodo = record.periodo_or(today);
  let kpis = resolve_kpis(record.kpis());

  let body = [
    header_lines(&periodo),
    kpi_summary_lines(&kpis, &config.currency_prefix),
    observation_lines(&kpis),
    summary_lines(),
  ]
  .concat();

  let relatorio = format!("{}\n\n{}\n", body.join("\n"), ACTIONABLE_INSIGHT);

  StatusReport {
    relatorio,
    payload: ReportPayload {
      periodo,
      kpis: payload_kpis(&kpis),
    },
  }
}

fn header_lines(periodo: &str) -> Vec<String> {
  vec![
    format!("Relatório de Status — {}", periodo),
    String::new(),
    TITLE.to_string(),
    SUBTITLE.to_string(),
    String::new(),
    "Data Storytelling: Conclusões".to_string(),
    String::new(),
  ]
}

fn kpi_summary_lines(kpis: &Kpis, currency_prefix: &str) -> Vec<String> {
  let num = |field: Field| kpis.metric(field).or_zero();
  vec![
    format!("- Ocupação média: {}", format::percent(num(Field::TaxaOcupacao))),
    format!("- LOS médio (h): {:.2}", num(Field::LosH)),
    format!("- Tempo de espera (min): {:.0}", num(Field::TempoEsperaMin)),
    format!("- Readmissão em 30d: {}", format::percent(num(Field::Readmissao30d))),
    format!("- NPS (satisfação): {}", format::truncate(num(Field::Nps))),
    format!(
      "- Receita total: {}",
      format::currency(&kpis.metric(Field::ReceitaTotal), currency_prefix)
    ),
    format!(
      "- Margem total: {}",
      format::currency(&kpis.metric(Field::MargemTotal), currency_prefix)
    ),
    String::new(),
  ]
}

fn observation_lines(kpis: &Kpis) -> Vec<String> {
  let energy = Observation {
    heading: "1) Consumo de Energia (referência: US-05 — Visão de Consumo de Energia por Setor):",
    reading: match kpis.metric(Field::EnergiaPicoKw) {
      Metric::Number(kw) => format!(
        "   - Pico instantâneo registrado: {:.2} kW (amostras do iot_log).",
        kw
      ),
      _ => format!("   - Pico instantâneo registrado: {}", NOT_AVAILABLE),
    },
    interpretation: "   - Foram detectados picos energéticos seguidos de quedas, sugerindo ciclos de acionamento de equipamentos de alta potência.",
  };

  let air = Observation {
    heading: "2) Qualidade do ar (referência: US-04 — Monitoramento de CO₂):",
    reading: match kpis.metric(Field::Co2Pico) {
      Metric::Number(ppm) => format!(
        "   - Pico de CO₂ observado: {} ppm; variações registradas entre ~350 e 1400 ppm.",
        format::truncate(ppm)
      ),
      _ => format!("   - CO₂: {}", NOT_AVAILABLE),
    },
    interpretation: "   - Esses episódios coincidem com picos energéticos, indicando relação entre ocupação/ventilação e demanda de HVAC.",
  };

  let climate = Observation {
    heading: "3) Climatização (referência: US-08 — Automação HVAC por Zona):",
    reading: match kpis.metric(Field::TempMedia) {
      Metric::Number(celsius) => format!(
        "   - Temperatura média aproximada: {:.1}°C (faixa observada ~19.8°C–28.2°C).",
        celsius
      ),
      _ => format!("   - Temperatura: {}", NOT_AVAILABLE),
    },
    interpretation: "   - Ajustes constantes do HVAC foram identificados; automação por zona pode suavizar ciclos e reduzir picos.",
  };

  [
    vec!["Observações analíticas:".to_string()],
    energy.lines(),
    air.lines(),
    climate.lines(),
  ]
  .concat()
}

fn summary_lines() -> Vec<String> {
  vec!["Resumo:".to_string(), SUMMARY.to_string(), String::new()]
}

fn payload_kpis(kpis: &Kpis) -> PayloadKpis {
  let num = |field: Field| kpis.metric(field).or_zero();
  PayloadKpis {
    taxa_ocupacao: format::round_to(num(Field::TaxaOcupacao), 4),
    los_h: format::round_to(num(Field::LosH), 2),
    tempo_espera_min: format::round_to(num(Field::TempoEsperaMin), 0),
    readmissao_30d: format::round_to(num(Field::Readmissao30d), 4),
    nps: format::truncate(num(Field::Nps)),
    receita_total: format::round_to(num(Field::ReceitaTotal), 2),
    margem_total: format::round_to(num(Field::MargemTotal), 2),
    co2_pico: kpis.raw(Field::Co2Pico),
    energia_pico_kw: kpis.raw(Field::EnergiaPicoKw),
    temp_media: kpis.raw(Field::TempMedia),
    umi_media: kpis.raw(Field::UmiMedia),
    o2_medio: kpis.raw(Field::O2Medio),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::normalize::normalize;
  use serde_json::{json, Value};

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
  }

  fn render(raw: &str) -> StatusReport {
    render_report(&normalize(raw), &Config::default(), today())
  }

  #[test]
  fn defaults_render_full_kpi_summary() {
    let out = render("{}");
    let text = &out.relatorio;
    assert!(text.starts_with("Relatório de Status — 2025-10-15\n"));
    assert!(text.contains("- Ocupação média: 87%"));
    assert!(text.contains("- LOS médio (h): 26.40"));
    assert!(text.contains("- Tempo de espera (min): 32"));
    assert!(text.contains("- Readmissão em 30d: 12%"));
    assert!(text.contains("- NPS (satisfação): 74"));
    assert!(text.contains("- Receita total: R$ 1,580,000.00"));
    assert!(text.contains("- Margem total: R$ 247,800.00"));
    assert!(text.contains("Pico instantâneo registrado: 3.29 kW"));
    assert!(text.contains("Pico de CO₂ observado: 1394 ppm"));
    assert!(text.contains("Temperatura média aproximada: 24.2°C"));
    assert!(!text.contains(NOT_AVAILABLE));
    assert!(text.ends_with("integração com BI para acompanhamento.\n"));
  }

  #[test]
  fn sections_appear_in_fixed_order() {
    let text = render("{}").relatorio;
    let order = [
      "Data Storytelling: Conclusões",
      "- Ocupação média",
      "Observações analíticas:",
      "1) Consumo de Energia",
      "2) Qualidade do ar",
      "3) Climatização",
      "Resumo:",
      "Insight Acionável",
    ];
    let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
  }

  #[test]
  fn partial_kpis_render_missing_readings_as_not_available() {
    let out = render(r#"{"periodo":"Out/2025","kpis":{"nps":80}}"#);
    let text = &out.relatorio;
    assert!(text.starts_with("Relatório de Status — Out/2025\n"));
    assert!(text.contains("- NPS (satisfação): 80"));
    assert!(text.contains("- Ocupação média: 0%"));
    assert!(text.contains("- Receita total: R$ 0.00"));
    assert!(text.contains("   - Pico instantâneo registrado: N/D"));
    assert!(text.contains("   - CO₂: N/D"));
    assert!(text.contains("   - Temperatura: N/D"));
  }

  #[test]
  fn zero_reading_is_not_rendered_as_not_available() {
    let out = render(r#"{"kpis":{"energia_pico_kw":0,"co2_pico":0,"temp_media":0}}"#);
    assert!(out.relatorio.contains("Pico instantâneo registrado: 0.00 kW"));
    assert!(out.relatorio.contains("Pico de CO₂ observado: 0 ppm"));
    assert!(out.relatorio.contains("Temperatura média aproximada: 0.0°C"));
    assert!(!out.relatorio.contains(NOT_AVAILABLE));
  }

  #[test]
  fn non_numeric_currency_degrades_to_plain_text() {
    let out = render(r#"{"kpis":{"receita_total":"indisponível","margem_total":[1]}}"#);
    assert!(out.relatorio.contains("- Receita total: R$ indisponível"));
    assert!(out.relatorio.contains("- Margem total: R$ [1]"));
    assert_eq!(out.payload.kpis.receita_total, 0.0);
  }

  #[test]
  fn payload_rounds_and_passes_through() {
    let out = render(
      r#"{"kpis":{
        "taxa_ocupacao":0.876543,"los_h":26.456,"tempo_espera_min":31.6,
        "readmissao_30d":0.123456,"nps":73.9,"receita_total":1234.567,
        "margem_total":-10.005,"co2_pico":1394.7,"umi_media":"48"
      }}"#,
    );
    let k = &out.payload.kpis;
    assert_eq!(k.taxa_ocupacao, 0.8765);
    assert_eq!(k.los_h, 26.46);
    assert_eq!(k.tempo_espera_min, 32.0);
    assert_eq!(k.readmissao_30d, 0.1235);
    assert_eq!(k.nps, 73);
    assert_eq!(k.receita_total, 1234.57);
    assert_eq!(k.co2_pico, json!(1394.7));
    assert_eq!(k.umi_media, json!("48"));
    assert_eq!(k.energia_pico_kw, Value::Null);
    assert_eq!(k.o2_medio, Value::Null);
  }

  #[test]
  fn payload_echoes_periodo_and_defaults() {
    let out = render("");
    assert_eq!(out.payload.periodo, "2025-10-15");
    assert_eq!(out.payload.kpis.nps, 74);
    assert_eq!(out.payload.kpis.receita_total, 1_580_000.0);
    assert_eq!(out.payload.kpis.temp_media, json!(24.2));
  }

  #[test]
  fn custom_currency_prefix_is_used() {
    let config = Config {
      currency_prefix: "BRL".to_string(),
      ..Config::default()
    };
    let out = render_report(&Record::empty(), &config, today());
    assert!(out.relatorio.contains("- Receita total: BRL 1,580,000.00"));
  }
}
