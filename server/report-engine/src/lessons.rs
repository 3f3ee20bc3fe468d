//! Lessons-learned document: fixed sections, some lines gated on KPI thresholds.

use chrono::NaiveDate;

use crate::config::Config;
use crate::kpis::{resolve_kpis, Field, Kpis};
use crate::normalize::Record;
use crate::types::LessonsReport;

const HEADING: &str = "LIÇÕES APRENDIDAS — Smart Hospital 4.0";

const STABLE_BEDS: &str = "- Gestão de leitos estável durante o período.";
const DELIVERED_FEATURES: &str = "- Funcionalidades entregues que apoiam a análise: US-10 (Resumo Executivo via IA) e US-11 (Integração com BI).";
const POSITIVE_MARGIN: &str = "- Margem financeira positiva, indicando sustentabilidade operacional.";

const CRITICAL_OCCUPANCY: &str = "- Ocupação crítica dos leitos (riscos de superlotação). Recomendado priorizar medidas de fluxo e alta assistida.";
const HIGH_WAIT_TIME: &str = "- Tempos de espera elevados no pronto atendimento; revisar protocolos de triagem rápida.";
const HIGH_READMISSION: &str = "- Readmissão acima do esperado; revisar processos de alta segura e follow-up.";
const ENERGY_OSCILLATION: &str = "- Oscilações energéticas e picos que podem indicar ineficiência no controle do HVAC (ver US-05 e US-08).";

/// A titled block of lines, rendered with a trailing blank separator.
#[derive(Debug, Clone, PartialEq)]
struct Section {
  title: &'static str,
  lines: Vec<&'static str>,
}

impl Section {
  fn new(title: &'static str, lines: Vec<&'static str>) -> Self {
    Self { title, lines }
  }

  fn render(&self) -> Vec<String> {
    std::iter::once(self.title)
      .chain(self.lines.iter().copied())
      .chain(std::iter::once(""))
      .map(String::from)
      .collect()
  }
}

/// Build the lessons-learned document for a normalized record.
pub fn render_lessons(record: &Record, config: &Config, today: NaiveDate) -> LessonsReport {
  let periodo = record.periodo_or(today);
  let kpis = resolve_kpis(record.kpis());

  let header = vec![
    HEADING.to_string(),
    format!("Período analisado: {}", periodo),
    String::new(),
  ];

  let sections = [
    strengths(&kpis, config),
    attention_points(&kpis, config),
    technical_lessons(),
    improvements(),
    next_steps(),
  ];

  let lines: Vec<String> = header
    .into_iter()
    .chain(sections.iter().flat_map(Section::render))
    .chain(conclusion().map(String::from))
    .collect();

  LessonsReport {
    licoes: lines.join("\n"),
  }
}

fn strengths(kpis: &Kpis, config: &Config) -> Section {
  let occupancy = kpis.metric(Field::TaxaOcupacao).or_zero();
  let margin = kpis.metric(Field::MargemTotal).as_f64();

  let lines = [
    (occupancy < config.stable_occupancy_below).then_some(STABLE_BEDS),
    Some(DELIVERED_FEATURES),
    margin.is_some_and(|m| m > 0.0).then_some(POSITIVE_MARGIN),
  ];
  Section::new("1) Pontos Fortes", lines.into_iter().flatten().collect())
}

fn attention_points(kpis: &Kpis, config: &Config) -> Section {
  let occupancy = kpis.metric(Field::TaxaOcupacao).or_zero();
  let wait = kpis.metric(Field::TempoEsperaMin).or_zero();
  let readmission = kpis.metric(Field::Readmissao30d).or_zero();

  let lines = [
    (occupancy > config.critical_occupancy_above).then_some(CRITICAL_OCCUPANCY),
    (wait > config.wait_time_alert_minutes).then_some(HIGH_WAIT_TIME),
    (readmission > config.readmission_alert_above).then_some(HIGH_READMISSION),
    Some(ENERGY_OSCILLATION),
  ];
  Section::new("2) Pontos de Atenção", lines.into_iter().flatten().collect())
}

fn technical_lessons() -> Section {
  Section::new(
    "3) Lições Técnicas",
    vec![
      "- Dados IoT necessitam de filtragem e normalização para evitar alertas falsos (implementar debounce e smoothing).",
      "- Integração precoce com BI (US-11) acelerou a validação de hipóteses e permitiu correlacionar métricas operacionais com consumo.",
    ],
  )
}

fn improvements() -> Section {
  Section::new(
    "4) Oportunidades de Melhoria (priorizadas)",
    vec![
      " - Prioridade alta: Implementar US-08 (Automação HVAC por Zona) para reduzir picos energéticos e melhorar conforto.",
      " - Prioridade média: Aperfeiçoar monitoramento de CO₂ (US-04) e pipeline de ingestão para precisão.",
      " - Prioridade baixa: Expansão de telemetria por leito (US-07) para análise clínica integrada.",
    ],
  )
}

fn next_steps() -> Section {
  Section::new(
    "5) Próximos Passos",
    vec![
      "- Formalizar roadmap com responsáveis e entregáveis para US-08, US-05, US-04.",
      "- Definir métricas de sucesso (redução % de picos, queda média de consumo, NPS).",
      "- Agendar validação pós-implementação com stakeholders clínicos e de facilities.",
    ],
  )
}

// Last block: no trailing separator.
fn conclusion() -> [&'static str; 2] {
  [
    "Conclusão",
    "A coordenação entre tecnologia, operação e assistência é determinante. As implementações já concluídas (US-10 e US-11) forneceram ferramentas analíticas valiosas; priorizar automações e monitoramento avançado ampliará ganhos operacionais e qualidade assistencial.",
  ]
}
