//! Core engine: normalizes raw input and dispatches to the selected renderer.

use chrono::NaiveDate;

use crate::config::Config;
use crate::lessons;
use crate::normalize;
use crate::report;
use crate::types::{Action, RenderResult};

/// The report engine. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Process one raw input blob. Total: every input yields a result.
  ///
  /// `today` is the fallback period when the input carries none.
  pub fn process(&self, action: Action, raw: &str, today: NaiveDate) -> RenderResult {
    let record = normalize::normalize(raw);
    tracing::debug!(action = action.as_str(), "rendering");

    match action {
      Action::GenerateReport => {
        RenderResult::Report(report::render_report(&record, &self.config, today))
      }
      Action::GenerateLessons => {
        RenderResult::Lessons(lessons::render_lessons(&record, &self.config, today))
      }
    }
  }
}
