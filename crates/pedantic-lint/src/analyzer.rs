use crate::audit::{Audit, AuditSettings, PedanticAudit};
use crate::config::{Config, ConfigError};
use crate::printer::AuditPrinter;
use crate::rules::Rule;
use crate::types::AuditReport;

use pedantic_types::{ErrorCode, ModelError, Project};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Project error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown rule: {0} (see `pedantic-lint list-rules`)")]
    UnknownRule(String),
}

impl ErrorCode for AnalyzerError {
    fn code(&self) -> &'static str {
        match self {
            Self::Model(_) => "ANALYZER_MODEL",
            Self::Config(_) => "ANALYZER_CONFIG",
            Self::UnknownRule(_) => "ANALYZER_UNKNOWN_RULE",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Model(e) => e.is_recoverable(),
            Self::Config(e) => e.is_recoverable(),
            Self::UnknownRule(_) => false,
        }
    }
}

/// Loads a project manifest and runs the pedantic audit over it.
pub struct Analyzer {
    project_path: PathBuf,
    config: Config,
    rule_filter: Option<String>,
}

impl Analyzer {
    #[must_use]
    pub fn new(project_path: PathBuf, config: Config) -> Self {
        Self {
            project_path,
            config,
            rule_filter: None,
        }
    }

    #[must_use]
    pub fn with_rule_filter(mut self, filter: Option<&str>) -> Self {
        self.rule_filter = filter.map(String::from);
        self
    }

    pub async fn analyze<W: AuditPrinter + Send>(
        &self,
        printer: W,
    ) -> Result<AuditReport, AnalyzerError> {
        info!(path = %self.project_path.display(), "Starting analysis");

        let only = self
            .rule_filter
            .as_deref()
            .map(|name| Rule::from_name(name).ok_or_else(|| AnalyzerError::UnknownRule(name.to_string())))
            .transpose()?;
        if let Some(rule) = only {
            debug!(%rule, "Running a single rule");
        }

        let settings = AuditSettings::from_config(&self.config, only)?;
        let project = Project::from_file(&self.project_path)?;

        let mut audit = PedanticAudit::with_settings(printer, settings);
        audit.run(&project).await;
        let report = audit.into_report();

        info!(
            violations = report.violations.len(),
            names = report.names_checked,
            "Analysis complete"
        );
        Ok(report)
    }
}
