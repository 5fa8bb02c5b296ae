//! The pedantic audit: walks a project's pipelines and schema and reports
//! names that break the naming conventions.
//!
//! # Walk order
//!
//! 1. Every pipeline of every scope (`pipeline-lower-dash-case`)
//! 2. Node shapes: type (`node-camel-case`, `node-singular`), then properties
//! 3. Relationship shapes: type (`relationship-upper-snake-case`), then properties
//!
//! Findings never stop the walk. A name that fails a check is added to the
//! failed set of its kind and one message is printed per failed check, so
//! a node type failing both node checks yields two messages and a single
//! set entry.

use crate::allowance::Allowance;
use crate::config::{Config, ConfigError};
use crate::inflection::Inflector;
use crate::printer::AuditPrinter;
use crate::rules::Rule;
use crate::types::{AuditReport, EntityKind, Severity, Subject, Violation};
use async_trait::async_trait;
use pedantic_types::{PipelineSource, ProjectSource, SchemaSource, Shape};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "Project has no pedantic issues";

/// An audit that can be run against any project.
#[async_trait]
pub trait Audit: Send {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    async fn run(&mut self, project: &(dyn ProjectSource + Sync));
}

#[derive(Debug, Clone)]
struct RuleSettings {
    enabled: bool,
    severity: Severity,
    allowance: Allowance,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Error,
            allowance: Allowance::default(),
        }
    }
}

/// Resolved per-rule behavior for one audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditSettings {
    rules: HashMap<Rule, RuleSettings>,
    excluded_scopes: Allowance,
    inflector: Inflector,
}

impl AuditSettings {
    /// Resolves `config`; when `only` is set, every other rule is disabled.
    pub fn from_config(config: &Config, only: Option<Rule>) -> Result<Self, ConfigError> {
        for name in config.rules.keys() {
            if Rule::from_name(name).is_none() {
                warn!(rule = %name, "Unknown rule in config, ignoring");
            }
        }

        let mut rules = HashMap::new();
        for rule in Rule::ALL {
            let allowance = Allowance::new(config.rule_allow(rule.name())).map_err(
                |(pattern, e)| ConfigError::InvalidPattern {
                    section: format!("rules.{rule}"),
                    pattern,
                    message: e.to_string(),
                },
            )?;
            let enabled =
                config.is_rule_enabled(rule.name()) && only.map_or(true, |only| only == rule);
            rules.insert(
                rule,
                RuleSettings {
                    enabled,
                    severity: config.rule_severity(rule.name()).unwrap_or(Severity::Error),
                    allowance,
                },
            );
        }

        let excluded_scopes = Allowance::new(&config.audit.exclude_scopes).map_err(
            |(pattern, e)| ConfigError::InvalidPattern {
                section: "audit.exclude_scopes".to_string(),
                pattern,
                message: e.to_string(),
            },
        )?;

        let mut inflector = Inflector::default();
        for word in &config.inflection.uncountable {
            inflector.add_uncountable(word);
        }
        for irregular in &config.inflection.irregular {
            inflector.add_irregular(&irregular.singular, &irregular.plural);
        }

        Ok(Self {
            rules,
            excluded_scopes,
            inflector,
        })
    }

    fn rule(&self, rule: Rule) -> RuleSettings {
        self.rules.get(&rule).cloned().unwrap_or_default()
    }
}

pub struct PedanticAudit<W> {
    printer: W,
    settings: AuditSettings,
    failed_properties: BTreeSet<String>,
    failed_node_types: BTreeSet<String>,
    failed_relationship_types: BTreeSet<String>,
    failed_pipelines: BTreeSet<String>,
    violations: Vec<Violation>,
    failure_count: usize,
    warning_count: usize,
    names_checked: usize,
}

impl<W: AuditPrinter> PedanticAudit<W> {
    /// Audit with every rule enabled at error severity.
    #[must_use]
    pub fn new(printer: W) -> Self {
        Self::with_settings(printer, AuditSettings::default())
    }

    #[must_use]
    pub fn with_settings(printer: W, settings: AuditSettings) -> Self {
        Self {
            printer,
            settings,
            failed_properties: BTreeSet::new(),
            failed_node_types: BTreeSet::new(),
            failed_relationship_types: BTreeSet::new(),
            failed_pipelines: BTreeSet::new(),
            violations: Vec::new(),
            failure_count: 0,
            warning_count: 0,
            names_checked: 0,
        }
    }

    #[must_use]
    pub fn failed_properties(&self) -> &BTreeSet<String> {
        &self.failed_properties
    }

    #[must_use]
    pub fn failed_node_types(&self) -> &BTreeSet<String> {
        &self.failed_node_types
    }

    #[must_use]
    pub fn failed_relationship_types(&self) -> &BTreeSet<String> {
        &self.failed_relationship_types
    }

    #[must_use]
    pub fn failed_pipelines(&self) -> &BTreeSet<String> {
        &self.failed_pipelines
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Findings reported at error severity.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Findings reported at warning or info severity.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[must_use]
    pub fn printer(&self) -> &W {
        &self.printer
    }

    #[must_use]
    pub fn into_report(self) -> AuditReport {
        AuditReport {
            violations: self.violations,
            failed_properties: self.failed_properties,
            failed_node_types: self.failed_node_types,
            failed_relationship_types: self.failed_relationship_types,
            failed_pipelines: self.failed_pipelines,
            names_checked: self.names_checked,
        }
    }

    pub fn check_property_names(&mut self, shape: &dyn Shape) {
        let owner = shape.type_name();
        for property in shape.property_names() {
            self.names_checked += 1;
            self.apply(Rule::PropertySnakeCase, property, Some(owner));
        }
    }

    pub fn check_node_type(&mut self, shape: &dyn Shape) {
        let node_type = shape.type_name();
        self.names_checked += 1;
        self.apply(Rule::NodeCamelCase, node_type, None);
        self.apply(Rule::NodeSingular, node_type, None);
    }

    pub fn check_relationship_type(&mut self, shape: &dyn Shape) {
        self.names_checked += 1;
        self.apply(Rule::RelationshipUpperSnakeCase, shape.type_name(), None);
    }

    pub fn check_pipeline_definition(&mut self, scope: &str, pipeline: &str) {
        self.names_checked += 1;
        self.apply(Rule::PipelineLowerDashCase, pipeline, Some(scope));
    }

    pub fn check_nodes<S: SchemaSource + ?Sized>(&mut self, schema: &S) {
        for shape in schema.node_shapes() {
            self.check_node_type(shape);
            self.check_property_names(shape);
        }
    }

    pub fn check_relationships<S: SchemaSource + ?Sized>(&mut self, schema: &S) {
        for shape in schema.relationship_shapes() {
            self.check_relationship_type(shape);
            self.check_property_names(shape);
        }
    }

    pub fn check_schema<S: SchemaSource + ?Sized>(&mut self, schema: &S) {
        self.check_nodes(schema);
        self.check_relationships(schema);
    }

    pub fn check_pipelines<P: PipelineSource + ?Sized>(&mut self, project: &P) {
        for scope in project.scope_names() {
            if self.settings.excluded_scopes.is_allowed(scope) {
                debug!(scope, "Scope excluded, skipping pipelines");
                continue;
            }
            for pipeline in project.pipeline_names(scope) {
                self.check_pipeline_definition(scope, pipeline);
            }
        }
    }

    /// Runs every check synchronously; [`Audit::run`] delegates here.
    pub fn audit<P: ProjectSource + ?Sized>(&mut self, project: &P) {
        info!("Starting pedantic audit");

        self.check_pipelines(project);
        self.check_schema(project.schema());

        if self.failure_count == 0 && self.warning_count == 0 {
            self.printer.print_success(SUCCESS_MESSAGE);
        }

        info!(
            failures = self.failure_count,
            warnings = self.warning_count,
            names = self.names_checked,
            "Audit complete"
        );
    }

    fn apply(&mut self, rule: Rule, name: &str, owner: Option<&str>) {
        let settings = self.settings.rule(rule);
        if !settings.enabled {
            return;
        }
        if settings.allowance.is_allowed(name) {
            debug!(%rule, name, "Name allowed by config");
            return;
        }

        let result = rule.check(name, &self.settings.inflector);
        if result.is_conformant {
            return;
        }

        let mut subject = Subject::new(rule.kind(), name);
        if let Some(owner) = owner {
            subject = subject.owned_by(owner);
        }
        let message = rule.message(name, &result.suggestion);
        debug!(%rule, %subject, suggestion = %result.suggestion, "Naming violation");

        let failed = match subject.kind {
            EntityKind::Property => &mut self.failed_properties,
            EntityKind::NodeType => &mut self.failed_node_types,
            EntityKind::RelationshipType => &mut self.failed_relationship_types,
            EntityKind::Pipeline => &mut self.failed_pipelines,
        };
        failed.insert(subject.name.clone());

        match settings.severity {
            Severity::Error => {
                self.failure_count += 1;
                self.printer.print_failure(&message);
            }
            Severity::Warning | Severity::Info => {
                self.warning_count += 1;
                self.printer.print_warning(&message);
            }
        }

        self.violations.push(Violation::new(
            rule.name(),
            settings.severity,
            subject,
            message,
            result.suggestion,
        ));
    }
}

#[async_trait]
impl<W: AuditPrinter + Send> Audit for PedanticAudit<W> {
    fn name(&self) -> &'static str {
        "pedantic"
    }

    fn description(&self) -> &'static str {
        "Checks for pedantic things about a project"
    }

    async fn run(&mut self, project: &(dyn ProjectSource + Sync)) {
        self.audit(project);
    }
}
