//! Naming-convention audit for graph schemas and pipeline definitions.
//!
//! Every name in a project is checked against the convention for its kind:
//!
//! | Rule | Applies to | Convention |
//! |------|------------|------------|
//! | `property-snake-case` | node and relationship properties | `name_of_person` |
//! | `node-camel-case` | node types | `Person` |
//! | `node-singular` | node types | `Person`, not `People` |
//! | `relationship-upper-snake-case` | relationship types | `BEST_FRIEND_OF` |
//! | `pipeline-lower-dash-case` | pipeline names | `load-people` |
//!
//! Rules can be disabled, downgraded or given allow lists in
//! `pedantic.toml` (see [`config`]).
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pedantic-lint -- check pedantic-project.toml
//! ```

#![forbid(unsafe_code)]

pub mod allowance;
pub mod analyzer;
pub mod audit;
pub mod config;
pub mod conventions;
pub mod inflection;
pub mod printer;
pub mod rules;
pub mod types;

pub use analyzer::Analyzer;
pub use audit::{Audit, AuditSettings, PedanticAudit};
pub use config::Config;
pub use printer::{AuditPrinter, RecordingPrinter, TerminalPrinter};
pub use types::{AuditReport, Severity, Violation};
