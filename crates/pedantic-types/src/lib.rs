//! Project model audited by pedantic.
//!
//! The audit never depends on a concrete host. It reads names through
//! the traits in [`source`]:
//!
//! | Trait | Provides |
//! |-------|----------|
//! | [`PipelineSource`] | scope names, pipeline names per scope |
//! | [`SchemaSource`] | node and relationship [`Shape`]s |
//! | [`ProjectSource`] | both of the above |
//!
//! [`Project`] is the file-backed implementation used by the CLI.
//!
//! # Example
//!
//! ```
//! use pedantic_types::{
//!     GraphObjectShape, GraphSchema, PipelineDefinition, PipelineSource, Project, Scope,
//! };
//!
//! let project = Project::new()
//!     .with_scope(Scope::new("default").with_pipeline(PipelineDefinition::new("load-people")))
//!     .with_schema(GraphSchema::new().with_shape(GraphObjectShape::node("Person", ["name"])));
//!
//! assert_eq!(project.pipeline_names("default"), vec!["load-people"]);
//! ```

#![forbid(unsafe_code)]

mod error;
mod project;
mod schema;
pub mod source;

pub use error::{assert_error_code, ErrorCode, ModelError};
pub use project::{PipelineDefinition, Project, Scope};
pub use schema::{GraphObjectShape, GraphObjectType, GraphSchema};
pub use source::{PipelineSource, ProjectSource, SchemaSource, Shape};
