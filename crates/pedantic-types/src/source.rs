//! Read-only capabilities the audit needs from a host project.
//!
//! A host only has to expose names. Nothing here allows mutation, and no
//! host base type has to be extended: any struct that implements these
//! traits can be audited.

/// A node or relationship type together with its property names.
pub trait Shape {
    /// The type name (`"Person"`, `"KNOWS"`).
    fn type_name(&self) -> &str;

    /// Property names declared on this type.
    fn property_names(&self) -> Vec<&str>;
}

/// Enumerates the known node and relationship shapes of a graph schema.
pub trait SchemaSource {
    fn node_shapes(&self) -> Vec<&dyn Shape>;

    fn relationship_shapes(&self) -> Vec<&dyn Shape>;
}

/// Enumerates named scopes and the pipeline names registered in each.
pub trait PipelineSource {
    fn scope_names(&self) -> Vec<&str>;

    /// Pipeline names of `scope`. Unknown scopes yield an empty list.
    fn pipeline_names(&self, scope: &str) -> Vec<&str>;
}

/// A complete project: pipelines plus the schema they produce.
pub trait ProjectSource: PipelineSource {
    fn schema(&self) -> &dyn SchemaSource;
}
