use crate::source::{SchemaSource, Shape};
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Whether a shape describes nodes or relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphObjectType {
    Node,
    Relationship,
}

impl std::fmt::Display for GraphObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Relationship => write!(f, "relationship"),
        }
    }
}

/// One node or relationship type and the properties seen on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphObjectShape {
    pub object_type: GraphObjectType,
    pub type_name: String,
    pub properties: BTreeSet<String>,
}

impl GraphObjectShape {
    #[must_use]
    pub fn node<I, S>(type_name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(GraphObjectType::Node, type_name, properties)
    }

    #[must_use]
    pub fn relationship<I, S>(type_name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(GraphObjectType::Relationship, type_name, properties)
    }

    #[must_use]
    pub fn new<I, S>(object_type: GraphObjectType, type_name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            object_type,
            type_name: type_name.into(),
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.object_type == other.object_type && self.type_name == other.type_name
    }
}

impl Shape for GraphObjectShape {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(String::as_str).collect()
    }
}

/// The set of known shapes of a project.
///
/// Shapes are unique per `(object_type, type_name)`; adding a shape that
/// already exists merges its properties into the existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "SchemaManifest")]
pub struct GraphSchema {
    shapes: Vec<GraphObjectShape>,
}

impl GraphSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: GraphObjectShape) {
        if let Some(existing) = self.shapes.iter_mut().find(|s| s.is_same_type(&shape)) {
            debug!(
                kind = %shape.object_type,
                type_name = %shape.type_name,
                "Merging duplicate shape"
            );
            existing.properties.extend(shape.properties);
        } else {
            self.shapes.push(shape);
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: GraphObjectShape) -> Self {
        self.add_shape(shape);
        self
    }

    pub fn known_node_types(&self) -> impl Iterator<Item = &GraphObjectShape> {
        self.of_type(GraphObjectType::Node)
    }

    pub fn known_relationship_types(&self) -> impl Iterator<Item = &GraphObjectShape> {
        self.of_type(GraphObjectType::Relationship)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn of_type(&self, object_type: GraphObjectType) -> impl Iterator<Item = &GraphObjectShape> {
        self.shapes
            .iter()
            .filter(move |s| s.object_type == object_type)
    }
}

impl FromIterator<GraphObjectShape> for GraphSchema {
    fn from_iter<T: IntoIterator<Item = GraphObjectShape>>(iter: T) -> Self {
        let mut schema = Self::new();
        for shape in iter {
            schema.add_shape(shape);
        }
        schema
    }
}

impl SchemaSource for GraphSchema {
    fn node_shapes(&self) -> Vec<&dyn Shape> {
        self.known_node_types().map(|s| s as &dyn Shape).collect()
    }

    fn relationship_shapes(&self) -> Vec<&dyn Shape> {
        self.known_relationship_types()
            .map(|s| s as &dyn Shape)
            .collect()
    }
}

/// On-disk form of the schema section of a project manifest.
#[derive(Debug, Default, Deserialize)]
struct SchemaManifest {
    #[serde(default)]
    nodes: Vec<ShapeManifest>,

    #[serde(default)]
    relationships: Vec<ShapeManifest>,
}

#[derive(Debug, Deserialize)]
struct ShapeManifest {
    #[serde(rename = "type")]
    type_name: String,

    #[serde(default)]
    properties: Vec<String>,
}

impl From<SchemaManifest> for GraphSchema {
    fn from(manifest: SchemaManifest) -> Self {
        let nodes = manifest
            .nodes
            .into_iter()
            .map(|n| GraphObjectShape::node(n.type_name, n.properties));
        let relationships = manifest
            .relationships
            .into_iter()
            .map(|r| GraphObjectShape::relationship(r.type_name, r.properties));
        nodes.chain(relationships).collect()
    }
}
