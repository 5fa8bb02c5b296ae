pub mod node_type;
pub mod pipeline_name;
pub mod property_case;
pub mod relationship_type;

use crate::conventions::Conformance;
use crate::inflection::Inflector;
use crate::types::EntityKind;

/// Every rule: (name, description)
pub const ALL_RULES: &[(&str, &str)] = &[
    (property_case::NAME, property_case::DESCRIPTION),
    (node_type::CAMEL_CASE_NAME, node_type::CAMEL_CASE_DESCRIPTION),
    (node_type::SINGULAR_NAME, node_type::SINGULAR_DESCRIPTION),
    (relationship_type::NAME, relationship_type::DESCRIPTION),
    (pipeline_name::NAME, pipeline_name::DESCRIPTION),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    PropertySnakeCase,
    NodeCamelCase,
    NodeSingular,
    RelationshipUpperSnakeCase,
    PipelineLowerDashCase,
}

impl Rule {
    pub const ALL: [Self; 5] = [
        Self::PropertySnakeCase,
        Self::NodeCamelCase,
        Self::NodeSingular,
        Self::RelationshipUpperSnakeCase,
        Self::PipelineLowerDashCase,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PropertySnakeCase => property_case::NAME,
            Self::NodeCamelCase => node_type::CAMEL_CASE_NAME,
            Self::NodeSingular => node_type::SINGULAR_NAME,
            Self::RelationshipUpperSnakeCase => relationship_type::NAME,
            Self::PipelineLowerDashCase => pipeline_name::NAME,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    #[must_use]
    pub fn kind(self) -> EntityKind {
        match self {
            Self::PropertySnakeCase => EntityKind::Property,
            Self::NodeCamelCase | Self::NodeSingular => EntityKind::NodeType,
            Self::RelationshipUpperSnakeCase => EntityKind::RelationshipType,
            Self::PipelineLowerDashCase => EntityKind::Pipeline,
        }
    }

    #[must_use]
    pub fn check(self, name: &str, inflector: &Inflector) -> Conformance {
        match self {
            Self::PropertySnakeCase => property_case::check(name),
            Self::NodeCamelCase => node_type::check_camel(name),
            Self::NodeSingular => node_type::check_singular(name, inflector),
            Self::RelationshipUpperSnakeCase => relationship_type::check(name),
            Self::PipelineLowerDashCase => pipeline_name::check(name),
        }
    }

    #[must_use]
    pub fn message(self, name: &str, expected: &str) -> String {
        match self {
            Self::PropertySnakeCase => property_case::message(name, expected),
            Self::NodeCamelCase => node_type::camel_case_message(name, expected),
            Self::NodeSingular => node_type::singular_message(name, expected),
            Self::RelationshipUpperSnakeCase => relationship_type::message(name, expected),
            Self::PipelineLowerDashCase => pipeline_name::message(name, expected),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
