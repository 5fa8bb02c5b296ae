use crate::error::ModelError;
use crate::schema::GraphSchema;
use crate::source::{PipelineSource, ProjectSource, SchemaSource};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A named pipeline registered in a scope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipelineDefinition {
    pub name: String,

    /// Location of the pipeline file, when the manifest records one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl PipelineDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// A named group of pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scope {
    pub name: String,

    #[serde(default)]
    pub pipelines: Vec<PipelineDefinition>,
}

impl Scope {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pipelines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pipeline(mut self, pipeline: PipelineDefinition) -> Self {
        self.pipelines.push(pipeline);
        self
    }
}

/// File-backed project: scopes of pipelines plus the schema they produce.
///
/// # Manifest
///
/// ```toml
/// [[scopes]]
/// name = "default"
///
/// [[scopes.pipelines]]
/// name = "load-people"
/// path = "pipelines/people.yaml"
///
/// [[schema.nodes]]
/// type = "Person"
/// properties = ["name", "age"]
///
/// [[schema.relationships]]
/// type = "KNOWS"
/// properties = ["since"]
/// ```
///
/// Scope names are unique; a scope listed twice is merged into the first
/// occurrence, keeping its position and appending the later pipelines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ProjectManifest")]
pub struct Project {
    scopes: Vec<Scope>,
    pub schema: GraphSchema,
}

impl Project {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scope(&mut self, scope: Scope) {
        if let Some(existing) = self.scopes.iter_mut().find(|s| s.name == scope.name) {
            debug!(scope = %scope.name, "Merging duplicate scope");
            existing.pipelines.extend(scope.pipelines);
        } else {
            self.scopes.push(scope);
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.add_scope(scope);
        self
    }

    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[must_use]
    pub fn with_schema(mut self, schema: GraphSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Loads a manifest, choosing TOML or JSON by file extension.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            ModelError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let project = format.parse(&content).map_err(|message| ModelError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        debug!(
            path = %path.display(),
            scopes = project.scopes.len(),
            shapes = project.schema.len(),
            "Loaded project manifest"
        );
        Ok(project)
    }

    fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.name == name)
    }
}

impl PipelineSource for Project {
    fn scope_names(&self) -> Vec<&str> {
        self.scopes.iter().map(|s| s.name.as_str()).collect()
    }

    fn pipeline_names(&self, scope: &str) -> Vec<&str> {
        self.scope(scope).map_or_else(Vec::new, |s| {
            s.pipelines.iter().map(|p| p.name.as_str()).collect()
        })
    }
}

impl ProjectSource for Project {
    fn schema(&self) -> &dyn SchemaSource {
        &self.schema
    }
}

/// On-disk form of a project manifest, before scopes are merged.
#[derive(Debug, Default, Deserialize)]
struct ProjectManifest {
    #[serde(default)]
    scopes: Vec<Scope>,

    #[serde(default)]
    schema: GraphSchema,
}

impl From<ProjectManifest> for Project {
    fn from(manifest: ProjectManifest) -> Self {
        let mut project = Self::new().with_schema(manifest.schema);
        for scope in manifest.scopes {
            project.add_scope(scope);
        }
        project
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> Result<Project, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::schema::GraphObjectShape;
    use std::io::Write;

    const MANIFEST: &str = r#"
[[scopes]]
name = "default"

[[scopes.pipelines]]
name = "load-people"
path = "pipelines/people.yaml"

[[scopes.pipelines]]
name = "load_orgs"

[[scopes]]
name = "empty"

[[schema.nodes]]
type = "Person"
properties = ["name", "age"]

[[schema.relationships]]
type = "KNOWS"
properties = ["since"]
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn pipeline_source_lists_scopes_in_order() {
        let project: Project = toml::from_str(MANIFEST).expect("parse failed");
        assert_eq!(project.scope_names(), vec!["default", "empty"]);
        assert_eq!(
            project.pipeline_names("default"),
            vec!["load-people", "load_orgs"]
        );
        assert!(project.pipeline_names("empty").is_empty());
        assert!(project.pipeline_names("missing").is_empty());
    }

    #[test]
    fn pipeline_path_is_optional() {
        let project: Project = toml::from_str(MANIFEST).expect("parse failed");
        let default = &project.scopes()[0];
        assert_eq!(
            default.pipelines[0].path,
            Some(PathBuf::from("pipelines/people.yaml"))
        );
        assert_eq!(default.pipelines[1].path, None);
    }

    #[test]
    fn schema_is_exposed_through_project_source() {
        let project: Project = toml::from_str(MANIFEST).expect("parse failed");
        let schema = ProjectSource::schema(&project);
        assert_eq!(schema.node_shapes().len(), 1);
        assert_eq!(schema.relationship_shapes().len(), 1);
    }

    #[test]
    fn load_toml_file() {
        let file = write_temp(".toml", MANIFEST);
        let project = Project::from_file(file.path()).expect("load failed");
        assert_eq!(project.scopes().len(), 2);
        assert_eq!(project.schema.len(), 2);
    }

    #[test]
    fn load_json_file() {
        let json = r#"{
            "scopes": [{"name": "default", "pipelines": [{"name": "load-people"}]}],
            "schema": {"nodes": [{"type": "Person", "properties": ["name"]}]}
        }"#;
        let file = write_temp(".json", json);
        let project = Project::from_file(file.path()).expect("load failed");
        assert_eq!(project.pipeline_names("default"), vec!["load-people"]);
        assert_eq!(project.schema.len(), 1);
    }

    #[test]
    fn empty_manifest_is_an_empty_project() {
        let project: Project = toml::from_str("").expect("parse failed");
        assert_eq!(project, Project::new());
    }

    #[test]
    fn unsupported_extension() {
        let file = write_temp(".yaml", "scopes: []");
        let err = Project::from_file(file.path()).expect_err("yaml is not supported");
        assert_eq!(err.code(), "MODEL_UNSUPPORTED_FORMAT");
    }

    #[test]
    fn missing_file() {
        let err = Project::from_file(Path::new("/nonexistent/project.toml"))
            .expect_err("file does not exist");
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn malformed_manifest() {
        let file = write_temp(".toml", "[[scopes]]\nname = 3\n");
        let err = Project::from_file(file.path()).expect_err("name must be a string");
        assert!(matches!(err, ModelError::Parse { .. }));
    }

    #[test]
    fn builder_matches_manifest() {
        let built = Project::new()
            .with_scope(
                Scope::new("default")
                    .with_pipeline(
                        PipelineDefinition::new("load-people").with_path("pipelines/people.yaml"),
                    )
                    .with_pipeline(PipelineDefinition::new("load_orgs")),
            )
            .with_scope(Scope::new("empty"))
            .with_schema(
                GraphSchema::new()
                    .with_shape(GraphObjectShape::node("Person", ["name", "age"]))
                    .with_shape(GraphObjectShape::relationship("KNOWS", ["since"])),
            );
        let parsed: Project = toml::from_str(MANIFEST).expect("parse failed");
        assert_eq!(built, parsed);
    }

    #[test]
    fn duplicate_scopes_are_merged() {
        let manifest = r#"
[[scopes]]
name = "default"

[[scopes.pipelines]]
name = "bad_one"

[[scopes]]
name = "other"

[[scopes]]
name = "default"

[[scopes.pipelines]]
name = "bad_two"
"#;
        let project: Project = toml::from_str(manifest).expect("parse failed");
        assert_eq!(project.scope_names(), vec!["default", "other"]);
        assert_eq!(project.pipeline_names("default"), vec!["bad_one", "bad_two"]);
    }

    #[test]
    fn builder_merges_duplicate_scopes() {
        let project = Project::new()
            .with_scope(Scope::new("default").with_pipeline(PipelineDefinition::new("bad_one")))
            .with_scope(Scope::new("default").with_pipeline(PipelineDefinition::new("bad_two")));
        assert_eq!(project.scopes().len(), 1);
        assert_eq!(project.pipeline_names("default"), vec!["bad_one", "bad_two"]);
    }
}
