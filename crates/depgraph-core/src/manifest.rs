//! TOML project manifests and the static resolver they describe.
//!
//! A manifest spells out a project hierarchy together with each project's
//! already-resolved dependencies:
//!
//! ```toml
//! [project]
//! coordinates = "com.example:parent:1.0"
//!
//! [[project.modules]]
//! coordinates = "com.example:a:1.0"
//! dependencies = [
//!     { coordinates = "org.lib:l1:2.0" },
//!     { coordinates = "org.lib:l2:1.1", scope = "test" },
//! ]
//! ```
//!
//! A dependency that names another project of the manifest and declares no
//! children of its own is expanded with that project's dependencies.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::trace;

use crate::artifact::{Artifact, Scope};
use crate::filter::ArtifactFilter;
use crate::project::{Project, ProjectId, ProjectTree};
use crate::resolver::DependencyResolver;
use crate::tree::DependencyTree;
use crate::{Error, ErrorKind, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    project: ProjectEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectEntry {
    coordinates: String,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
    #[serde(default)]
    modules: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyEntry {
    coordinates: String,
    scope: Option<String>,
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
}

/// A loaded manifest: the project hierarchy, its root and a resolver.
#[derive(Debug)]
pub struct Manifest {
    projects: ProjectTree,
    root: ProjectId,
    resolver: StaticResolver,
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("manifest::load")
                .with_context("path", path.display().to_string())
        })?;

        Self::parse(&text).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: ManifestFile = toml::from_str(text).map_err(|err| {
            Error::new(ErrorKind::DeserializationFailed, "invalid project manifest")
                .with_operation("manifest::parse")
                .set_source(err)
        })?;

        let mut builder = ManifestBuilder::default();
        let root = builder.add_project(None, &file.project)?;

        Ok(Self {
            projects: builder.projects,
            root,
            resolver: StaticResolver {
                declared: builder.declared,
                modules: builder.modules,
            },
        })
    }

    pub fn projects(&self) -> &ProjectTree {
        &self.projects
    }

    pub fn root(&self) -> ProjectId {
        self.root
    }

    pub fn resolver(&self) -> &StaticResolver {
        &self.resolver
    }

    pub fn into_parts(self) -> (ProjectTree, ProjectId, StaticResolver) {
        (self.projects, self.root, self.resolver)
    }
}

#[derive(Default)]
struct ManifestBuilder {
    projects: ProjectTree,
    declared: HashMap<ProjectId, Vec<DependencyTree>>,
    modules: HashMap<String, ProjectId>,
}

impl ManifestBuilder {
    fn add_project(&mut self, parent: Option<ProjectId>, entry: &ProjectEntry) -> Result<ProjectId> {
        let artifact =
            Artifact::parse(&entry.coordinates).map_err(|err| err.with_operation("manifest::parse"))?;
        let coordinates = artifact.coordinates();
        if self.modules.contains_key(&coordinates) {
            return Err(Error::config_invalid(format!(
                "project '{coordinates}' is declared more than once"
            ))
            .with_operation("manifest::parse")
            .with_context("project", coordinates));
        }

        let id = match parent {
            None => self.projects.add_root(artifact),
            Some(parent) => self.projects.add_module(parent, artifact)?,
        };
        self.modules.insert(coordinates, id);

        let dependencies = entry
            .dependencies
            .iter()
            .map(|dependency| dependency_tree(dependency, Scope::Compile))
            .collect::<Result<Vec<_>>>()?;
        self.declared.insert(id, dependencies);

        for module in &entry.modules {
            self.add_project(Some(id), module)?;
        }
        Ok(id)
    }
}

/// An undeclared scope is inherited from the enclosing dependency. Direct
/// dependencies of a project inherit compile.
fn dependency_tree(entry: &DependencyEntry, inherited: Scope) -> Result<DependencyTree> {
    let scope = entry
        .scope
        .as_deref()
        .map(Scope::parse)
        .transpose()
        .map_err(|err| err.with_operation("manifest::parse"))?
        .unwrap_or(inherited);
    let artifact = Artifact::parse(&entry.coordinates)
        .map_err(|err| err.with_operation("manifest::parse"))?
        .with_scope(scope);

    let children = entry
        .dependencies
        .iter()
        .map(|child| dependency_tree(child, scope))
        .collect::<Result<Vec<_>>>()?;
    Ok(DependencyTree::with_children(artifact, children))
}

/// Resolver answering from the dependencies declared in a manifest.
///
/// Trees are returned in full; the filter is applied per node by the graph
/// visitor, so excluded artifacts do not hide their own dependencies.
#[derive(Debug, Default)]
pub struct StaticResolver {
    declared: HashMap<ProjectId, Vec<DependencyTree>>,
    modules: HashMap<String, ProjectId>,
}

impl StaticResolver {
    fn expand_declared(&self, id: ProjectId, path: &mut Vec<ProjectId>) -> Result<Vec<DependencyTree>> {
        let declared = self.declared.get(&id).ok_or_else(|| {
            Error::resolution_failed(id.to_string(), "project is not described by the manifest")
                .with_operation("manifest::resolve")
        })?;

        declared
            .iter()
            .map(|dependency| self.expand(dependency, path))
            .collect()
    }

    fn expand(&self, dependency: &DependencyTree, path: &mut Vec<ProjectId>) -> Result<DependencyTree> {
        let coordinates = dependency.artifact().coordinates();

        if dependency.children().is_empty() {
            if let Some(&module) = self.modules.get(&coordinates) {
                if path.contains(&module) {
                    return Err(Error::resolution_failed(
                        coordinates.clone(),
                        format!("circular module reference to '{coordinates}'"),
                    )
                    .with_operation("manifest::resolve"));
                }

                trace!(module = %coordinates, "expanding inter-module dependency");
                path.push(module);
                let children = self.expand_declared(module, path)?;
                path.pop();
                return Ok(DependencyTree::with_children(
                    dependency.artifact().clone(),
                    children,
                ));
            }
        }

        let children = dependency
            .children()
            .iter()
            .map(|child| self.expand(child, path))
            .collect::<Result<Vec<_>>>()?;
        Ok(DependencyTree::with_children(
            dependency.artifact().clone(),
            children,
        ))
    }
}

impl DependencyResolver for StaticResolver {
    fn resolve(&self, project: &Project, _filter: &dyn ArtifactFilter) -> Result<DependencyTree> {
        let mut path = vec![project.id()];
        let children = self
            .expand_declared(project.id(), &mut path)
            .map_err(|err| err.with_context("project", project.artifact().coordinates()))?;

        Ok(DependencyTree::with_children(
            project.artifact().clone(),
            children,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::AcceptAll;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [project]
        coordinates = "com.example:parent:1.0"

        [[project.modules]]
        coordinates = "com.example:a:1.0"
        dependencies = [
            { coordinates = "org.lib:l1:2.0" },
        ]

        [[project.modules]]
        coordinates = "com.example:b:1.0"
        dependencies = [
            { coordinates = "org.lib:l1:2.0" },
            { coordinates = "org.lib:l2:1.1", scope = "test", dependencies = [{ coordinates = "org.lib:l3:1.0", scope = "test" }] },
        ]

            [[project.modules.modules]]
            coordinates = "com.example:b-impl:1.0"
    "#;

    fn resolve(manifest: &Manifest, coordinates: &str) -> Result<DependencyTree> {
        let project = manifest.projects().find(coordinates).unwrap();
        manifest.resolver().resolve(project, &AcceptAll)
    }

    #[test]
    fn parses_nested_modules() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        let projects = manifest.projects();

        assert_eq!(projects.len(), 4);
        let collected: Vec<String> = projects
            .collected_projects(manifest.root())
            .unwrap()
            .iter()
            .map(|p| p.artifact().artifact_id().to_string())
            .collect();
        assert_eq!(collected, ["a", "b", "b-impl"]);

        let b_impl = projects.find("com.example:b-impl:1.0").unwrap();
        assert_eq!(
            projects.parent(b_impl.id()).map(|p| p.artifact().artifact_id()),
            Some("b")
        );
    }

    #[test]
    fn resolves_declared_trees_with_scopes() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        let tree = resolve(&manifest, "com.example:b:1.0").unwrap();

        assert_eq!(tree.artifact().coordinates(), "com.example:b:1.0");
        assert_eq!(tree.artifact().scope(), None);
        assert_eq!(tree.node_count(), 4);

        let l1 = &tree.children()[0];
        assert_eq!(l1.artifact().scope(), Some(Scope::Compile));
        let l2 = &tree.children()[1];
        assert_eq!(l2.artifact().scope(), Some(Scope::Test));
        assert_eq!(l2.children()[0].artifact().artifact_id(), "l3");
    }

    #[test]
    fn nested_dependencies_inherit_undeclared_scope() {
        let manifest = Manifest::parse(
            r#"
            [project]
            coordinates = "com.example:p:1.0"
            dependencies = [
                { coordinates = "org.lib:l2:1.1", scope = "test", dependencies = [{ coordinates = "org.lib:l3:1.0", dependencies = [{ coordinates = "org.lib:l4:1.0" }] }, { coordinates = "org.lib:l5:1.0", scope = "runtime" }] },
                { coordinates = "org.lib:l1:2.0", dependencies = [{ coordinates = "org.lib:l6:1.0" }] },
            ]
            "#,
        )
        .unwrap();
        let tree = resolve(&manifest, "com.example:p:1.0").unwrap();

        let l2 = &tree.children()[0];
        let l3 = &l2.children()[0];
        assert_eq!(l3.artifact().scope(), Some(Scope::Test));
        assert_eq!(l3.children()[0].artifact().scope(), Some(Scope::Test));
        assert_eq!(l2.children()[1].artifact().scope(), Some(Scope::Runtime));

        let l1 = &tree.children()[1];
        assert_eq!(l1.artifact().scope(), Some(Scope::Compile));
        assert_eq!(l1.children()[0].artifact().scope(), Some(Scope::Compile));
    }

    #[test]
    fn module_without_dependencies_resolves_to_its_root() {
        let manifest = Manifest::parse(SAMPLE).unwrap();
        let tree = resolve(&manifest, "com.example:b-impl:1.0").unwrap();
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn inter_module_dependencies_are_expanded() {
        let manifest = Manifest::parse(
            r#"
            [project]
            coordinates = "com.example:parent:1.0"

            [[project.modules]]
            coordinates = "com.example:app:1.0"
            dependencies = [{ coordinates = "com.example:core:1.0" }]

            [[project.modules]]
            coordinates = "com.example:core:1.0"
            dependencies = [{ coordinates = "org.lib:l1:2.0" }]
            "#,
        )
        .unwrap();

        let tree = resolve(&manifest, "com.example:app:1.0").unwrap();
        let core = &tree.children()[0];
        assert_eq!(core.artifact().scope(), Some(Scope::Compile));
        assert_eq!(core.children()[0].artifact().coordinates(), "org.lib:l1:2.0");
    }

    #[test]
    fn circular_module_references_fail_resolution() {
        let manifest = Manifest::parse(
            r#"
            [project]
            coordinates = "com.example:parent:1.0"

            [[project.modules]]
            coordinates = "com.example:a:1.0"
            dependencies = [{ coordinates = "com.example:b:1.0" }]

            [[project.modules]]
            coordinates = "com.example:b:1.0"
            dependencies = [{ coordinates = "com.example:a:1.0" }]
            "#,
        )
        .unwrap();

        let err = resolve(&manifest, "com.example:a:1.0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResolutionFailed);
        assert_eq!(err.context_value("module"), Some("com.example:a:1.0"));
        assert_eq!(err.context_value("project"), Some("com.example:a:1.0"));
    }

    #[test]
    fn duplicate_projects_are_rejected() {
        let err = Manifest::parse(
            r#"
            [project]
            coordinates = "com.example:parent:1.0"

            [[project.modules]]
            coordinates = "com.example:parent:1.0"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn invalid_content_is_reported() {
        let bad_scope = Manifest::parse(
            r#"
            [project]
            coordinates = "com.example:parent:1.0"
            dependencies = [{ coordinates = "org.lib:l1:2.0", scope = "sometimes" }]
            "#,
        )
        .unwrap_err();
        assert_eq!(bad_scope.kind(), ErrorKind::InvalidFormat);

        let bad_coordinates =
            Manifest::parse("[project]\ncoordinates = \"com.example\"\n").unwrap_err();
        assert_eq!(bad_coordinates.kind(), ErrorKind::InvalidFormat);

        let unknown_field = Manifest::parse(
            "[project]\ncoordinates = \"com.example:p:1.0\"\nversion = \"2\"\n",
        )
        .unwrap_err();
        assert_eq!(unknown_field.kind(), ErrorKind::DeserializationFailed);

        let not_toml = Manifest::parse("[project").unwrap_err();
        assert_eq!(not_toml.kind(), ErrorKind::DeserializationFailed);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.projects().len(), 4);

        let (projects, root, _resolver) = manifest.into_parts();
        assert_eq!(
            projects.project(root).unwrap().artifact().artifact_id(),
            "parent"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.context_value("path").is_some());
    }
}
