//! Module hierarchy of a multi-module build.

use std::fmt;

use crate::artifact::Artifact;
use crate::{Error, Result};

/// Handle of a project inside a [`ProjectTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(usize);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project#{}", self.0)
    }
}

/// A (sub)project: its own artifact plus its place in the hierarchy.
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    artifact: Artifact,
    parent: Option<ProjectId>,
    modules: Vec<ProjectId>,
}

impl Project {
    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Direct sub-modules in declaration order.
    pub fn module_ids(&self) -> &[ProjectId] {
        &self.modules
    }
}

/// Arena of projects linked by parent pointers.
///
/// Projects are only ever attached under an existing parent, so every
/// parent chain ends at a root and cannot loop.
#[derive(Debug, Clone, Default)]
pub struct ProjectTree {
    projects: Vec<Project>,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project without parent.
    pub fn add_root(&mut self, artifact: Artifact) -> ProjectId {
        self.push(artifact, None)
    }

    /// Add a sub-module under `parent`.
    pub fn add_module(&mut self, parent: ProjectId, artifact: Artifact) -> Result<ProjectId> {
        if self.get(parent).is_none() {
            return Err(Error::project_not_found(parent.to_string())
                .with_operation("project::add_module"));
        }

        let id = self.push(artifact, Some(parent));
        self.projects[parent.0].modules.push(id);
        Ok(id)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.0)
    }

    pub fn project(&self, id: ProjectId) -> Result<&Project> {
        self.get(id)
            .ok_or_else(|| Error::project_not_found(id.to_string()).with_operation("project::get"))
    }

    /// The direct parent of a project, if it has one.
    pub fn parent(&self, id: ProjectId) -> Option<&Project> {
        self.get(id)?.parent.and_then(|parent| self.get(parent))
    }

    /// All descendants of `root` in pre-order, excluding `root` itself.
    pub fn collected_projects(&self, root: ProjectId) -> Result<Vec<&Project>> {
        let root = self
            .get(root)
            .ok_or_else(|| Error::project_not_found(root.to_string()).with_operation("project::collect"))?;

        let mut collected = Vec::new();
        let mut stack: Vec<ProjectId> = root.modules.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(project) = self.get(id) {
                collected.push(project);
                stack.extend(project.modules.iter().rev().copied());
            }
        }
        Ok(collected)
    }

    /// Find a project by the coordinates of its artifact.
    pub fn find(&self, coordinates: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.artifact.coordinates() == coordinates)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn push(&mut self, artifact: Artifact, parent: Option<ProjectId>) -> ProjectId {
        let id = ProjectId(self.projects.len());
        self.projects.push(Project {
            id,
            artifact,
            parent,
            modules: Vec::new(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph_error::ErrorKind;

    fn artifact(name: &str) -> Artifact {
        Artifact::new("com.example", name, "1.0")
    }

    fn names(projects: &[&Project]) -> Vec<String> {
        projects
            .iter()
            .map(|p| p.artifact().artifact_id().to_string())
            .collect()
    }

    #[test]
    fn collected_projects_are_pre_order() {
        let mut tree = ProjectTree::new();
        let root = tree.add_root(artifact("root"));
        let a = tree.add_module(root, artifact("a")).unwrap();
        tree.add_module(a, artifact("a1")).unwrap();
        tree.add_module(a, artifact("a2")).unwrap();
        tree.add_module(root, artifact("b")).unwrap();

        let collected = tree.collected_projects(root).unwrap();
        assert_eq!(names(&collected), ["a", "a1", "a2", "b"]);

        let below_a = tree.collected_projects(a).unwrap();
        assert_eq!(names(&below_a), ["a1", "a2"]);
    }

    #[test]
    fn parent_links() {
        let mut tree = ProjectTree::new();
        let root = tree.add_root(artifact("root"));
        let a = tree.add_module(root, artifact("a")).unwrap();

        assert_eq!(tree.parent(a).map(Project::id), Some(root));
        assert!(tree.parent(root).is_none());
        assert_eq!(tree.project(root).unwrap().module_ids(), [a]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut other = ProjectTree::new();
        other.add_root(artifact("x"));
        let foreign = other.add_module(ProjectId(0), artifact("y")).unwrap();

        let mut tree = ProjectTree::new();
        tree.add_root(artifact("root"));
        let err = tree.add_module(foreign, artifact("z")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProjectNotFound);
        assert_eq!(tree.collected_projects(foreign).unwrap_err().kind(), ErrorKind::ProjectNotFound);
    }

    #[test]
    fn find_by_coordinates() {
        let mut tree = ProjectTree::new();
        let root = tree.add_root(artifact("root"));
        let a = tree.add_module(root, artifact("a")).unwrap();

        assert_eq!(tree.find("com.example:a:1.0").map(Project::id), Some(a));
        assert!(tree.find("com.example:missing:1.0").is_none());
    }
}
