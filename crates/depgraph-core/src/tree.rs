//! Resolved dependency trees.

use crate::artifact::Artifact;

/// One resolved artifact and its resolved dependencies, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    artifact: Artifact,
    children: Vec<DependencyTree>,
}

impl DependencyTree {
    pub fn new(artifact: Artifact) -> Self {
        Self {
            artifact,
            children: Vec::new(),
        }
    }

    pub fn with_children(artifact: Artifact, children: Vec<DependencyTree>) -> Self {
        Self { artifact, children }
    }

    pub fn with_child(mut self, child: DependencyTree) -> Self {
        self.children.push(child);
        self
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn children(&self) -> &[DependencyTree] {
        &self.children
    }

    /// Number of tree nodes including this one.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            count += 1;
            stack.extend(&tree.children);
        }
        count
    }
}
