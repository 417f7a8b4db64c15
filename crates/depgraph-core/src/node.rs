//! Graph vertex identity for artifacts.

use std::hash::{Hash, Hasher};

use depgraph_dot::{AttributeBuilder, Node, NodeRenderer};

use crate::artifact::Artifact;
use crate::filter::ArtifactFilter;

/// An artifact placed in the graph.
///
/// Identity is the coordinate string (group, artifact, version, classifier).
/// The scope travels with the node so edge renderers can style by it, but
/// two nodes differing only in scope are equal.
#[derive(Debug, Clone)]
pub struct ArtifactNode {
    id: String,
    artifact: Artifact,
}

impl ArtifactNode {
    pub fn new(artifact: &Artifact) -> Self {
        Self {
            id: artifact.coordinates(),
            artifact: artifact.clone(),
        }
    }

    /// The node for `artifact`, or `None` when the filter excludes it.
    pub fn filtered(artifact: &Artifact, filter: &dyn ArtifactFilter) -> Option<Self> {
        if filter.include(artifact) {
            Some(Self::new(artifact))
        } else {
            None
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }
}

impl PartialEq for ArtifactNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArtifactNode {}

impl Hash for ArtifactNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Node for ArtifactNode {
    fn node_id(&self) -> String {
        self.id.clone()
    }
}

/// Labels nodes with one line per enabled coordinate part.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactLabelRenderer {
    pub show_group_id: bool,
    pub show_version: bool,
    pub show_classifier: bool,
}

impl Default for ArtifactLabelRenderer {
    fn default() -> Self {
        Self {
            show_group_id: false,
            show_version: true,
            show_classifier: false,
        }
    }
}

impl NodeRenderer<ArtifactNode> for ArtifactLabelRenderer {
    fn create_node_attributes(&self, node: &ArtifactNode) -> String {
        let artifact = node.artifact();
        let mut lines = Vec::with_capacity(4);

        if self.show_group_id {
            lines.push(artifact.group_id());
        }
        lines.push(artifact.artifact_id());
        if self.show_version {
            lines.push(artifact.version());
        }
        if self.show_classifier {
            if let Some(classifier) = artifact.classifier() {
                lines.push(classifier);
            }
        }

        AttributeBuilder::new().label(lines.join("\n")).to_string()
    }
}
