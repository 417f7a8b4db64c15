//! Dependency tree traversal into a shared graph.

use depgraph_dot::{EdgeRenderer, GraphBuilder};

use crate::filter::ArtifactFilter;
use crate::node::ArtifactNode;
use crate::tree::DependencyTree;

/// Walks a dependency tree in pre-order and records every parent → child
/// relation as an edge.
///
/// Filtering is per node: an excluded node drops the edges touching it,
/// but its descendants are still visited. Each tree node is tested against
/// the filter exactly once.
pub struct GraphBuildingVisitor<'g, 'r> {
    graph: &'g mut GraphBuilder<'r, ArtifactNode>,
    filter: &'g dyn ArtifactFilter,
    renderer: &'r dyn EdgeRenderer<ArtifactNode>,
}

impl<'g, 'r> GraphBuildingVisitor<'g, 'r> {
    pub fn new(
        graph: &'g mut GraphBuilder<'r, ArtifactNode>,
        filter: &'g dyn ArtifactFilter,
        renderer: &'r dyn EdgeRenderer<ArtifactNode>,
    ) -> Self {
        Self {
            graph,
            filter,
            renderer,
        }
    }

    pub fn visit(&mut self, tree: &DependencyTree) {
        let root = ArtifactNode::filtered(tree.artifact(), self.filter);
        self.graph.add_node(root.as_ref());
        self.visit_children(tree, root.as_ref());
    }

    fn visit_children(&mut self, tree: &DependencyTree, parent: Option<&ArtifactNode>) {
        for child in tree.children() {
            let node = ArtifactNode::filtered(child.artifact(), self.filter);
            self.graph.add_edge(parent, node.as_ref(), self.renderer);
            self.visit_children(child, node.as_ref());
        }
    }
}
