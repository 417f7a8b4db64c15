//! Aggregated graph over every module of a multi-module project.

use std::collections::HashMap;

use depgraph_dot::GraphBuilder;
use tracing::{debug, info};

use crate::Result;
use crate::edge::DottedEdgeRenderer;
use crate::factory::{GraphFactory, GraphStyle, add_resolved_tree};
use crate::filter::ArtifactFilter;
use crate::node::ArtifactNode;
use crate::project::{Project, ProjectId, ProjectTree};
use crate::resolver::DependencyResolver;

const OPERATION: &str = "aggregate::create_graph";

/// Builds one graph for a project and all of its collected modules.
///
/// Two phases share a single graph:
/// 1. module containment: dotted edges from each module up its parent
///    chain, ending at the aggregation root;
/// 2. dependencies: every included module is resolved and its tree is
///    visited into the same graph.
///
/// The first resolution failure aborts the call; no partial graph is
/// returned.
pub struct AggregatingGraphFactory<R, F> {
    resolver: R,
    filter: F,
    style: GraphStyle,
}

impl<R, F> AggregatingGraphFactory<R, F>
where
    R: DependencyResolver,
    F: ArtifactFilter,
{
    pub fn new(resolver: R, filter: F) -> Self {
        Self {
            resolver,
            filter,
            style: GraphStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }
}

impl<R, F> GraphFactory for AggregatingGraphFactory<R, F>
where
    R: DependencyResolver,
    F: ArtifactFilter,
{
    fn create_graph(&self, projects: &ProjectTree, root: ProjectId) -> Result<String> {
        let root = projects
            .project(root)
            .map_err(|err| err.with_operation(OPERATION))?;
        let collected = projects.collected_projects(root.id())?;

        let mut graph = self.style.graph_builder();
        build_module_tree(projects, root, &collected, &self.filter, &mut graph);

        for project in &collected {
            if !self.filter.include(project.artifact()) {
                debug!(module = %project.artifact(), "module excluded by filter");
                continue;
            }
            add_resolved_tree(
                &self.resolver,
                &self.filter,
                &self.style.dependency_edges,
                project,
                &mut graph,
                OPERATION,
            )?;
        }

        info!(
            root = %root.artifact(),
            modules = collected.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "aggregated dependency graph"
        );
        Ok(graph.render())
    }
}

/// Add a structural edge for every hop from each module up to `root`.
///
/// The hop whose parent is `root` is the last one, so ancestors of the
/// root never enter the graph.
fn build_module_tree(
    projects: &ProjectTree,
    root: &Project,
    collected: &[&Project],
    filter: &dyn ArtifactFilter,
    graph: &mut GraphBuilder<'_, ArtifactNode>,
) {
    let mut nodes: HashMap<ProjectId, Option<ArtifactNode>> = HashMap::new();
    let mut node_for = |project: &Project| {
        nodes
            .entry(project.id())
            .or_insert_with(|| ArtifactNode::filtered(project.artifact(), filter))
            .clone()
    };

    for module in collected {
        let mut child: &Project = module;
        while let Some(parent) = projects.parent(child.id()) {
            let parent_node = node_for(parent);
            let child_node = node_for(child);
            graph.add_edge(parent_node.as_ref(), child_node.as_ref(), &DottedEdgeRenderer);

            if parent.id() == root.id() {
                break;
            }
            child = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Artifact;
    use crate::filter::AcceptAll;
    use crate::tree::DependencyTree;

    struct NoDependencies;

    impl DependencyResolver for NoDependencies {
        fn resolve(
            &self,
            project: &Project,
            _filter: &dyn ArtifactFilter,
        ) -> Result<DependencyTree> {
            Ok(DependencyTree::new(project.artifact().clone()))
        }
    }

    #[test]
    fn module_edges_stop_at_the_aggregation_root() {
        let mut projects = ProjectTree::new();
        let top = projects.add_root(Artifact::new("com.example", "top", "1.0"));
        let mid = projects.add_module(top, Artifact::new("com.example", "mid", "1.0")).unwrap();
        let leaf = projects.add_module(mid, Artifact::new("com.example", "leaf", "1.0")).unwrap();
        projects.add_module(leaf, Artifact::new("com.example", "deep", "1.0")).unwrap();

        let dot = AggregatingGraphFactory::new(NoDependencies, AcceptAll)
            .create_graph(&projects, mid)
            .unwrap();

        assert!(dot.contains(r#""com.example:mid:1.0" -> "com.example:leaf:1.0" [style="dotted"];"#));
        assert!(dot.contains(r#""com.example:leaf:1.0" -> "com.example:deep:1.0" [style="dotted"];"#));
        assert!(!dot.contains("com.example:top:1.0"));
    }

    #[test]
    fn filtered_module_interrupts_only_its_own_edges() {
        let mut projects = ProjectTree::new();
        let root = projects.add_root(Artifact::new("com.example", "root", "1.0"));
        let hidden = projects
            .add_module(root, Artifact::new("com.example", "hidden", "1.0"))
            .unwrap();
        projects
            .add_module(hidden, Artifact::new("com.example", "inner", "1.0"))
            .unwrap();

        let filter = |artifact: &Artifact| artifact.artifact_id() != "hidden";
        let dot = AggregatingGraphFactory::new(NoDependencies, filter)
            .create_graph(&projects, root)
            .unwrap();

        assert!(!dot.contains("hidden"));
        assert!(dot.contains(r#""com.example:inner:1.0" [label="inner\n1.0"];"#));
        assert!(!dot.contains("->"));
    }
}
