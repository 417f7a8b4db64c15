//! Graph factories turn a project hierarchy into DOT text.

use depgraph_dot::{AttributeBuilder, EdgeRenderer, GraphBuilder};
use tracing::{debug, info};

use crate::edge::ScopeEdgeRenderer;
use crate::filter::ArtifactFilter;
use crate::node::{ArtifactLabelRenderer, ArtifactNode};
use crate::project::{Project, ProjectId, ProjectTree};
use crate::resolver::DependencyResolver;
use crate::visit::GraphBuildingVisitor;
use crate::{Error, Result};

/// Creates the serialized graph for a project.
///
/// Every call builds its own graph, so one factory may serve any number of
/// independent invocations.
pub trait GraphFactory {
    fn create_graph(&self, projects: &ProjectTree, root: ProjectId) -> Result<String>;
}

/// Presentation settings shared by the graph factories.
#[derive(Debug, Clone)]
pub struct GraphStyle {
    pub graph_name: String,
    pub labels: ArtifactLabelRenderer,
    pub dependency_edges: ScopeEdgeRenderer,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            labels: ArtifactLabelRenderer::default(),
            dependency_edges: ScopeEdgeRenderer::default(),
        }
    }
}

impl GraphStyle {
    /// A fresh, empty graph configured with this style.
    pub fn graph_builder(&self) -> GraphBuilder<'_, ArtifactNode> {
        GraphBuilder::new()
            .graph_name(self.graph_name.clone())
            .node_renderer(&self.labels)
            .default_node_attributes(
                AttributeBuilder::new()
                    .shape("box")
                    .font_name("Helvetica")
                    .font_size(10),
            )
            .default_edge_attributes(
                AttributeBuilder::new()
                    .font_name("Helvetica")
                    .font_size(10),
            )
    }
}

/// Resolve one project and add its whole dependency tree to `graph`.
///
/// A resolver failure is wrapped into a `DependencyGraph` error carrying
/// the module coordinates.
pub(crate) fn add_resolved_tree<'r, R>(
    resolver: &R,
    filter: &dyn ArtifactFilter,
    renderer: &'r dyn EdgeRenderer<ArtifactNode>,
    project: &Project,
    graph: &mut GraphBuilder<'r, ArtifactNode>,
    operation: &'static str,
) -> Result<()>
where
    R: DependencyResolver + ?Sized,
{
    let tree = resolver.resolve(project, filter).map_err(|err| {
        Error::dependency_graph(project.artifact().coordinates(), err).with_operation(operation)
    })?;

    debug!(
        module = %project.artifact(),
        nodes = tree.node_count(),
        "resolved dependency tree"
    );
    GraphBuildingVisitor::new(graph, filter, renderer).visit(&tree);
    Ok(())
}

/// Graph of a single project's own dependency tree, without modules.
pub struct SimpleGraphFactory<R, F> {
    resolver: R,
    filter: F,
    style: GraphStyle,
}

impl<R, F> SimpleGraphFactory<R, F>
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

impl<R, F> GraphFactory for SimpleGraphFactory<R, F>
where
    R: DependencyResolver,
    F: ArtifactFilter,
{
    fn create_graph(&self, projects: &ProjectTree, root: ProjectId) -> Result<String> {
        let project = projects
            .project(root)
            .map_err(|err| err.with_operation("simple::create_graph"))?;

        let mut graph = self.style.graph_builder();
        add_resolved_tree(
            &self.resolver,
            &self.filter,
            &self.style.dependency_edges,
            project,
            &mut graph,
            "simple::create_graph",
        )?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph created"
        );
        Ok(graph.render())
    }
}
