//! De-duplicating graph accumulator with DOT serialization.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::trace;

use crate::attributes::AttributeBuilder;
use crate::dot::DotBuilder;
use crate::render::{EdgeRenderer, Node, NodeRenderer, PlainNodeRenderer};

struct Edge<'r, N> {
    from: usize,
    to: usize,
    // Endpoint values as passed to `add_edge`, which may carry per-edge data
    // (such as a dependency scope) that the stored node does not.
    source: N,
    target: N,
    renderer: &'r dyn EdgeRenderer<N>,
}

/// Accumulates unique nodes and edges and renders them as a DOT digraph.
///
/// Nodes are keyed by [`Node::node_id`], edges by their `(from, to)` pair.
/// When the same pair is added again the first insertion wins and keeps
/// its renderer. Output follows insertion order, so identical input
/// sequences produce byte-identical text.
///
/// Edge renderers are borrowed and only consulted by [`render`](Self::render).
pub struct GraphBuilder<'r, N> {
    graph_name: String,
    node_renderer: &'r dyn NodeRenderer<N>,
    node_defaults: AttributeBuilder,
    edge_defaults: AttributeBuilder,
    nodes: Vec<(String, N)>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge<'r, N>>,
    edge_index: HashSet<(usize, usize)>,
}

impl<'r, N: Node + Clone> GraphBuilder<'r, N> {
    pub fn new() -> Self {
        Self {
            graph_name: "G".to_string(),
            node_renderer: &PlainNodeRenderer,
            node_defaults: AttributeBuilder::new(),
            edge_defaults: AttributeBuilder::new(),
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashSet::new(),
        }
    }

    pub fn graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub fn node_renderer(mut self, renderer: &'r dyn NodeRenderer<N>) -> Self {
        self.node_renderer = renderer;
        self
    }

    /// Attributes written once as the `node [...]` default statement.
    pub fn default_node_attributes(mut self, attributes: AttributeBuilder) -> Self {
        self.node_defaults = attributes;
        self
    }

    /// Attributes written once as the `edge [...]` default statement.
    pub fn default_edge_attributes(mut self, attributes: AttributeBuilder) -> Self {
        self.edge_defaults = attributes;
        self
    }

    /// Register a single node. `None` means the node was filtered out.
    pub fn add_node(&mut self, node: Option<&N>) -> &mut Self {
        if let Some(node) = node {
            self.intern(node);
        }
        self
    }

    /// Register an edge and both of its endpoints.
    ///
    /// An absent endpoint means that node was filtered out; the edge is
    /// then skipped entirely and neither endpoint is registered by this call.
    pub fn add_edge(
        &mut self,
        from: Option<&N>,
        to: Option<&N>,
        renderer: &'r dyn EdgeRenderer<N>,
    ) -> &mut Self {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                trace!("skipping edge with a filtered endpoint");
                return self;
            }
        };

        let from_index = self.intern(from);
        let to_index = self.intern(to);

        if self.edge_index.insert((from_index, to_index)) {
            self.edges.push(Edge {
                from: from_index,
                to: to_index,
                source: from.clone(),
                target: to.clone(),
                renderer,
            });
        } else {
            trace!(
                from = %self.nodes[from_index].0,
                to = %self.nodes[to_index].0,
                "duplicate edge ignored"
            );
        }
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index.get(from), self.node_index.get(to)) {
            (Some(&from), Some(&to)) => self.edge_index.contains(&(from, to)),
            _ => false,
        }
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|(id, _)| id.as_str())
    }

    /// Render the graph: header, defaults, nodes, edges, trailer.
    pub fn render(&self) -> String {
        let mut dot = DotBuilder::new(&self.graph_name);
        dot.node_defaults(&self.node_defaults.to_string())
            .edge_defaults(&self.edge_defaults.to_string());

        if !self.nodes.is_empty() {
            dot.blank();
        }
        for (id, node) in &self.nodes {
            dot.node(id, &self.node_renderer.create_node_attributes(node));
        }

        if !self.edges.is_empty() {
            dot.blank();
        }
        for edge in &self.edges {
            dot.edge(
                &self.nodes[edge.from].0,
                &self.nodes[edge.to].0,
                &edge
                    .renderer
                    .create_edge_attributes(&edge.source, &edge.target),
            );
        }

        dot.build()
    }

    fn intern(&mut self, node: &N) -> usize {
        let id = node.node_id();
        if let Some(&index) = self.node_index.get(&id) {
            return index;
        }

        let index = self.nodes.len();
        self.node_index.insert(id.clone(), index);
        self.nodes.push((id, node.clone()));
        index
    }
}

impl<N: Node + Clone> Default for GraphBuilder<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node + Clone> fmt::Display for GraphBuilder<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
