//! Rendering strategies for nodes and edges.

/// A vertex that can be placed in a [`GraphBuilder`](crate::GraphBuilder).
///
/// `node_id` is both the DOT identifier and the deduplication key: two
/// nodes with the same id are the same vertex.
pub trait Node {
    fn node_id(&self) -> String;
}

/// Produces the attribute list of an edge statement.
///
/// Implementations return a pre-formatted list such as `[style="dotted"]`,
/// or an empty string for a plain edge. Renderers are chosen per edge at
/// the call site, so new styles never require changes to the graph builder.
pub trait EdgeRenderer<N> {
    fn create_edge_attributes(&self, from: &N, to: &N) -> String;
}

/// Produces the attribute list of a node statement.
pub trait NodeRenderer<N> {
    fn create_node_attributes(&self, node: &N) -> String;
}

/// Renders nodes without attributes, so Graphviz labels them by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNodeRenderer;

impl<N> NodeRenderer<N> for PlainNodeRenderer {
    fn create_node_attributes(&self, _node: &N) -> String {
        String::new()
    }
}

/// Renders edges without attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEdgeRenderer;

impl<N> EdgeRenderer<N> for PlainEdgeRenderer {
    fn create_edge_attributes(&self, _from: &N, _to: &N) -> String {
        String::new()
    }
}
