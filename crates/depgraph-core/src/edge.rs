//! Edge styles for module and dependency relationships.

use depgraph_dot::{AttributeBuilder, EdgeRenderer};

use crate::artifact::Scope;
use crate::node::ArtifactNode;

/// Style of a structural (module containment) edge: always dotted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedEdgeRenderer;

impl EdgeRenderer<ArtifactNode> for DottedEdgeRenderer {
    fn create_edge_attributes(&self, _from: &ArtifactNode, _to: &ArtifactNode) -> String {
        AttributeBuilder::new().style("dotted").to_string()
    }
}

/// Style of a dependency edge, chosen by the scope of the target artifact.
///
/// Compile scope (or no scope) draws a plain edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeEdgeRenderer {
    show_scope_labels: bool,
}

impl ScopeEdgeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the scope name as an edge label for non-compile scopes.
    pub fn with_scope_labels(mut self, show: bool) -> Self {
        self.show_scope_labels = show;
        self
    }
}

impl EdgeRenderer<ArtifactNode> for ScopeEdgeRenderer {
    fn create_edge_attributes(&self, _from: &ArtifactNode, to: &ArtifactNode) -> String {
        let scope = match to.artifact().scope() {
            None | Some(Scope::Compile) => return String::new(),
            Some(scope) => scope,
        };

        let attributes = match scope {
            Scope::Provided => AttributeBuilder::new().style("dashed"),
            Scope::Runtime => AttributeBuilder::new().color("darkgreen"),
            Scope::Test => AttributeBuilder::new().style("dashed").color("grey"),
            Scope::System => AttributeBuilder::new().color("red"),
            Scope::Import => AttributeBuilder::new().style("bold"),
            Scope::Compile => AttributeBuilder::new(),
        };

        if self.show_scope_labels {
            attributes.label(scope.to_string()).to_string()
        } else {
            attributes.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Artifact;

    fn node(scope: Option<Scope>) -> ArtifactNode {
        let artifact = Artifact::new("org.lib", "l1", "1.0");
        match scope {
            Some(scope) => ArtifactNode::new(&artifact.with_scope(scope)),
            None => ArtifactNode::new(&artifact),
        }
    }

    #[test]
    fn dotted_renderer_ignores_endpoints() {
        let renderer = DottedEdgeRenderer;
        let attrs = renderer.create_edge_attributes(&node(None), &node(Some(Scope::Test)));
        assert_eq!(attrs, r#"[style="dotted"]"#);
    }

    #[test]
    fn compile_scope_is_plain() {
        let renderer = ScopeEdgeRenderer::new().with_scope_labels(true);
        assert_eq!(
            renderer.create_edge_attributes(&node(None), &node(Some(Scope::Compile))),
            ""
        );
        assert_eq!(renderer.create_edge_attributes(&node(None), &node(None)), "");
    }

    #[test]
    fn non_compile_scopes_are_styled() {
        let renderer = ScopeEdgeRenderer::new();
        let from = node(None);
        assert_eq!(
            renderer.create_edge_attributes(&from, &node(Some(Scope::Test))),
            r#"[style="dashed",color="grey"]"#
        );
        assert_eq!(
            renderer.create_edge_attributes(&from, &node(Some(Scope::Provided))),
            r#"[style="dashed"]"#
        );
        assert_eq!(
            renderer.create_edge_attributes(&from, &node(Some(Scope::Runtime))),
            r#"[color="darkgreen"]"#
        );
    }

    #[test]
    fn scope_label_is_optional() {
        let renderer = ScopeEdgeRenderer::new().with_scope_labels(true);
        assert_eq!(
            renderer.create_edge_attributes(&node(None), &node(Some(Scope::System))),
            r#"[color="red",label="system"]"#
        );
    }
}
