//! Shared CLI options for depgraph.
//!
//! Option groups are flattened into the top-level command so the filter and
//! style settings can be built and tested independently of argument parsing.

use clap::Args;

use depgraph_core::{
    AndFilter, ArtifactLabelRenderer, GraphStyle, PatternFilter, Result, Scope, ScopeEdgeRenderer,
    ScopeFilter,
};

/// Which artifacts make it into the graph.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterOptions {
    /// Include only artifacts matching `group[:artifact[:version[:classifier]]]`,
    /// `*` wildcards allowed (repeatable)
    #[arg(long = "include", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub includes: Vec<String>,

    /// Exclude artifacts matching the pattern; wins over --include (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub excludes: Vec<String>,

    /// Include only dependencies with this scope (repeatable)
    #[arg(long = "scope", value_name = "SCOPE", action = clap::ArgAction::Append)]
    pub scopes: Vec<String>,
}

/// How the graph is drawn.
#[derive(Args, Debug, Clone)]
pub struct StyleOptions {
    /// Name written in the `digraph` header
    #[arg(long = "graph-name", default_value = "G")]
    pub graph_name: String,

    /// Prefix node labels with the group id
    #[arg(long = "show-group-id")]
    pub show_group_id: bool,

    /// Omit versions from node labels
    #[arg(long = "hide-versions")]
    pub hide_versions: bool,

    /// Append the classifier to node labels
    #[arg(long = "show-classifier")]
    pub show_classifier: bool,

    /// Label non-compile dependency edges with their scope
    #[arg(long = "show-scope-labels")]
    pub show_scope_labels: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            show_group_id: false,
            hide_versions: false,
            show_classifier: false,
            show_scope_labels: false,
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.includes.push(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Combine the pattern and scope settings into one filter.
    ///
    /// Without any scope the scope filter is left out entirely.
    pub fn build_filter(&self) -> Result<AndFilter> {
        let patterns = PatternFilter::new(&self.includes, &self.excludes)
            .map_err(|err| err.with_operation("options::build_filter"))?;
        let mut filter = AndFilter::new().with(patterns);

        if !self.scopes.is_empty() {
            let scopes = self
                .scopes
                .iter()
                .map(|scope| Scope::parse(scope))
                .collect::<Result<Vec<_>>>()
                .map_err(|err| err.with_operation("options::build_filter"))?;
            filter = filter.with(ScopeFilter::new(scopes));
        }
        Ok(filter)
    }
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_style(&self) -> GraphStyle {
        GraphStyle {
            graph_name: self.graph_name.clone(),
            labels: ArtifactLabelRenderer {
                show_group_id: self.show_group_id,
                show_version: !self.hide_versions,
                show_classifier: self.show_classifier,
            },
            dependency_edges: ScopeEdgeRenderer::new().with_scope_labels(self.show_scope_labels),
        }
    }
}
