//! Aggregated dependency graphs for multi-module builds.
//!
//! The pieces, leaves first:
//!
//! - [`artifact`]: coordinates and scopes
//! - [`node`]: graph vertex identity and node labels
//! - [`edge`]: structural and scope-based edge styles
//! - [`filter`]: inclusion predicates over artifacts
//! - [`project`]: the module hierarchy
//! - [`tree`], [`resolver`]: resolved dependency trees and where they come from
//! - [`visit`]: tree traversal into a shared graph
//! - [`factory`], [`aggregate`]: single-project and aggregated graph creation
//! - [`manifest`]: TOML project manifests backing a static resolver
//!
//! ```
//! use depgraph_core::{AcceptAll, AggregatingGraphFactory, GraphFactory, Manifest};
//!
//! let manifest = Manifest::parse(r#"
//!     [project]
//!     coordinates = "com.example:parent:1.0"
//!
//!     [[project.modules]]
//!     coordinates = "com.example:a:1.0"
//!     dependencies = [{ coordinates = "org.lib:l1:2.0" }]
//! "#).unwrap();
//!
//! let (projects, root, resolver) = manifest.into_parts();
//! let dot = AggregatingGraphFactory::new(resolver, AcceptAll)
//!     .create_graph(&projects, root)
//!     .unwrap();
//! assert!(dot.contains(r#""com.example:a:1.0" -> "org.lib:l1:2.0";"#));
//! ```

pub mod aggregate;
pub mod artifact;
pub mod edge;
pub mod factory;
pub mod filter;
pub mod manifest;
pub mod node;
pub mod project;
pub mod resolver;
pub mod tree;
pub mod visit;

pub use depgraph_error::{Error, ErrorKind, Result};

pub use aggregate::AggregatingGraphFactory;
pub use artifact::{Artifact, Scope};
pub use edge::{DottedEdgeRenderer, ScopeEdgeRenderer};
pub use factory::{GraphFactory, GraphStyle, SimpleGraphFactory};
pub use filter::{AcceptAll, AndFilter, ArtifactFilter, PatternFilter, ScopeFilter};
pub use manifest::{Manifest, StaticResolver};
pub use node::{ArtifactLabelRenderer, ArtifactNode};
pub use project::{Project, ProjectId, ProjectTree};
pub use resolver::DependencyResolver;
pub use tree::DependencyTree;
pub use visit::GraphBuildingVisitor;
