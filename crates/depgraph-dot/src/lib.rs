//! DOT graph building for dependency visualization.
//!
//! A [`GraphBuilder`] collects unique nodes and edges and serializes them
//! into the DOT language. How nodes and edges look is decided by pluggable
//! [`NodeRenderer`] and [`EdgeRenderer`] strategies, the latter chosen per
//! edge when it is added.
//!
//! # Module Structure
//!
//! - [`dot`]: low-level DOT statement writer and escaping helpers
//! - [`attributes`]: attribute list builder (`[style="dotted"]`)
//! - [`render`]: node/edge renderer traits and plain defaults
//! - [`graph`]: the de-duplicating graph accumulator

pub mod attributes;
pub mod dot;
pub mod graph;
pub mod render;

pub use attributes::AttributeBuilder;
pub use dot::DotBuilder;
pub use graph::GraphBuilder;
pub use render::{EdgeRenderer, Node, NodeRenderer, PlainEdgeRenderer, PlainNodeRenderer};
