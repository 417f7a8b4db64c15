//! depgraph command-line interface.
//!
pub mod options;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use depgraph_core::Result;

pub use options::{FilterOptions, StyleOptions};
pub use output::write_output;
pub use pipeline::build_graph;

/// Options for running depgraph.
#[derive(Debug, Clone)]
pub struct DepgraphOptions {
    pub manifest: PathBuf,
    pub output: Option<PathBuf>,
    pub filter: FilterOptions,
    pub style: StyleOptions,
    /// Graph only the root project's own tree, without its modules.
    pub single: bool,
}

impl DepgraphOptions {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            output: None,
            filter: FilterOptions::default(),
            style: StyleOptions::default(),
            single: false,
        }
    }
}

/// Main entry point
pub fn run_main(opts: &DepgraphOptions) -> Result<String> {
    let dot = build_graph(opts)?;
    write_output(opts.output.as_deref(), &dot)?;
    Ok(dot)
}
