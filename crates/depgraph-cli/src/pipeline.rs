//! Core processing pipeline: load manifest → build filter → create graph.

use std::time::Instant;

use tracing::info;

use depgraph_core::{AggregatingGraphFactory, GraphFactory, Manifest, Result, SimpleGraphFactory};

use crate::DepgraphOptions;

/// Build the DOT text described by `opts`.
///
/// 1. Load the project manifest
/// 2. Compile the artifact filter
/// 3. Aggregate every module, or only the root with `single`
pub fn build_graph(opts: &DepgraphOptions) -> Result<String> {
    // 1. Load
    let load_start = Instant::now();
    let manifest = Manifest::load(&opts.manifest)?;
    info!(
        projects = manifest.projects().len(),
        secs = load_start.elapsed().as_secs_f64(),
        "manifest loaded"
    );

    // 2. Filter and style
    let filter = opts.filter.build_filter()?;
    let style = opts.style.graph_style();
    let (projects, root, resolver) = manifest.into_parts();

    // 3. Graph
    let graph_start = Instant::now();
    let factory: Box<dyn GraphFactory> = if opts.single {
        Box::new(SimpleGraphFactory::new(resolver, filter).with_style(style))
    } else {
        Box::new(AggregatingGraphFactory::new(resolver, filter).with_style(style))
    };
    let dot = factory.create_graph(&projects, root)?;
    info!(
        single = opts.single,
        secs = graph_start.elapsed().as_secs_f64(),
        "graph created"
    );

    Ok(dot)
}
