use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use depgraph::{DepgraphOptions, FilterOptions, StyleOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "depgraph",
    about = "depgraph: one dependency graph for a whole multi-module project",
    version
)]
pub struct Cli {
    /// Project manifest describing the module hierarchy and its dependencies
    #[arg(short = 'm', long = "manifest", value_name = "FILE")]
    manifest: PathBuf,

    /// Graph only the root project's own dependencies, without its modules
    #[arg(long, default_value_t = false)]
    single: bool,

    #[command(flatten)]
    filter: FilterOptions,

    #[command(flatten)]
    style: StyleOptions,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = DepgraphOptions {
        manifest: args.manifest,
        output: args.output,
        filter: args.filter,
        style: args.style,
        single: args.single,
    };

    let code = match run_main(&opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    };

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    code
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    run(args)
}
