//! Output of the rendered DOT text.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use depgraph_core::{Error, Result};

/// Write `dot` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, dot: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, dot).map_err(|err| {
                Error::from(err)
                    .with_operation("output::write")
                    .with_context("path", path.display().to_string())
            })?;
            info!(path = %path.display(), bytes = dot.len(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(dot.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|err| Error::from(err).with_operation("output::write"))?;
        }
    }
    Ok(())
}
