//! # depgraph-error
//!
//! Unified error handling for depgraph, following OpenDAL's error handling practices.
//!
//! - **ErrorKind**: what went wrong (e.g. ResolutionFailed, DependencyGraph)
//! - **Error Context**: key/value pairs locating the cause (module, path, pattern)
//! - **Error Source**: the wrapped underlying error
//!
//! ## Usage
//!
//! ```rust
//! use depgraph_error::{Error, ErrorKind};
//!
//! fn resolve() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ResolutionFailed, "circular module reference")
//!         .with_operation("manifest::resolve")
//!         .with_context("module", "com.example:a:1.0"))
//! }
//!
//! let err = resolve().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ResolutionFailed);
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, depgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, callers only append context
//! - No blanket `From<OtherError>` beyond `std::io::Error`

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the depgraph Error
pub type Result<T> = std::result::Result<T, Error>;
