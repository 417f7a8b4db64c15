//! Error kinds for depgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to report or handle a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// The external resolver could not produce a dependency tree for a module
    ResolutionFailed,

    /// Building the aggregated dependency graph failed
    DependencyGraph,

    /// A project referenced by id does not exist in its project tree
    ProjectNotFound,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Format errors
    // =========================================================================
    /// Deserialization failed
    DeserializationFailed,

    /// Invalid format (coordinates, scopes, filter patterns)
    InvalidFormat,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
