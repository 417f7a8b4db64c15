//! The main Error type for depgraph.

use crate::ErrorKind;
use std::fmt;

/// Unified error type for all depgraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Look up a context value by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl Error {
    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a ResolutionFailed error for the given module coordinates
    pub fn resolution_failed(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResolutionFailed, message).with_context("module", module)
    }

    /// Wrap a resolver failure into the error surfaced by graph creation.
    pub fn dependency_graph<E>(module: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let module = module.into();
        Self::new(
            ErrorKind::DependencyGraph,
            format!("failed to resolve dependencies of '{}'", module),
        )
        .with_context("module", module)
        .set_source(source)
    }

    /// Create a ProjectNotFound error
    pub fn project_not_found(project: impl Into<String>) -> Self {
        let project = project.into();
        Self::new(
            ErrorKind::ProjectNotFound,
            format!("project '{}' not found", project),
        )
        .with_context("project", project)
    }

    /// Create an InvalidFormat error for an unparseable value
    pub fn invalid_format(what: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(
            ErrorKind::InvalidFormat,
            format!("invalid {}: '{}'", what, value),
        )
        .with_context(what, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ResolutionFailed, "missing descriptor");
        assert_eq!(err.kind(), ErrorKind::ResolutionFailed);
        assert_eq!(err.message(), "missing descriptor");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::InvalidFormat, "bad pattern")
            .with_operation("filter::compile")
            .with_context("pattern", "com.*:[")
            .with_context("position", "6");

        assert_eq!(err.operation(), "filter::compile");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("pattern", "com.*:[".to_string()));
        assert_eq!(err.context_value("position"), Some("6"));
        assert_eq!(err.context_value("missing"), None);
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::ResolutionFailed, "failed")
            .with_operation("manifest::resolve")
            .with_operation("aggregate::create_graph");

        assert_eq!(err.operation(), "aggregate::create_graph");
        assert_eq!(err.context().len(), 1);
        assert_eq!(
            err.context()[0],
            ("called", "manifest::resolve".to_string())
        );
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        let err = Error::from(io_err);
        assert_eq!(err.kind(), ErrorKind::IoFailed);
        assert_eq!(err.operation(), "io");

        let source = std::error::Error::source(&err).expect("source is set");
        assert_eq!(source.to_string(), "interrupted");
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::from(io_err);
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_dependency_graph_wraps_resolution_error() {
        let cause = Error::resolution_failed("com.example:a:1.0", "circular module reference");
        let err = Error::dependency_graph("com.example:a:1.0", cause);

        assert_eq!(err.kind(), ErrorKind::DependencyGraph);
        assert_eq!(err.context_value("module"), Some("com.example:a:1.0"));

        let source = std::error::Error::source(&err).expect("source is set");
        assert!(source.to_string().contains("ResolutionFailed"));
    }

    #[test]
    fn test_display() {
        let err = Error::invalid_format("coordinates", "com.example")
            .with_operation("artifact::parse");

        let display = format!("{}", err);
        assert!(display.starts_with("InvalidFormat at artifact::parse, context {"));
        assert!(display.contains("artifact::parse"));
        assert!(display.contains("coordinates: com.example"));
    }
}
