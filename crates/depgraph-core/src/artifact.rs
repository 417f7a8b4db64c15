//! Artifact coordinates and dependency scopes.

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// The scope a dependency was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Scope {
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl Scope {
    /// Parse a scope name, reporting unknown names as `InvalidFormat`.
    pub fn parse(name: &str) -> Result<Self> {
        Scope::from_str(name.trim()).map_err(|err| {
            Error::invalid_format("scope", name)
                .with_operation("artifact::parse_scope")
                .set_source(err)
        })
    }
}

/// A uniquely coordinated unit of software.
///
/// Textual coordinates are `group:artifact:version` with an optional
/// trailing `:classifier`. The scope is not part of the coordinates; it
/// describes how the artifact was reached in a dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    scope: Option<Scope>,
}

impl Artifact {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            scope: None,
        }
    }

    /// Parse `group:artifact:version[:classifier]`.
    pub fn parse(coordinates: &str) -> Result<Self> {
        let invalid = || {
            Error::invalid_format("coordinates", coordinates).with_operation("artifact::parse")
        };

        let parts: Vec<&str> = coordinates.trim().split(':').map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid());
        }

        match parts.as_slice() {
            [group, artifact, version] => Ok(Self::new(*group, *artifact, *version)),
            [group, artifact, version, classifier] => {
                Ok(Self::new(*group, *artifact, *version).with_classifier(*classifier))
            }
            _ => Err(invalid()),
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    /// The coordinate string, without scope.
    pub fn coordinates(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.version, classifier
            ),
            None => format!("{}:{}:{}", self.group_id, self.artifact_id, self.version),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph_error::ErrorKind;

    #[test]
    fn parses_three_part_coordinates() {
        let artifact = Artifact::parse("com.example:core:1.2.0").unwrap();
        assert_eq!(artifact.group_id(), "com.example");
        assert_eq!(artifact.artifact_id(), "core");
        assert_eq!(artifact.version(), "1.2.0");
        assert_eq!(artifact.classifier(), None);
        assert_eq!(artifact.scope(), None);
    }

    #[test]
    fn parses_classifier() {
        let artifact = Artifact::parse("com.example:core:1.2.0:tests").unwrap();
        assert_eq!(artifact.classifier(), Some("tests"));
        assert_eq!(artifact.coordinates(), "com.example:core:1.2.0:tests");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "com.example", "com.example:core", "a::1.0", "a:b:c:d:e"] {
            let err = Artifact::parse(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input {bad:?}");
        }
    }

    #[test]
    fn scope_is_not_part_of_coordinates() {
        let artifact = Artifact::new("org.lib", "l1", "2.0").with_scope(Scope::Test);
        assert_eq!(artifact.to_string(), "org.lib:l1:2.0");
    }

    #[test]
    fn scope_names_parse_case_insensitively() {
        assert_eq!(Scope::parse("test").unwrap(), Scope::Test);
        assert_eq!(Scope::parse(" Provided ").unwrap(), Scope::Provided);
        assert_eq!(Scope::Runtime.to_string(), "runtime");
        assert_eq!(
            Scope::parse("optional").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }
}
