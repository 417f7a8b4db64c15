//! Artifact inclusion filters.
//!
//! Filters are pure predicates: every visited node is tested once and
//! excluded nodes never reach the graph.

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::artifact::{Artifact, Scope};
use crate::{Error, Result};

/// Decides whether an artifact belongs in the graph.
pub trait ArtifactFilter {
    fn include(&self, artifact: &Artifact) -> bool;
}

impl<F> ArtifactFilter for F
where
    F: Fn(&Artifact) -> bool,
{
    fn include(&self, artifact: &Artifact) -> bool {
        self(artifact)
    }
}

/// Includes everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ArtifactFilter for AcceptAll {
    fn include(&self, _artifact: &Artifact) -> bool {
        true
    }
}

/// A compiled `group[:artifact[:version[:classifier]]]` pattern.
///
/// Each segment matches the whole coordinate part and may use `*` as a
/// wildcard. Omitted trailing segments match anything. An artifact without
/// classifier matches a classifier segment only if that segment is `*`.
#[derive(Debug, Clone)]
struct CoordinatePattern {
    segments: Vec<Regex>,
}

impl CoordinatePattern {
    fn compile(pattern: &str) -> Result<Self> {
        let invalid = || Error::invalid_format("pattern", pattern).with_operation("filter::compile");

        let parts: Vec<&str> = pattern.trim().split(':').collect();
        if parts.len() > 4 || parts.iter().any(|part| part.trim().is_empty()) {
            return Err(invalid());
        }

        let segments = parts
            .iter()
            .map(|part| {
                let body = regex::escape(part.trim()).replace("\\*", ".*");
                Regex::new(&format!("^{body}$")).map_err(|err| invalid().set_source(err))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    fn matches(&self, artifact: &Artifact) -> bool {
        let parts = [
            artifact.group_id(),
            artifact.artifact_id(),
            artifact.version(),
            artifact.classifier().unwrap_or(""),
        ];
        self.segments
            .iter()
            .zip(parts)
            .all(|(segment, part)| segment.is_match(part))
    }
}

/// Include/exclude filter over coordinate patterns.
///
/// With no include patterns everything is included. An exclude match
/// always wins over an include match.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    includes: Vec<CoordinatePattern>,
    excludes: Vec<CoordinatePattern>,
}

impl PatternFilter {
    pub fn new<I, E, S, T>(includes: I, excludes: E) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            includes: includes
                .into_iter()
                .map(|p| CoordinatePattern::compile(p.as_ref()))
                .collect::<Result<_>>()?,
            excludes: excludes
                .into_iter()
                .map(|p| CoordinatePattern::compile(p.as_ref()))
                .collect::<Result<_>>()?,
        })
    }
}

impl ArtifactFilter for PatternFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        let included =
            self.includes.is_empty() || self.includes.iter().any(|p| p.matches(artifact));
        included && !self.excludes.iter().any(|p| p.matches(artifact))
    }
}

/// Includes artifacts whose scope is in the accepted set.
///
/// Artifacts without a scope (projects and tree roots) always pass.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    scopes: HashSet<Scope>,
}

impl ScopeFilter {
    pub fn new(scopes: impl IntoIterator<Item = Scope>) -> Self {
        Self {
            scopes: scopes.into_iter().collect(),
        }
    }
}

impl ArtifactFilter for ScopeFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        artifact
            .scope()
            .is_none_or(|scope| self.scopes.contains(&scope))
    }
}

/// Includes an artifact only if every inner filter does.
#[derive(Default)]
pub struct AndFilter {
    filters: Vec<Box<dyn ArtifactFilter>>,
}

impl AndFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl ArtifactFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ArtifactFilter for AndFilter {
    fn include(&self, artifact: &Artifact) -> bool {
        self.filters.iter().all(|filter| filter.include(artifact))
    }
}

impl fmt::Debug for AndFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}
