//! Interface to the external dependency resolver.

use crate::Result;
use crate::filter::ArtifactFilter;
use crate::project::Project;
use crate::tree::DependencyTree;

/// Produces the resolved dependency tree of one project.
///
/// The returned tree is rooted at the project's own artifact. Failures are
/// reported as `ErrorKind::ResolutionFailed` errors; the graph factories
/// never retry them.
pub trait DependencyResolver {
    fn resolve(&self, project: &Project, filter: &dyn ArtifactFilter) -> Result<DependencyTree>;
}

impl<R: DependencyResolver + ?Sized> DependencyResolver for &R {
    fn resolve(&self, project: &Project, filter: &dyn ArtifactFilter) -> Result<DependencyTree> {
        (**self).resolve(project, filter)
    }
}
