use thiserror::Error;
use wireframe_algebra::AlgebraError;

/// Failures of the geometry layer.
///
/// [`GeometryError::NoIntersection`] is an expected, common outcome of
/// per-edge clipping and callers are supposed to catch it and skip the edge;
/// every other kind indicates a programming or data error and should abort
/// the current operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),

  #[error("no intersection")]
  NoIntersection,

  #[error(transparent)]
  Algebra(#[from] AlgebraError),
}
