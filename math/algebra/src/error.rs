use thiserror::Error;

/// Failures of the algebra layer. All of these indicate a programming or
/// data error on the caller's side; none are recoverable mid-operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
  #[error("index {index} out of range for dimension {dimension}")]
  IndexOutOfRange { index: usize, dimension: usize },

  #[error("operation requires at least {required} components, found {found}")]
  InvalidDimension { required: usize, found: usize },

  #[error("matrix of {rows}x{columns} is not square")]
  NotSquare { rows: usize, columns: usize },

  #[error("matrix is singular")]
  Singular,

  #[error("division by zero")]
  DivideByZero,
}
