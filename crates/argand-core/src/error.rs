//! All errors returned by `argand-core`.

use thiserror::Error;

/// Failure kinds for matrix operations.
///
/// Every failure is scoped to the single operation that raised it; the
/// matrix involved stays valid and usable afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes do not agree for the requested operation.
    #[error("{op}: dimension mismatch between {left:?} and {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The operation requires a square matrix.
    #[error("operation requires a square matrix, got ({rows},{cols})")]
    NotSquare { rows: usize, cols: usize },

    /// Inverse or division requested on a matrix whose determinant is zero.
    #[error("singular matrix: determinant is zero")]
    Singular,

    /// An index argument lies outside the current bounds.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Wrapping element access on a matrix with a zero-sized dimension.
    #[error("element access on a ({rows},{cols}) matrix with a zero dimension")]
    ZeroDimension { rows: usize, cols: usize },

    /// Single-index access on a matrix that is neither a row nor a column
    /// vector.
    #[error("single-index access requires a row or column vector, got ({rows},{cols})")]
    NotVector { rows: usize, cols: usize },

    /// A matrix was divided by the zero scalar.
    #[error("division by zero scalar")]
    DivideByZero,

    /// A variadic operation received an empty operand list.
    #[error("{op}: expected at least one operand")]
    EmptyOperands { op: &'static str },
}

/// Convenience alias used throughout `argand-core`.
pub type Result<T> = std::result::Result<T, MatrixError>;
