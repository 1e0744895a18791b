//! `argand-core` — Dense complex-matrix engine.
//!
//! A mutable, arbitrary-size, complex-valued [`Matrix`] with the full
//! classical toolkit: elementwise and matrix algebra, elimination
//! (echelon forms, determinant, adjoint, inverse), derived analytics
//! (norms, condition numbers, structural predicates, characteristic
//! polynomial) and structural composition (sub-matrices, block assembly,
//! concatenation).
//!
//! # Design
//!
//! - The complex scalar is an external primitive ([`num_complex::Complex`]),
//!   consumed through the [`Scalar`] trait — the engine itself contains no
//!   complex arithmetic.
//! - Layers build strictly on each other: storage & shape, then elementwise
//!   arithmetic, then the elimination kernel, then the analytics that sit
//!   on top of it.
//! - Value semantics throughout: cloning deep-copies the grid, no two
//!   matrices ever share storage, and the type carries no interior
//!   mutability or synchronization.
//! - Fallible operations return [`Result`]; a failed call leaves its
//!   receiver untouched and usable.

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod scalar;

// Re-export key types at crate root for convenience, along with the
// complex-scalar crate the engine is built over.
pub use error::{MatrixError, Result};
pub use matrix::{CMatrix32, CMatrix64, Matrix};
pub use num_complex;
pub use scalar::Scalar;

/// Comparison tolerance for the tolerant checks: stochastic row sums and
/// the reduced-echelon pivot scan. Everything else — equality, singularity,
/// the echelon pivot search — compares exactly.
pub const TOLERANCE: f64 = 1e-5;

/// Items intended for glob-import: `use argand_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{MatrixError, Result};
    pub use crate::matrix::{CMatrix32, CMatrix64, Matrix};
    pub use crate::scalar::Scalar;
}
