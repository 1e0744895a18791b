//! Linear algebra on [`Matrix`]: the elimination kernel and the analytics
//! built on top of it.
//!
//! Everything here is implemented from scratch on the dense storage — no
//! BLAS/LAPACK bindings, no decomposition shortcuts. The split:
//!
//! | Module | Operations |
//! |--------|-----------|
//! | `elimination` | determinant, minor/cofactor, adjoint, inverse, row echelon, reduced row echelon |
//! | `analysis` | norms, condition numbers, structural predicates, characteristic polynomial |
//!
//! The determinant is the classical cofactor expansion (`O(n!)`), kept
//! deliberately: the engine favors the textbook recursion over an
//! elimination-based determinant.

mod analysis;
mod elimination;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::Scalar;

/// Compute the determinant of a square matrix.
///
/// ```
/// # use argand_core::{linalg, CMatrix64};
/// # use num_complex::Complex;
/// let eye = CMatrix64::identity(4);
/// assert_eq!(linalg::det(&eye).unwrap(), Complex::new(1.0, 0.0));
/// ```
pub fn det<T: Scalar>(m: &Matrix<T>) -> Result<T> {
    m.determinant()
}

/// Compute the inverse of a square, nonsingular matrix.
///
/// ```
/// # use argand_core::{linalg, CMatrix64};
/// let eye = CMatrix64::identity(3);
/// assert_eq!(linalg::inv(&eye).unwrap(), eye);
/// ```
pub fn inv<T: Scalar>(m: &Matrix<T>) -> Result<Matrix<T>> {
    m.inverse()
}
