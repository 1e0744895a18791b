//! Dense 2-D complex matrix with value semantics.
//!
//! [`Matrix`] stores its elements contiguously in row-major order and owns
//! its storage outright: cloning deep-copies the grid and no two instances
//! ever alias. A `0×0` matrix is a valid value, distinct from any notion of
//! an absent matrix.
//!
//! Two indexing regimes coexist:
//!
//! - **Two-index access wraps.** `at(i, j)` reads row `i % rows`, column
//!   `j % cols`; there is no out-of-bounds condition, only a failure when a
//!   dimension is zero. Callers rely on the wraparound — do not "fix" it
//!   into a bounds check.
//! - **Single-index access is vector-only.** Legal on a `1×n` or `n×1`
//!   matrix; writing past the end grows the free dimension in place.

mod create;
mod display;
mod indexing;
mod ops;

use num_complex::Complex;

use crate::error::{MatrixError, Result};
use crate::Scalar;

/// A dense matrix of complex scalars with dynamic shape.
///
/// Elements are stored contiguously in row-major order. The matrix owns its
/// data and cloning performs a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Matrix over `Complex<f32>`.
pub type CMatrix32 = Matrix<Complex<f32>>;
/// Matrix over `Complex<f64>`.
pub type CMatrix64 = Matrix<Complex<f64>>;

impl<T: Scalar> Matrix<T> {
    /// Build a matrix from pre-sized row-major storage.
    ///
    /// Internal constructor; callers must pass `data.len() == rows * cols`.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    // ------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The product of rows and columns.
    #[inline]
    pub fn order(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether `other` has the same shape.
    #[inline]
    pub fn same_shape(&self, other: &Matrix<T>) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access — wrapping two-index form
    // ------------------------------------------------------------------

    /// Read the element at `(i, j)`, wrapping both indices modulo the
    /// current shape.
    ///
    /// Fails only when a dimension is zero; any index is otherwise legal.
    pub fn at(&self, i: usize, j: usize) -> Result<T> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[(i % self.rows) * self.cols + (j % self.cols)])
    }

    /// Write the element at `(i, j)`, wrapping like [`at`](Self::at).
    ///
    /// Never grows the matrix.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[(i % self.rows) * self.cols + (j % self.cols)] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Element access — single-index (vector) form
    // ------------------------------------------------------------------

    /// Read the `index`-th component of a row or column vector.
    ///
    /// Errors with [`MatrixError::NotVector`] unless `rows == 1` or
    /// `cols == 1`, and with [`MatrixError::OutOfRange`] past the end.
    pub fn vector_at(&self, index: usize) -> Result<T> {
        let len = if self.rows == 1 {
            self.cols
        } else if self.cols == 1 {
            self.rows
        } else {
            return Err(MatrixError::NotVector {
                rows: self.rows,
                cols: self.cols,
            });
        };
        if index >= len {
            return Err(MatrixError::OutOfRange { index, len });
        }
        Ok(self.data[index])
    }

    /// Write the `index`-th component of a row or column vector.
    ///
    /// Writing past the end grows the free dimension in place, zero-filling
    /// the newly created slots.
    pub fn vector_set(&mut self, index: usize, value: T) -> Result<()> {
        if self.rows == 1 {
            if index >= self.cols {
                self.resize(1, index + 1, true);
            }
        } else if self.cols == 1 {
            if index >= self.rows {
                self.resize(index + 1, 1, true);
            }
        } else {
            return Err(MatrixError::NotVector {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[index] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Change the shape in place.
    ///
    /// A same-shape call is a no-op. Without `preserve` the storage is
    /// reallocated and zero-filled. With `preserve` the region overlapping
    /// the old extent keeps its contents, cells beyond it are zero, and
    /// cells outside the new extent are dropped.
    pub fn resize(&mut self, new_rows: usize, new_cols: usize, preserve: bool) {
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }
        let mut data = vec![T::zero(); new_rows * new_cols];
        if preserve {
            let row_lim = self.rows.min(new_rows);
            let col_lim = self.cols.min(new_cols);
            for i in 0..row_lim {
                for j in 0..col_lim {
                    data[i * new_cols + j] = self.data[i * self.cols + j];
                }
            }
        }
        self.rows = new_rows;
        self.cols = new_cols;
        self.data = data;
    }

    /// Set the row count, preserving contents.
    pub fn set_rows(&mut self, rows: usize) {
        self.resize(rows, self.cols, true);
    }

    /// Set the column count, preserving contents.
    pub fn set_cols(&mut self, cols: usize) {
        self.resize(self.rows, cols, true);
    }

    // ------------------------------------------------------------------
    // Trace
    // ------------------------------------------------------------------

    /// Sum of the diagonal elements. Square matrices only.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let dims = self.rows.min(self.cols);
        Ok((0..dims).map(|d| self.data[d * self.cols + d]).sum())
    }

    // ------------------------------------------------------------------
    // Map / zip
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Combine two same-shaped matrices elementwise.
    ///
    /// `op` names the caller in the mismatch error.
    pub(crate) fn zip_map<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if !self.same_shape(other) {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    /// Shape check, then full elementwise **exact** equality. The exactness
    /// is load-bearing: singularity tests and most structural predicates
    /// are defined in terms of it.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}
