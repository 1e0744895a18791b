//! The elimination kernel: determinant, minors and cofactors, adjoint,
//! inverse, and the two echelon forms.
//!
//! The determinant is the classical cofactor expansion along the first
//! column — deliberately the naive recursive algorithm, with its `O(n!)`
//! cost, and the inverse is `adjoint / det`. The echelon pass pivots on the
//! largest modulus in each column; its zero test is exact, while the
//! back-elimination pass of the reduced form scans with [`crate::TOLERANCE`].
//! The two policies are intentionally distinct.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::{Scalar, TOLERANCE};

impl<T: Scalar> Matrix<T> {
    /// The determinant. Square matrices only.
    ///
    /// `1×1` yields the single entry and `2×2` yields `ad - bc`; larger
    /// orders expand along the first column:
    /// `det = Σ_i a[i][0] · cofactor(i, 0)`.
    ///
    /// ```
    /// # use argand_core::CMatrix64;
    /// # use num_complex::Complex;
    /// let m = CMatrix64::from_rows(vec![
    ///     vec![Complex::new(4.0, 0.0), Complex::new(3.0, 0.0)],
    ///     vec![Complex::new(6.0, 0.0), Complex::new(3.0, 0.0)],
    /// ]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), Complex::new(-6.0, 0.0));
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let n = self.rows();
        let a = self.as_slice();
        if n == 1 {
            return Ok(a[0]);
        }
        if n == 2 {
            return Ok(a[0] * a[3] - a[1] * a[2]);
        }
        let mut det = T::zero();
        for i in 0..n {
            det += a[i * n] * self.cofactor(i, 0)?;
        }
        Ok(det)
    }

    /// The minor `M(row, col)`: the determinant of the matrix with that row
    /// and column excised. Square matrices only; indices wrap.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.remove_row_col(row, col)?.determinant()
    }

    /// The signed minor `(-1)^(row+col) · M(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// The adjoint: the transposed cofactor matrix. Square matrices only.
    pub fn adjoint(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let n = self.rows();
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                data[i * n + j] = self.cofactor(j, i)?;
            }
        }
        Ok(Matrix::from_raw(n, n, data))
    }

    /// The inverse. Square matrices only; fails with
    /// [`MatrixError::Singular`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatrixError::Singular);
        }
        if self.cols() == 1 {
            return Ok(Matrix::scalar(det.recip()));
        }
        self.adjoint()?.div_scalar(det)
    }

    /// Row echelon form via partial pivoting.
    ///
    /// Columns are processed left to right. Each step picks the
    /// largest-modulus entry from the current row downward; a column that is
    /// exactly zero from there down advances the column without consuming a
    /// row. The pivot row is swapped into place, normalized to a leading 1,
    /// and used to clear the column below. Stops when the rows or the
    /// columns run out.
    pub fn row_echelon(&self) -> Matrix<T> {
        let mut echelon = self.clone();
        let (rows, cols) = echelon.shape();
        let data = echelon.as_mut_slice();
        let (mut row, mut col) = (0, 0);
        while row < rows && col < cols {
            // largest modulus at or below the current row
            let mut max_pivot = T::zero();
            let mut pivot_row = row;
            for i in row..rows {
                let candidate = data[i * cols + col];
                if candidate.modulus() > max_pivot.modulus() {
                    pivot_row = i;
                    max_pivot = candidate;
                }
            }
            if max_pivot == T::zero() {
                col += 1;
                continue;
            }
            if row != pivot_row {
                for j in 0..cols {
                    data.swap(row * cols + j, pivot_row * cols + j);
                }
            }
            // leading 1
            for j in col..cols {
                data[row * cols + j] = data[row * cols + j] / max_pivot;
            }
            // zeros below
            for i in (row + 1)..rows {
                let multiple = data[i * cols + col];
                for j in col..cols {
                    let v = multiple * data[row * cols + j];
                    data[i * cols + j] -= v;
                }
            }
            row += 1;
            col += 1;
        }
        echelon
    }

    /// Reduced row echelon form.
    ///
    /// Runs [`row_echelon`](Self::row_echelon), then walks the rows bottom
    /// up: the leftmost column whose modulus clears [`crate::TOLERANCE`]
    /// becomes the pivot and is eliminated from every row above. Rows with
    /// no such column are skipped.
    pub fn reduced_row_echelon(&self) -> Matrix<T> {
        let mut reduced = self.row_echelon();
        let (rows, cols) = reduced.shape();
        let tol = T::real_from_f64(TOLERANCE);
        let data = reduced.as_mut_slice();
        for row in (0..rows).rev() {
            let Some(col) = (0..cols).find(|&j| data[row * cols + j].modulus() > tol) else {
                continue;
            };
            for i in (0..row).rev() {
                let multiple = data[i * cols + col];
                for j in 0..cols {
                    let v = multiple * data[row * cols + j];
                    data[i * cols + j] -= v;
                }
            }
        }
        reduced
    }
}
