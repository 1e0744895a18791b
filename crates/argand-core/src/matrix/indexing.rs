//! Sub-matrix extraction and in-place row/column operations.
//!
//! Extraction validates every index against the current bounds and errors
//! with [`MatrixError::OutOfRange`]. The mutators return `&mut Self` so
//! elimination-style call chains read naturally.

use crate::error::{MatrixError, Result};
use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Row / column extraction
    // ------------------------------------------------------------------

    /// The `i`-th row as a `1 × cols` matrix.
    pub fn row(&self, i: usize) -> Result<Matrix<T>> {
        if i >= self.rows {
            return Err(MatrixError::OutOfRange {
                index: i,
                len: self.rows,
            });
        }
        let data = self.data[i * self.cols..(i + 1) * self.cols].to_vec();
        Ok(Matrix::from_raw(1, self.cols, data))
    }

    /// The `j`-th column as a `rows × 1` matrix.
    pub fn column(&self, j: usize) -> Result<Matrix<T>> {
        if j >= self.cols {
            return Err(MatrixError::OutOfRange {
                index: j,
                len: self.cols,
            });
        }
        let data = (0..self.rows)
            .map(|i| self.data[i * self.cols + j])
            .collect();
        Ok(Matrix::from_raw(self.rows, 1, data))
    }

    /// Split the matrix into its row vectors.
    pub fn row_vectors(&self) -> Vec<Matrix<T>> {
        (0..self.rows)
            .map(|i| {
                let data = self.data[i * self.cols..(i + 1) * self.cols].to_vec();
                Matrix::from_raw(1, self.cols, data)
            })
            .collect()
    }

    /// Split the matrix into its column vectors.
    pub fn column_vectors(&self) -> Vec<Matrix<T>> {
        (0..self.cols)
            .map(|j| {
                let data = (0..self.rows)
                    .map(|i| self.data[i * self.cols + j])
                    .collect();
                Matrix::from_raw(self.rows, 1, data)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Sub-matrix extraction
    // ------------------------------------------------------------------

    /// Excise one row and one column, yielding `(rows-1) × (cols-1)`.
    ///
    /// Like element access, the indices wrap modulo the current shape.
    pub fn remove_row_col(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let row = row % self.rows;
        let col = col % self.cols;
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Ok(Matrix::from_raw(self.rows - 1, self.cols - 1, data))
    }

    /// Extract the inclusive range `[i0, i1] × [j0, j1]`.
    pub fn sub_matrix(&self, i0: usize, i1: usize, j0: usize, j1: usize) -> Result<Matrix<T>> {
        self.check_range(i0, i1, self.rows)?;
        self.check_range(j0, j1, self.cols)?;
        let mut data = Vec::with_capacity((i1 - i0 + 1) * (j1 - j0 + 1));
        for i in i0..=i1 {
            data.extend_from_slice(&self.data[i * self.cols + j0..=i * self.cols + j1]);
        }
        Ok(Matrix::from_raw(i1 - i0 + 1, j1 - j0 + 1, data))
    }

    /// Extract the rows and columns named by two index lists.
    pub fn sub_matrix_select(&self, row_idx: &[usize], col_idx: &[usize]) -> Result<Matrix<T>> {
        self.check_indices(row_idx, self.rows)?;
        self.check_indices(col_idx, self.cols)?;
        let mut data = Vec::with_capacity(row_idx.len() * col_idx.len());
        for &i in row_idx {
            for &j in col_idx {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Ok(Matrix::from_raw(row_idx.len(), col_idx.len(), data))
    }

    /// Extract listed rows over the inclusive column range `[j0, j1]`.
    pub fn sub_matrix_rows(&self, row_idx: &[usize], j0: usize, j1: usize) -> Result<Matrix<T>> {
        self.check_indices(row_idx, self.rows)?;
        self.check_range(j0, j1, self.cols)?;
        let mut data = Vec::with_capacity(row_idx.len() * (j1 - j0 + 1));
        for &i in row_idx {
            data.extend_from_slice(&self.data[i * self.cols + j0..=i * self.cols + j1]);
        }
        Ok(Matrix::from_raw(row_idx.len(), j1 - j0 + 1, data))
    }

    /// Extract the inclusive row range `[i0, i1]` over listed columns.
    pub fn sub_matrix_cols(&self, i0: usize, i1: usize, col_idx: &[usize]) -> Result<Matrix<T>> {
        self.check_range(i0, i1, self.rows)?;
        self.check_indices(col_idx, self.cols)?;
        let mut data = Vec::with_capacity((i1 - i0 + 1) * col_idx.len());
        for i in i0..=i1 {
            for &j in col_idx {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Ok(Matrix::from_raw(i1 - i0 + 1, col_idx.len(), data))
    }

    fn check_range(&self, start: usize, end: usize, len: usize) -> Result<()> {
        if end >= len {
            return Err(MatrixError::OutOfRange { index: end, len });
        }
        if start > end {
            return Err(MatrixError::OutOfRange {
                index: start,
                len: end + 1,
            });
        }
        Ok(())
    }

    fn check_indices(&self, indices: &[usize], len: usize) -> Result<()> {
        for &idx in indices {
            if idx >= len {
                return Err(MatrixError::OutOfRange { index: idx, len });
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // In-place row / column mutators
    // ------------------------------------------------------------------

    /// Swap two rows. Equal indices are a no-op.
    pub fn swap_rows(&mut self, i0: usize, i1: usize) -> Result<&mut Self> {
        if i0 >= self.rows || i1 >= self.rows {
            return Err(MatrixError::OutOfRange {
                index: i0.max(i1),
                len: self.rows,
            });
        }
        if i0 != i1 {
            for j in 0..self.cols {
                self.data.swap(i0 * self.cols + j, i1 * self.cols + j);
            }
        }
        Ok(self)
    }

    /// Swap two columns. Equal indices are a no-op.
    pub fn swap_columns(&mut self, j0: usize, j1: usize) -> Result<&mut Self> {
        if j0 >= self.cols || j1 >= self.cols {
            return Err(MatrixError::OutOfRange {
                index: j0.max(j1),
                len: self.cols,
            });
        }
        if j0 != j1 {
            for i in 0..self.rows {
                self.data.swap(i * self.cols + j0, i * self.cols + j1);
            }
        }
        Ok(self)
    }

    /// Multiply a row by a scalar. The row index wraps modulo `rows`.
    pub fn scale_row(&mut self, row: usize, scalar: T) -> Result<&mut Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let row = row % self.rows;
        for j in 0..self.cols {
            self.data[row * self.cols + j] *= scalar;
        }
        Ok(self)
    }

    /// Add `scale` times row `source` into row `target`. Both indices wrap
    /// modulo `rows`.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: T) -> Result<&mut Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let target = target % self.rows;
        let source = source % self.rows;
        for j in 0..self.cols {
            let v = self.data[source * self.cols + j] * scale;
            self.data[target * self.cols + j] += v;
        }
        Ok(self)
    }

    /// Accumulate the listed rows into row `target`. All indices are
    /// bounds-checked.
    pub fn add_rows(&mut self, target: usize, sources: &[usize]) -> Result<&mut Self> {
        if target >= self.rows {
            return Err(MatrixError::OutOfRange {
                index: target,
                len: self.rows,
            });
        }
        self.check_indices(sources, self.rows)?;
        for &src in sources {
            for j in 0..self.cols {
                let v = self.data[src * self.cols + j];
                self.data[target * self.cols + j] += v;
            }
        }
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Symmetrize
    // ------------------------------------------------------------------

    /// Copy the upper half onto the lower half. Square matrices only.
    pub fn symmetrize_down(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for j in 0..self.cols {
            for i in (j + 1)..self.rows {
                self.data[i * self.cols + j] = self.data[j * self.cols + i];
            }
        }
        Ok(())
    }

    /// Copy the lower half onto the upper half. Square matrices only.
    pub fn symmetrize_up(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                self.data[i * self.cols + j] = self.data[j * self.cols + i];
            }
        }
        Ok(())
    }
}
