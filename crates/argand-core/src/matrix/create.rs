//! Matrix creation: fills, diagonals, vectors, raw grids, block assembly.

use crate::error::{MatrixError, Result};
use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create an `rows × cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_raw(rows, cols, vec![T::zero(); rows * cols])
    }

    /// Create an `rows × cols` matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self::from_raw(rows, cols, vec![value; rows * cols])
    }

    /// Create an `rows × cols` matrix with `value` down the main diagonal
    /// and zeros elsewhere.
    pub fn with_diagonal(rows: usize, cols: usize, value: T) -> Self {
        let mut m = Self::zeros(rows, cols);
        for d in 0..rows.min(cols) {
            m.data[d * cols + d] = value;
        }
        m
    }

    /// Create the `n × n` identity matrix.
    ///
    /// ```
    /// # use argand_core::CMatrix64;
    /// let eye = CMatrix64::identity(3);
    /// assert!(eye.is_diagonal());
    /// ```
    pub fn identity(n: usize) -> Self {
        Self::with_diagonal(n, n, T::one())
    }

    /// Create a square matrix whose diagonal is the given slice.
    pub fn from_diagonal(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (d, &value) in diag.iter().enumerate() {
            m.data[d * n + d] = value;
        }
        m
    }

    /// Create an `rows × cols` matrix whose leading diagonal entries come
    /// from `diag`; diagonal slots past the slice stay zero.
    pub fn from_partial_diagonal(rows: usize, cols: usize, diag: &[T]) -> Self {
        let mut m = Self::zeros(rows, cols);
        for d in 0..rows.min(cols).min(diag.len()) {
            m.data[d * cols + d] = diag[d];
        }
        m
    }

    /// Create a `1 × 1` matrix holding `value`.
    pub fn scalar(value: T) -> Self {
        Self::from_raw(1, 1, vec![value])
    }

    /// Create a `1 × n` row vector from a slice.
    pub fn row_vector(values: &[T]) -> Self {
        Self::from_raw(1, values.len(), values.to_vec())
    }

    /// Create an `n × 1` column vector from a slice.
    pub fn column_vector(values: &[T]) -> Self {
        Self::from_raw(values.len(), 1, values.to_vec())
    }

    /// Create a matrix from a flat row-major vector and a shape.
    ///
    /// Errors when the vector length does not equal `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch {
                op: "from_vec",
                left: (rows, cols),
                right: (1, data.len()),
            });
        }
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Create a matrix from a grid of rows.
    ///
    /// Errors when the rows are ragged.
    pub fn from_rows(grid: Vec<Vec<T>>) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * cols);
        for row in &grid {
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    op: "from_rows",
                    left: (1, cols),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_raw(rows, cols, data))
    }

    /// Assemble the block matrix `[[A, B], [C, D]]`.
    ///
    /// Requires `a.rows == b.rows`, `c.rows == d.rows`, `a.cols == c.cols`
    /// and `b.cols == d.cols`.
    pub fn block(
        a: &Matrix<T>,
        b: &Matrix<T>,
        c: &Matrix<T>,
        d: &Matrix<T>,
    ) -> Result<Self> {
        if a.rows != b.rows || c.rows != d.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "block",
                left: a.shape(),
                right: if a.rows != b.rows { b.shape() } else { d.shape() },
            });
        }
        if a.cols != c.cols || b.cols != d.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "block",
                left: if a.cols != c.cols { a.shape() } else { b.shape() },
                right: if a.cols != c.cols { c.shape() } else { d.shape() },
            });
        }
        let rows = a.rows + c.rows;
        let cols = a.cols + b.cols;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..a.rows {
            data.extend_from_slice(&a.data[i * a.cols..(i + 1) * a.cols]);
            data.extend_from_slice(&b.data[i * b.cols..(i + 1) * b.cols]);
        }
        for i in 0..c.rows {
            data.extend_from_slice(&c.data[i * c.cols..(i + 1) * c.cols]);
            data.extend_from_slice(&d.data[i * d.cols..(i + 1) * d.cols]);
        }
        Ok(Self::from_raw(rows, cols, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::CMatrix64;
    use num_complex::Complex;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_zeros_and_filled() {
        let z = CMatrix64::zeros(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&x| x == c(0.0, 0.0)));

        let f = CMatrix64::filled(2, 2, c(1.5, -0.5));
        assert!(f.as_slice().iter().all(|&x| x == c(1.5, -0.5)));
    }

    #[test]
    fn test_identity() {
        let eye = CMatrix64::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
                assert_eq!(eye.at(i, j).unwrap(), expect);
            }
        }
    }

    #[test]
    fn test_with_diagonal_rectangular() {
        let m = CMatrix64::with_diagonal(2, 4, c(7.0, 0.0));
        assert_eq!(m.at(0, 0).unwrap(), c(7.0, 0.0));
        assert_eq!(m.at(1, 1).unwrap(), c(7.0, 0.0));
        assert_eq!(m.at(0, 2).unwrap(), c(0.0, 0.0));
        assert_eq!(m.at(1, 3).unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn test_from_diagonal() {
        let m = CMatrix64::from_diagonal(&[c(1.0, 0.0), c(2.0, 1.0), c(3.0, 0.0)]);
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.at(1, 1).unwrap(), c(2.0, 1.0));
        assert_eq!(m.at(2, 1).unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn test_from_partial_diagonal() {
        let m = CMatrix64::from_partial_diagonal(3, 3, &[c(5.0, 0.0)]);
        assert_eq!(m.at(0, 0).unwrap(), c(5.0, 0.0));
        // slots past the slice stay zero
        assert_eq!(m.at(1, 1).unwrap(), c(0.0, 0.0));
        assert_eq!(m.at(2, 2).unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn test_scalar_and_vectors() {
        let s = CMatrix64::scalar(c(2.0, 3.0));
        assert_eq!(s.shape(), (1, 1));

        let r = CMatrix64::row_vector(&[c(1.0, 0.0), c(2.0, 0.0)]);
        assert_eq!(r.shape(), (1, 2));

        let col = CMatrix64::column_vector(&[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert_eq!(col.shape(), (3, 1));
        assert_eq!(col.at(2, 0).unwrap(), c(3.0, 0.0));
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let r = CMatrix64::from_vec(vec![c(1.0, 0.0); 5], 2, 3);
        assert!(r.is_err());
    }

    #[test]
    fn test_from_rows() {
        let m = CMatrix64::from_rows(vec![
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0), c(4.0, 0.0)],
        ])
        .unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.at(1, 0).unwrap(), c(3.0, 0.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = CMatrix64::from_rows(vec![
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0)],
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn test_block_assembly() {
        let a = CMatrix64::identity(2);
        let b = CMatrix64::zeros(2, 1);
        let c_ = CMatrix64::zeros(1, 2);
        let d = CMatrix64::scalar(c(5.0, 0.0));
        let m = CMatrix64::block(&a, &b, &c_, &d).unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.at(0, 0).unwrap(), c(1.0, 0.0));
        assert_eq!(m.at(1, 1).unwrap(), c(1.0, 0.0));
        assert_eq!(m.at(2, 2).unwrap(), c(5.0, 0.0));
        assert_eq!(m.at(0, 2).unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn test_block_shape_mismatch() {
        let a = CMatrix64::zeros(2, 2);
        let b = CMatrix64::zeros(3, 1);
        let c_ = CMatrix64::zeros(1, 2);
        let d = CMatrix64::zeros(1, 1);
        assert!(CMatrix64::block(&a, &b, &c_, &d).is_err());
    }
}
