//! Elementwise and algebraic operations for [`Matrix`].
//!
//! Binary operations validate shapes up front and error with
//! [`MatrixError::DimensionMismatch`] — nothing is ever silently truncated.
//! The algebra is exposed as named `Result`-returning methods; the only
//! operator-trait impls are the infallible ones (`Neg`, `PartialEq`).

use core::ops::Neg;

use crate::error::{MatrixError, Result};
use crate::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Unary
    // ------------------------------------------------------------------

    /// Elementwise negation, as a new matrix.
    pub fn negate(&self) -> Matrix<T> {
        self.map(|z| -z)
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = vec![T::zero(); self.order()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix::from_raw(self.cols, self.rows, data)
    }

    /// Replace every entry `x + iy` with `x - iy`.
    pub fn conjugate(&self) -> Matrix<T> {
        self.map(Scalar::conj)
    }

    /// Conjugate transpose `Aᴴ`.
    pub fn conj_transpose(&self) -> Matrix<T> {
        self.conjugate().transpose()
    }

    /// The matrix of real parts (imaginary components dropped to zero).
    pub fn real(&self) -> Matrix<T> {
        self.map(|z| T::from_real(z.re()))
    }

    /// The matrix of imaginary parts, as real entries.
    pub fn imag(&self) -> Matrix<T> {
        self.map(|z| T::from_real(z.im()))
    }

    // ------------------------------------------------------------------
    // Matrix-matrix arithmetic
    // ------------------------------------------------------------------

    /// Elementwise addition. Operands must share a shape.
    pub fn add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(rhs, "add", |a, b| a + b)
    }

    /// Elementwise subtraction, defined as `a + (-b)`.
    pub fn sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(rhs, "sub", |a, b| a + (-b))
    }

    /// Matrix product. Requires `self.cols == rhs.rows`; the result is
    /// `(self.rows, rhs.cols)`.
    pub fn mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "mul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let (rows, cols, inner) = (self.rows, rhs.cols, self.cols);
        let mut data = vec![T::zero(); rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc += self.data[i * inner + k] * rhs.data[k * cols + j];
                }
                data[i * cols + j] = acc;
            }
        }
        Ok(Matrix::from_raw(rows, cols, data))
    }

    /// Matrix division `A / B`.
    ///
    /// `B` must be square and `self.cols == rhs.rows`. When the operands are
    /// elementwise-equal the result is the identity of order
    /// `min(self.rows, rhs.cols)`; otherwise `A × B⁻¹`, which can fail with
    /// [`MatrixError::Singular`].
    pub fn div(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if !rhs.is_square() {
            return Err(MatrixError::NotSquare {
                rows: rhs.rows,
                cols: rhs.cols,
            });
        }
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "div",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        if self == rhs {
            return Ok(Matrix::identity(self.rows.min(rhs.cols)));
        }
        self.mul(&rhs.inverse()?)
    }

    // ------------------------------------------------------------------
    // Matrix-scalar broadcast
    // ------------------------------------------------------------------

    /// Add `scalar` to every element.
    pub fn add_scalar(&self, scalar: T) -> Matrix<T> {
        self.map(|z| z + scalar)
    }

    /// Subtract `scalar` from every element.
    pub fn sub_scalar(&self, scalar: T) -> Matrix<T> {
        self.map(|z| z - scalar)
    }

    /// Multiply every element by `scalar`. Scalar-matrix and matrix-scalar
    /// products are the same operation.
    pub fn mul_scalar(&self, scalar: T) -> Matrix<T> {
        self.map(|z| z * scalar)
    }

    /// Divide every element by `scalar`.
    ///
    /// Dividing by the exact zero scalar fails with
    /// [`MatrixError::DivideByZero`]; the error propagates to the caller
    /// rather than being swallowed.
    pub fn div_scalar(&self, scalar: T) -> Result<Matrix<T>> {
        if scalar == T::zero() {
            return Err(MatrixError::DivideByZero);
        }
        Ok(self.mul_scalar(scalar.recip()))
    }

    // ------------------------------------------------------------------
    // Concatenation
    // ------------------------------------------------------------------

    /// Horizontal concatenation `[self | rhs]`. Row counts must agree.
    pub fn hconcat(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "hconcat",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let cols = self.cols + rhs.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
            data.extend_from_slice(&rhs.data[i * rhs.cols..(i + 1) * rhs.cols]);
        }
        Ok(Matrix::from_raw(self.rows, cols, data))
    }

    /// Vertical concatenation, `self` on top of `rhs`. Column counts must
    /// agree.
    pub fn vconcat(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "vconcat",
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let mut data = Vec::with_capacity((self.rows + rhs.rows) * self.cols);
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&rhs.data);
        Ok(Matrix::from_raw(self.rows + rhs.rows, self.cols, data))
    }

    // ------------------------------------------------------------------
    // Variadic folds
    // ------------------------------------------------------------------

    /// Sum a non-empty sequence of matrices.
    pub fn sum_all(operands: &[&Matrix<T>]) -> Result<Matrix<T>> {
        Self::fold_all(operands, "sum_all", Matrix::add)
    }

    /// Multiply a non-empty sequence of matrices left to right.
    pub fn product_all(operands: &[&Matrix<T>]) -> Result<Matrix<T>> {
        Self::fold_all(operands, "product_all", Matrix::mul)
    }

    /// Horizontally concatenate a non-empty sequence of matrices.
    pub fn hconcat_all(operands: &[&Matrix<T>]) -> Result<Matrix<T>> {
        Self::fold_all(operands, "hconcat_all", Matrix::hconcat)
    }

    /// Vertically concatenate a non-empty sequence of matrices.
    pub fn vconcat_all(operands: &[&Matrix<T>]) -> Result<Matrix<T>> {
        Self::fold_all(operands, "vconcat_all", Matrix::vconcat)
    }

    fn fold_all<F>(operands: &[&Matrix<T>], op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(&Matrix<T>, &Matrix<T>) -> Result<Matrix<T>>,
    {
        let (first, rest) = operands
            .split_first()
            .ok_or(MatrixError::EmptyOperands { op })?;
        let mut acc = (*first).clone();
        for &m in rest {
            acc = f(&acc, m)?;
        }
        Ok(acc)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
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

    fn mat(rows: usize, cols: usize, entries: &[f64]) -> CMatrix64 {
        let data = entries.iter().map(|&x| c(x, 0.0)).collect();
        Matrix::from_vec(data, rows, cols).unwrap()
    }

    #[test]
    fn test_negate() {
        let m = mat(2, 2, &[1.0, -2.0, 3.0, -4.0]);
        assert_eq!(-&m, mat(2, 2, &[-1.0, 2.0, -3.0, 4.0]));
    }

    #[test]
    fn test_add_sub() {
        let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = mat(2, 2, &[9.0, 8.0, 7.0, 6.0]);
        assert_eq!(a.add(&b).unwrap(), mat(2, 2, &[10.0, 10.0, 10.0, 10.0]));
        assert_eq!(a.sub(&b).unwrap(), mat(2, 2, &[-8.0, -6.0, -4.0, -2.0]));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                op: "add",
                left: (2, 2),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_mul() {
        let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = mat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let p = a.mul(&b).unwrap();
        assert_eq!(p, mat(2, 2, &[58.0, 64.0, 139.0, 154.0]));
        assert!(b.mul(&b).is_err());
    }

    #[test]
    fn test_mul_complex_entries() {
        // (i) * (i) = -1
        let i = CMatrix64::scalar(c(0.0, 1.0));
        assert_eq!(i.mul(&i).unwrap(), CMatrix64::scalar(c(-1.0, 0.0)));
    }

    #[test]
    fn test_identity_laws() {
        let m = mat(3, 3, &[2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0]);
        let eye = CMatrix64::identity(3);
        assert_eq!(m.mul(&eye).unwrap(), m);
        assert_eq!(eye.mul(&m).unwrap(), m);
    }

    #[test]
    fn test_div_equal_operands_yields_identity() {
        let m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.div(&m).unwrap(), CMatrix64::identity(2));
        // the special case applies even to a singular divisor
        let s = mat(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(s.div(&s).unwrap(), CMatrix64::identity(2));
    }

    #[test]
    fn test_div_general() {
        let a = mat(2, 2, &[1.0, 0.0, 0.0, 2.0]);
        let b = mat(2, 2, &[2.0, 0.0, 0.0, 4.0]);
        let q = a.div(&b).unwrap();
        assert_eq!(q, mat(2, 2, &[0.5, 0.0, 0.0, 0.5]));
    }

    #[test]
    fn test_div_requires_square_divisor() {
        let a = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = mat(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(matches!(a.div(&b), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_div_singular_divisor() {
        let a = mat(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let s = mat(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(a.div(&s), Err(MatrixError::Singular));
    }

    #[test]
    fn test_scalar_broadcast() {
        let m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.add_scalar(c(1.0, 0.0)), mat(2, 2, &[2.0, 3.0, 4.0, 5.0]));
        assert_eq!(m.sub_scalar(c(1.0, 0.0)), mat(2, 2, &[0.0, 1.0, 2.0, 3.0]));
        assert_eq!(m.mul_scalar(c(2.0, 0.0)), mat(2, 2, &[2.0, 4.0, 6.0, 8.0]));
        assert_eq!(
            m.div_scalar(c(2.0, 0.0)).unwrap(),
            mat(2, 2, &[0.5, 1.0, 1.5, 2.0])
        );
    }

    #[test]
    fn test_div_scalar_by_zero_propagates() {
        let m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.div_scalar(c(0.0, 0.0)), Err(MatrixError::DivideByZero));
    }

    #[test]
    fn test_hconcat() {
        let eye = CMatrix64::identity(2);
        let z = CMatrix64::zeros(2, 1);
        let m = eye.hconcat(&z).unwrap();
        assert_eq!(m, mat(2, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_vconcat() {
        let a = mat(1, 2, &[1.0, 2.0]);
        let b = mat(2, 2, &[3.0, 4.0, 5.0, 6.0]);
        let m = a.vconcat(&b).unwrap();
        assert_eq!(m, mat(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_concat_shape_mismatch() {
        let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = mat(3, 1, &[1.0, 2.0, 3.0]);
        assert!(a.hconcat(&b).is_err());
        assert!(a.vconcat(&b).is_err());
    }

    #[test]
    fn test_concat_submatrix_roundtrip() {
        let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = mat(2, 3, &[5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let wide = a.hconcat(&b).unwrap();
        assert_eq!(wide.sub_matrix(0, 1, 0, 1).unwrap(), a);
        assert_eq!(wide.sub_matrix(0, 1, 2, 4).unwrap(), b);

        let tall = a.vconcat(&mat(1, 2, &[9.0, 9.0])).unwrap();
        assert_eq!(tall.sub_matrix(0, 1, 0, 1).unwrap(), a);
    }

    #[test]
    fn test_transpose_involution() {
        let m = mat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.at(0, 1).unwrap(), c(4.0, 0.0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_conjugate_involution() {
        let m = CMatrix64::from_rows(vec![
            vec![c(1.0, 2.0), c(3.0, -4.0)],
            vec![c(0.0, 1.0), c(5.0, 0.0)],
        ])
        .unwrap();
        let g = m.conjugate();
        assert_eq!(g.at(0, 0).unwrap(), c(1.0, -2.0));
        assert_eq!(g.conjugate(), m);
    }

    #[test]
    fn test_conj_transpose() {
        let m = CMatrix64::from_rows(vec![vec![c(1.0, 2.0), c(3.0, 4.0)]]).unwrap();
        let h = m.conj_transpose();
        assert_eq!(h.shape(), (2, 1));
        assert_eq!(h.at(0, 0).unwrap(), c(1.0, -2.0));
        assert_eq!(h.at(1, 0).unwrap(), c(3.0, -4.0));
    }

    #[test]
    fn test_real_imag_split() {
        let m = CMatrix64::from_rows(vec![vec![c(1.0, 2.0), c(-3.0, 4.0)]]).unwrap();
        assert_eq!(m.real(), mat(1, 2, &[1.0, -3.0]));
        assert_eq!(m.imag(), mat(1, 2, &[2.0, 4.0]));
    }

    #[test]
    fn test_variadic_folds() {
        let a = mat(1, 1, &[1.0]);
        let b = mat(1, 1, &[2.0]);
        let d = mat(1, 1, &[3.0]);
        assert_eq!(
            CMatrix64::sum_all(&[&a, &b, &d]).unwrap(),
            mat(1, 1, &[6.0])
        );
        assert_eq!(
            CMatrix64::product_all(&[&b, &d]).unwrap(),
            mat(1, 1, &[6.0])
        );
        assert_eq!(
            CMatrix64::hconcat_all(&[&a, &b, &d]).unwrap(),
            mat(1, 3, &[1.0, 2.0, 3.0])
        );
        assert_eq!(
            CMatrix64::vconcat_all(&[&a, &b]).unwrap(),
            mat(2, 1, &[1.0, 2.0])
        );
    }

    #[test]
    fn test_variadic_fold_empty() {
        assert_eq!(
            CMatrix64::sum_all(&[]),
            Err(MatrixError::EmptyOperands { op: "sum_all" })
        );
    }
}
