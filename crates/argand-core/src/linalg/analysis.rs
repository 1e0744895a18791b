//! Derived analytics: norms, condition numbers, structural predicates, and
//! the characteristic polynomial.
//!
//! Most predicates compare exactly; `is_stochastic` is the one tolerant
//! predicate, using [`crate::TOLERANCE`] for its row sums. `is_nilpotent`
//! is a bounded heuristic, not a proof: it gives up after five squaring
//! steps.

use num_traits::{Float, One, Zero};

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Scalar, TOLERANCE};

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Norms and condition numbers
    // ------------------------------------------------------------------

    /// Frobenius norm: `sqrt(Σ Re(a · conj(a)))` over every entry.
    pub fn frobenius_norm(&self) -> T::Real {
        let mut sum_sqr = T::Real::zero();
        for &z in self.as_slice() {
            sum_sqr = sum_sqr + (z * z.conj()).re();
        }
        sum_sqr.sqrt()
    }

    /// Row-sum norm: the largest row total of entry moduli.
    pub fn row_sum_norm(&self) -> T::Real {
        let (rows, cols) = self.shape();
        let a = self.as_slice();
        let mut max = T::Real::zero();
        for i in 0..rows {
            let mut sum = T::Real::zero();
            for j in 0..cols {
                sum = sum + a[i * cols + j].modulus();
            }
            max = max.max(sum);
        }
        max
    }

    /// Column-sum norm: the largest column total of entry moduli.
    pub fn col_sum_norm(&self) -> T::Real {
        let (rows, cols) = self.shape();
        let a = self.as_slice();
        let mut max = T::Real::zero();
        for j in 0..cols {
            let mut sum = T::Real::zero();
            for i in 0..rows {
                sum = sum + a[i * cols + j].modulus();
            }
            max = max.max(sum);
        }
        max
    }

    /// Condition number under the row-sum norm:
    /// `‖M‖ · ‖M⁻¹‖`. Fails where the inverse fails.
    pub fn row_condition_number(&self) -> Result<T::Real> {
        Ok(self.row_sum_norm() * self.inverse()?.row_sum_norm())
    }

    /// Condition number under the column-sum norm.
    pub fn col_condition_number(&self) -> Result<T::Real> {
        Ok(self.col_sum_norm() * self.inverse()?.col_sum_norm())
    }

    // ------------------------------------------------------------------
    // Structural predicates
    // ------------------------------------------------------------------

    /// Every entry has zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.as_slice().iter().all(|z| z.im() == T::Real::zero())
    }

    /// Every entry has zero real part.
    pub fn is_imag(&self) -> bool {
        self.as_slice().iter().all(|z| z.re() == T::Real::zero())
    }

    /// Square with every off-diagonal entry exactly zero. Non-square input
    /// is simply not diagonal.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let (rows, cols) = self.shape();
        let a = self.as_slice();
        for i in 0..rows {
            for j in 0..cols {
                if i != j && a[i * cols + j] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// `M == Mᵀ`.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }

    /// `M == Mᴴ` (equal to its own conjugate transpose).
    pub fn is_hermitian(&self) -> bool {
        self.is_square() && *self == self.conj_transpose()
    }

    /// Whether the determinant is exactly zero. Propagates
    /// [`MatrixError::NotSquare`](crate::MatrixError::NotSquare) for
    /// non-square input.
    pub fn is_singular(&self) -> Result<bool> {
        Ok(self.determinant()? == T::zero())
    }

    /// Every real part is nonnegative and every row's real parts sum to 1
    /// within [`crate::TOLERANCE`]. Shape is not constrained.
    pub fn is_stochastic(&self) -> bool {
        let (rows, cols) = self.shape();
        let a = self.as_slice();
        let tol = T::real_from_f64(TOLERANCE);
        let one = T::Real::one();
        for i in 0..rows {
            let mut row_sum = T::Real::zero();
            for j in 0..cols {
                let re = a[i * cols + j].re();
                if re < T::Real::zero() {
                    return false;
                }
                row_sum = row_sum + re;
            }
            if (row_sum - one).abs() > tol {
                return false;
            }
        }
        true
    }

    /// Whether some power `M², …, M⁶` is exactly the zero matrix.
    ///
    /// Bounded at five multiplication steps; a nilpotent matrix of higher
    /// index reports `false`.
    pub fn is_nilpotent(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let null = Matrix::zeros(self.rows(), self.cols());
        let mut power = self.clone();
        for _ in 0..5 {
            power = match power.mul(self) {
                Ok(next) => next,
                Err(_) => return false,
            };
            if power == null {
                return true;
            }
        }
        false
    }

    /// `M · M == M`.
    pub fn is_idempotent(&self) -> bool {
        self.is_square()
            && self
                .mul(self)
                .map(|square| square == *self)
                .unwrap_or(false)
    }

    /// `M · M == I`.
    pub fn is_involutory(&self) -> bool {
        self.is_square()
            && self
                .mul(self)
                .map(|square| square == Matrix::identity(self.rows()))
                .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Characteristic polynomial
    // ------------------------------------------------------------------

    /// Coefficients of the characteristic polynomial, highest degree first,
    /// via the Faddeev–LeVerrier trace recursion:
    /// `c₀ = 1`, `B₀ = I`, then `D = M·Bₖ₋₁`, `cₖ = -tr(D)/k`,
    /// `Bₖ = D + cₖ·I` for `k = 1..n`.
    ///
    /// Returns `None` for non-square input.
    ///
    /// ```
    /// # use argand_core::CMatrix64;
    /// # use num_complex::Complex;
    /// let m = CMatrix64::from_diagonal(&[Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
    /// let coeffs = m.characteristic().unwrap();
    /// // x² - 5x + 6
    /// assert_eq!(coeffs, vec![
    ///     Complex::new(1.0, 0.0),
    ///     Complex::new(-5.0, 0.0),
    ///     Complex::new(6.0, 0.0),
    /// ]);
    /// ```
    pub fn characteristic(&self) -> Option<Vec<T>> {
        if !self.is_square() {
            return None;
        }
        let n = self.rows().min(self.cols());
        let identity = Matrix::identity(n);
        let mut coeffs = Vec::with_capacity(n + 1);
        coeffs.push(T::one());
        let mut b = identity.clone();
        for k in 1..=n {
            let d = self.mul(&b).ok()?;
            let ck = -(d.trace().ok()?) / T::from_real(T::real_from_f64(k as f64));
            b = d.add(&identity.mul_scalar(ck)).ok()?;
            coeffs.push(ck);
        }
        Some(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::matrix::{CMatrix64, Matrix};
    use approx::assert_relative_eq;
    use num_complex::Complex;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn mat(rows: usize, cols: usize, entries: &[f64]) -> CMatrix64 {
        let data = entries.iter().map(|&x| c(x, 0.0)).collect();
        Matrix::from_vec(data, rows, cols).unwrap()
    }

    #[test]
    fn test_frobenius_norm() {
        // sqrt(1 + 4 + 9 + 16) = sqrt(30)
        let m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(m.frobenius_norm(), 30.0_f64.sqrt(), epsilon = 1e-12);

        // |3+4i|² = 25
        let z = CMatrix64::scalar(c(3.0, 4.0));
        assert_relative_eq!(z.frobenius_norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_row_and_col_sum_norms() {
        let m = mat(2, 2, &[1.0, -2.0, 3.0, 4.0]);
        assert_relative_eq!(m.row_sum_norm(), 7.0, epsilon = 1e-12);
        assert_relative_eq!(m.col_sum_norm(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_condition_numbers() {
        let eye = CMatrix64::identity(3);
        assert_relative_eq!(eye.row_condition_number().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eye.col_condition_number().unwrap(), 1.0, epsilon = 1e-12);

        let s = mat(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(s.row_condition_number(), Err(MatrixError::Singular));
    }

    #[test]
    fn test_is_real_is_imag() {
        let r = mat(1, 2, &[1.0, -2.0]);
        assert!(r.is_real());
        assert!(!r.is_imag());

        let i = CMatrix64::from_rows(vec![vec![c(0.0, 1.0), c(0.0, -3.0)]]).unwrap();
        assert!(i.is_imag());
        assert!(!i.is_real());

        // zero is both
        let z = CMatrix64::zeros(2, 2);
        assert!(z.is_real() && z.is_imag());
    }

    #[test]
    fn test_is_diagonal() {
        assert!(CMatrix64::from_diagonal(&[c(1.0, 0.0), c(2.0, 0.0)]).is_diagonal());
        assert!(!mat(2, 2, &[1.0, 1.0, 0.0, 2.0]).is_diagonal());
        // non-square is never diagonal
        assert!(!CMatrix64::zeros(2, 3).is_diagonal());
    }

    #[test]
    fn test_is_symmetric_and_hermitian() {
        let s = mat(2, 2, &[1.0, 2.0, 2.0, 3.0]);
        assert!(s.is_symmetric());
        assert!(!mat(2, 2, &[1.0, 2.0, 3.0, 4.0]).is_symmetric());

        // hermitian but not symmetric
        let h = CMatrix64::from_rows(vec![
            vec![c(1.0, 0.0), c(2.0, 1.0)],
            vec![c(2.0, -1.0), c(3.0, 0.0)],
        ])
        .unwrap();
        assert!(h.is_hermitian());
        assert!(!h.is_symmetric());
    }

    #[test]
    fn test_is_singular() {
        assert!(mat(2, 2, &[1.0, 2.0, 2.0, 4.0]).is_singular().unwrap());
        assert!(!mat(2, 2, &[1.0, 2.0, 3.0, 4.0]).is_singular().unwrap());
        assert!(CMatrix64::zeros(2, 3).is_singular().is_err());
    }

    #[test]
    fn test_is_stochastic() {
        let m = mat(2, 2, &[0.5, 0.5, 0.25, 0.75]);
        assert!(m.is_stochastic());
        // a negative real part disqualifies
        assert!(!mat(1, 2, &[1.5, -0.5]).is_stochastic());
        // row sums off by more than the tolerance disqualify
        assert!(!mat(1, 2, &[0.5, 0.6]).is_stochastic());
        // a within-tolerance row sum passes
        assert!(mat(1, 2, &[0.5, 0.500001]).is_stochastic());
    }

    #[test]
    fn test_is_nilpotent() {
        // strictly upper triangular: N² = 0
        let n = mat(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        assert!(n.is_nilpotent());
        assert!(!CMatrix64::identity(2).is_nilpotent());
        assert!(!CMatrix64::zeros(2, 3).is_nilpotent());

        // 3x3 shift matrix: cube is zero, within the 5-step bound
        let shift = mat(3, 3, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert!(shift.is_nilpotent());
    }

    #[test]
    fn test_is_idempotent_and_involutory() {
        // projector: P² = P
        let p = mat(2, 2, &[1.0, 0.0, 0.0, 0.0]);
        assert!(p.is_idempotent());
        assert!(!p.is_involutory());

        // reflection: R² = I
        let r = mat(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert!(r.is_involutory());
        assert!(!r.is_idempotent());
    }

    #[test]
    fn test_identity_predicate_suite() {
        let eye = CMatrix64::identity(3);
        assert!(eye.is_diagonal());
        assert!(eye.is_idempotent());
        assert!(eye.is_involutory());
        assert!(eye.is_stochastic());
    }

    #[test]
    fn test_characteristic_diagonal() {
        let m = CMatrix64::from_diagonal(&[c(2.0, 0.0), c(3.0, 0.0)]);
        let coeffs = m.characteristic().unwrap();
        assert_eq!(coeffs, vec![c(1.0, 0.0), c(-5.0, 0.0), c(6.0, 0.0)]);
    }

    #[test]
    fn test_characteristic_general() {
        // char([[1,2],[3,4]]) = x² - 5x - 2
        let m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let coeffs = m.characteristic().unwrap();
        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[0], c(1.0, 0.0));
        assert_relative_eq!(coeffs[1].re, -5.0, epsilon = 1e-12);
        assert_relative_eq!(coeffs[2].re, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_characteristic_non_square_is_absent() {
        assert!(CMatrix64::zeros(2, 3).characteristic().is_none());
    }
}
