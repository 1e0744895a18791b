//! `Display` formatting for [`Matrix`]: the grid inside box-drawing borders.

use core::fmt;

use num_traits::Zero;

use crate::Scalar;

use super::Matrix;

const CELL: usize = 12;

/// One entry, real and imaginary parts to four decimal places. Purely real
/// entries print as a bare real number.
fn entry<T: Scalar>(z: T) -> String {
    let (re, im) = (z.re(), z.im());
    if im == T::Real::zero() {
        format!("{re:.4}")
    } else if im < T::Real::zero() {
        format!("{re:.4}{im:.4}i")
    } else {
        format!("{re:.4}+{im:.4}i")
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = " ".repeat((CELL + 2) * self.cols);
        writeln!(f, "┌{border}┐")?;
        for i in 0..self.rows {
            write!(f, "│")?;
            for j in 0..self.cols {
                write!(f, "{:>width$}  ", entry(self.data[i * self.cols + j]), width = CELL)?;
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "└{border}┘")
    }
}
