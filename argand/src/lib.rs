//! # Argand
//!
//! Complex linear algebra on the Argand plane.
//!
//! One `use argand::prelude::*;` gives you a dense, arbitrary-size matrix of
//! complex scalars with the classical toolkit: algebra, echelon elimination,
//! determinants and inverses, norms and condition numbers, structural
//! predicates, and characteristic polynomials.
//!
//! ```
//! use argand::core::num_complex::Complex;
//! use argand::prelude::*;
//!
//! let m = CMatrix64::from_rows(vec![
//!     vec![Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)],
//!     vec![Complex::new(3.0, 0.0), Complex::new(4.0, 0.0)],
//! ])?;
//! let inv = m.inverse()?;
//! assert_eq!(inv.at(0, 0)?, Complex::new(-2.0, 0.0));
//! # Ok::<(), MatrixError>(())
//! ```

pub use argand_core as core;

/// Glob-import convenience: `use argand::prelude::*;`
pub mod prelude {
    pub use argand_core::prelude::*;
}
