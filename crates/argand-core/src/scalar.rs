//! Complex scalar boundary consumed by the matrix engine.
//!
//! The engine performs no complex arithmetic of its own. Conjugation,
//! magnitudes, reciprocals and the like all come from the scalar type,
//! reached through the [`Scalar`] trait below; the only implementors are
//! [`num_complex::Complex<f32>`] and [`num_complex::Complex<f64>`].
//!
//! Keeping the trait this narrow means every matrix routine states exactly
//! which scalar capabilities it needs, and nothing in the crate can reach
//! around the boundary to poke at a concrete float layout.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_complex::Complex;
use num_traits::{Float, One, Zero};

/// Base trait for every element storable in a [`Matrix`](crate::Matrix).
///
/// The bounds cover the four arithmetic operators, negation, the assigning
/// variants, summation, and the `zero`/`one` constants; the methods expose
/// the complex-specific surface (conjugate, parts, modulus, reciprocal).
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + 'static
{
    /// The underlying real component type (`f32` or `f64`).
    type Real: Float + fmt::Debug + fmt::Display;

    /// Complex conjugate: `x + iy` becomes `x - iy`.
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part.
    fn im(self) -> Self::Real;

    /// Modulus `|z|`.
    fn modulus(self) -> Self::Real;

    /// Multiplicative inverse `1/z`.
    fn recip(self) -> Self;

    /// Promote a real value into `Self` with zero imaginary part.
    fn from_real(r: Self::Real) -> Self;

    /// Convert an `f64` literal into the real component type.
    ///
    /// Used to inject crate-level constants such as [`crate::TOLERANCE`]
    /// without scattering casts through the algorithms.
    fn real_from_f64(v: f64) -> Self::Real;
}

macro_rules! impl_scalar_complex {
    ($re:ty) => {
        impl Scalar for Complex<$re> {
            type Real = $re;

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn re(self) -> $re {
                self.re
            }
            #[inline]
            fn im(self) -> $re {
                self.im
            }
            #[inline]
            fn modulus(self) -> $re {
                self.norm()
            }
            #[inline]
            fn recip(self) -> Self {
                self.inv()
            }
            #[inline]
            fn from_real(r: $re) -> Self {
                Complex::new(r, 0.0)
            }
            #[inline]
            fn real_from_f64(v: f64) -> $re {
                v as $re
            }
        }
    };
}

impl_scalar_complex!(f32);
impl_scalar_complex!(f64);
