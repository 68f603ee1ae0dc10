//! Scalar types supported by the algebra types and the shared tolerance policy.

use num_traits::{Float, FloatConst};

/// A floating point scalar usable as the element type of every algebra type.
///
/// Implemented for `f32` and `f64`. Besides the `num_traits` float interface it
/// carries the tolerance used by the approximate `==` of vectors, matrices,
/// quaternions, Euler angles and poses, so all of them compare the same way.
pub trait Scalar:
    Float
    + FloatConst
    + Default
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + approx::UlpsEq
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Tolerance of the approximate equality, used both as absolute and relative bound.
    const EPS: Self;

    /// Suffix used by the `Display` impls to tag the precision (`f` or `d`).
    const SUFFIX: &'static str;

    /// Convert an `f64` constant into this scalar type.
    fn lit(value: f64) -> Self;

    /// Hybrid absolute / relative comparison with [`Scalar::EPS`].
    ///
    /// Two values are equal when `|a - b| <= EPS` or `|a - b| <= EPS * max(|a|, |b|)`.
    /// Infinities of the same sign compare equal.
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        approx::RelativeEq::relative_eq(&self, &other, Self::EPS, Self::EPS)
    }
}

impl Scalar for f32 {
    // f32 cannot resolve 1e-6 steps above magnitude ~8
    const EPS: f32 = 1e-5;
    const SUFFIX: &'static str = "f";

    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    const EPS: f64 = 1e-6;
    const SUFFIX: &'static str = "d";

    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
}
