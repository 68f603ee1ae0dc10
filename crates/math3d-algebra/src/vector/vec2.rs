//! 2D vector.

use crate::{AlgebraError, Scalar};

define_vector_type!(
    /// 2D vector.
    Vector2,
    2,
    "Vector2",
    [0 => x, 1 => y]
);

#[cfg(feature = "glam")]
impl_glam_vector!(Vector2, 2, glam::Vec2, glam::DVec2);

/// 2D vector (single precision).
pub type Vector2F32 = Vector2<f32>;

/// 2D vector (double precision).
pub type Vector2F64 = Vector2<f64>;

impl<T: Scalar> Vector2<T> {
    /// Unit vector along the x axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along the y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Z component of the cross product of the two vectors lifted to 3D.
    #[inline]
    pub fn perp_dot(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }
}
