//! 3D vector.

use crate::{AlgebraError, Scalar};

define_vector_type!(
    /// 3D vector.
    ///
    /// Used both for points and directions. Equality is approximate, see
    /// [`Scalar::approx_eq`].
    Vector3,
    3,
    "Vector3",
    [0 => x, 1 => y, 2 => z]
);

#[cfg(feature = "glam")]
impl_glam_vector!(Vector3, 3, glam::Vec3, glam::DVec3);

/// 3D vector (single precision).
pub type Vector3F32 = Vector3<f32>;

/// 3D vector (double precision).
pub type Vector3F64 = Vector3<f64>;

impl<T: Scalar> Vector3<T> {
    /// Unit vector along the x axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// Unit vector along the y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// Unit vector along the z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        (self - rhs).length()
    }
}
