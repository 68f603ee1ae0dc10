//! 4D vector.

use crate::{AlgebraError, Scalar, Vector3};

define_vector_type!(
    /// 4D vector, mostly used as homogeneous coordinates.
    Vector4,
    4,
    "Vector4",
    [0 => x, 1 => y, 2 => z, 3 => w]
);

#[cfg(feature = "glam")]
impl_glam_vector!(Vector4, 4, glam::Vec4, glam::DVec4);

/// 4D vector (single precision).
pub type Vector4F32 = Vector4<f32>;

/// 4D vector (double precision).
pub type Vector4F64 = Vector4<f64>;

impl<T: Scalar> Vector4<T> {
    /// Extend a 3D vector with a `w` component.
    #[inline]
    pub fn from_vec3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drop the `w` component.
    #[inline]
    pub fn xyz(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}
