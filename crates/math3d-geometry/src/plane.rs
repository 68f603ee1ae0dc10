use math3d_algebra::{Scalar, Vector3};

/// Plane given by a point on it and its normal.
///
/// The normal is used as given; distances are only metric when it has unit length.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T> {
    /// A point on the plane.
    pub point: Vector3<T>,
    /// Normal of the plane.
    pub normal: Vector3<T>,
}

/// Plane (single precision).
pub type PlaneF32 = Plane<f32>;

/// Plane (double precision).
pub type PlaneF64 = Plane<f64>;

impl<T: Scalar> Default for Plane<T> {
    /// The `z = 0` plane facing `+z`.
    fn default() -> Self {
        Self::new(Vector3::zeros(), Vector3::unit_z())
    }
}

impl<T: Scalar> Plane<T> {
    /// Create a plane through `point` with the given normal.
    #[inline]
    pub fn new(point: Vector3<T>, normal: Vector3<T>) -> Self {
        Self { point, normal }
    }

    /// Distance from the plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance_to(&self, point: Vector3<T>) -> T {
        (point - self.point).dot(self.normal)
    }

    /// Unsigned distance from the plane.
    #[inline]
    pub fn distance_to(&self, point: Vector3<T>) -> T {
        self.signed_distance_to(point).abs()
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn project(&self, point: Vector3<T>) -> Vector3<T> {
        point - self.normal * self.signed_distance_to(point)
    }
}

impl<T: Scalar> PartialEq for Plane<T> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point && self.normal == other.normal
    }
}

impl<T: Scalar> std::fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plane(point={}, normal={})", self.point, self.normal)
    }
}
