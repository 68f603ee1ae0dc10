use math3d_algebra::{Scalar, Vector3};

/// Solid sphere.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T> {
    /// Center of the sphere.
    pub center: Vector3<T>,
    /// Radius of the sphere.
    pub radius: T,
}

/// Sphere (single precision).
pub type SphereF32 = Sphere<f32>;

/// Sphere (double precision).
pub type SphereF64 = Sphere<f64>;

impl<T: Scalar> Default for Sphere<T> {
    /// Unit sphere at the origin.
    fn default() -> Self {
        Self::new(Vector3::zeros(), T::one())
    }
}

impl<T: Scalar> Sphere<T> {
    /// Create a sphere from its center and radius.
    #[inline]
    pub fn new(center: Vector3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Distance from `point` to the surface, negative inside the sphere.
    #[inline]
    pub fn distance_to(&self, point: Vector3<T>) -> T {
        (point - self.center).length() - self.radius
    }

    /// Check if `point` lies inside the sphere or on its surface.
    #[inline]
    pub fn contains(&self, point: Vector3<T>) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Check if the two spheres overlap, touching spheres included.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        (other.center - self.center).length_squared() <= reach * reach
    }
}

impl<T: Scalar> PartialEq for Sphere<T> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius.approx_eq(other.radius)
    }
}

impl<T: Scalar> std::fmt::Display for Sphere<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sphere(center={}, radius={})", self.center, self.radius)
    }
}
