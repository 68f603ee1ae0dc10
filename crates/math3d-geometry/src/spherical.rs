use math3d_algebra::{Scalar, Vector3};

/// Spherical coordinates with the polar axis along `+z`.
///
/// `theta` is the azimuth in the xy-plane measured from `+x`, and `phi` the polar
/// angle measured from `+z`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoords<T> {
    /// Radial distance.
    pub rho: T,
    /// Azimuthal angle in radians, in `[-pi, pi]`.
    pub theta: T,
    /// Polar angle in radians, in `[0, pi]`.
    pub phi: T,
}

/// Spherical coordinates (single precision).
pub type SphericalCoordsF32 = SphericalCoords<f32>;

/// Spherical coordinates (double precision).
pub type SphericalCoordsF64 = SphericalCoords<f64>;

// below this radius the angles are undefined and reset to zero
const MIN_RADIUS: f64 = 1e-10;

// margin kept from the poles by `make_safe`
const POLE_MARGIN: f64 = 1e-6;

impl<T: Scalar> SphericalCoords<T> {
    /// Create spherical coordinates.
    #[inline]
    pub fn new(rho: T, theta: T, phi: T) -> Self {
        Self { rho, theta, phi }
    }

    /// Overwrite all three coordinates.
    #[inline]
    pub fn set(&mut self, rho: T, theta: T, phi: T) -> &mut Self {
        self.rho = rho;
        self.theta = theta;
        self.phi = phi;
        self
    }

    /// Spherical coordinates of a cartesian point.
    pub fn from_cartesian(point: Vector3<T>) -> Self {
        let mut coords = Self::default();
        coords.set_from_cartesian(point);
        coords
    }

    /// Overwrite the coordinates from a cartesian point.
    ///
    /// Points at the origin give zero angles.
    pub fn set_from_cartesian(&mut self, point: Vector3<T>) -> &mut Self {
        self.rho = point.length();

        if self.rho < T::lit(MIN_RADIUS) {
            self.theta = T::zero();
            self.phi = T::zero();
        } else {
            self.theta = point.y.atan2(point.x);
            self.phi = (point.z / self.rho).max(-T::one()).min(T::one()).acos();
        }

        self
    }

    /// Cartesian point for these coordinates.
    pub fn to_cartesian(&self) -> Vector3<T> {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vector3::new(
            self.rho * cos_theta * sin_phi,
            self.rho * sin_theta * sin_phi,
            self.rho * cos_phi,
        )
    }

    /// Clamp `phi` away from the poles, where `theta` is degenerate.
    pub fn make_safe(&mut self) -> &mut Self {
        let margin = T::lit(POLE_MARGIN);
        self.phi = self.phi.max(margin).min(T::PI() - margin);
        self
    }
}

impl<T: Scalar> PartialEq for SphericalCoords<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rho.approx_eq(other.rho)
            && self.theta.approx_eq(other.theta)
            && self.phi.approx_eq(other.phi)
    }
}

impl<T: Scalar> std::fmt::Display for SphericalCoords<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SphericalCoords(rho={}, theta={}, phi={})",
            self.rho, self.theta, self.phi
        )
    }
}
