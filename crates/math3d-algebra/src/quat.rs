//! Quaternion.

use rand::Rng;

use crate::{AlgebraError, Euler, Matrix3, Matrix4, Scalar, Vector3};

/// Quaternion `w + xi + yj + zk`.
///
/// Represents a rotation when it has unit length. Unit length is not enforced at
/// construction, every method that interprets the quaternion as a rotation
/// documents how it deals with non-unit input.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T> {
    /// The real part.
    pub w: T,
    /// The `i` component.
    pub x: T,
    /// The `j` component.
    pub y: T,
    /// The `k` component.
    pub z: T,
}

/// Quaternion (single precision).
pub type QuaternionF32 = Quaternion<f32>;

/// Quaternion (double precision).
pub type QuaternionF64 = Quaternion<f64>;

impl<T: Scalar> Default for Quaternion<T> {
    /// The identity rotation.
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    /// Create a new quaternion from its components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::from_real(T::one())
    }

    /// Quaternion with only a real part.
    #[inline]
    pub fn from_real(w: T) -> Self {
        Self::new(w, T::zero(), T::zero(), T::zero())
    }

    /// Create a quaternion from an array in `(w, x, y, z)` order.
    #[inline]
    pub fn from_array([w, x, y, z]: [T; 4]) -> Self {
        Self::new(w, x, y, z)
    }

    /// Convert the quaternion to an array in `(w, x, y, z)` order.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Create a quaternion from a flat buffer in `(w, x, y, z)` order.
    ///
    /// Extra trailing elements are ignored.
    pub fn from_slice(data: &[T]) -> Result<Self, AlgebraError> {
        match data {
            [w, x, y, z, rest @ ..] => {
                if !rest.is_empty() {
                    log::debug!(
                        "Quaternion: using the first 4 of {} buffer elements",
                        data.len()
                    );
                }
                Ok(Self::new(*w, *x, *y, *z))
            }
            _ => Err(AlgebraError::DimensionMismatch {
                expected: 4,
                got: data.len(),
            }),
        }
    }

    /// Create a quaternion from a `(1, 4)` or `(4, 1)` buffer.
    pub fn from_shaped(data: &[T], rows: usize, cols: usize) -> Result<Self, AlgebraError> {
        if rows * cols != data.len() {
            return Err(AlgebraError::DimensionMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }

        if rows != 1 && cols != 1 {
            return Err(AlgebraError::InvalidShape { rows, cols });
        }

        Self::from_slice(data)
    }

    /// Rotation of `angle` radians about the x axis.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        Self::rotation_about(0, angle)
    }

    /// Rotation of `angle` radians about the y axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        Self::rotation_about(1, angle)
    }

    /// Rotation of `angle` radians about the z axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        Self::rotation_about(2, angle)
    }

    // axis: 0 = x, 1 = y, 2 = z
    pub(crate) fn rotation_about(axis: usize, angle: T) -> Self {
        let (s, c) = (angle / T::lit(2.0)).sin_cos();
        let mut q = Self::from_real(c);
        match axis {
            0 => q.x = s,
            1 => q.y = s,
            _ => q.z = s,
        }
        q
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] if the axis is the zero vector.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, AlgebraError> {
        let axis = axis.try_normalize()?;
        let (s, c) = (angle / T::lit(2.0)).sin_cos();
        Ok(Self::new(c, axis.x * s, axis.y * s, axis.z * s))
    }

    /// Unit quaternion of a rotation matrix.
    ///
    /// Branches on the trace and the dominant diagonal entry to keep the square
    /// root argument away from zero.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.to_rows_array_2d();
        let one = T::one();
        let two = T::lit(2.0);
        let quarter = T::lit(0.25);

        let trace = m00 + m11 + m22;
        let q = if trace > T::zero() {
            let s = T::lit(0.5) / (trace + one).sqrt();
            Self::new(quarter / s, (m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s)
        } else if m00 > m11 && m00 > m22 {
            let s = two * (one + m00 - m11 - m22).sqrt();
            Self::new((m21 - m12) / s, quarter * s, (m01 + m10) / s, (m02 + m20) / s)
        } else if m11 > m22 {
            let s = two * (one + m11 - m00 - m22).sqrt();
            Self::new((m02 - m20) / s, (m01 + m10) / s, quarter * s, (m12 + m21) / s)
        } else {
            let s = two * (one + m22 - m00 - m11).sqrt();
            Self::new((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, quarter * s)
        };

        q.normalize()
    }

    /// Unit quaternion of the rotation block of a homogeneous transform.
    #[inline]
    pub fn from_transform(transform: &Matrix4<T>) -> Self {
        Self::from_rotation_matrix(&transform.rotation())
    }

    /// Quaternion of a set of Euler angles, honouring their order and convention.
    #[inline]
    pub fn from_euler(euler: &Euler<T>) -> Self {
        euler.to_quaternion()
    }

    /// Sample a rotation uniformly from SO(3) (Shoemake's method).
    pub fn random() -> Self {
        let mut rng = rand::rng();

        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let r3: f64 = rng.random();

        let tau = 2.0 * std::f64::consts::PI;
        let one_minus_r1_sqrt = (1.0 - r1).sqrt();
        let r1_sqrt = r1.sqrt();

        Self::new(
            T::lit(one_minus_r1_sqrt * (tau * r2).cos()),
            T::lit(one_minus_r1_sqrt * (tau * r2).sin()),
            T::lit(r1_sqrt * (tau * r3).cos()),
            T::lit(r1_sqrt * (tau * r3).sin()),
        )
        .normalize()
    }

    /// Rotation matrix of the quaternion, see [`Matrix3::from_quaternion`].
    #[inline]
    pub fn to_rotation_matrix(self) -> Matrix3<T> {
        Matrix3::from_quaternion(self)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Four dimensional dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Norm.
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Return the quaternion scaled to unit length.
    ///
    /// A zero quaternion yields NaN components, use [`Self::try_normalize`] to get
    /// an error instead.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Return the quaternion scaled to unit length, failing on a zero quaternion.
    pub fn try_normalize(self) -> Result<Self, AlgebraError> {
        let unit = self.normalize();
        if !unit.is_finite() {
            return Err(AlgebraError::ZeroLength("normalize"));
        }
        Ok(unit)
    }

    /// Scale the quaternion to unit length in place.
    #[inline]
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Negate the vector part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse, the conjugate over the squared norm.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] for the zero quaternion, or one whose squared
    /// norm underflows.
    pub fn inverse(self) -> Result<Self, AlgebraError> {
        let inverse = self.conjugate() / self.length_squared();
        if !inverse.is_finite() {
            return Err(AlgebraError::ZeroLength("invert"));
        }
        Ok(inverse)
    }

    /// Rotate a vector with the sandwich product `q * (0, v) * q^-1`.
    ///
    /// Non-unit quaternions are accounted for by the division by the squared norm.
    pub fn rotate(self, v: Vector3<T>) -> Vector3<T> {
        let p = Self::new(T::zero(), v.x, v.y, v.z);
        (self * p * self.conjugate()).vector() / self.length_squared()
    }

    /// Check if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Scalar> std::ops::Index<usize> for Quaternion<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("Quaternion index out of bounds: {index}"),
        }
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Quaternion<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("Quaternion index out of bounds: {index}"),
        }
    }
}

impl<T: Scalar> PartialEq for Quaternion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.w.approx_eq(other.w)
            && self.x.approx_eq(other.x)
            && self.y.approx_eq(other.y)
            && self.z.approx_eq(other.z)
    }
}

impl<T: Scalar> approx::AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: Scalar> approx::RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::EPS
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: Scalar> approx::UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

impl<T: Scalar> std::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quaternion{}({}, {}, {}, {})",
            T::SUFFIX,
            self.w,
            self.x,
            self.y,
            self.z
        )
    }
}

impl<T: Scalar> std::ops::Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> std::ops::Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> std::ops::Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> std::ops::Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> std::ops::Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl std::ops::Mul<Quaternion<f32>> for f32 {
    type Output = Quaternion<f32>;

    fn mul(self, rhs: Quaternion<f32>) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Mul<Quaternion<f64>> for f64 {
    type Output = Quaternion<f64>;

    fn mul(self, rhs: Quaternion<f64>) -> Self::Output {
        rhs * self
    }
}

// Hamilton product.
impl<T: Scalar> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (w1, x1, y1, z1) = (self.w, self.x, self.y, self.z);
        let (w2, x2, y2, z2) = (rhs.w, rhs.x, rhs.y, rhs.z);
        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

impl<T: Scalar> std::ops::MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Rotate a vector.
impl<T: Scalar> std::ops::Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.rotate(rhs)
    }
}

#[cfg(feature = "glam")]
mod glam_interop {
    use super::Quaternion;

    impl From<glam::Quat> for Quaternion<f32> {
        fn from(q: glam::Quat) -> Self {
            Self::new(q.w, q.x, q.y, q.z)
        }
    }

    impl From<Quaternion<f32>> for glam::Quat {
        fn from(q: Quaternion<f32>) -> Self {
            glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
        }
    }

    impl From<glam::DQuat> for Quaternion<f64> {
        fn from(q: glam::DQuat) -> Self {
            Self::new(q.w, q.x, q.y, q.z)
        }
    }

    impl From<Quaternion<f64>> for glam::DQuat {
        fn from(q: Quaternion<f64>) -> Self {
            glam::DQuat::from_xyzw(q.x, q.y, q.z, q.w)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix3F64, Vector3F64};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quaternion_default_is_identity() {
        let q = QuaternionF64::default();
        assert_eq!(q, QuaternionF64::new(1.0, 0.0, 0.0, 0.0));
        let v = Vector3F64::new(1.0, 2.0, 3.0);
        assert_eq!(q.rotate(v), v);
        assert_eq!(QuaternionF32::from_real(2.0).to_array(), [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quaternion_hamilton_product() {
        let i = QuaternionF64::new(0.0, 1.0, 0.0, 0.0);
        let j = QuaternionF64::new(0.0, 0.0, 1.0, 0.0);
        let k = QuaternionF64::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, QuaternionF64::from_real(-1.0));

        let a = QuaternionF64::new(1.0, 2.0, 3.0, 4.0);
        let b = QuaternionF64::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a * b, QuaternionF64::new(-60.0, 12.0, 30.0, 24.0));
    }

    #[test]
    fn test_quaternion_conjugate_inverse() -> Result<(), Box<dyn std::error::Error>> {
        let q = QuaternionF64::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), QuaternionF64::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q * q.conjugate(), QuaternionF64::from_real(30.0));
        assert_eq!(q * q.inverse()?, QuaternionF64::identity());

        let zero = QuaternionF64::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), Err(AlgebraError::ZeroLength("invert")));
        assert!(zero.try_normalize().is_err());
        assert!(!zero.normalize().is_finite());
        Ok(())
    }

    #[test]
    fn test_quaternion_inverse_small_norm() -> Result<(), Box<dyn std::error::Error>> {
        let q = QuaternionF32::new(1e-4, 0.0, 0.0, 0.0);
        let inv = q.inverse()?;
        assert_relative_eq!(inv.w, 1e4, max_relative = 1e-5);
        assert_eq!(q * inv, QuaternionF32::identity());

        let unit = QuaternionF32::new(0.0, 0.0, 3e-6, 4e-6).try_normalize()?;
        assert_eq!(unit, QuaternionF32::new(0.0, 0.0, 0.6, 0.8));
        Ok(())
    }

    #[test]
    fn test_quaternion_normalize() {
        let mut q = QuaternionF64::new(0.0, 3.0, 0.0, 4.0);
        assert_relative_eq!(q.length(), 5.0);
        q.normalize_mut();
        assert_eq!(q, QuaternionF64::new(0.0, 0.6, 0.0, 0.8));
        assert_relative_eq!((q * q.conjugate()).w, 1.0);
    }

    #[test]
    fn test_quaternion_axis_rotations() {
        let q = QuaternionF64::rotation_z(FRAC_PI_2);
        assert_eq!(q * Vector3F64::unit_x(), Vector3F64::unit_y());
        assert_eq!(
            QuaternionF64::rotation_x(FRAC_PI_2).rotate(Vector3F64::unit_y()),
            Vector3F64::unit_z()
        );
        assert_eq!(
            QuaternionF64::rotation_y(FRAC_PI_2).rotate(Vector3F64::unit_z()),
            Vector3F64::unit_x()
        );

        // a non-unit quaternion rotates the same way
        let v = Vector3F64::new(1.0, -2.0, 0.5);
        assert_eq!((q * 4.0).rotate(v), q.rotate(v));
    }

    #[test]
    fn test_quaternion_from_axis_angle() -> Result<(), Box<dyn std::error::Error>> {
        let q = QuaternionF64::from_axis_angle(Vector3F64::new(0.0, 5.0, 0.0), 0.3)?;
        assert_eq!(q, QuaternionF64::rotation_y(0.3));
        assert!(QuaternionF64::from_axis_angle(Vector3F64::zeros(), 0.3).is_err());
        Ok(())
    }

    #[test]
    fn test_quaternion_from_rotation_matrix() {
        // one matrix per branch: positive trace, then dominant x, y and z diagonal
        let matrices = [
            Matrix3F64::rotation_x(0.4) * Matrix3F64::rotation_y(-0.7),
            Matrix3F64::rotation_x(PI),
            Matrix3F64::rotation_y(PI),
            Matrix3F64::rotation_z(PI),
            Matrix3F64::rotation_z(2.5) * Matrix3F64::rotation_x(1.9),
        ];
        for m in matrices {
            let q = QuaternionF64::from_rotation_matrix(&m);
            assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);
            assert_eq!(q.to_rotation_matrix(), m);
        }

        let q = QuaternionF64::from_rotation_matrix(&Matrix3F64::rotation_z(0.8));
        assert_eq!(q, QuaternionF64::rotation_z(0.8));
    }

    #[test]
    fn test_quaternion_random() {
        for _ in 0..50 {
            let q = QuaternionF64::random();
            assert_relative_eq!(q.length(), 1.0, epsilon = 1e-12);

            let m = q.to_rotation_matrix();
            assert_eq!(m * m.transpose(), Matrix3F64::identity());
            assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quaternion_buffers() -> Result<(), Box<dyn std::error::Error>> {
        let data = [1.0, 2.0, 3.0, 4.0];
        let q = QuaternionF32::from_slice(&data)?;
        assert_eq!(q.w, 1.0);
        assert_eq!(q[3], 4.0);
        assert_eq!(QuaternionF32::from_shaped(&data, 4, 1)?, q);
        assert_eq!(QuaternionF32::from_shaped(&data, 1, 4)?, q);
        assert_eq!(
            QuaternionF32::from_shaped(&data, 2, 2),
            Err(AlgebraError::InvalidShape { rows: 2, cols: 2 })
        );
        assert_eq!(
            QuaternionF32::from_slice(&data[..3]),
            Err(AlgebraError::DimensionMismatch {
                expected: 4,
                got: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_quaternion_display() {
        assert_eq!(
            QuaternionF32::new(1.0, 0.0, 0.5, 0.0).to_string(),
            "Quaternionf(1, 0, 0.5, 0)"
        );
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_quaternion_glam_conversion() {
        let q = QuaternionF32::rotation_x(0.5);
        let g: glam::Quat = q.into();
        let expected = glam::Quat::from_rotation_x(0.5);
        assert!((g.w - expected.w).abs() < 1e-6);
        assert!((g.x - expected.x).abs() < 1e-6);
        assert_eq!(QuaternionF32::from(g), q);
    }
}
