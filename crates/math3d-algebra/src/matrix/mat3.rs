//! 3x3 matrix.

use crate::{AlgebraError, Euler, Matrix4, Quaternion, Scalar, Vector3};

define_matrix_type!(
    /// 3x3 matrix, column-major.
    ///
    /// Mostly used as a rotation or scaling matrix.
    Matrix3,
    3,
    9,
    Vector3,
    "Matrix3"
);

#[cfg(feature = "glam")]
impl_glam_matrix!(Matrix3, glam::Mat3, glam::DMat3);

/// 3x3 matrix (single precision).
pub type Matrix3F32 = Matrix3<f32>;

/// 3x3 matrix (double precision).
pub type Matrix3F64 = Matrix3<f64>;

impl<T: Scalar> Matrix3<T> {
    /// Create a new matrix from its entries given in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self::from_cols([
            Vector3::new(m00, m10, m20),
            Vector3::new(m01, m11, m21),
            Vector3::new(m02, m12, m22),
        ])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.to_rows_array_2d();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Inverse of the matrix, the adjugate divided by the determinant.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::SingularMatrix`] if the determinant vanishes relative to the
    /// magnitude of the entries.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.to_rows_array_2d();

        let c00 = e * i - f * h;
        let c01 = f * g - d * i;
        let c02 = d * h - e * g;

        let det = a * c00 + b * c01 + c * c02;
        if self.is_negligible_determinant(det) {
            return Err(AlgebraError::SingularMatrix);
        }

        let c10 = c * h - b * i;
        let c11 = a * i - c * g;
        let c12 = b * g - a * h;
        let c20 = b * f - c * e;
        let c21 = c * d - a * f;
        let c22 = a * e - b * d;

        let inv_det = T::one() / det;
        Ok(Self::new(c00, c10, c20, c01, c11, c21, c02, c12, c22) * inv_det)
    }

    /// Rotation of `angle` radians about the x axis.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(one, zero, zero, zero, c, -s, zero, s, c)
    }

    /// Rotation of `angle` radians about the y axis.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(c, zero, s, zero, one, zero, -s, zero, c)
    }

    /// Rotation of `angle` radians about the z axis.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::new(c, -s, zero, s, c, zero, zero, zero, one)
    }

    // axis: 0 = x, 1 = y, 2 = z
    pub(crate) fn rotation_about(axis: usize, angle: T) -> Self {
        match axis {
            0 => Self::rotation_x(angle),
            1 => Self::rotation_y(angle),
            _ => Self::rotation_z(angle),
        }
    }

    /// Scaling matrix with the given per-axis factors.
    #[inline]
    pub fn scale(factors: Vector3<T>) -> Self {
        Self::from_diagonal(factors)
    }

    /// Rotation matrix of a quaternion.
    ///
    /// The quaternion is normalized first, so any non-zero quaternion is accepted.
    pub fn from_quaternion(q: Quaternion<T>) -> Self {
        let q = q.normalize();
        let two = T::lit(2.0);
        let one = T::one();
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);

        Self::new(
            one - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
            two * (x * y + w * z),
            one - two * (x * x + z * z),
            two * (y * z - w * x),
            two * (x * z - w * y),
            two * (y * z + w * x),
            one - two * (x * x + y * y),
        )
    }

    /// Rotation matrix of a set of Euler angles, honouring their order and convention.
    #[inline]
    pub fn from_euler(euler: &Euler<T>) -> Self {
        euler.to_rotation_matrix()
    }

    /// Upper-left 3x3 block of a homogeneous transform.
    pub fn from_transform(transform: &Matrix4<T>) -> Self {
        let col = |i: usize| transform.col(i).xyz();
        Self::from_cols([col(0), col(1), col(2)])
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis does not need to be unit length.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] if the axis is the zero vector.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, AlgebraError> {
        let axis = axis.try_normalize()?;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        let (s, c) = angle.sin_cos();
        let t = T::one() - c;

        let m00 = c + x * x * t;
        let m11 = c + y * y * t;
        let m22 = c + z * z * t;

        let tmp1 = x * y * t;
        let tmp2 = z * s;
        let m10 = tmp1 + tmp2;
        let m01 = tmp1 - tmp2;

        let tmp3 = x * z * t;
        let tmp4 = y * s;
        let m20 = tmp3 - tmp4;
        let m02 = tmp3 + tmp4;

        let tmp5 = y * z * t;
        let tmp6 = x * s;
        let m12 = tmp5 - tmp6;
        let m21 = tmp5 + tmp6;

        Ok(Self::new(m00, m01, m02, m10, m11, m12, m20, m21, m22))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix4F64, QuaternionF64, Vector3F64};
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    fn sample() -> Matrix3F64 {
        Matrix3F64::new(1.0, -4.0, 1.0, -6.0, -7.0, 9.0, -4.0, 6.0, 0.0)
    }

    #[test]
    fn test_matrix3_mul_vec3() {
        let v = Vector3F64::new(2.0, 7.0, 6.0);
        assert_eq!(sample() * v, Vector3F64::new(-20.0, -7.0, 34.0));
        assert_eq!(Matrix3F64::identity() * v, v);
    }

    #[test]
    fn test_matrix3_indexing() {
        let mut m = sample();
        assert_eq!(m[1], Vector3F64::new(-4.0, -7.0, 6.0));
        assert_eq!(m[(1, 2)], 9.0);
        assert_eq!(m.row(2), Vector3F64::new(-4.0, 6.0, 0.0));

        m[(2, 2)] = 5.0;
        m[0] = Vector3F64::ones();
        assert_eq!(m.col(0), Vector3F64::ones());
        assert_eq!(m[(2, 2)], 5.0);
    }

    #[test]
    fn test_matrix3_diagonal_and_trace() {
        let m = Matrix3F64::from_diagonal(Vector3F64::new(1.0, 2.0, 3.0));
        assert_eq!(m[(0, 1)], 0.0);
        assert_relative_eq!(m.trace(), 6.0);
        assert_relative_eq!(m.determinant(), 6.0);
        assert_relative_eq!(sample().trace(), -6.0);
    }

    #[test]
    fn test_matrix3_transpose() {
        let m = sample();
        let t = m.transpose();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(t[(r, c)], m[(c, r)]);
            }
        }
        let mut tm = m;
        tm.transpose_mut();
        assert_eq!(tm, t);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_matrix3_determinant() {
        assert_relative_eq!(sample().determinant(), 26.0);
    }

    #[test]
    fn test_matrix3_inverse() -> Result<(), Box<dyn std::error::Error>> {
        let m = sample();
        let inv = m.inverse()?;
        assert_eq!(m * inv, Matrix3F64::identity());
        assert_eq!(inv * m, Matrix3F64::identity());
        assert_relative_eq!(inv.determinant(), 1.0 / 26.0, epsilon = 1e-12);

        let singular = Matrix3F64::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0);
        assert_eq!(singular.inverse(), Err(AlgebraError::SingularMatrix));
        assert!(Matrix3F64::zeros().inverse().is_err());
        Ok(())
    }

    #[test]
    fn test_matrix3_inverse_is_scale_invariant() -> Result<(), Box<dyn std::error::Error>> {
        let tiny = crate::Matrix3F32::from_diagonal(crate::Vector3F32::splat(1e-3));
        let inv = tiny.inverse()?;
        assert_relative_eq!(inv[(0, 0)], 1e3, max_relative = 1e-5);
        assert_relative_eq!(tiny * inv, crate::Matrix3F32::identity(), epsilon = 1e-5);

        let scaled = sample() * 1e-4;
        assert_eq!(scaled * scaled.inverse()?, Matrix3F64::identity());

        let flat = Matrix3F64::new(1e-3, 2e-3, 3e-3, 2e-3, 4e-3, 6e-3, 0.0, 1e-3, 1e-3);
        assert_eq!(flat.inverse(), Err(AlgebraError::SingularMatrix));
        Ok(())
    }

    #[test]
    fn test_matrix3_arithmetic() {
        let a = sample();
        let b = Matrix3F64::identity();
        let sum = a + b;
        assert_eq!(sum[(0, 0)], 2.0);
        assert_eq!(sum - b, a);
        assert_eq!(2.0 * a, a + a);
        assert_eq!(-a + a, Matrix3F64::zeros());
        assert_eq!(a * b, a);
        assert_eq!(a.hadamard(&b), Matrix3F64::from_diagonal(Vector3F64::new(1.0, -7.0, 0.0)));

        let mut c = a;
        c *= b;
        c += a;
        c -= b;
        assert_eq!(c, a * 2.0 - b);
    }

    #[test]
    fn test_matrix3_rotations() {
        let v = Vector3F64::unit_x();
        assert_eq!(Matrix3F64::rotation_z(FRAC_PI_2) * v, Vector3F64::unit_y());
        assert_eq!(Matrix3F64::rotation_y(FRAC_PI_2) * v, -Vector3F64::unit_z());
        assert_eq!(
            Matrix3F64::rotation_x(FRAC_PI_2) * Vector3F64::unit_y(),
            Vector3F64::unit_z()
        );

        let r = Matrix3F64::rotation_x(0.3) * Matrix3F64::rotation_y(-1.1);
        assert_eq!(r * r.transpose(), Matrix3F64::identity());
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix3_from_axis_angle() -> Result<(), Box<dyn std::error::Error>> {
        let r = Matrix3F64::from_axis_angle(Vector3F64::new(0.0, 0.0, 2.0), FRAC_PI_3)?;
        assert_eq!(r, Matrix3F64::rotation_z(FRAC_PI_3));

        let r = Matrix3F64::from_axis_angle(Vector3F64::unit_x(), FRAC_PI_2)?;
        let expected = Matrix3F64::new(1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(r, expected, epsilon = 1e-12);

        assert_eq!(
            Matrix3F64::from_axis_angle(Vector3F64::zeros(), 1.0),
            Err(AlgebraError::ZeroLength("normalize"))
        );
        Ok(())
    }

    #[test]
    fn test_matrix3_from_quaternion() {
        let q = QuaternionF64::rotation_y(0.7);
        assert_eq!(Matrix3F64::from_quaternion(q), Matrix3F64::rotation_y(0.7));

        // scaled quaternions describe the same rotation
        assert_eq!(Matrix3F64::from_quaternion(q * 3.0), Matrix3F64::rotation_y(0.7));
    }

    #[test]
    fn test_matrix3_from_transform() {
        let mut t = Matrix4F64::translation(Vector3F64::new(1.0, 2.0, 3.0));
        t.set_rotation(&Matrix3F64::rotation_x(0.4));
        assert_eq!(Matrix3F64::from_transform(&t), Matrix3F64::rotation_x(0.4));
    }

    #[test]
    fn test_matrix3_buffers() -> Result<(), Box<dyn std::error::Error>> {
        let rows = [1.0, -4.0, 1.0, -6.0, -7.0, 9.0, -4.0, 6.0, 0.0];
        assert_eq!(Matrix3F64::from_slice(&rows)?, sample());
        assert_eq!(Matrix3F64::from_rows_array(rows), sample());
        assert_eq!(sample().to_rows_array(), rows);

        // top-left block of a 3x4 buffer
        let wide = [
            1.0, -4.0, 1.0, 10.0, //
            -6.0, -7.0, 9.0, 11.0, //
            -4.0, 6.0, 0.0, 12.0,
        ];
        assert_eq!(Matrix3F64::from_rows_slice(&wide, 3, 4)?, sample());
        assert_eq!(
            Matrix3F64::from_rows_slice(&wide, 4, 3)?,
            Matrix3F64::new(1.0, -4.0, 1.0, 10.0, -6.0, -7.0, 9.0, 11.0, -4.0)
        );
        assert_eq!(
            Matrix3F64::from_rows_slice(&wide, 2, 6),
            Err(AlgebraError::InvalidShape { rows: 2, cols: 6 })
        );
        assert_eq!(
            Matrix3F64::from_slice(&rows[..8]),
            Err(AlgebraError::DimensionMismatch {
                expected: 9,
                got: 8
            })
        );
        Ok(())
    }

    #[test]
    fn test_matrix3_display() {
        let m = Matrix3F64::identity();
        assert_eq!(m.to_string(), "Matrix3d(1, 0, 0,\n  0, 1, 0,\n  0, 0, 1)");
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_matrix3_glam_conversion() {
        let m = sample();
        let g: glam::DMat3 = m.into();
        assert_eq!(g.col(0), glam::DVec3::new(1.0, -6.0, -4.0));
        assert_eq!(Matrix3F64::from(g), m);
        assert_eq!(Matrix4F64::from(glam::DMat4::IDENTITY), Matrix4F64::identity());
    }
}
