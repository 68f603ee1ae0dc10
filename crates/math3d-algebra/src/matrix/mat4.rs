//! 4x4 matrix.

use crate::{AlgebraError, Matrix3, Scalar, Vector3, Vector4};

define_matrix_type!(
    /// 4x4 matrix, column-major.
    ///
    /// Used for homogeneous transforms (rotation block plus translation column) and
    /// projections.
    Matrix4,
    4,
    16,
    Vector4,
    "Matrix4"
);

#[cfg(feature = "glam")]
impl_glam_matrix!(Matrix4, glam::Mat4, glam::DMat4);

/// 4x4 matrix (single precision).
pub type Matrix4F32 = Matrix4<f32>;

/// 4x4 matrix (double precision).
pub type Matrix4F64 = Matrix4<f64>;

impl<T: Scalar> Matrix4<T> {
    /// Create a new matrix from its entries given in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self::from_cols([
            Vector4::new(m00, m10, m20, m30),
            Vector4::new(m01, m11, m21, m31),
            Vector4::new(m02, m12, m22, m32),
            Vector4::new(m03, m13, m23, m33),
        ])
    }

    // 3x3 matrix left after removing `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        let mut entries = [T::zero(); 9];
        let mut k = 0;
        for r in (0..4).filter(|&r| r != row) {
            for c in (0..4).filter(|&c| c != col) {
                entries[k] = self[(r, c)];
                k += 1;
            }
        }
        Matrix3::from_rows_array(entries)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, c| {
            let term = self[(0, c)] * self.minor(0, c).determinant();
            if c % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }

    /// Inverse of the matrix, the adjugate divided by the determinant.
    ///
    /// The adjugate is assembled from the 2x2 sub-determinants of the upper and
    /// lower row pairs.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::SingularMatrix`] if the determinant vanishes relative to the
    /// magnitude of the entries.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.to_rows_array_2d();

        let s0 = a00 * a11 - a10 * a01;
        let s1 = a00 * a12 - a10 * a02;
        let s2 = a00 * a13 - a10 * a03;
        let s3 = a01 * a12 - a11 * a02;
        let s4 = a01 * a13 - a11 * a03;
        let s5 = a02 * a13 - a12 * a03;

        let c5 = a22 * a33 - a32 * a23;
        let c4 = a21 * a33 - a31 * a23;
        let c3 = a21 * a32 - a31 * a22;
        let c2 = a20 * a33 - a30 * a23;
        let c1 = a20 * a32 - a30 * a22;
        let c0 = a20 * a31 - a30 * a21;

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        if self.is_negligible_determinant(det) {
            return Err(AlgebraError::SingularMatrix);
        }

        let adjugate = Self::new(
            a11 * c5 - a12 * c4 + a13 * c3,
            -a01 * c5 + a02 * c4 - a03 * c3,
            a31 * s5 - a32 * s4 + a33 * s3,
            -a21 * s5 + a22 * s4 - a23 * s3,
            -a10 * c5 + a12 * c2 - a13 * c1,
            a00 * c5 - a02 * c2 + a03 * c1,
            -a30 * s5 + a32 * s2 - a33 * s1,
            a20 * s5 - a22 * s2 + a23 * s1,
            a10 * c4 - a11 * c2 + a13 * c0,
            -a00 * c4 + a01 * c2 - a03 * c0,
            a30 * s4 - a31 * s2 + a33 * s0,
            -a20 * s4 + a21 * s2 - a23 * s0,
            -a10 * c3 + a11 * c1 - a12 * c0,
            a00 * c3 - a01 * c1 + a02 * c0,
            -a30 * s3 + a31 * s1 - a32 * s0,
            a20 * s3 - a21 * s1 + a22 * s0,
        );

        Ok(adjugate * (T::one() / det))
    }

    /// Homogeneous transform with the given rotation block and translation.
    pub fn from_rotation_translation(rotation: &Matrix3<T>, translation: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.set_rotation(rotation);
        m.set_position(translation);
        m
    }

    /// Homogeneous rotation of `angle` radians about the x axis.
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        Self::from_rotation_translation(&Matrix3::rotation_x(angle), Vector3::zeros())
    }

    /// Homogeneous rotation of `angle` radians about the y axis.
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        Self::from_rotation_translation(&Matrix3::rotation_y(angle), Vector3::zeros())
    }

    /// Homogeneous rotation of `angle` radians about the z axis.
    #[inline]
    pub fn rotation_z(angle: T) -> Self {
        Self::from_rotation_translation(&Matrix3::rotation_z(angle), Vector3::zeros())
    }

    /// Homogeneous scaling with the given per-axis factors.
    #[inline]
    pub fn scale(factors: Vector3<T>) -> Self {
        Self::from_diagonal(Vector4::from_vec3(factors, T::one()))
    }

    /// Homogeneous translation.
    #[inline]
    pub fn translation(position: Vector3<T>) -> Self {
        Self::from_rotation_translation(&Matrix3::identity(), position)
    }

    /// OpenGL-style perspective projection.
    ///
    /// * `fov` - vertical field of view in degrees.
    /// * `aspect` - width over height of the viewport.
    /// * `near`, `far` - distances to the clipping planes.
    #[rustfmt::skip]
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Self {
        let two = T::lit(2.0);
        let (zero, one) = (T::zero(), T::one());

        let f = one / (fov.to_radians() / two).tan();
        let range = near - far;
        let a = (far + near) / range;
        let b = two * far * near / range;

        Self::new(
            f / aspect, zero, zero, zero,
            zero, f, zero, zero,
            zero, zero, a, b,
            zero, zero, -one, zero,
        )
    }

    /// OpenGL-style perspective projection given by the frustum planes.
    #[rustfmt::skip]
    pub fn perspective_frustum(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
        let two = T::lit(2.0);
        let (zero, one) = (T::zero(), T::one());

        let x = two * near / (right - left);
        let y = two * near / (top - bottom);
        let a = (right + left) / (right - left);
        let b = (top + bottom) / (top - bottom);
        let c = -(far + near) / (far - near);
        let d = -two * far * near / (far - near);

        Self::new(
            x, zero, a, zero,
            zero, y, b, zero,
            zero, zero, c, d,
            zero, zero, -one, zero,
        )
    }

    /// Orthographic projection of a `width` x `height` view volume centered on the z axis.
    #[rustfmt::skip]
    pub fn orthographic(width: T, height: T, near: T, far: T) -> Self {
        let two = T::lit(2.0);
        let (zero, one) = (T::zero(), T::one());
        let range = near - far;

        Self::new(
            two / width, zero, zero, zero,
            zero, two / height, zero, zero,
            zero, zero, two / range, (far + near) / range,
            zero, zero, zero, one,
        )
    }

    /// Translation part of a homogeneous transform.
    #[inline]
    pub fn position(&self) -> Vector3<T> {
        self.col(3).xyz()
    }

    /// Rotation block of a homogeneous transform.
    #[inline]
    pub fn rotation(&self) -> Matrix3<T> {
        Matrix3::from_transform(self)
    }

    /// Overwrite the translation part, keeping the rest of the matrix.
    pub fn set_position(&mut self, position: Vector3<T>) {
        let w = self[(3, 3)];
        self.set_col(3, Vector4::from_vec3(position, w));
    }

    /// Overwrite the rotation block, keeping the rest of the matrix.
    pub fn set_rotation(&mut self, rotation: &Matrix3<T>) {
        for c in 0..3 {
            let w = self[(3, c)];
            self.set_col(c, Vector4::from_vec3(rotation.col(c), w));
        }
    }

    /// Apply the matrix to a point (`w = 1`), dividing by the resulting `w`.
    pub fn transform_point(&self, point: Vector3<T>) -> Vector3<T> {
        let p = *self * Vector4::from_vec3(point, T::one());
        p.xyz() / p.w
    }
}
