//! 2x2 matrix.

use crate::{AlgebraError, Scalar, Vector2};

define_matrix_type!(
    /// 2x2 matrix, column-major.
    Matrix2,
    2,
    4,
    Vector2,
    "Matrix2"
);

#[cfg(feature = "glam")]
impl_glam_matrix!(Matrix2, glam::Mat2, glam::DMat2);

/// 2x2 matrix (single precision).
pub type Matrix2F32 = Matrix2<f32>;

/// 2x2 matrix (double precision).
pub type Matrix2F64 = Matrix2<f64>;

impl<T: Scalar> Matrix2<T> {
    /// Create a new matrix from its entries given in row-major order.
    #[inline]
    pub fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self::from_cols([Vector2::new(m00, m10), Vector2::new(m01, m11)])
    }

    /// Determinant, `ad - bc`.
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Inverse of the matrix.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::SingularMatrix`] if the determinant vanishes relative to the
    /// magnitude of the entries.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let det = self.determinant();
        if self.is_negligible_determinant(det) {
            return Err(AlgebraError::SingularMatrix);
        }

        let inv_det = T::one() / det;
        Ok(Self::new(
            self[(1, 1)] * inv_det,
            -self[(0, 1)] * inv_det,
            -self[(1, 0)] * inv_det,
            self[(0, 0)] * inv_det,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matrix2_layout() {
        let m = Matrix2F64::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m[0], Vector2::new(1.0, 3.0));
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.row(1), Vector2::new(3.0, 4.0));
        assert_eq!(m.to_cols_array(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.to_rows_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_matrix2_default_is_zero() {
        assert_eq!(Matrix2F32::default(), Matrix2F32::zeros());
        assert_ne!(Matrix2F32::default(), Matrix2F32::identity());
    }

    #[test]
    fn test_matrix2_determinant() {
        let m = Matrix2F64::new(3.0, 8.0, 4.0, 6.0);
        assert_relative_eq!(m.determinant(), -14.0);
    }

    #[test]
    fn test_matrix2_inverse() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix2F64::new(4.0, 7.0, 2.0, 6.0);
        let inv = m.inverse()?;
        assert_eq!(inv, Matrix2F64::new(0.6, -0.7, -0.2, 0.4));
        assert_eq!(m * inv, Matrix2F64::identity());
        Ok(())
    }

    #[test]
    fn test_matrix2_singular() {
        let m = Matrix2F64::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.inverse(), Err(AlgebraError::SingularMatrix));
    }

    #[test]
    fn test_matrix2_inverse_small_entries() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix2F32::new(2e-4, 1e-4, 1e-4, 3e-4);
        let inv = m.inverse()?;
        assert_relative_eq!(m * inv, Matrix2F32::identity(), epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn test_matrix2_display() {
        let m = Matrix2F32::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.to_string(), "Matrix2f(1, 2,\n  3, 4)");
    }
}
