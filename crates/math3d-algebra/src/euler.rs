//! Euler angles.
//!
//! Every order and convention is handled by the same code: the order is mapped to
//! the sequence of axes the elemental rotations are composed in, plus the parity of
//! that sequence, and composition and decomposition work on that sequence.

use crate::{AlgebraError, Matrix3, Matrix4, Quaternion, Scalar, Vector3};

/// Order in which the elemental rotations are taken (Tait-Bryan angles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    XYZ,
    /// Y, then Z, then X.
    YZX,
    /// Z, then X, then Y.
    ZXY,
    /// X, then Z, then Y.
    XZY,
    /// Y, then X, then Z.
    YXZ,
    /// Z, then Y, then X.
    ZYX,
}

impl EulerOrder {
    /// Axes of the elemental rotations in the order they are taken (0 = x).
    pub fn axes(self) -> [usize; 3] {
        match self {
            EulerOrder::XYZ => [0, 1, 2],
            EulerOrder::YZX => [1, 2, 0],
            EulerOrder::ZXY => [2, 0, 1],
            EulerOrder::XZY => [0, 2, 1],
            EulerOrder::YXZ => [1, 0, 2],
            EulerOrder::ZYX => [2, 1, 0],
        }
    }
}

impl std::fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EulerOrder::XYZ => "XYZ",
            EulerOrder::YZX => "YZX",
            EulerOrder::ZXY => "ZXY",
            EulerOrder::XZY => "XZY",
            EulerOrder::YXZ => "YXZ",
            EulerOrder::ZYX => "ZYX",
        };
        write!(f, "{name}")
    }
}

/// Reference frame of the elemental rotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerConvention {
    /// Rotations about the axes of the rotating body.
    #[default]
    Intrinsic,
    /// Rotations about the fixed world axes.
    Extrinsic,
}

impl std::fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerConvention::Intrinsic => write!(f, "intrinsic"),
            EulerConvention::Extrinsic => write!(f, "extrinsic"),
        }
    }
}

// Above this |sin| of the middle angle the first and last axes are aligned.
const GIMBAL_LOCK_THRESHOLD: f64 = 1.0 - 1e-6;

/// Three angles in radians describing a rotation as a sequence of elemental
/// rotations about the x, y and z axes.
///
/// The angle about each axis is stored in the field named after the axis; the
/// `order` and `convention` decide how the three are composed. Defaults to zero
/// angles, order XYZ, intrinsic.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euler<T> {
    /// Angle about the x axis.
    pub x: T,
    /// Angle about the y axis.
    pub y: T,
    /// Angle about the z axis.
    pub z: T,
    /// Order of the elemental rotations.
    pub order: EulerOrder,
    /// Reference frame of the elemental rotations.
    pub convention: EulerConvention,
}

/// Euler angles (single precision).
pub type EulerF32 = Euler<f32>;

/// Euler angles (double precision).
pub type EulerF64 = Euler<f64>;

impl<T: Scalar> Euler<T> {
    /// Create XYZ intrinsic Euler angles.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::with_order(x, y, z, EulerOrder::XYZ, EulerConvention::Intrinsic)
    }

    /// Create Euler angles with an explicit order and convention.
    #[inline]
    pub fn with_order(x: T, y: T, z: T, order: EulerOrder, convention: EulerConvention) -> Self {
        Self {
            x,
            y,
            z,
            order,
            convention,
        }
    }

    /// XYZ intrinsic angles of a rotation matrix.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let mut euler = Self::default();
        euler.set_from_rotation_matrix(m);
        euler
    }

    /// XYZ intrinsic angles of the rotation block of a homogeneous transform.
    pub fn from_transform(m: &Matrix4<T>) -> Self {
        let mut euler = Self::default();
        euler.set_from_transform(m);
        euler
    }

    /// XYZ intrinsic angles of a quaternion.
    pub fn from_quaternion(q: Quaternion<T>) -> Self {
        let mut euler = Self::default();
        euler.set_from_quaternion(q);
        euler
    }

    /// XYZ intrinsic angles of a rotation of `angle` radians about `axis`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] if the axis is the zero vector.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, AlgebraError> {
        let mut euler = Self::default();
        euler.set_from_axis_angle(axis, angle)?;
        Ok(euler)
    }

    /// The angles indexed by axis, `[x, y, z]`.
    #[inline]
    pub fn angles(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    // Axes in composition order and whether that sequence is an even permutation.
    fn sequence(&self) -> ([usize; 3], bool) {
        let mut axes = self.order.axes();
        if self.convention == EulerConvention::Extrinsic {
            // extrinsic abc == intrinsic cba
            axes.reverse();
        }
        let even = matches!(axes, [0, 1, 2] | [1, 2, 0] | [2, 0, 1]);
        (axes, even)
    }

    /// Overwrite the angles with the decomposition of a rotation matrix, keeping the
    /// current order and convention.
    ///
    /// The middle angle lies in `[-pi/2, pi/2]`. At gimbal lock the last angle is
    /// set to zero and the first absorbs the whole rotation.
    pub fn set_from_rotation_matrix(&mut self, m: &Matrix3<T>) {
        let ([i, j, k], even) = self.sequence();
        let sign = if even { T::one() } else { -T::one() };

        let sin_mid = sign * m[(i, k)];
        let mut angles = [T::zero(); 3];
        angles[j] = sin_mid.max(-T::one()).min(T::one()).asin();

        if m[(i, k)].abs() < T::lit(GIMBAL_LOCK_THRESHOLD) {
            angles[i] = (-sign * m[(j, k)]).atan2(m[(k, k)]);
            angles[k] = (-sign * m[(i, j)]).atan2(m[(i, i)]);
        } else {
            log::debug!(
                "Euler {} {}: gimbal lock, pinning the last angle to zero",
                self.order,
                self.convention
            );
            angles[i] = (sign * m[(k, j)]).atan2(m[(j, j)]);
            angles[k] = T::zero();
        }

        [self.x, self.y, self.z] = angles;
    }

    /// Same as [`Self::set_from_rotation_matrix`] on the rotation block of a transform.
    #[inline]
    pub fn set_from_transform(&mut self, m: &Matrix4<T>) {
        self.set_from_rotation_matrix(&m.rotation());
    }

    /// Overwrite the angles with the decomposition of a quaternion.
    ///
    /// The quaternion does not need to be unit length.
    #[inline]
    pub fn set_from_quaternion(&mut self, q: Quaternion<T>) {
        self.set_from_rotation_matrix(&Matrix3::from_quaternion(q));
    }

    /// Overwrite the angles with the decomposition of an axis-angle rotation.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ZeroLength`] if the axis is the zero vector, the angles are
    /// left untouched.
    pub fn set_from_axis_angle(&mut self, axis: Vector3<T>, angle: T) -> Result<(), AlgebraError> {
        let m = Matrix3::from_axis_angle(axis, angle)?;
        self.set_from_rotation_matrix(&m);
        Ok(())
    }

    /// Rotation matrix obtained by composing the elemental rotations.
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let (axes, _) = self.sequence();
        let angles = self.angles();
        axes.iter().fold(Matrix3::identity(), |acc, &axis| {
            acc * Matrix3::rotation_about(axis, angles[axis])
        })
    }

    /// Unit quaternion obtained by composing the elemental rotations.
    pub fn to_quaternion(&self) -> Quaternion<T> {
        let (axes, _) = self.sequence();
        let angles = self.angles();
        axes.iter().fold(Quaternion::identity(), |acc, &axis| {
            acc * Quaternion::rotation_about(axis, angles[axis])
        })
    }
}

impl<T: Scalar> PartialEq for Euler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.convention == other.convention
            && self.x.approx_eq(other.x)
            && self.y.approx_eq(other.y)
            && self.z.approx_eq(other.z)
    }
}

impl<T: Scalar> approx::AbsDiffEq for Euler<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.order == other.order
            && self.convention == other.convention
            && T::abs_diff_eq(&self.x, &other.x, epsilon)
            && T::abs_diff_eq(&self.y, &other.y, epsilon)
            && T::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl<T: Scalar> approx::RelativeEq for Euler<T> {
    fn default_max_relative() -> T {
        T::EPS
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.order == other.order
            && self.convention == other.convention
            && T::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && T::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && T::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl<T: Scalar> approx::UlpsEq for Euler<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.order == other.order
            && self.convention == other.convention
            && T::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && T::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
            && T::ulps_eq(&self.z, &other.z, epsilon, max_ulps)
    }
}

impl<T: Scalar> std::fmt::Display for Euler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Euler{}(x={}, y={}, z={}, order={}, convention={})",
            T::SUFFIX,
            self.x,
            self.y,
            self.z,
            self.order,
            self.convention
        )
    }
}
