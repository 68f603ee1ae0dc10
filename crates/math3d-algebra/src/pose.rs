//! Rigid transform in 3D.

use crate::{Euler, Matrix3, Matrix4, Quaternion, Scalar, Vector3};

/// Pose of a child frame B expressed in a parent frame A.
///
/// `position` is the origin of B in A coordinates and `orientation` the rotation of
/// B relative to A. Applying the pose maps points from B coordinates to A
/// coordinates. The orientation is kept at unit length by every constructor.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose3d<T> {
    /// Origin of the child frame in the parent frame.
    pub position: Vector3<T>,
    /// Rotation of the child frame relative to the parent frame.
    pub orientation: Quaternion<T>,
}

/// Pose (single precision).
pub type Pose3dF32 = Pose3d<f32>;

/// Pose (double precision).
pub type Pose3dF64 = Pose3d<f64>;

impl<T: Scalar> Default for Pose3d<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Pose3d<T> {
    /// Create a pose, normalizing the orientation.
    ///
    /// A zero quaternion cannot be normalized and leaves a NaN orientation.
    pub fn new(position: Vector3<T>, orientation: Quaternion<T>) -> Self {
        let orientation = orientation.try_normalize().unwrap_or_else(|_| {
            log::warn!("Pose3d built from a zero quaternion, orientation is undefined");
            orientation.normalize()
        });

        Self {
            position,
            orientation,
        }
    }

    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: Quaternion::identity(),
        }
    }

    /// Create a pose from a position and a rotation matrix.
    #[inline]
    pub fn from_rotation_matrix(position: Vector3<T>, rotation: &Matrix3<T>) -> Self {
        Self::new(position, Quaternion::from_rotation_matrix(rotation))
    }

    /// Create a pose from a position and Euler angles.
    #[inline]
    pub fn from_euler(position: Vector3<T>, euler: &Euler<T>) -> Self {
        Self::new(position, euler.to_quaternion())
    }

    /// Create a pose from a homogeneous transform.
    #[inline]
    pub fn from_transform(transform: &Matrix4<T>) -> Self {
        Self::new(transform.position(), Quaternion::from_transform(transform))
    }

    /// Map a point from child frame coordinates to parent frame coordinates.
    #[inline]
    pub fn apply(&self, point: Vector3<T>) -> Vector3<T> {
        self.orientation.rotate(point) + self.position
    }

    /// Pose of the parent frame expressed in the child frame.
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.conjugate();
        Self {
            position: orientation.rotate(-self.position),
            orientation,
        }
    }

    /// Homogeneous transform equivalent to the pose.
    #[inline]
    pub fn to_matrix(&self) -> Matrix4<T> {
        Matrix4::from_rotation_translation(&self.orientation.to_rotation_matrix(), self.position)
    }
}

// pose_ca = pose_ba * pose_cb
impl<T: Scalar> std::ops::Mul for Pose3d<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            position: self.apply(rhs.position),
            orientation: self.orientation * rhs.orientation,
        }
    }
}

impl<T: Scalar> std::ops::Mul<Vector3<T>> for Pose3d<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.apply(rhs)
    }
}

impl<T: Scalar> PartialEq for Pose3d<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.orientation == other.orientation
    }
}

impl<T: Scalar> approx::AbsDiffEq for Pose3d<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPS
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.position, &other.position, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.orientation, &other.orientation, epsilon)
    }
}

impl<T: Scalar> approx::RelativeEq for Pose3d<T> {
    fn default_max_relative() -> T {
        T::EPS
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        approx::RelativeEq::relative_eq(&self.position, &other.position, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(
                &self.orientation,
                &other.orientation,
                epsilon,
                max_relative,
            )
    }
}

impl<T: Scalar> approx::UlpsEq for Pose3d<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.position, &other.position, epsilon, max_ulps)
            && approx::UlpsEq::ulps_eq(&self.orientation, &other.orientation, epsilon, max_ulps)
    }
}

impl<T: Scalar> std::fmt::Display for Pose3d<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pose3d(pos={}, rot={})", self.position, self.orientation)
    }
}
