#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Math3d Algebra
//!
//! Value types for small, fixed-size linear algebra as used in graphics and robotics:
//!
//! - **Vectors**: [`Vector2`], [`Vector3`], [`Vector4`]
//! - **Matrices**: [`Matrix2`], [`Matrix3`], [`Matrix4`] (column-major storage)
//! - **Rotations**: [`Quaternion`] and [`Euler`] angles
//! - **Rigid transforms**: [`Pose3d`]
//!
//! Every type is generic over a [`Scalar`] (`f32` or `f64`) and the `F32` / `F64`
//! aliases pin the precision explicitly. Equality (`==`) is approximate and shares a
//! single tolerance policy, see [`Scalar::EPS`].
//!
//! ## Example
//!
//! ```rust
//! use math3d_algebra::{Matrix3F64, Pose3dF64, QuaternionF64, Vector3F64};
//!
//! let m = Matrix3F64::new(1.0, -4.0, 1.0, -6.0, -7.0, 9.0, -4.0, 6.0, 0.0);
//! assert_eq!(m * Vector3F64::new(2.0, 7.0, 6.0), Vector3F64::new(-20.0, -7.0, 34.0));
//!
//! let pose = Pose3dF64::new(
//!     Vector3F64::new(-3.0, 0.0, 0.0),
//!     QuaternionF64::rotation_z(std::f64::consts::FRAC_PI_2),
//! );
//! assert_eq!(pose.apply(Vector3F64::new(1.0, 1.0, 1.0)), Vector3F64::new(-4.0, 1.0, 1.0));
//! ```

mod error;
mod euler;
mod matrix;
mod pose;
mod quat;
mod scalar;
mod vector;

pub use error::AlgebraError;
pub use euler::{Euler, EulerConvention, EulerF32, EulerF64, EulerOrder};
pub use matrix::{Matrix2, Matrix2F32, Matrix2F64};
pub use matrix::{Matrix3, Matrix3F32, Matrix3F64};
pub use matrix::{Matrix4, Matrix4F32, Matrix4F64};
pub use pose::{Pose3d, Pose3dF32, Pose3dF64};
pub use quat::{Quaternion, QuaternionF32, QuaternionF64};
pub use scalar::Scalar;
pub use vector::{Vector2, Vector2F32, Vector2F64};
pub use vector::{Vector3, Vector3F32, Vector3F64};
pub use vector::{Vector4, Vector4F32, Vector4F64};
