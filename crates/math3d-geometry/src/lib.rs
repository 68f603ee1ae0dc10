#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! All primitives are plain value types generic over [`math3d_algebra::Scalar`].
//! Queries are total: degenerate inputs (a zero-length line, the unbounded default
//! box) give well-defined results instead of errors.

mod aabb;
mod line;
mod plane;
mod sphere;
mod spherical;

pub use aabb::{Aabb, AabbF32, AabbF64};
pub use line::{Line, LineF32, LineF64};
pub use plane::{Plane, PlaneF32, PlaneF64};
pub use sphere::{Sphere, SphereF32, SphereF64};
pub use spherical::{SphericalCoords, SphericalCoordsF32, SphericalCoordsF64};
