#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Top-level crate re-exporting [`algebra`] (vectors, matrices, rotations and poses)
//! and [`geometry`] (lines, planes, boxes, spheres and spherical coordinates).

#[doc(inline)]
pub use math3d_algebra as algebra;

#[doc(inline)]
pub use math3d_geometry as geometry;
