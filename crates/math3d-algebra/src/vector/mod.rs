//! Vector types module.
//!
//! - Vector2: 2D vector
//! - Vector3: 3D vector
//! - Vector4: 4D vector (homogeneous coordinates)

#[macro_use]
mod vec;

mod vec2;
mod vec3;
mod vec4;

pub use vec2::{Vector2, Vector2F32, Vector2F64};
pub use vec3::{Vector3, Vector3F32, Vector3F64};
pub use vec4::{Vector4, Vector4F32, Vector4F64};
