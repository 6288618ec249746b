//! 4D Mathematics Library
//!
//! This crate provides the vector types and pure geometric transforms used to
//! animate a Clifford torus.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`] - 3D point produced by the stereographic projection
//! - [`RotationPlane`] - the six planes of 4D rotation
//! - [`PlaneAngles`] - one angle per rotation plane
//! - [`ViewState`] - interactive pitch/yaw viewing rotation
//!
//! ## Transforms
//!
//! - [`rotate4d`] - sequential composition of the six planar rotations
//! - [`stereographic_projection`] - S³ to 3-space, clamped at the pole
//! - [`rotate3d`] - yaw then pitch viewing rotation

mod vec3;
mod vec4;
mod rotation;
pub mod projection;
pub mod view;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use rotation::{rotate4d, PlaneAngles, RotationPlane};
pub use projection::{stereographic_projection, POLE_EPSILON};
pub use view::{rotate3d, ViewState, PITCH_LIMIT};
