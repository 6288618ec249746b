//! Core types for the Clifford torus viewer
//!
//! This crate owns the animation engine:
//! - [`RotationParameters`] - per-plane angular speeds and point count
//! - [`PointCloud`] / [`TorusPoint`] - the static point set on the torus
//! - [`project_frame`] - rotation, projection, perspective and depth sort
//! - [`MarkerScene`] - retained circle markers keyed by point id
//! - [`Animation`] - per-frame scheduler with explicit teardown

pub mod params;
pub mod color;
pub mod points;
pub mod projection;
pub mod scene;
pub mod animation;

pub use params::RotationParameters;
pub use color::{viridis, Color};
pub use points::{generate_points, torus_point, PointCloud, TorusPoint};
pub use projection::{
    marker_opacity, marker_radius, project_frame, project_point, ProjectedPoint, Viewport,
    FOCAL_LENGTH, SCALE_FRACTION,
};
pub use scene::{join_frame, DrawingSurface, Marker, MarkerKey, MarkerScene, SceneChanges};
pub use animation::{Animation, AnimationClock, AnimationOptions, Bindings};

// Re-export math and input types for convenience
pub use clifford_math::{PlaneAngles, RotationPlane, Vec3, Vec4, ViewState};
pub use clifford_input::{DragController, DragState};
