//! Marker Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the retained
//! marker scene as antialiased, alpha-blended circles.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::MarkerPipeline`] - instanced circle rendering
//! - [`renderable::RenderableMarkers`] - converts a `MarkerScene` to GPU instances
//!
//! Markers are drawn in the scene's draw order with no depth buffer, so the
//! back-to-front order of the scene decides occlusion.

pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use clifford_core::{Marker, MarkerScene, Viewport};

pub use context::{ContextError, RenderContext};
pub use renderable::{srgb_to_linear, RenderableMarkers};
