//! Rendering pipeline components
//!
//! This module contains the instanced circle pipeline used to draw the
//! marker scene.

pub mod types;
pub mod marker_pipeline;

// Re-export types
pub use types::{MarkerInstance, MarkerUniforms, QUAD_VERTEX_COUNT};

// Re-export pipelines
pub use marker_pipeline::MarkerPipeline;
