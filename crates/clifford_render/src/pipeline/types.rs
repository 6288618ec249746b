//! GPU-compatible data types for the marker pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// One circle, drawn as an instanced quad
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MarkerInstance {
    /// Centre in surface pixels, y down
    pub center: [f32; 2],
    /// Radius in logical pixels
    pub radius: f32,
    /// Fill opacity
    pub opacity: f32,
    /// RGBA fill color, in the surface's color space
    pub color: [f32; 4],
}

/// Uniforms for the marker pass
/// Layout: 16 bytes (must match markers.wgsl MarkerUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MarkerUniforms {
    /// Surface size in pixels
    pub viewport: [f32; 2],
    /// Physical pixels per logical pixel, applied to radii
    pub point_scale: f32,
    pub _padding: f32,
}

impl Default for MarkerUniforms {
    fn default() -> Self {
        Self {
            viewport: [1.0, 1.0],
            point_scale: 1.0,
            _padding: 0.0,
        }
    }
}

impl MarkerUniforms {
    pub fn new(width: f32, height: f32, point_scale: f32) -> Self {
        Self {
            viewport: [width.max(1.0), height.max(1.0)],
            point_scale,
            _padding: 0.0,
        }
    }
}

/// Vertices per marker quad (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;
