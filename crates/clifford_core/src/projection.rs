//! Projection & render pipeline
//!
//! Per frame, every torus point goes through:
//! 1. [`rotate4d`] by the time-scaled plane angles
//! 2. [`stereographic_projection`] to 3-space
//! 3. [`rotate3d`] by the interactive view
//! 4. a perspective divide and viewport mapping
//!
//! The frame is then sorted far-to-near (ascending view z) so that drawing in
//! order paints near points over far ones.

use clifford_math::{rotate3d, rotate4d, stereographic_projection, PlaneAngles, ViewState};
use crate::color::Color;
use crate::points::TorusPoint;

/// Focal parameter of the perspective divide
pub const FOCAL_LENGTH: f64 = 1.5;

/// Fraction of the smaller viewport side spanned by one unit
pub const SCALE_FRACTION: f64 = 0.4;

/// Size of the drawing surface in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixels per projected unit
    #[inline]
    pub fn scale(&self) -> f64 {
        self.width.min(self.height) * SCALE_FRACTION
    }

    /// Centre of the surface
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// A point after projection, valid for one frame only
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub id: u32,
    /// Screen x in pixels, left to right
    pub x: f64,
    /// Screen y in pixels, top to bottom
    pub y: f64,
    /// View-space depth; larger is nearer the viewer
    pub z: f64,
    pub color: Color,
}

impl ProjectedPoint {
    /// Circle radius for this point's depth
    pub fn radius(&self) -> f64 {
        marker_radius(self.z)
    }

    /// Fill opacity for this point's depth
    pub fn opacity(&self) -> f64 {
        marker_opacity(self.z)
    }
}

/// Radius depth cue: max(0.1, (z + 1.5) × 0.8)
#[inline]
pub fn marker_radius(z: f64) -> f64 {
    ((z + 1.5) * 0.8).max(0.1)
}

/// Opacity depth cue: max(0.1, (z + 1.5) × 0.5)
#[inline]
pub fn marker_opacity(z: f64) -> f64 {
    ((z + 1.5) * 0.5).max(0.1)
}

/// Run one point through the full transform chain
pub fn project_point(
    point: &TorusPoint,
    angles: &PlaneAngles,
    view: &ViewState,
    viewport: Viewport,
) -> ProjectedPoint {
    let rotated = rotate4d(point.original, angles);
    let projected = stereographic_projection(rotated);
    let v = rotate3d(projected, view);

    let perspective = FOCAL_LENGTH / (FOCAL_LENGTH + v.z);
    let scale = viewport.scale();
    let (cx, cy) = viewport.center();

    ProjectedPoint {
        id: point.id,
        x: cx + v.x * scale * perspective,
        y: cy - v.y * scale * perspective,
        z: v.z,
        color: point.color,
    }
}

/// Project every point and sort the result by ascending depth
pub fn project_frame(
    points: &[TorusPoint],
    angles: &PlaneAngles,
    view: &ViewState,
    viewport: Viewport,
) -> Vec<ProjectedPoint> {
    let mut frame: Vec<ProjectedPoint> = points
        .iter()
        .map(|p| project_point(p, angles, view, viewport))
        .collect();
    frame.sort_by(|a, b| a.z.total_cmp(&b.z));
    frame
}
