//! Renderable markers - bridges MarkerScene to GPU instances
//!
//! This module converts the retained marker scene from clifford_core into
//! the instance buffer layout used by the marker pipeline.

use clifford_core::{Marker, MarkerScene};
use crate::pipeline::MarkerInstance;

/// Convert one sRGB channel to linear
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// GPU-ready instances collected from a scene, in draw order
pub struct RenderableMarkers {
    pub instances: Vec<MarkerInstance>,
}

impl RenderableMarkers {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    /// Collect instances from a scene
    ///
    /// When `linear_output` is set, colors are converted from sRGB so that an
    /// sRGB surface re-encodes them to the original values.
    pub fn from_scene(scene: &MarkerScene, linear_output: bool) -> Self {
        let mut result = Self {
            instances: Vec::with_capacity(scene.len()),
        };
        result.rebuild(scene, linear_output);
        result
    }

    /// Refill from a scene, reusing the allocation
    pub fn rebuild(&mut self, scene: &MarkerScene, linear_output: bool) {
        self.instances.clear();
        self.instances.extend(
            scene
                .iter_draw_order()
                .map(|(_, marker)| Self::instance(marker, linear_output)),
        );
    }

    fn instance(marker: &Marker, linear_output: bool) -> MarkerInstance {
        let fill = marker.fill;
        let color = if linear_output {
            [srgb_to_linear(fill.r), srgb_to_linear(fill.g), srgb_to_linear(fill.b), 1.0]
        } else {
            fill.to_rgba(1.0)
        };
        MarkerInstance {
            center: [marker.x as f32, marker.y as f32],
            radius: marker.radius as f32,
            opacity: marker.fill_opacity.clamp(0.0, 1.0) as f32,
            color,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for RenderableMarkers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clifford_core::{join_frame, Color, ProjectedPoint, Viewport};

    fn scene_with(points: &[ProjectedPoint]) -> MarkerScene {
        let mut scene = MarkerScene::new(Viewport::new(200.0, 100.0));
        join_frame(&mut scene, points);
        scene
    }

    fn point(id: u32, z: f64) -> ProjectedPoint {
        ProjectedPoint {
            id,
            x: 10.0 * id as f64,
            y: 5.0,
            z,
            color: Color::new(0.5, 0.5, 0.5),
        }
    }

    #[test]
    fn test_instances_follow_draw_order() {
        let scene = scene_with(&[point(2, -1.0), point(0, 0.0), point(1, 1.0)]);
        let renderable = RenderableMarkers::from_scene(&scene, false);
        let xs: Vec<f32> = renderable.instances.iter().map(|i| i.center[0]).collect();
        assert_eq!(xs, vec![20.0, 0.0, 10.0]);
    }

    #[test]
    fn test_opacity_clamped_to_one() {
        // z = 2.0 gives (2.0 + 1.5) * 0.5 = 1.75 before clamping
        let scene = scene_with(&[point(0, 2.0)]);
        let renderable = RenderableMarkers::from_scene(&scene, false);
        assert_eq!(renderable.instances[0].opacity, 1.0);
    }

    #[test]
    fn test_linear_output_darkens_midtones() {
        let scene = scene_with(&[point(0, 0.0)]);
        let srgb = RenderableMarkers::from_scene(&scene, false);
        let linear = RenderableMarkers::from_scene(&scene, true);
        assert_eq!(srgb.instances[0].color[0], 0.5);
        assert!(linear.instances[0].color[0] < 0.25);
    }

    #[test]
    fn test_srgb_to_linear_end_points() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_scene() {
        let scene = MarkerScene::new(Viewport::new(1.0, 1.0));
        assert!(RenderableMarkers::from_scene(&scene, true).is_empty());
    }
}
