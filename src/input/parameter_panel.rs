//! Keyboard parameter panel
//!
//! Stands in for a slider panel: holds the current rotation parameters,
//! applies bounded adjustments and hands back a complete replacement value
//! after every change.

use clifford_core::{RotationParameters, RotationPlane};

/// Slider range for each plane speed (radians per second)
pub const SPEED_RANGE: (f64, f64) = (0.0, 2.0);
/// Speed change per key press
pub const SPEED_STEP: f64 = 0.05;
/// Slider range for the point count
pub const POINT_COUNT_RANGE: (u32, u32) = (500, 10_000);
/// Point count change per key press
pub const POINT_COUNT_STEP: u32 = 100;

/// Explanatory text shown alongside the visualization
pub const INFO_TEXT: &str = "This visualization shows a stereographic projection of a Clifford \
torus from 4D to 3D space. The sliders control the rotation speeds in the 6 independent \
planes of 4D rotation.";

/// Hint for the pointer interaction
pub const DRAG_HINT: &str = "Drag to rotate the 3D projection";

/// Keyboard-driven producer of [`RotationParameters`]
#[derive(Debug, Clone)]
pub struct ParameterPanel {
    params: RotationParameters,
    defaults: RotationParameters,
    selected: RotationPlane,
    info_visible: bool,
}

impl ParameterPanel {
    /// Create a panel starting at `params`; reset returns to `params`
    pub fn new(params: RotationParameters) -> Self {
        Self {
            params,
            defaults: params,
            selected: RotationPlane::XY,
            info_visible: false,
        }
    }

    /// Builder: reset to something other than the starting parameters
    pub fn with_defaults(mut self, defaults: RotationParameters) -> Self {
        self.defaults = defaults;
        self
    }

    /// Current parameters
    pub fn parameters(&self) -> RotationParameters {
        self.params
    }

    /// Plane the speed keys act on
    pub fn selected(&self) -> RotationPlane {
        self.selected
    }

    pub fn select(&mut self, plane: RotationPlane) {
        self.selected = plane;
        log::debug!("Selected plane {}", plane.name());
    }

    /// Step the selected plane's speed and return the new parameters
    pub fn adjust_speed(&mut self, steps: i32) -> RotationParameters {
        let current = self.params.speed(self.selected);
        let raw = current + steps as f64 * SPEED_STEP;
        // Keep values on the slider's 0.01 grid
        let snapped = (raw * 100.0).round() / 100.0;
        let speed = snapped.clamp(SPEED_RANGE.0, SPEED_RANGE.1);
        self.params.set_speed(self.selected, speed);
        log::info!("{} speed: {:.2}", self.selected.name(), speed);
        self.params
    }

    /// Step the point count and return the new parameters
    pub fn adjust_point_count(&mut self, steps: i32) -> RotationParameters {
        let current = self.params.point_count as i64;
        let raw = current + steps as i64 * POINT_COUNT_STEP as i64;
        let count = raw.clamp(POINT_COUNT_RANGE.0 as i64, POINT_COUNT_RANGE.1 as i64) as u32;
        self.params.point_count = count;
        log::info!("Point count: {}", count);
        self.params
    }

    /// Restore the default parameters
    pub fn reset(&mut self) -> RotationParameters {
        self.params = self.defaults;
        log::info!("Parameters reset");
        self.params
    }

    /// Show or hide the info text; returns the new visibility
    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        if self.info_visible {
            log::info!("{}", INFO_TEXT);
        }
        self.info_visible
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// One-line summary: point count, each speed, selected plane marked
    pub fn status_line(&self) -> String {
        let speeds: Vec<String> = RotationPlane::ALL
            .iter()
            .map(|&plane| {
                let marker = if plane == self.selected { "*" } else { "" };
                format!("{}{}:{:.2}", marker, plane.name(), self.params.speed(plane))
            })
            .collect();
        format!("{} points | {}", self.params.point_count, speeds.join(" "))
    }
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self::new(RotationParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_speed_steps_selected_plane() {
        let mut panel = ParameterPanel::default();
        panel.select(RotationPlane::XW);
        let params = panel.adjust_speed(2);
        assert!((params.speed_xw - 0.8).abs() < 1e-12);
        assert_eq!(params.speed_xy, 0.5);
    }

    #[test]
    fn test_speed_clamped_to_slider_range() {
        let mut panel = ParameterPanel::default();
        assert_eq!(panel.adjust_speed(100).speed_xy, 2.0);
        assert_eq!(panel.adjust_speed(-100).speed_xy, 0.0);
    }

    #[test]
    fn test_speed_stays_on_grid() {
        let mut panel = ParameterPanel::new(RotationParameters::still(500));
        for _ in 0..7 {
            panel.adjust_speed(1);
        }
        assert_eq!(panel.parameters().speed_xy, 0.35);
    }

    #[test]
    fn test_point_count_clamped() {
        let mut panel = ParameterPanel::default();
        assert_eq!(panel.adjust_point_count(1).point_count, 2600);
        assert_eq!(panel.adjust_point_count(-1000).point_count, 500);
        assert_eq!(panel.adjust_point_count(1000).point_count, 10_000);
    }

    #[test]
    fn test_out_of_range_start_is_pulled_in() {
        let mut panel = ParameterPanel::new(RotationParameters::still(20));
        assert_eq!(panel.adjust_point_count(1).point_count, 500);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut panel = ParameterPanel::default();
        panel.adjust_speed(5);
        panel.adjust_point_count(3);
        assert_eq!(panel.reset(), RotationParameters::default());
    }

    #[test]
    fn test_reset_to_custom_defaults() {
        let start = RotationParameters::still(1000);
        let mut panel = ParameterPanel::new(start).with_defaults(RotationParameters::default());
        assert_eq!(panel.parameters(), start);
        assert_eq!(panel.reset(), RotationParameters::default());
    }

    #[test]
    fn test_toggle_info() {
        let mut panel = ParameterPanel::default();
        assert!(!panel.info_visible());
        assert!(panel.toggle_info());
        assert!(!panel.toggle_info());
    }

    #[test]
    fn test_status_line_marks_selection() {
        let mut panel = ParameterPanel::default();
        panel.select(RotationPlane::ZW);
        let status = panel.status_line();
        assert!(status.starts_with("2500 points"));
        assert!(status.contains("*ZW:0.60"));
        assert!(status.contains(" XY:0.50"));
    }
}
