//! Drag controller for orbiting the projected torus
//!
//! Controls:
//! - Drag start: begin orbiting
//! - Drag move: horizontal motion turns yaw, vertical motion turns pitch
//! - Drag end: stop orbiting

use clifford_math::ViewState;

/// Radians of rotation per pixel of pointer motion
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.005;

/// Whether a drag is in progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Converts pointer drag deltas into view rotation updates
pub struct DragController {
    state: DragState,

    // Configuration
    pub sensitivity: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }

    /// Current drag state
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Check if a drag is in progress (hosts use this to pick a cursor)
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Idle → Dragging
    pub fn drag_start(&mut self) {
        if self.state == DragState::Idle {
            log::debug!("Drag started");
        }
        self.state = DragState::Dragging;
    }

    /// Dragging → Idle
    pub fn drag_end(&mut self) {
        if self.state == DragState::Dragging {
            log::debug!("Drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Apply an incremental pointer delta to the view
    ///
    /// Moving right increases yaw; moving down (positive `delta_y`) decreases
    /// pitch. Pitch is clamped on every call. Returns false and leaves the
    /// view untouched when no drag is in progress.
    pub fn drag_move<V: ViewControl>(&mut self, delta_x: f64, delta_y: f64, view: &mut V) -> bool {
        if self.state != DragState::Dragging {
            return false;
        }
        view.orbit(delta_x * self.sensitivity, -delta_y * self.sensitivity);
        true
    }

    /// Builder: set drag sensitivity
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }
}

/// Trait for view control
/// Allows the controller to work with different view implementations
pub trait ViewControl {
    /// Add to yaw and pitch; implementations clamp pitch
    fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64);
}

impl ViewControl for ViewState {
    fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        ViewState::orbit(self, delta_yaw, delta_pitch);
    }
}
