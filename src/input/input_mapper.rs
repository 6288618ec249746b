//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard, mouse and touch input to high-level actions like Exit or
//! AdjustSpeed. Cursor motion is NOT mapped here; the app forwards deltas
//! straight to the animation while a drag is active.

use winit::event::{ElementState, MouseButton, TouchPhase};
use winit::keyboard::KeyCode;

use clifford_core::RotationPlane;

/// Actions triggered by keys and buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Restore default parameters (R key)
    ResetParameters,
    /// Show or hide the info text (I key)
    ToggleInfo,
    /// Choose the plane the speed keys act on (1-6)
    SelectPlane(RotationPlane),
    /// Change the selected plane's speed by this many steps (Up/Down)
    AdjustSpeed(i32),
    /// Change the point count by this many steps (PageUp/PageDown)
    AdjustPointCount(i32),
    /// Left button or first finger down on the surface
    DragStart,
    /// Left button or finger released
    DragEnd,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => Some(InputAction::ResetParameters),
            KeyCode::KeyI => Some(InputAction::ToggleInfo),
            KeyCode::Digit1 => Some(InputAction::SelectPlane(RotationPlane::XY)),
            KeyCode::Digit2 => Some(InputAction::SelectPlane(RotationPlane::XZ)),
            KeyCode::Digit3 => Some(InputAction::SelectPlane(RotationPlane::XW)),
            KeyCode::Digit4 => Some(InputAction::SelectPlane(RotationPlane::YZ)),
            KeyCode::Digit5 => Some(InputAction::SelectPlane(RotationPlane::YW)),
            KeyCode::Digit6 => Some(InputAction::SelectPlane(RotationPlane::ZW)),
            KeyCode::ArrowUp => Some(InputAction::AdjustSpeed(1)),
            KeyCode::ArrowDown => Some(InputAction::AdjustSpeed(-1)),
            KeyCode::PageUp => Some(InputAction::AdjustPointCount(1)),
            KeyCode::PageDown => Some(InputAction::AdjustPointCount(-1)),
            _ => None,
        }
    }

    /// Map mouse button to an action
    ///
    /// Only the left button drives the view rotation
    pub fn map_mouse_button(button: MouseButton, state: ElementState) -> Option<InputAction> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => Some(InputAction::DragStart),
            ElementState::Released => Some(InputAction::DragEnd),
        }
    }

    /// Map a touch phase to the matching drag action
    ///
    /// Movement returns `None`; the app turns it into drag deltas
    pub fn map_touch_phase(phase: TouchPhase) -> Option<InputAction> {
        match phase {
            TouchPhase::Started => Some(InputAction::DragStart),
            TouchPhase::Ended | TouchPhase::Cancelled => Some(InputAction::DragEnd),
            TouchPhase::Moved => None,
        }
    }
}
