//! Input handling module
//!
//! Provides input mapping from raw events to semantic actions, and the
//! keyboard parameter panel those actions drive.

mod input_mapper;
mod parameter_panel;

pub use input_mapper::{InputMapper, InputAction};
pub use parameter_panel::{
    ParameterPanel, DRAG_HINT, INFO_TEXT, POINT_COUNT_RANGE, POINT_COUNT_STEP, SPEED_RANGE,
    SPEED_STEP,
};
