//! Pointer Input Handling
//!
//! This crate turns pointer drags into changes of the interactive view
//! rotation.

mod drag_controller;

pub use drag_controller::{DragController, DragState, ViewControl, DEFAULT_DRAG_SENSITIVITY};
