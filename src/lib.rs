//! Clifford Torus Projection
//!
//! Library half of the application: configuration, input mapping, the
//! keyboard parameter panel and the window/render systems. The binary in
//! `main.rs` wires these to the winit event loop.

pub mod config;
pub mod input;
pub mod systems;
