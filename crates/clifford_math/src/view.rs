//! Interactive 3D viewing rotation
//!
//! The view rotation is applied after the stereographic projection and is
//! independent of the 4D animation rotations.

use std::f64::consts::FRAC_PI_2;
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Pitch is kept within ±this many radians
pub const PITCH_LIMIT: f64 = FRAC_PI_2;

/// Pitch and yaw of the interactive view
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Rotation about the horizontal (X) axis, in [−π/2, π/2]
    pub pitch: f64,
    /// Rotation about the vertical (Y) axis, unbounded
    pub yaw: f64,
}

impl ViewState {
    /// Create a view, clamping pitch into range
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self {
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            yaw,
        }
    }

    /// Add to yaw and pitch, re-clamping pitch immediately
    pub fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Yaw about the vertical axis, then pitch about the horizontal axis
pub fn rotate3d(p: Vec3, view: &ViewState) -> Vec3 {
    let (sin_yaw, cos_yaw) = view.yaw.sin_cos();
    let x = p.x * cos_yaw + p.z * sin_yaw;
    let z = -p.x * sin_yaw + p.z * cos_yaw;

    let (sin_pitch, cos_pitch) = view.pitch.sin_cos();
    let y = p.y * cos_pitch - z * sin_pitch;
    let z = p.y * sin_pitch + z * cos_pitch;

    Vec3::new(x, y, z)
}
