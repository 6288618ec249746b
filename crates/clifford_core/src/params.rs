//! Rotation parameters supplied by the control panel
//!
//! The panel always delivers a complete replacement value; the engine reads
//! whatever value is current at the start of each frame.

use clifford_math::{PlaneAngles, RotationPlane};
use serde::{Serialize, Deserialize};

/// Angular speeds (radians per second) for each 4D plane, plus the point count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParameters {
    /// Number of points sampled on the torus
    pub point_count: u32,
    pub speed_xy: f64,
    pub speed_xz: f64,
    pub speed_xw: f64,
    pub speed_yz: f64,
    pub speed_yw: f64,
    pub speed_zw: f64,
}

impl Default for RotationParameters {
    fn default() -> Self {
        Self {
            point_count: 2500,
            speed_xy: 0.5,
            speed_xz: 0.3,
            speed_xw: 0.7,
            speed_yz: 0.2,
            speed_yw: 0.4,
            speed_zw: 0.6,
        }
    }
}

impl RotationParameters {
    /// Parameters with every speed set to zero
    pub fn still(point_count: u32) -> Self {
        Self {
            point_count,
            speed_xy: 0.0,
            speed_xz: 0.0,
            speed_xw: 0.0,
            speed_yz: 0.0,
            speed_yw: 0.0,
            speed_zw: 0.0,
        }
    }

    /// Speed for one plane
    pub fn speed(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::XY => self.speed_xy,
            RotationPlane::XZ => self.speed_xz,
            RotationPlane::XW => self.speed_xw,
            RotationPlane::YZ => self.speed_yz,
            RotationPlane::YW => self.speed_yw,
            RotationPlane::ZW => self.speed_zw,
        }
    }

    /// Set the speed for one plane
    pub fn set_speed(&mut self, plane: RotationPlane, speed: f64) {
        let slot = match plane {
            RotationPlane::XY => &mut self.speed_xy,
            RotationPlane::XZ => &mut self.speed_xz,
            RotationPlane::XW => &mut self.speed_xw,
            RotationPlane::YZ => &mut self.speed_yz,
            RotationPlane::YW => &mut self.speed_yw,
            RotationPlane::ZW => &mut self.speed_zw,
        };
        *slot = speed;
    }

    /// Builder: set the speed for one plane
    pub fn with_speed(mut self, plane: RotationPlane, speed: f64) -> Self {
        self.set_speed(plane, speed);
        self
    }

    /// All six speeds, in composition order
    pub fn speeds(&self) -> PlaneAngles {
        PlaneAngles(RotationPlane::ALL.map(|plane| self.speed(plane)))
    }

    /// Rotation angles after `elapsed_secs` seconds
    ///
    /// Angles grow linearly with time and are never wrapped.
    pub fn angles_at(&self, elapsed_secs: f64) -> PlaneAngles {
        self.speeds().scaled(elapsed_secs)
    }

    /// Point count as a length
    pub fn point_count(&self) -> usize {
        self.point_count as usize
    }
}
