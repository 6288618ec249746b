//! Rotations in the six planes of 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Planar rotations do not commute, so [`rotate4d`] applies them in the fixed
//! order of [`RotationPlane::ALL`], each step acting on the coordinates
//! produced by the previous one.

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The 6 rotation planes in 4D space, in composition order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane
    XY,
    /// XZ plane
    XZ,
    /// XW plane
    XW,
    /// YZ plane
    YZ,
    /// YW plane
    YW,
    /// ZW plane
    ZW,
}

impl RotationPlane {
    /// All planes, in the order [`rotate4d`] applies them
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Position of this plane in [`RotationPlane::ALL`]
    pub fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Coordinate indices (a, b) spanned by the plane
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Short display name ("XY", "ZW", ...)
    pub fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }

    /// Rotate `p` by `angle` radians within this plane
    ///
    /// a' = a cos θ − b sin θ, b' = a sin θ + b cos θ
    #[inline]
    pub fn rotate(self, p: Vec4, angle: f64) -> Vec4 {
        let (a, b) = self.axes();
        let (sin, cos) = angle.sin_cos();
        let mut out = p;
        out[a] = p[a] * cos - p[b] * sin;
        out[b] = p[a] * sin + p[b] * cos;
        out
    }
}

/// One rotation angle (radians) per plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngles(pub [f64; 6]);

impl PlaneAngles {
    pub const ZERO: Self = Self([0.0; 6]);

    pub fn new(xy: f64, xz: f64, xw: f64, yz: f64, yw: f64, zw: f64) -> Self {
        Self([xy, xz, xw, yz, yw, zw])
    }

    /// Angle for a single plane
    #[inline]
    pub fn get(&self, plane: RotationPlane) -> f64 {
        self.0[plane.index()]
    }

    /// Set the angle for a single plane
    #[inline]
    pub fn set(&mut self, plane: RotationPlane, angle: f64) {
        self.0[plane.index()] = angle;
    }

    /// Multiply every angle by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.map(|a| a * factor))
    }
}

/// Apply all six planar rotations, XY first and ZW last
///
/// Each step uses the already-rotated coordinates of the previous step.
/// Every step is orthogonal, so the Euclidean norm of `p` is preserved.
pub fn rotate4d(p: Vec4, angles: &PlaneAngles) -> Vec4 {
    RotationPlane::ALL
        .iter()
        .fold(p, |acc, &plane| plane.rotate(acc, angles.get(plane)))
}
