//! Point generation on the Clifford torus
//!
//! Each point is (√½ cos θ, √½ sin θ, √½ cos φ, √½ sin φ), so both coordinate
//! pairs lie on circles of radius √½ and the point lies on the unit 3-sphere.
//! Rotations downstream are orthogonal; the points are never renormalized.

use std::f64::consts::{FRAC_1_SQRT_2, TAU};
use rand::Rng;
use clifford_math::Vec4;
use crate::color::{viridis, Color};

/// A point on the torus with a stable id and a fixed color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusPoint {
    /// Sequential id, the only key used to match points across frames
    pub id: u32,
    /// Position on the torus before any rotation
    pub original: Vec4,
    /// Display color, computed once from φ
    pub color: Color,
}

/// Build the torus point for the angles θ and φ
pub fn torus_point(id: u32, theta: f64, phi: f64) -> TorusPoint {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    TorusPoint {
        id,
        original: Vec4::new(
            FRAC_1_SQRT_2 * cos_theta,
            FRAC_1_SQRT_2 * sin_theta,
            FRAC_1_SQRT_2 * cos_phi,
            FRAC_1_SQRT_2 * sin_phi,
        ),
        color: viridis(phi / TAU),
    }
}

/// Sample `count` points with ids 0..count and uniform random angles
pub fn generate_points<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TorusPoint> {
    (0..count)
        .map(|i| {
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(0.0..TAU);
            torus_point(i as u32, theta, phi)
        })
        .collect()
}

/// The current point batch
///
/// A cloud is immutable once built. Changing the count builds a new cloud
/// which replaces the old one in a single assignment.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    points: Vec<TorusPoint>,
}

impl PointCloud {
    /// Generate a new cloud of `count` points
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            points: generate_points(count, rng),
        }
    }

    /// Wrap an existing batch
    pub fn from_points(points: Vec<TorusPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TorusPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
