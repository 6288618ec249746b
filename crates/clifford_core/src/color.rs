//! Sequential color scale for point colors
//!
//! Points are colored by their φ angle through viridis, a perceptually
//! uniform sequential scale. The scale is a piecewise-linear interpolation
//! over eleven evenly spaced stops.

use serde::{Serialize, Deserialize};

/// An sRGB color with components in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// 8-bit channels, rounded
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// CSS-style hex string, e.g. `#440154`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// RGBA array with the given alpha
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

/// Viridis at t = 0.0, 0.1, ..., 1.0
const VIRIDIS_STOPS: [[u8; 3]; 11] = [
    [68, 1, 84],
    [72, 36, 117],
    [65, 68, 135],
    [53, 95, 141],
    [42, 120, 142],
    [33, 145, 140],
    [34, 168, 132],
    [68, 191, 112],
    [122, 209, 81],
    [189, 223, 38],
    [253, 231, 37],
];

/// Sample viridis at `t`, clamped to [0, 1]
///
/// NaN samples the low end of the scale.
pub fn viridis(t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (VIRIDIS_STOPS.len() - 1) as f64;
    let scaled = t * segments;
    let i = (scaled.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = (scaled - i as f64) as f32;

    let [r0, g0, b0] = VIRIDIS_STOPS[i];
    let [r1, g1, b1] = VIRIDIS_STOPS[i + 1];
    Color::from_rgb8(r0, g0, b0).lerp(Color::from_rgb8(r1, g1, b1), frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_points() {
        assert_eq!(viridis(0.0).to_hex(), "#440154");
        assert_eq!(viridis(1.0).to_hex(), "#fde725");
    }

    #[test]
    fn test_stops_are_hit_exactly() {
        assert_eq!(viridis(0.5).to_rgb8(), [33, 145, 140]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn test_deterministic() {
        for i in 0..100 {
            let t = i as f64 / 100.0;
            assert_eq!(viridis(t), viridis(t));
        }
    }

    #[test]
    fn test_interpolates_between_stops() {
        let mid = viridis(0.95).to_rgb8();
        // halfway between [189, 223, 38] and [253, 231, 37]
        assert_eq!(mid[0], 221);
        assert_eq!(mid[1], 227);
        assert!(mid[2] == 37 || mid[2] == 38);
    }

    #[test]
    fn test_to_rgba() {
        assert_eq!(Color::WHITE.to_rgba(0.5), [1.0, 1.0, 1.0, 0.5]);
    }
}
