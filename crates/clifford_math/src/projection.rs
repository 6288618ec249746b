//! Stereographic projection from the 3-sphere to 3-space

use crate::{Vec3, Vec4};

/// Distance from the w = 1 pole below which a point is treated as the pole
pub const POLE_EPSILON: f64 = 1e-6;

/// Project a point of S³ from the pole (0, 0, 0, 1) onto 3-space
///
/// (x, y, z, w) maps to (x, y, z) / (1 − w).
///
/// Points with |1 − w| < [`POLE_EPSILON`] map to the origin. This is a clamp,
/// not the true limit (the image of the pole is at infinity), so a point
/// passing through the pole is briefly drawn at the centre.
pub fn stereographic_projection(p: Vec4) -> Vec3 {
    let den = 1.0 - p.w;
    if den.abs() < POLE_EPSILON {
        return Vec3::ZERO;
    }
    Vec3::new(p.x / den, p.y / den, p.z / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_is_fixed() {
        let p = Vec4::new(0.3, -0.4, 0.5, 0.0);
        assert_eq!(stereographic_projection(p), Vec3::new(0.3, -0.4, 0.5));
    }

    #[test]
    fn test_pole_maps_to_origin() {
        assert_eq!(stereographic_projection(Vec4::W), Vec3::ZERO);
        assert_eq!(stereographic_projection(Vec4::new(0.001, 0.0, 0.0, 1.0 - 5e-7)), Vec3::ZERO);
        assert_eq!(stereographic_projection(Vec4::new(0.0, 0.2, 0.0, 1.0 + 9e-7)), Vec3::ZERO);
    }

    #[test]
    fn test_just_outside_pole_is_projected() {
        let p = Vec4::new(0.001, 0.0, 0.0, 1.0 - 1e-5);
        let projected = stereographic_projection(p);
        assert!(projected.x > 99.0);
        assert!(projected.is_finite());
    }

    #[test]
    fn test_south_pole_maps_to_origin_exactly() {
        // w = -1 is the antipode; it projects to the origin with den = 2
        assert_eq!(stereographic_projection(-Vec4::W), Vec3::ZERO);
    }

    #[test]
    fn test_divides_by_one_minus_w() {
        let s = 0.5f64.sqrt();
        let p = Vec4::new(s, 0.0, 0.0, s);
        let projected = stereographic_projection(p);
        assert!((projected.x - s / (1.0 - s)).abs() < 1e-12);
        assert_eq!(projected.y, 0.0);
    }
}
