//! Geometric primitives for placing overlays on the canvas.
//!
//! Canvas coordinates are in media pixels with the origin at the top-left
//! corner. Rotations are in radians, clockwise positive (y points down).

use glam::{Affine2, Vec2 as GlamVec2};

/// Canvas position or offset.
pub type Vec2 = GlamVec2;

/// A rectangle rotated about its own center; the hit area of an overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: Vec2,
    pub size: Vec2,
    pub rotation: f32,
}

impl OrientedRect {
    pub fn new(center: Vec2, size: Vec2, rotation: f32) -> Self {
        Self {
            center,
            size,
            rotation,
        }
    }

    /// Map a canvas point into this rectangle's unrotated frame, centered on the origin.
    pub fn to_local(self, point: Vec2) -> Vec2 {
        Affine2::from_angle_translation(self.rotation, self.center)
            .inverse()
            .transform_point2(point)
    }

    /// Check whether a canvas point lies inside, with `slop` extra pixels on every side.
    pub fn contains(self, point: Vec2, slop: f32) -> bool {
        let reach = self.size * 0.5 + Vec2::splat(slop.max(0.0));
        self.to_local(point).abs().cmple(reach).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_to_local_undoes_rotation() {
        let r = OrientedRect::new(Vec2::new(10.0, 10.0), Vec2::ONE, FRAC_PI_2);
        let local = r.to_local(Vec2::new(10.0, 15.0));
        assert!((local - Vec2::new(5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_oriented_rect_unrotated() {
        let r = OrientedRect::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 10.0), 0.0);
        assert!(r.contains(Vec2::new(118.0, 100.0), 0.0));
        assert!(!r.contains(Vec2::new(100.0, 110.0), 0.0));
        assert!(r.contains(Vec2::new(100.0, 110.0), 6.0));
        assert!(!r.contains(Vec2::new(100.0, 110.0), -6.0));
    }

    #[test]
    fn test_oriented_rect_quarter_turn() {
        // A wide bar turned upright: points below the center now hit,
        // points to the side no longer do.
        let r = OrientedRect::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 10.0), FRAC_PI_2);
        assert!(r.contains(Vec2::new(100.0, 118.0), 0.0));
        assert!(!r.contains(Vec2::new(118.0, 100.0), 0.0));
    }
}
