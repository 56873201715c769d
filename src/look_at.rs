// View transform built from an eye, a target and an up direction

use glam::{Mat4, Vec3};

use crate::transform::Transform;

/// Computes its basis from scratch on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtTransform {
    position: Vec3,
    target: Vec3,
    up: Vec3,
}

impl LookAtTransform {
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Returns the orthonormal `(right, up, forward)` basis.
    ///
    /// When `up` is parallel to the forward axis the right axis is taken from
    /// world X instead, and from world Y if forward lies along X as well.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let mut forward = (self.position - self.target).normalize_or_zero();
        if forward == Vec3::ZERO {
            // eye sits on the target
            forward = Vec3::Z;
        }

        let mut right = self.up.cross(forward).normalize_or_zero();
        if right == Vec3::ZERO {
            right = forward.cross(Vec3::X).normalize_or_zero();
        }
        if right == Vec3::ZERO {
            right = forward.cross(Vec3::Y).normalize_or_zero();
        }

        let up = forward.cross(right).normalize_or_zero();
        (right, up, forward)
    }
}

impl Default for LookAtTransform {
    fn default() -> Self {
        Self::new(Vec3::Z, Vec3::ZERO, Vec3::Y)
    }
}

impl Transform for LookAtTransform {
    fn matrix(&self) -> Mat4 {
        let (right, up, forward) = self.basis();
        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            self.position.extend(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec4;

    fn assert_orthonormal((right, up, forward): (Vec3, Vec3, Vec3)) {
        assert_abs_diff_eq!(right.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(up.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(forward.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(right.dot(up), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(right.dot(forward), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(up.dot(forward), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn looking_down_negative_z() {
        let look = LookAtTransform::new(Vec3::Z, Vec3::ZERO, Vec3::Y);
        let (right, up, forward) = look.basis();
        assert!(right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(up.abs_diff_eq(Vec3::Y, 1e-6));
        assert!(forward.abs_diff_eq(Vec3::Z, 1e-6));
        assert_orthonormal(look.basis());
    }

    #[test]
    fn matrix_columns_hold_basis_and_position() {
        let look = LookAtTransform::new(Vec3::new(3.0, 2.0, 1.0), Vec3::ZERO, Vec3::Y);
        let (right, up, forward) = look.basis();
        let m = look.matrix();
        assert_eq!(m.col(0), right.extend(0.0));
        assert_eq!(m.col(1), up.extend(0.0));
        assert_eq!(m.col(2), forward.extend(0.0));
        assert_eq!(m.col(3), Vec4::new(3.0, 2.0, 1.0, 1.0));
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_orthonormal(look.basis());
    }

    #[test]
    fn up_parallel_to_forward_falls_back_to_world_x() {
        let look = LookAtTransform::new(Vec3::Z, Vec3::ZERO, Vec3::Z);
        let (right, up, forward) = look.basis();
        assert!(right.abs_diff_eq(Vec3::Y, 1e-6));
        assert!(up.abs_diff_eq(Vec3::NEG_X, 1e-6));
        assert!(forward.abs_diff_eq(Vec3::Z, 1e-6));
        assert_orthonormal(look.basis());
    }

    #[test]
    fn forward_along_x_with_parallel_up_still_orthonormal() {
        let look = LookAtTransform::new(Vec3::X, Vec3::ZERO, Vec3::NEG_X);
        assert_orthonormal(look.basis());
        assert!(!look.matrix().is_nan());
    }

    #[test]
    fn setters_take_effect_on_next_query() {
        let mut look = LookAtTransform::default();
        let before = look.matrix();
        look.set_position(Vec3::new(0.0, 5.0, 5.0));
        look.set_target(Vec3::new(0.0, 1.0, 0.0));
        look.set_up(Vec3::Y);
        assert_eq!(look.position(), Vec3::new(0.0, 5.0, 5.0));
        assert_ne!(look.matrix(), before);
        assert_orthonormal(look.basis());
    }
}
