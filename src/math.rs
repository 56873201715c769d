// Math utilities for IntSar-3D transforms

use glam::{Mat4, Quat, Vec3, Vec4};

use crate::transform::Transform;

/// Builds a matrix from four mathematical rows.
///
/// glam stores columns, projection formulas are usually written as rows.
pub fn mat4_from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Mat4 {
    Mat4::from_cols(r0, r1, r2, r3).transpose()
}

/// Position, rotation and scale of a model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl ModelTransform {
    /// Create a new model transform
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create an identity model transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform for ModelTransform {
    fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}
