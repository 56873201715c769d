// GPU-ready matrix snapshot

use glam::Mat4;

use crate::transform::Transform;

/// A column-major 4x4 block ready to be copied into a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub matrix: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new() -> Self {
        Self {
            matrix: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }

    /// Snapshots the current matrix of `transform`.
    pub fn from_transform(transform: &dyn Transform) -> Self {
        let mut uniform = Self::new();
        uniform.update(transform);
        uniform
    }

    pub fn update(&mut self, transform: &dyn Transform) {
        self.matrix = transform.matrix().to_cols_array_2d();
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}
