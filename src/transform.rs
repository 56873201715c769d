// Transform capability for IntSar-3D

use std::cell::RefCell;
use std::rc::Rc;

use glam::Mat4;

/// Anything that can produce its current 4x4 matrix.
///
/// Implementations may cache internally; the contract only promises the
/// value each concrete type documents.
pub trait Transform {
    fn matrix(&self) -> Mat4;
}

/// A shared, possibly externally mutated transform.
pub type SharedTransform = Rc<dyn Transform>;

/// Wraps a transform for shared mutation.
///
/// The returned handle can be cloned into a [`SharedTransform`] while the
/// caller keeps a typed handle for setters.
pub fn shared<T: Transform>(transform: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(transform))
}

/// Resolves an optional transform, treating "absent" as identity.
pub fn matrix_or_identity(transform: Option<&dyn Transform>) -> Mat4 {
    transform.map_or(Mat4::IDENTITY, |t| t.matrix())
}

impl Transform for Mat4 {
    fn matrix(&self) -> Mat4 {
        *self
    }
}

impl<T: Transform + ?Sized> Transform for &T {
    fn matrix(&self) -> Mat4 {
        (**self).matrix()
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn matrix(&self) -> Mat4 {
        (**self).matrix()
    }
}

impl<T: Transform + ?Sized> Transform for Rc<T> {
    fn matrix(&self) -> Mat4 {
        (**self).matrix()
    }
}

impl<T: Transform + ?Sized> Transform for RefCell<T> {
    fn matrix(&self) -> Mat4 {
        self.borrow().matrix()
    }
}

/// A directly settable matrix.
///
/// The terminal strategy for manually driven transforms, e.g. an externally
/// animated model matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleTransform {
    matrix: Mat4,
}

impl SimpleTransform {
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }

    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }
}

impl Default for SimpleTransform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl Transform for SimpleTransform {
    fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn simple_transform_defaults_to_identity() {
        assert_eq!(SimpleTransform::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn set_matrix_replaces_value() {
        let mut t = SimpleTransform::default();
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        t.set_matrix(m);
        assert_eq!(t.matrix(), m);
    }

    #[test]
    fn absent_transform_is_identity() {
        assert_eq!(matrix_or_identity(None), Mat4::IDENTITY);

        let m = Mat4::from_scale(Vec3::splat(2.0));
        assert_eq!(matrix_or_identity(Some(&m)), m);
    }

    #[test]
    fn shared_handle_sees_mutation() {
        let handle = shared(SimpleTransform::default());
        let erased: SharedTransform = handle.clone();

        let m = Mat4::from_rotation_z(0.5);
        handle.borrow_mut().set_matrix(m);
        assert_eq!(erased.matrix(), m);
    }
}
