// Projection matrix helpers

use glam::{Mat4, Vec4};

use crate::error::{check_range, Bound, Result};
use crate::math::mat4_from_rows;

const ZERO: Bound = Bound::new("zero", 0.0);
const MAXIMUM: Bound = Bound::new("maximum", f32::MAX);
const STRAIGHT_ANGLE: Bound = Bound::new("straight angle", 180.0);

/// Right-handed perspective projection, depth mapped to [-1, 1].
///
/// `fov` is the vertical field of view in degrees, `ratio` is width / height.
/// Inputs are not checked; see [`perspective`].
pub(crate) fn perspective_unchecked(fov: f32, ratio: f32, near: f32, far: f32) -> Mat4 {
    let h = 1.0 / (fov * std::f32::consts::PI / 360.0).tan();
    let w = h / ratio;
    let depth = near - far;
    let q = (near + far) / depth;
    let n = (2.0 * near * far) / depth;

    mat4_from_rows(
        Vec4::new(w, 0.0, 0.0, 0.0),
        Vec4::new(0.0, h, 0.0, 0.0),
        Vec4::new(0.0, 0.0, q, n),
        Vec4::new(0.0, 0.0, -1.0, 0.0),
    )
}

/// Orthographic projection scaled uniformly by `1 / scale`.
///
/// The vertical axis is additionally multiplied by `ratio`.
pub(crate) fn ortho_scaled_unchecked(scale: f32, ratio: f32, near: f32, far: f32) -> Mat4 {
    let s = 1.0 / scale;
    let r = s * ratio;
    let z = -2.0 / (far - near);
    let o = -(far + near) / (far - near);

    mat4_from_rows(
        Vec4::new(s, 0.0, 0.0, 0.0),
        Vec4::new(0.0, r, 0.0, 0.0),
        Vec4::new(0.0, 0.0, z, o),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Perspective projection from a field of view in degrees.
///
/// Requires `0 < fov < 180`, `ratio > 0` and `0 < near < far`.
pub fn perspective(fov: f32, ratio: f32, near: f32, far: f32) -> Result<Mat4> {
    check_range(ZERO, "fov", fov, STRAIGHT_ANGLE)?;
    check_range(ZERO, "ratio", ratio, MAXIMUM)?;
    check_range(ZERO, "near", near, MAXIMUM)?;
    check_range(Bound::new("near", near), "far", far, MAXIMUM)?;
    Ok(perspective_unchecked(fov, ratio, near, far))
}

/// Orthographic box of `width` x `height` centred on the view axis.
///
/// Depth goes to [0, 1] and the translation sits in the bottom row:
///
/// ```text
/// [2/w, 0,   0,      0]
/// [0,   2/h, 0,      0]
/// [0,   0,   -1/x,   0]
/// [0,   0,   near/x, 1]    x = near - far
/// ```
///
/// Requires positive `width` and `height`, and `far > near`.
pub fn ortho(width: f32, height: f32, near: f32, far: f32) -> Result<Mat4> {
    check_range(ZERO, "width", width, MAXIMUM)?;
    check_range(ZERO, "height", height, MAXIMUM)?;
    check_range(Bound::new("near", near), "far", far, MAXIMUM)?;

    let x = near - far;
    Ok(mat4_from_rows(
        Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -1.0 / x, 0.0),
        Vec4::new(0.0, 0.0, near / x, 1.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perspective_matches_glam_gl_projection() {
        let ours = perspective(60.0, 1.5, 0.5, 50.0).unwrap();
        let expected = Mat4::perspective_rh_gl(60f32.to_radians(), 1.5, 0.5, 50.0);
        assert!(ours.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn perspective_rejects_bad_inputs() {
        assert_eq!(perspective(0.0, 1.0, 1.0, 2.0).unwrap_err().name, "fov");
        assert_eq!(perspective(180.0, 1.0, 1.0, 2.0).unwrap_err().name, "fov");
        assert_eq!(perspective(90.0, -1.0, 1.0, 2.0).unwrap_err().name, "ratio");
        assert_eq!(perspective(90.0, 1.0, 0.0, 2.0).unwrap_err().name, "near");
        assert_eq!(perspective(90.0, 1.0, 2.0, 2.0).unwrap_err().name, "far");
    }

    #[test]
    fn ortho_box_layout() {
        let m = ortho(4.0, 2.0, 1.0, 3.0).unwrap();
        assert_eq!(m.row(0), Vec4::new(0.5, 0.0, 0.0, 0.0));
        assert_eq!(m.row(1), Vec4::new(0.0, 1.0, 0.0, 0.0));
        assert_relative_eq!(m.row(2).z, 0.5);
        assert_relative_eq!(m.row(3).z, -0.5);
        assert_eq!(m.row(3).w, 1.0);
    }

    #[test]
    fn ortho_rejects_bad_inputs() {
        assert_eq!(ortho(0.0, 1.0, 1.0, 2.0).unwrap_err().name, "width");
        assert_eq!(ortho(1.0, -2.0, 1.0, 2.0).unwrap_err().name, "height");
        assert_eq!(ortho(1.0, 1.0, 2.0, 2.0).unwrap_err().name, "far");
    }
}
