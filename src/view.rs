// Projection transforms with validated parameters

use std::fmt;

use glam::Mat4;

use crate::error::{check_range, Bound, Result};
use crate::projection::{ortho_scaled_unchecked, perspective_unchecked};
use crate::transform::Transform;

/// Largest accepted aspect ratio; the smallest is its reciprocal.
pub const MAX_RATIO: f32 = 65536.0;
/// Exclusive lower bound of the perspective field of view, in degrees.
pub const MIN_FOV: f32 = 1e-5;
/// Exclusive upper bound of the perspective field of view, in degrees.
pub const MAX_FOV: f32 = 180.0 - MIN_FOV;

const ZERO: Bound = Bound::new("zero", 0.0);
const MAXIMUM: Bound = Bound::new("maximum", f32::MAX);
const MIN_RATIO_BOUND: Bound = Bound::new("minimum ratio", 1.0 / MAX_RATIO);
const MAX_RATIO_BOUND: Bound = Bound::new("maximum ratio", MAX_RATIO);

/// Parameters shared by every projection.
///
/// Always satisfies `1/MAX_RATIO < ratio < MAX_RATIO` and `0 < near < far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    ratio: f32,
    near: f32,
    far: f32,
}

impl ViewParams {
    /// Validates a complete set of parameters at once.
    ///
    /// Unlike the individual setters this cannot reject a valid triple
    /// because of the values it replaces.
    pub fn new(ratio: f32, near: f32, far: f32) -> Result<Self> {
        check_range(MIN_RATIO_BOUND, "ratio", ratio, MAX_RATIO_BOUND)?;
        check_range(ZERO, "near", near, MAXIMUM)?;
        check_range(Bound::new("near", near), "far", far, MAXIMUM)?;
        Ok(Self { ratio, near, far })
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Strategy that turns [`ViewParams`] plus its own state into a matrix.
pub trait Projection: fmt::Debug {
    fn projection_matrix(&self, params: &ViewParams) -> Mat4;
}

/// A projection whose matrix is recomputed after every successful setter.
///
/// Setters validate first and commit second, so a rejected value leaves the
/// previous parameters and matrix untouched. `near` is bounded above by the
/// current `far` and `far` below by the current `near`; moving both past each
/// other needs the calls in the right order.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform<P> {
    params: ViewParams,
    projection: P,
    matrix: Mat4,
}

impl<P: Projection> ViewTransform<P> {
    pub fn from_parts(params: ViewParams, projection: P) -> Self {
        let mut view = Self {
            params,
            projection,
            matrix: Mat4::IDENTITY,
        };
        view.recalc();
        view
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn ratio(&self) -> f32 {
        self.params.ratio
    }

    pub fn near(&self) -> f32 {
        self.params.near
    }

    pub fn far(&self) -> f32 {
        self.params.far
    }

    pub fn set_ratio(&mut self, ratio: f32) -> Result<()> {
        check_range(MIN_RATIO_BOUND, "ratio", ratio, MAX_RATIO_BOUND)?;
        self.params.ratio = ratio;
        self.recalc();
        Ok(())
    }

    pub fn set_near(&mut self, near: f32) -> Result<()> {
        check_range(ZERO, "near", near, Bound::new("far", self.params.far))?;
        self.params.near = near;
        self.recalc();
        Ok(())
    }

    pub fn set_far(&mut self, far: f32) -> Result<()> {
        check_range(Bound::new("near", self.params.near), "far", far, MAXIMUM)?;
        self.params.far = far;
        self.recalc();
        Ok(())
    }

    fn recalc(&mut self) {
        self.matrix = self.projection.projection_matrix(&self.params);
        debug_assert_ne!(self.matrix, Mat4::ZERO);
        log::trace!("{:?} with {:?} recalculated", self.projection, self.params);
    }
}

impl<P: Projection + Default> Default for ViewTransform<P> {
    fn default() -> Self {
        Self::from_parts(ViewParams::default(), P::default())
    }
}

impl<P: Projection> Transform for ViewTransform<P> {
    fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// Field of view in degrees, `MIN_FOV < fov < MAX_FOV`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    fov: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self { fov: 60.0 }
    }
}

impl Projection for Perspective {
    fn projection_matrix(&self, params: &ViewParams) -> Mat4 {
        perspective_unchecked(self.fov, params.ratio, params.near, params.far)
    }
}

/// Uniform scale, `scale > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ortho {
    scale: f32,
}

impl Default for Ortho {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Projection for Ortho {
    fn projection_matrix(&self, params: &ViewParams) -> Mat4 {
        ortho_scaled_unchecked(self.scale, params.ratio, params.near, params.far)
    }
}

pub type PerspectiveTransform = ViewTransform<Perspective>;
pub type OrthoTransform = ViewTransform<Ortho>;

fn check_fov(fov: f32) -> Result<()> {
    check_range(
        Bound::new("minimum fov", MIN_FOV),
        "fov",
        fov,
        Bound::new("maximum fov", MAX_FOV),
    )
}

fn check_scale(scale: f32) -> Result<()> {
    check_range(ZERO, "scale", scale, MAXIMUM)
}

impl ViewTransform<Perspective> {
    pub fn new(fov: f32, ratio: f32, near: f32, far: f32) -> Result<Self> {
        check_fov(fov)?;
        let params = ViewParams::new(ratio, near, far)?;
        Ok(Self::from_parts(params, Perspective { fov }))
    }

    pub fn fov(&self) -> f32 {
        self.projection.fov
    }

    pub fn set_fov(&mut self, fov: f32) -> Result<()> {
        check_fov(fov)?;
        self.projection.fov = fov;
        self.recalc();
        Ok(())
    }
}

impl ViewTransform<Ortho> {
    pub fn new(scale: f32, ratio: f32, near: f32, far: f32) -> Result<Self> {
        check_scale(scale)?;
        let params = ViewParams::new(ratio, near, far)?;
        Ok(Self::from_parts(params, Ortho { scale }))
    }

    pub fn scale(&self) -> f32 {
        self.projection.scale
    }

    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        check_scale(scale)?;
        self.projection.scale = scale;
        self.recalc();
        Ok(())
    }
}
