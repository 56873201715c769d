// IntSar-3D transforms: composable 4x4 model, view and projection matrices
//
// Every strategy implements `Transform`, a single "give me your current
// matrix" query. Composites (`TransformList`, `CachedTransform`) hold shared
// references to other transforms; projections validate their parameters and
// recompute eagerly.

pub mod cached;
pub mod error;
pub mod list;
pub mod look_at;
pub mod math;
pub mod projection;
pub mod transform;
pub mod uniform;
pub mod view;

pub use cached::CachedTransform;
pub use error::{check_range, Bound, BoundSide, RangeViolation, Result};
pub use list::{Order, TransformList};
pub use look_at::LookAtTransform;
pub use math::ModelTransform;
pub use projection::{ortho, perspective};
pub use transform::{matrix_or_identity, shared, SharedTransform, SimpleTransform, Transform};
pub use uniform::TransformUniform;
pub use view::{
    Ortho, OrthoTransform, Perspective, PerspectiveTransform, Projection, ViewParams,
    ViewTransform, MAX_FOV, MAX_RATIO, MIN_FOV,
};
