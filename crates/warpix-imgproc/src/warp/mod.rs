//! Geometric image transformations through 3x3 homogeneous matrices.
//!
//! The module is split into:
//!
//! - [`transform`] - the [`Transform`] matrix type and its primitive
//!   composition operations (rotate, scale, translate, shear, flip,
//!   perspective skew) and inversion.
//! - [`bounds`] - destination canvas sizing from the transformed source
//!   corners.
//! - [`ops`] - the [`WarpOp`] command list folded into a single transform.
//! - the inverse-warp resamplers [`warp`] and [`warp_perspective`].

/// canvas bounds computation from transformed corners.
pub mod bounds;

/// primitive warp commands and their composition.
pub mod ops;

/// the 3x3 homogeneous transform type.
pub mod transform;

mod perspective;

pub use bounds::{canvas_bounds, CanvasBounds};
pub use ops::{compose, WarpOp};
pub use perspective::{warp, warp_perspective};
pub use transform::Transform;
