use super::transform::Transform;

/// A primitive warp command with its parameters.
///
/// An ordered list of these is the serialized form of an interactive warp
/// session; [`compose`] folds the list into a single [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WarpOp {
    /// Rotation by an angle in degrees.
    Rotate(f32),
    /// Scale factors on the x and y axes.
    Scale(f32, f32),
    /// Translation deltas on the x and y axes.
    Translate(f32, f32),
    /// Shear factors on the x and y axes.
    Shear(f32, f32),
    /// Flip over the x and/or y axis.
    Flip(bool, bool),
    /// Perspective skew terms for the bottom matrix row.
    PerspectiveSkew(f32, f32),
}

impl WarpOp {
    /// Apply this operation to an accumulated transform, `M' = X * M`.
    pub fn apply_to(&self, m: Transform) -> Transform {
        match *self {
            WarpOp::Rotate(angle) => m.rotate(angle),
            WarpOp::Scale(sx, sy) => m.scale(sx, sy),
            WarpOp::Translate(dx, dy) => m.translate(dx, dy),
            WarpOp::Shear(hx, hy) => m.shear(hx, hy),
            WarpOp::Flip(fx, fy) => m.flip(fx, fy),
            WarpOp::PerspectiveSkew(px, py) => m.perspective_skew(px, py),
        }
    }
}

/// Fold an ordered list of warp commands into a single transform.
///
/// Each command left-multiplies the accumulated matrix, so commands take
/// effect in the order they were issued.
///
/// # Example
///
/// ```
/// use warpix_imgproc::warp::{compose, Transform, WarpOp};
///
/// let m = compose(&[WarpOp::Rotate(90.0), WarpOp::Translate(10.0, 0.0)]);
/// let same = Transform::identity().rotate(90.0).translate(10.0, 0.0);
///
/// assert_eq!(m, same);
/// ```
pub fn compose(ops: &[WarpOp]) -> Transform {
    ops.iter()
        .fold(Transform::identity(), |m, op| op.apply_to(m))
}
