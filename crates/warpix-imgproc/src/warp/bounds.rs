use warpix_image::{ImageError, ImageSize};

use super::transform::Transform;

/// Destination canvas for a transformed source rectangle.
///
/// `width` and `height` size the destination buffer; `(x_min, y_min)` is the
/// offset of its origin relative to the transformed source corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    /// Minimum x coordinate over the transformed corners.
    pub x_min: f32,
    /// Minimum y coordinate over the transformed corners.
    pub y_min: f32,
    /// Canvas width in pixels, `ceil(max_x - min_x)`.
    pub width: usize,
    /// Canvas height in pixels, `ceil(max_y - min_y)`.
    pub height: usize,
}

impl CanvasBounds {
    /// The canvas size as an [`ImageSize`].
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Compute the axis-aligned bounding box of a transformed source rectangle.
///
/// Maps the four source corners through the transform, normalizing each by
/// its homogeneous w so perspective transforms bound correctly, and takes the
/// min/max over the results.
///
/// # Arguments
///
/// * `src_size` - The source image size in pixels.
/// * `m` - The forward transform, source to destination.
///
/// # Errors
///
/// Fails if a corner lands at a near-zero homogeneous w or if the resulting
/// canvas has zero area.
///
/// # Example
///
/// ```
/// use warpix_image::ImageSize;
/// use warpix_imgproc::warp::{canvas_bounds, Transform};
///
/// let m = Transform::identity().rotate(45.0);
/// let bounds = canvas_bounds(ImageSize { width: 100, height: 100 }, &m).unwrap();
///
/// assert_eq!(bounds.width, 142);
/// assert_eq!(bounds.height, 142);
/// ```
pub fn canvas_bounds(src_size: ImageSize, m: &Transform) -> Result<CanvasBounds, ImageError> {
    let (w, h) = (src_size.width as f32, src_size.height as f32);
    let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];

    let mut x_min = f32::INFINITY;
    let mut x_max = f32::NEG_INFINITY;
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;

    for (cx, cy) in corners {
        let (x, y) = m.transform_point_checked(cx, cy)?;
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let width = (x_max - x_min).ceil() as usize;
    let height = (y_max - y_min).ceil() as usize;

    if width == 0 || height == 0 {
        return Err(ImageError::DegenerateCanvas(width, height));
    }

    Ok(CanvasBounds {
        x_min,
        y_min,
        width,
        height,
    })
}
