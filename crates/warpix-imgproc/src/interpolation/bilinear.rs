use warpix_image::Image;

/// Kernel for bilinear interpolation
///
/// Blends the four integer-coordinate neighbors around (u, v) with weights
/// derived from the fractional parts. Neighbors past the last row or column
/// are clamped to the image edge, so sampling near the border never reads out
/// of bounds and sampling at an exact integer coordinate reduces to that
/// pixel.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub(crate) fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());

    let iu0 = (u.floor() as usize).min(cols - 1);
    let iv0 = (v.floor() as usize).min(rows - 1);
    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let frac_u = u - iu0 as f32;
    let frac_v = v - iv0 as f32;
    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let data = image.as_slice();
    let p00 = data[(iv0 * cols + iu0) * C + c];
    let p01 = data[(iv0 * cols + iu1) * C + c];
    let p10 = data[(iv1 * cols + iu0) * C + c];
    let p11 = data[(iv1 * cols + iu1) * C + c];

    p00 * frac_uu * frac_vv
        + p01 * frac_u * frac_vv
        + p10 * frac_uu * frac_v
        + p11 * frac_u * frac_v
}
