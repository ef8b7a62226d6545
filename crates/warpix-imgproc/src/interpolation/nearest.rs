use warpix_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// Truncates the sample coordinates to integer source indices, clamped to the
/// valid pixel range.
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
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    c: usize,
) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.trunc() as usize).min(cols - 1);
    let iv = (v.trunc() as usize).min(rows - 1);

    image.as_slice()[(iv * cols + iu) * C + c]
}

#[cfg(test)]
mod tests {
    use warpix_image::{Image, ImageError, ImageSize};

    #[test]
    fn nearest_truncates() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )?;

        assert_eq!(super::nearest_neighbor_interpolation(&image, 0.9, 0.9, 0), 0.0);
        assert_eq!(super::nearest_neighbor_interpolation(&image, 1.1, 0.0, 0), 1.0);
        assert_eq!(super::nearest_neighbor_interpolation(&image, 1.1, 1.9, 0), 3.0);

        Ok(())
    }
}
