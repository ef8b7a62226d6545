use crate::parallel;

use super::interpolate::interpolate_pixel;
use super::InterpolationMode;
use warpix_image::{Image, ImageError};

/// Apply a generic geometric transformation to an image.
///
/// For every destination pixel, samples the source at the coordinates given
/// by the maps. Coordinates outside the source leave the destination pixel
/// untouched.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// * The map_x and map_y must have the same size.
/// * The output image must have the same size as map_x and map_y.
pub fn remap<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if map_x.size() != map_y.size() {
        return Err(ImageError::InvalidImageSize(
            map_x.rows(),
            map_x.cols(),
            map_y.rows(),
            map_y.cols(),
        ));
    }

    if dst.size() != map_x.size() {
        return Err(ImageError::InvalidImageSize(
            dst.rows(),
            dst.cols(),
            map_x.rows(),
            map_x.cols(),
        ));
    }

    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        if x >= 0.0 && x < src_cols && y >= 0.0 && y < src_rows {
            dst_pixel.iter_mut().enumerate().for_each(|(c, pixel)| {
                *pixel = interpolate_pixel(src, x, y, c, interpolation);
            });
        }
    });

    Ok(())
}
