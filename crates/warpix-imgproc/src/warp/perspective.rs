use crate::{
    interpolation::{grid::meshgrid_from_fn, interpolate_pixel, InterpolationMode},
    parallel,
};

use warpix_image::{Image, ImageError};

use super::bounds::{canvas_bounds, CanvasBounds};
use super::transform::Transform;

/// Applies a perspective transformation to an image.
///
/// For every destination pixel the inverse of `m` is applied to find the
/// corresponding source coordinates; pixels that map outside the source keep
/// the destination's existing value.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The transformation matrix, src -> dst.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Fails if `m` is singular.
///
/// # Example
///
/// ```
/// use warpix_image::{Image, ImageSize};
/// use warpix_imgproc::interpolation::InterpolationMode;
/// use warpix_imgproc::warp::{warp_perspective, Transform};
///
/// let src = Image::<f32, 1>::new(
///   ImageSize {
///     width: 4,
///     height: 5,
///   },
///   vec![0.0f32; 4 * 5]
/// ).unwrap();
///
/// let m = Transform::identity().translate(-1.0, 1.0);
///
/// let mut dst = Image::<f32, 1>::from_size_val(
///   ImageSize {
///     width: 2,
///     height: 3,
///   },
///   0.0
/// ).unwrap();
///
/// warp_perspective(&src, &mut dst, &m, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.size().width, 2);
/// assert_eq!(dst.size().height, 3);
/// ```
pub fn warp_perspective<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &Transform,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    // the matrix is inverted exactly once, before any pixel work
    let m_inv = m.inverse()?;

    // create meshgrid to find corresponding positions in src from dst
    let (dst_rows, dst_cols) = (dst.rows(), dst.cols());
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        Ok(m_inv.transform_point(x as f32, y as f32))
    })?;

    resample(src, dst, &map_x, &map_y, interpolation);

    Ok(())
}

/// Warp an image onto a canvas sized from its transformed corners.
///
/// Computes the [`CanvasBounds`] of the source under `m`, allocates a
/// destination of that size filled with the empty pixel (all channels zero),
/// and inverse-maps every destination pixel, offset by the canvas origin,
/// back into the source.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `m` - The forward transformation matrix.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The warped image and the canvas it was rendered onto.
///
/// # Errors
///
/// Fails if `m` is singular or maps the source to a degenerate canvas.
pub fn warp<const C: usize>(
    src: &Image<f32, C>,
    m: &Transform,
    interpolation: InterpolationMode,
) -> Result<(Image<f32, C>, CanvasBounds), ImageError> {
    let bounds = canvas_bounds(src.size(), m)?;
    let m_inv = m.inverse()?;

    // out-of-bounds destination pixels keep the zeroed empty value
    let mut dst = Image::from_size_val(bounds.size(), 0.0)?;

    let (map_x, map_y) = meshgrid_from_fn(bounds.width, bounds.height, |x, y| {
        Ok(m_inv.transform_point(x as f32 + bounds.x_min, y as f32 + bounds.y_min))
    })?;

    resample(src, &mut dst, &map_x, &map_y, interpolation);

    Ok((dst, bounds))
}

fn resample<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    interpolation: InterpolationMode,
) {
    let (src_cols, src_rows) = (src.cols() as f32, src.rows() as f32);

    parallel::par_iter_rows_resample(dst, map_x, map_y, |&x, &y, dst_pixel| {
        // NaN or infinite coordinates from a vanishing w fail this check too
        if x >= 0.0 && x < src_cols && y >= 0.0 && y < src_rows {
            dst_pixel
                .iter_mut()
                .enumerate()
                .for_each(|(k, pixel)| *pixel = interpolate_pixel(src, x, y, k, interpolation));
        }
    });
}

#[cfg(test)]
mod tests {
    use crate::interpolation::InterpolationMode;
    use crate::warp::Transform;
    use warpix_image::{Image, ImageError, ImageSize};

    #[test]
    fn warp_perspective_identity_reproduces_the_source() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            (0..20).map(|x| x as f32).collect(),
        )?;

        let mut dst = Image::from_size_val(image.size(), 0.0)?;
        super::warp_perspective(
            &image,
            &mut dst,
            &Transform::identity(),
            InterpolationMode::Nearest,
        )?;
        assert_eq!(dst.as_slice(), image.as_slice());

        let mut dst = Image::from_size_val(image.size(), 0.0)?;
        super::warp_perspective(
            &image,
            &mut dst,
            &Transform::identity(),
            InterpolationMode::Bilinear,
        )?;
        for (a, b) in dst.as_slice().iter().zip(image.as_slice().iter()) {
            assert!((a - b).abs() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn warp_perspective_hflip() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;

        let image_expected = [1.0, 0.0, 3.0, 2.0, 5.0, 4.0];

        // mirror over x and shift back into view
        let m = Transform::identity().flip(true, false).translate(1.0, 0.0);

        let mut dst = Image::from_size_val(image.size(), 0.0)?;
        super::warp_perspective(&image, &mut dst, &m, InterpolationMode::Bilinear)?;

        assert_eq!(dst.as_slice(), image_expected);

        Ok(())
    }

    #[test]
    fn warp_perspective_shift_leaves_empty_pixels() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|x| x as f32).collect(),
        )?;

        // shift left by 1 pixel; the rightmost column maps out of bounds
        let m = Transform::identity().translate(-1.0, 0.0);

        let image_expected = [
            1.0f32, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 0.0, 9.0, 10.0, 11.0, 0.0, 13.0, 14.0, 15.0, 0.0,
        ];

        let mut dst = Image::from_size_val(image.size(), 0.0)?;
        super::warp_perspective(&image, &mut dst, &m, InterpolationMode::Bilinear)?;

        assert_eq!(dst.as_slice(), image_expected);

        Ok(())
    }

    #[test]
    fn warp_scale_2x_nearest_makes_pixel_blocks() -> Result<(), ImageError> {
        // 2x2 RGBA: red, green / blue, white
        #[rustfmt::skip]
        let data = vec![
            255.0, 0.0, 0.0, 255.0,    0.0, 255.0, 0.0, 255.0,
            0.0, 0.0, 255.0, 255.0,    255.0, 255.0, 255.0, 255.0,
        ];
        let image = Image::<f32, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            data,
        )?;

        let m = Transform::identity().scale(2.0, 2.0);
        let (dst, bounds) = super::warp(&image, &m, InterpolationMode::Nearest)?;

        assert_eq!(bounds.width, 4);
        assert_eq!(bounds.height, 4);

        // each source pixel becomes a 2x2 block
        for y in 0..4 {
            for x in 0..4 {
                let expected: [f32; 4] = match (x / 2, y / 2) {
                    (0, 0) => [255.0, 0.0, 0.0, 255.0],
                    (1, 0) => [0.0, 255.0, 0.0, 255.0],
                    (0, 1) => [0.0, 0.0, 255.0, 255.0],
                    _ => [255.0, 255.0, 255.0, 255.0],
                };
                for c in 0..4 {
                    assert_eq!(dst.get([y, x, c]), Some(&expected[c]), "at ({x}, {y}, {c})");
                }
            }
        }

        Ok(())
    }

    #[test]
    fn warp_offsets_by_the_canvas_origin() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1.0, 2.0, 3.0, 4.0],
        )?;

        // a pure translation must not change the rendered content
        let m = Transform::identity().translate(100.0, -50.0);
        let (dst, bounds) = super::warp(&image, &m, InterpolationMode::Nearest)?;

        assert_eq!(bounds.width, 2);
        assert_eq!(bounds.height, 2);
        assert_eq!(bounds.x_min, 100.0);
        assert_eq!(bounds.y_min, -50.0);
        assert_eq!(dst.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn warp_singular_transform_fails() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;

        let m = Transform::identity().scale(1.0, 0.0);
        assert!(super::warp(&image, &m, InterpolationMode::Nearest).is_err());

        Ok(())
    }
}
