use rayon::prelude::*;

use warpix_image::{Image, ImageError};

/// Flip the input image vertically.
///
/// This is the single row-order boundary copy between the codec convention
/// (top scanline first) and the legacy raster convention (bottom scanline
/// first).
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use warpix_image::{Image, ImageSize};
/// use warpix_imgproc::flip::vertical_flip;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped: Image<u8, 3> = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn vertical_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone + Default + Send + Sync,
{
    let mut dst = Image::from_size_val(src.size(), T::default())?;

    let stride = src.cols() * C;
    dst.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .zip(src.as_slice().par_chunks_exact(stride).rev())
        .for_each(|(dst_row, src_row)| {
            dst_row.clone_from_slice(src_row);
        });

    Ok(dst)
}
