use warpix_image::{Image, ImageError, ImageSize};

/// Create a pair of coordinate maps from a per-pixel mapping function.
///
/// # Arguments
///
/// * `cols` - The number of columns indicating the width of the grid
/// * `rows` - The number of rows indicating the height of the grid
/// * `f` - Function mapping a grid position (x, y) to sample coordinates
///
/// # Returns
///
/// A tuple of single-channel maps of shape (rows, cols) containing the x and
/// y sample coordinates.
pub fn meshgrid_from_fn(
    cols: usize,
    rows: usize,
    f: impl Fn(usize, usize) -> Result<(f32, f32), ImageError>,
) -> Result<(Image<f32, 1>, Image<f32, 1>), ImageError> {
    let mut map_x = Vec::with_capacity(rows * cols);
    let mut map_y = Vec::with_capacity(rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let (x, y) = f(c, r)?;
            map_x.push(x);
            map_y.push(y);
        }
    }

    let size = ImageSize {
        width: cols,
        height: rows,
    };
    let map_x = Image::new(size, map_x)?;
    let map_y = Image::new(size, map_y)?;

    Ok((map_x, map_y))
}

#[cfg(test)]
mod tests {
    use warpix_image::ImageError;

    #[test]
    fn meshgrid_identity() -> Result<(), ImageError> {
        let (map_x, map_y) = super::meshgrid_from_fn(3, 2, |x, y| Ok((x as f32, y as f32)))?;

        assert_eq!(map_x.size().width, 3);
        assert_eq!(map_x.size().height, 2);
        assert_eq!(map_x.as_slice(), &[0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
        assert_eq!(map_y.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        Ok(())
    }
}
