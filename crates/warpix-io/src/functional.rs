use std::path::Path;

use warpix_image::Image;

use crate::error::IoError;

/// Reads an image from the given file path as four channel RGBA8.
///
/// The method tries to read from any image format supported by the image
/// crate. Grayscale and RGB inputs are promoted to RGBA with an opaque alpha
/// channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA image containing the image data, top scanline first.
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?.decode()?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Image::new(
        [width as usize, height as usize].into(),
        rgba.into_raw(),
    )?)
}

/// Writes an RGBA8 image to the given file path.
///
/// The format is chosen from the file extension, using any format supported
/// by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to write the image to.
/// * `image` - The RGBA image to write, top scanline first.
pub fn write_image_any_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    image::save_buffer(
        file_path.as_ref(),
        image.as_slice(),
        image.cols() as u32,
        image.rows() as u32,
        image::ColorType::Rgba8,
    )?;
    Ok(())
}
