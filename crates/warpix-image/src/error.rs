/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of an operation do not match.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when casting pixel data to another type.
    #[error("Failed to cast the pixel data")]
    CastError,

    /// Error when a matrix cannot be inverted.
    #[error("Cannot compute the determinant of a singular matrix")]
    CannotComputeDeterminant,

    /// Error when a homogeneous coordinate is too close to zero to divide by.
    #[error("Homogeneous coordinate is near zero")]
    HomogeneousDivideByZero,

    /// Error when a transform maps an image to a degenerate canvas.
    #[error("Transformed canvas is degenerate ({0}x{1})")]
    DegenerateCanvas(usize, usize),
}
