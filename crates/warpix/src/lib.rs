#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use warpix_image as image;

#[doc(inline)]
pub use warpix_imgproc as imgproc;

#[doc(inline)]
pub use warpix_io as io;
