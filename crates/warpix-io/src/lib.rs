#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding
/// failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Provides convenient functions for reading and writing images in any format
/// supported by the image crate. See [`functional::read_image_any_rgba8`].
pub mod functional;

/// PNG image encoding and decoding.
///
/// Read and write PNG images with support for the 8-bit color types used by
/// the warp pipeline.
pub mod png;

pub use crate::error::IoError;
