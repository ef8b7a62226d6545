//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation algorithms used when resampling
//! images during geometric transformations like warping or remapping.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels

mod bilinear;

/// Grid generation and coordinate mapping utilities.
///
/// Functions for generating coordinate meshgrids used in image warping
/// and transformation operations.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;
mod remap;

pub use grid::meshgrid_from_fn;
pub use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
pub use remap::remap;
