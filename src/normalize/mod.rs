//! Image normalization to fixed-size binary bitmaps.
//!
//! This module reduces arbitrary-size pixel buffers to a fixed 64x64
//! grid of single-bit brightness values. The reduction is bit-exact
//! and deterministic so the same image always yields the same bitmap.

mod bitmap;
mod buffer;
mod scale;

pub use bitmap::BinaryMatrix;
pub use buffer::PixelBuffer;
pub use scale::Normalizer;

/// Side length of the normalized bitmap.
pub const MATRIX_SIZE: usize = 64;

/// Brightness threshold for a cell to be set (3 x 128 over R+G+B).
pub const BRIGHTNESS_THRESHOLD: u32 = 384;
