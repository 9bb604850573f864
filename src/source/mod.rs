//! Image supplier seam.
//!
//! Decoding arbitrary image formats is an external concern; the core
//! only consumes [`PixelBuffer`] values. This module provides the
//! trait boundary for suppliers and a deterministic synthetic source
//! for demos and tests.

use crate::normalize::PixelBuffer;
use thiserror::Error;

/// Errors that can occur while supplying images.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("image source exhausted")]
    Exhausted,
    #[error("failed to supply image: {0}")]
    SupplyFailed(String),
}

/// Trait for components that supply decoded pixel buffers.
///
/// Real implementations wrap a file decoder; the core never opens
/// files itself.
pub trait ImageSource {
    /// Supplies the next pixel buffer.
    fn next_image(&mut self) -> Result<PixelBuffer, SourceError>;

    /// Returns the number of images remaining, if known.
    fn remaining(&self) -> Option<usize>;
}

/// Deterministic synthetic image source.
///
/// Generates visually distinct gradient-and-stripe patterns per
/// sequence number. Not an entropy source in itself; the patterns
/// exist so demos and tests have reproducible, distinguishable inputs.
#[derive(Debug)]
pub struct PatternSource {
    width: u32,
    height: u32,
    sequence: u32,
    count: u32,
}

impl PatternSource {
    /// Creates a source yielding `count` patterned images.
    pub fn new(width: u32, height: u32, count: u32) -> Self {
        Self {
            width,
            height,
            sequence: 0,
            count,
        }
    }

    fn pattern_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        // Each sequence number shifts the stripe phase and gradient so
        // consecutive images normalize to different bitmaps.
        let phase = self.sequence.wrapping_mul(37);
        let stripe = ((x + phase) / 8) % 2;
        let gradient = ((y * 255) / self.height.max(1)) as u8;
        let value = if stripe == 0 { gradient } else { 255 - gradient };
        [value, value.wrapping_add(13), value.wrapping_mul(3), 255]
    }
}

impl ImageSource for PatternSource {
    fn next_image(&mut self) -> Result<PixelBuffer, SourceError> {
        if self.sequence >= self.count {
            return Err(SourceError::Exhausted);
        }

        let mut pixels = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.extend_from_slice(&self.pattern_pixel(x, y));
            }
        }

        let buffer = PixelBuffer::new(pixels, self.width, self.height);
        self.sequence += 1;
        tracing::trace!(sequence = self.sequence, "Pattern image supplied");
        Ok(buffer)
    }

    fn remaining(&self) -> Option<usize> {
        Some((self.count - self.sequence) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_yields_requested_count() {
        let mut source = PatternSource::new(16, 16, 3);

        assert_eq!(source.remaining(), Some(3));
        for _ in 0..3 {
            let buffer = source.next_image().unwrap();
            assert!(buffer.is_valid());
        }
        assert!(matches!(source.next_image(), Err(SourceError::Exhausted)));
    }

    #[test]
    fn test_consecutive_images_differ() {
        let mut source = PatternSource::new(32, 32, 2);

        let a = source.next_image().unwrap();
        let b = source.next_image().unwrap();

        assert_ne!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_source_is_reproducible() {
        let mut first = PatternSource::new(16, 16, 1);
        let mut second = PatternSource::new(16, 16, 1);

        assert_eq!(
            first.next_image().unwrap().pixels(),
            second.next_image().unwrap().pixels()
        );
    }
}
