//! Nearest-neighbor rescale and brightness thresholding.

use super::{BinaryMatrix, PixelBuffer, BRIGHTNESS_THRESHOLD, MATRIX_SIZE};

/// Rescales pixel buffers to fixed-size binary bitmaps.
///
/// Each target cell maps back to a single source pixel via
/// nearest-neighbor scaling; the pixel's summed R+G+B brightness is
/// compared against a fixed threshold to produce the cell bit.
#[derive(Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a pixel buffer to a 64x64 binary matrix.
    ///
    /// Cells whose source coordinate falls outside the image (or past
    /// the end of a short pixel buffer) are left at 0. Degenerate
    /// images (zero width or height) yield an all-zero matrix rather
    /// than an error.
    pub fn normalize(&self, buffer: &PixelBuffer) -> BinaryMatrix {
        let mut matrix = BinaryMatrix::zeroed();

        let scale_x = buffer.width() as f64 / MATRIX_SIZE as f64;
        let scale_y = buffer.height() as f64 / MATRIX_SIZE as f64;

        for y in 0..MATRIX_SIZE {
            for x in 0..MATRIX_SIZE {
                let src_x = (x as f64 * scale_x).floor() as u32;
                let src_y = (y as f64 * scale_y).floor() as u32;

                if let Some(brightness) = buffer.brightness(src_x, src_y) {
                    matrix.set(x, y, brightness > BRIGHTNESS_THRESHOLD);
                }
            }
        }

        tracing::trace!(
            width = buffer.width(),
            height = buffer.height(),
            popcount = matrix.popcount(),
            "Normalized pixel buffer"
        );

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_buffer(width: u32, height: u32, rgb: u8) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[rgb, rgb, rgb, 255]);
        }
        PixelBuffer::new(pixels, width, height)
    }

    #[test]
    fn test_all_black_yields_zero_matrix() {
        let matrix = Normalizer::new().normalize(&solid_buffer(2, 2, 0));

        assert_eq!(matrix.popcount(), 0);
    }

    #[test]
    fn test_all_white_yields_full_matrix() {
        let matrix = Normalizer::new().normalize(&solid_buffer(2, 2, 255));

        assert_eq!(matrix.popcount(), MATRIX_SIZE * MATRIX_SIZE);
    }

    #[test]
    fn test_threshold_boundary() {
        // 128+128+128 = 384 is not strictly above the threshold
        let at_threshold = Normalizer::new().normalize(&solid_buffer(4, 4, 128));
        assert_eq!(at_threshold.popcount(), 0);

        // 129*3 = 387 crosses it
        let above = Normalizer::new().normalize(&solid_buffer(4, 4, 129));
        assert_eq!(above.popcount(), MATRIX_SIZE * MATRIX_SIZE);
    }

    #[test]
    fn test_degenerate_image_accepted() {
        let empty = PixelBuffer::new(Vec::new(), 0, 0);
        let matrix = Normalizer::new().normalize(&empty);

        assert_eq!(matrix.popcount(), 0);
    }

    #[test]
    fn test_half_split_image() {
        // Left half white, right half black, wider than the matrix
        let width = 128u32;
        let height = 128u32;
        let mut pixels = Vec::new();
        for _ in 0..height {
            for x in 0..width {
                let v = if x < width / 2 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let buffer = PixelBuffer::new(pixels, width, height);

        let matrix = Normalizer::new().normalize(&buffer);

        // Left half of the matrix set, right half clear
        assert!(matrix.get(0, 0));
        assert!(matrix.get(31, 63));
        assert!(!matrix.get(32, 0));
        assert!(!matrix.get(63, 63));
        assert_eq!(matrix.popcount(), (MATRIX_SIZE / 2) * MATRIX_SIZE);
    }

    #[test]
    fn test_upscale_small_image() {
        // A 2x2 checkerboard scaled up; each quadrant maps to one pixel
        let pixels = vec![
            255, 255, 255, 255, // (0,0) white
            0, 0, 0, 255, // (1,0) black
            0, 0, 0, 255, // (0,1) black
            255, 255, 255, 255, // (1,1) white
        ];
        let buffer = PixelBuffer::new(pixels, 2, 2);

        let matrix = Normalizer::new().normalize(&buffer);

        assert!(matrix.get(0, 0));
        assert!(!matrix.get(63, 0));
        assert!(!matrix.get(0, 63));
        assert!(matrix.get(63, 63));
        assert_eq!(matrix.popcount(), MATRIX_SIZE * MATRIX_SIZE / 2);
    }

    #[test]
    fn test_determinism() {
        let buffer = solid_buffer(10, 7, 200);
        let normalizer = Normalizer::new();

        assert_eq!(normalizer.normalize(&buffer), normalizer.normalize(&buffer));
    }
}
