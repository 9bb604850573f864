//! Pixel buffer type supplied by the image-loading layer.

/// Number of byte channels per pixel (RGBA).
pub(crate) const CHANNEL_STRIDE: usize = 4;

/// A decoded raster image in row-major 4-channel-per-pixel layout.
///
/// The buffer is produced by an external decoder and only read here;
/// the normalizer never mutates it.
#[derive(Clone)]
pub struct PixelBuffer {
    /// Raw pixel data, `CHANNEL_STRIDE` bytes per pixel.
    pixels: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl PixelBuffer {
    /// Creates a new buffer from raw RGBA bytes and dimensions.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the raw pixel bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Validates that the byte length matches the dimensions.
    pub fn is_valid(&self) -> bool {
        self.pixels.len() == self.pixel_count() * CHANNEL_STRIDE
    }

    /// Sums the first three channels of the pixel at (x, y).
    ///
    /// Returns `None` if the coordinate or the backing buffer is too
    /// short for a full pixel.
    pub(crate) fn brightness(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNEL_STRIDE;
        let rgb = self.pixels.get(offset..offset + 3)?;
        Some(rgb.iter().map(|&c| c as u32).sum())
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}
