/// Conversion settings shared by every file in a run
///
/// The values are fixed for the lifetime of the process. The struct is
/// built once in `main` and handed to the converter by reference.

/// Width of every generated JPEG, in pixels
pub const TARGET_WIDTH: u16 = 181;

/// Height of every generated JPEG, in pixels
pub const TARGET_HEIGHT: u16 = 114;

/// JPEG quality passed to the encoder (1-100)
pub const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Output width. The source is stretched to fit, aspect ratio is ignored.
    pub width: u16,

    /// Output height
    pub height: u16,

    /// JPEG quality (1-100)
    pub quality: u8,

    /// Build optimized Huffman tables instead of the standard ones.
    /// Slower to encode, smaller files.
    pub optimize: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            quality: JPEG_QUALITY,
            optimize: true,
        }
    }
}

impl ConvertConfig {
    /// Target size as `(width, height)` in the form the `image` crate expects
    pub fn target_size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }
}
