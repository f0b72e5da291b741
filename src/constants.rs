//! Reference constants for palette extraction
//!
//! These values fix the output of the extractor for a given image. Changing
//! any of them changes bucket keys, percentages or names, so test fixtures
//! depend on them.

/// Sampling and quantization parameters
pub mod sampling {
    /// Longest side of the working raster, in pixels
    pub const MAX_WORKING_DIMENSION: u32 = 200;

    /// Examine one of every `SAMPLE_RATE` pixels in raster order
    pub const SAMPLE_RATE: usize = 4;

    /// Channel values are rounded to the nearest multiple of this step
    pub const QUANTIZATION_STEP: u8 = 32;

    /// Pixels with alpha below this value count as transparent
    pub const ALPHA_THRESHOLD: u8 = 128;

    /// Number of colours returned when the caller does not ask for a count
    pub const DEFAULT_MAX_COLORS: usize = 5;
}

/// Thresholds for the HSL naming table
///
/// Lightness and saturation are percentages, hue is in degrees.
pub mod naming {
    /// Anything darker than this is "Black"
    pub const BLACK_MAX_LIGHTNESS: u8 = 20;

    /// Anything lighter than this is "White"
    pub const WHITE_MIN_LIGHTNESS: u8 = 80;

    /// Anything less saturated than this is "Gray"
    pub const GRAY_MAX_SATURATION: u8 = 15;

    /// Exclusive upper hue bound of each chromatic name, in table order.
    /// Hues at or above the last bound wrap back to red.
    pub const HUE_BOUNDS: [u16; 9] = [15, 45, 75, 165, 195, 255, 285, 315, 345];
}
