//! # Dresser Palette
//!
//! Dominant colour extraction for wardrobe photographs.
//!
//! Given an image reference, the extractor returns the most frequent colours
//! with:
//! - a lowercase hex code and the RGB triple of the quantization bucket
//! - the share of sampled pixels in that bucket, as a whole percent
//! - a coarse name such as "Red", "Cyan" or "Gray"
//!
//! ## Example
//!
//! ```rust,no_run
//! use dresser_palette::extract_colors;
//!
//! # async fn run() -> dresser_palette::Result<()> {
//! let colors = extract_colors("https://cdn.example.com/items/jacket.jpg", 5).await?;
//! for color in &colors {
//!     println!("{} {} {}%", color.name, color.hex, color.percentage);
//! }
//! # Ok(())
//! # }
//! ```

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;

pub use color::{ColorName, Rgb};
pub use config::{ExtractorConfig, ResampleFilter};
pub use constants::sampling::DEFAULT_MAX_COLORS;
pub use error::{ExtractError, Result};
pub use image_loader::{ImageLoader, ImageSource};

/// One dominant colour of an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// `#rrggbb`, lowercase
    pub hex: String,
    /// Quantized channel values
    pub rgb: Rgb,
    /// Categorical name from the HSL table
    pub name: ColorName,
    /// Rounded share of sampled pixels, 0-100
    pub percentage: u8,
}

/// Palette extractor
///
/// Holds configuration and an image loader; no state is carried between
/// calls, so one extractor can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ColorExtractor {
    config: ExtractorConfig,
    loader: ImageLoader,
}

impl ColorExtractor {
    /// Create an extractor with the reference configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom sampling parameters
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            loader: ImageLoader::new(),
        }
    }

    /// Replace the image loader, e.g. to supply a configured HTTP client
    pub fn with_loader(mut self, loader: ImageLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract up to `max_colors` dominant colours from an image reference
    ///
    /// # Arguments
    ///
    /// * `source` - Filesystem path, `file://`, `data:` or `http(s)://` URL
    /// * `max_colors` - Upper bound on returned entries, at least 1
    ///
    /// # Returns
    ///
    /// Colours ordered by descending sampled frequency. An image with no
    /// opaque sampled pixel yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidParameter` before any I/O if
    /// `max_colors` is zero or the configuration is invalid, and
    /// `ExtractError::LoadError` if the image cannot be fetched or decoded.
    pub async fn extract_colors(&self, source: &str, max_colors: usize) -> Result<Vec<ExtractedColor>> {
        self.check_request(max_colors)?;

        let image = self.loader.load(source).await?;
        let colors = self.extract_from_image(&image, max_colors)?;

        debug!(colors = colors.len(), "extracted palette");
        Ok(colors)
    }

    /// Run the sampling pipeline on an already decoded raster
    pub fn extract_from_image(
        &self,
        image: &RgbaImage,
        max_colors: usize,
    ) -> Result<Vec<ExtractedColor>> {
        self.check_request(max_colors)?;

        let raster = color::quantize::to_working_raster(image, &self.config);
        let tally = color::quantize::tally(&raster, &self.config);

        debug!(
            width = raster.width(),
            height = raster.height(),
            sampled = tally.sampled(),
            opaque = tally.opaque(),
            buckets = tally.buckets().len(),
            "sampled working raster"
        );

        Ok(color::ranking::rank(tally, max_colors))
    }

    fn check_request(&self, max_colors: usize) -> Result<()> {
        if max_colors == 0 {
            return Err(ExtractError::invalid_parameter("max_colors", max_colors));
        }
        self.config.validate()
    }
}

/// Extract dominant colours with the reference configuration
///
/// Convenience wrapper around [`ColorExtractor::extract_colors`]; pass
/// [`DEFAULT_MAX_COLORS`] for the usual five entries.
pub async fn extract_colors(source: &str, max_colors: usize) -> Result<Vec<ExtractedColor>> {
    ColorExtractor::new().extract_colors(source, max_colors).await
}
