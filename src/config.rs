//! Configuration for the palette extractor.
//!
//! All tunables of the sampling pipeline live in [`ExtractorConfig`]. The
//! defaults reproduce the reference behaviour exactly; other values are meant
//! for experiments and for callers trading accuracy against speed.
//!
//! ```no_run
//! use dresser_palette::ExtractorConfig;
//! use std::path::Path;
//!
//! let config = ExtractorConfig::from_json_file(Path::new("palette.json"))?;
//! config.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::sampling;
use crate::{ExtractError, Result};

/// Tunable parameters of the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Longest side of the working raster in pixels
    pub max_working_dimension: u32,

    /// Visit one pixel out of every `sample_rate`
    pub sample_rate: usize,

    /// Quantization step applied to each channel
    pub quantization_step: u8,

    /// Pixels with alpha below this are ignored
    pub alpha_threshold: u8,

    /// Filter used when rendering into the working raster
    pub resample: ResampleFilter,
}

/// Resampling filter for the working raster.
///
/// `Nearest` keeps flat colour regions flat, so a synthetic two-colour image
/// produces exactly two buckets. Smoother filters blend edges into extra
/// buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_working_dimension: sampling::MAX_WORKING_DIMENSION,
            sample_rate: sampling::SAMPLE_RATE,
            quantization_step: sampling::QUANTIZATION_STEP,
            alpha_threshold: sampling::ALPHA_THRESHOLD,
            resample: ResampleFilter::default(),
        }
    }
}

impl ExtractorConfig {
    /// Reject values that would make the pipeline divide by zero or sample nothing.
    pub fn validate(&self) -> Result<()> {
        if self.max_working_dimension == 0 {
            return Err(ExtractError::invalid_parameter(
                "max_working_dimension",
                self.max_working_dimension,
            ));
        }
        if self.sample_rate == 0 {
            return Err(ExtractError::invalid_parameter("sample_rate", self.sample_rate));
        }
        if self.quantization_step == 0 {
            return Err(ExtractError::invalid_parameter(
                "quantization_step",
                self.quantization_step,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
