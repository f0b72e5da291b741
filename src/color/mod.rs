//! Colour sampling, ranking and naming
//!
//! The pipeline is split into pure stages so each can be tested on synthetic
//! rasters:
//!
//! - [`quantize`]: working-resolution render, stride sampling, bucket tally
//! - [`ranking`]: frequency ordering and [`ExtractedColor`](crate::ExtractedColor) materialization
//! - [`naming`]: RGB to HSL and the categorical name table

pub mod naming;
pub mod quantize;
pub mod ranking;

pub use naming::{name_for_hsl, name_for_rgb, ColorName, HslPercent};
pub use quantize::{Bucket, Tally};

use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
