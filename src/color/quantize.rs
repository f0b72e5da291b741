//! Working-resolution render, stride sampling and bucket tally
//!
//! The raster is first rendered at a bounded working size so the cost of
//! sampling does not depend on the source resolution. Every `sample_rate`-th
//! pixel in raster order is then examined; opaque pixels are rounded to a
//! quantization bucket and counted.

use image::{imageops, RgbaImage};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::trace;

use super::Rgb;
use crate::config::ExtractorConfig;

/// One quantized colour and how many sampled pixels fell into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub color: Rgb,
    pub count: u32,
}

/// Bucket counts for one sampled raster
///
/// Buckets are kept in the order they were first encountered.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    index: HashMap<Rgb, usize>,
    buckets: Vec<Bucket>,
    sampled: u32,
    opaque: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited pixel that was skipped as transparent
    pub fn record_transparent(&mut self) {
        self.sampled += 1;
    }

    /// Record a visited opaque pixel in its bucket
    pub fn record(&mut self, color: Rgb) {
        self.sampled += 1;
        self.opaque += 1;
        match self.index.get(&color) {
            Some(&slot) => self.buckets[slot].count += 1,
            None => {
                self.index.insert(color, self.buckets.len());
                self.buckets.push(Bucket { color, count: 1 });
            }
        }
    }

    /// Every visited pixel, transparent ones included
    pub fn sampled(&self) -> u32 {
        self.sampled
    }

    /// Visited pixels that passed the alpha filter
    pub fn opaque(&self) -> u32 {
        self.opaque
    }

    /// Buckets in first-encountered order
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}

/// Size of the working raster for a `width` x `height` source
///
/// Both axes share the scale `min(max_dim / width, max_dim / height)`, so small
/// images are scaled up as well as large ones down. Each axis is truncated and
/// kept at one pixel minimum.
pub fn working_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let max_dim = max_dim as f64;
    let scale = (max_dim / width as f64).min(max_dim / height as f64);
    let scaled = |side: u32| ((side as f64 * scale).floor() as u32).max(1);

    (scaled(width), scaled(height))
}

/// Render `image` at the working resolution
pub fn to_working_raster<'a>(image: &'a RgbaImage, config: &ExtractorConfig) -> Cow<'a, RgbaImage> {
    let (width, height) = image.dimensions();
    let (target_w, target_h) = working_dimensions(width, height, config.max_working_dimension);

    if (target_w, target_h) == (width, height) {
        return Cow::Borrowed(image);
    }

    trace!(width, height, target_w, target_h, "resizing to working raster");
    Cow::Owned(imageops::resize(image, target_w, target_h, config.resample.into()))
}

/// Round a channel to the nearest multiple of `step`, clamped to 255
///
/// Halves round up, so with a step of 32 the value 16 maps to 32.
pub fn quantize_channel(value: u8, step: u8) -> u8 {
    let step = step.max(1) as u16;
    let rounded = (value as u16 + step / 2) / step * step;
    rounded.min(u8::MAX as u16) as u8
}

/// Quantize an RGB triple channel by channel
pub fn quantize(color: Rgb, step: u8) -> Rgb {
    Rgb::new(
        quantize_channel(color.r, step),
        quantize_channel(color.g, step),
        quantize_channel(color.b, step),
    )
}

/// Sample `raster` with the configured stride and count quantized buckets
///
/// `raster` is used as is; call [`to_working_raster`] first to bound the cost.
pub fn tally(raster: &RgbaImage, config: &ExtractorConfig) -> Tally {
    let mut tally = Tally::new();

    for pixel in raster.pixels().step_by(config.sample_rate.max(1)) {
        let [r, g, b, a] = pixel.0;
        if a < config.alpha_threshold {
            tally.record_transparent();
            continue;
        }
        tally.record(quantize(Rgb::new(r, g, b), config.quantization_step));
    }

    trace!(
        sampled = tally.sampled(),
        opaque = tally.opaque(),
        buckets = tally.buckets().len(),
        "tallied raster"
    );
    tally
}
