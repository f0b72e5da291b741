//! Categorical colour names
//!
//! A coarse, hand-tuned table over HSL. It is not a perceptual model; it only
//! gives wardrobe items a readable label, such as "Cyan" for a teal shirt.
//! Conversion and naming are separate pure functions so the table can be
//! tested on exact HSL values.

use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rgb;
use crate::constants::naming::{
    BLACK_MAX_LIGHTNESS, GRAY_MAX_SATURATION, HUE_BOUNDS, WHITE_MIN_LIGHTNESS,
};

/// Closed set of colour labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    Pink,
}

impl ColorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Black => "Black",
            ColorName::White => "White",
            ColorName::Gray => "Gray",
            ColorName::Red => "Red",
            ColorName::Orange => "Orange",
            ColorName::Yellow => "Yellow",
            ColorName::Green => "Green",
            ColorName::Cyan => "Cyan",
            ColorName::Blue => "Blue",
            ColorName::Purple => "Purple",
            ColorName::Magenta => "Magenta",
            ColorName::Pink => "Pink",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names for each hue band, aligned with `HUE_BOUNDS`
const HUE_NAMES: [ColorName; 9] = [
    ColorName::Red,
    ColorName::Orange,
    ColorName::Yellow,
    ColorName::Green,
    ColorName::Cyan,
    ColorName::Blue,
    ColorName::Purple,
    ColorName::Magenta,
    ColorName::Pink,
];

/// HSL rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslPercent {
    /// Degrees, 0..=360 (360 only through rounding)
    pub hue: u16,
    /// Percent, 0..=100
    pub saturation: u8,
    /// Percent, 0..=100
    pub lightness: u8,
}

impl HslPercent {
    /// Convert an 8-bit RGB triple with the standard RGB to HSL transform
    pub fn from_rgb(rgb: Rgb) -> Self {
        let srgb = Srgb::new(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        );
        let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(srgb);

        Self {
            hue: hsl.hue.into_positive_degrees().round() as u16,
            saturation: (hsl.saturation * 100.0).round().clamp(0.0, 100.0) as u8,
            lightness: (hsl.lightness * 100.0).round().clamp(0.0, 100.0) as u8,
        }
    }
}

/// Name a colour from its rounded HSL coordinates
///
/// First match wins: black, white, gray, then hue bands.
pub fn name_for_hsl(hsl: HslPercent) -> ColorName {
    if hsl.lightness < BLACK_MAX_LIGHTNESS {
        return ColorName::Black;
    }
    if hsl.lightness > WHITE_MIN_LIGHTNESS {
        return ColorName::White;
    }
    if hsl.saturation < GRAY_MAX_SATURATION {
        return ColorName::Gray;
    }

    HUE_BOUNDS
        .iter()
        .position(|&bound| hsl.hue < bound)
        .map(|band| HUE_NAMES[band])
        // wraps around to red
        .unwrap_or(ColorName::Red)
}

/// Name an 8-bit RGB colour
pub fn name_for_rgb(rgb: Rgb) -> ColorName {
    name_for_hsl(HslPercent::from_rgb(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(hue: u16, saturation: u8, lightness: u8) -> HslPercent {
        HslPercent {
            hue,
            saturation,
            lightness,
        }
    }

    #[test]
    fn test_lightness_boundaries_black() {
        assert_eq!(name_for_hsl(hsl(0, 100, 19)), ColorName::Black);
        assert_eq!(name_for_hsl(hsl(0, 100, 20)), ColorName::Red);
        assert_eq!(name_for_hsl(hsl(0, 100, 21)), ColorName::Red);
    }

    #[test]
    fn test_lightness_boundaries_white() {
        assert_eq!(name_for_hsl(hsl(0, 100, 79)), ColorName::Red);
        assert_eq!(name_for_hsl(hsl(0, 100, 80)), ColorName::Red);
        assert_eq!(name_for_hsl(hsl(0, 100, 81)), ColorName::White);
    }

    #[test]
    fn test_saturation_boundaries() {
        assert_eq!(name_for_hsl(hsl(200, 14, 50)), ColorName::Gray);
        assert_eq!(name_for_hsl(hsl(200, 15, 50)), ColorName::Blue);
        assert_eq!(name_for_hsl(hsl(200, 16, 50)), ColorName::Blue);
    }

    #[test]
    fn test_lightness_checked_before_saturation() {
        // unsaturated but dark / light
        assert_eq!(name_for_hsl(hsl(0, 0, 10)), ColorName::Black);
        assert_eq!(name_for_hsl(hsl(0, 0, 90)), ColorName::White);
    }

    #[test]
    fn test_hue_boundaries() {
        let cases = [
            (0, ColorName::Red),
            (14, ColorName::Red),
            (15, ColorName::Orange),
            (44, ColorName::Orange),
            (45, ColorName::Yellow),
            (74, ColorName::Yellow),
            (75, ColorName::Green),
            (164, ColorName::Green),
            (165, ColorName::Cyan),
            (194, ColorName::Cyan),
            (195, ColorName::Blue),
            (254, ColorName::Blue),
            (255, ColorName::Purple),
            (284, ColorName::Purple),
            (285, ColorName::Magenta),
            (314, ColorName::Magenta),
            (315, ColorName::Pink),
            (344, ColorName::Pink),
            (345, ColorName::Red),
            (359, ColorName::Red),
            (360, ColorName::Red),
        ];

        for (hue, expected) in cases {
            assert_eq!(name_for_hsl(hsl(hue, 80, 50)), expected, "hue {}", hue);
        }
    }

    #[test]
    fn test_hsl_from_primaries() {
        assert_eq!(HslPercent::from_rgb(Rgb::new(255, 0, 0)), hsl(0, 100, 50));
        assert_eq!(HslPercent::from_rgb(Rgb::new(0, 255, 0)), hsl(120, 100, 50));
        assert_eq!(HslPercent::from_rgb(Rgb::new(0, 0, 255)), hsl(240, 100, 50));
        assert_eq!(HslPercent::from_rgb(Rgb::new(255, 255, 255)), hsl(0, 0, 100));
        assert_eq!(HslPercent::from_rgb(Rgb::new(0, 0, 0)), hsl(0, 0, 0));
    }

    #[test]
    fn test_hsl_from_quantized_colors() {
        // (128, 64, 0): l = 128/510, s = 1, h = 30
        assert_eq!(HslPercent::from_rgb(Rgb::new(128, 64, 0)), hsl(30, 100, 25));
        // (160, 160, 160): neutral gray
        assert_eq!(HslPercent::from_rgb(Rgb::new(160, 160, 160)), hsl(0, 0, 63));
    }

    #[test]
    fn test_name_for_rgb() {
        assert_eq!(name_for_rgb(Rgb::new(255, 0, 0)), ColorName::Red);
        assert_eq!(name_for_rgb(Rgb::new(0, 0, 255)), ColorName::Blue);
        assert_eq!(name_for_rgb(Rgb::new(0, 0, 0)), ColorName::Black);
        assert_eq!(name_for_rgb(Rgb::new(255, 255, 255)), ColorName::White);
        assert_eq!(name_for_rgb(Rgb::new(128, 128, 128)), ColorName::Gray);
        assert_eq!(name_for_rgb(Rgb::new(0, 192, 192)), ColorName::Cyan);
        assert_eq!(name_for_rgb(Rgb::new(255, 128, 0)), ColorName::Orange);
        assert_eq!(name_for_rgb(Rgb::new(255, 64, 160)), ColorName::Pink);
    }

    #[test]
    fn test_display_and_serde_use_label() {
        assert_eq!(ColorName::Magenta.to_string(), "Magenta");
        assert_eq!(serde_json::to_string(&ColorName::Gray).unwrap(), "\"Gray\"");
    }
}
