pub mod color_function;
pub mod hsl;
pub mod hwb;
pub mod rgb;

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ColorError, Result};

// Re-export the main functions for easier external use
pub use color_function::to_color_function;
pub use hsl::to_hsl;
pub use hwb::to_hwb;
pub use rgb::{Rgb8, rgb_to_hex, to_rgb};

/// Pre-compiled pattern for `#RGB` and `#RRGGBB` (cached for performance)
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
        .expect("Invalid hex color regex pattern")
});

/// Validates a hex color string and decodes its channels.
///
/// This is the single normalization step shared by every notation:
/// the leading `#` is required, 3-digit input is expanded by doubling
/// each digit, and digits are case insensitive.
///
/// # Arguments
/// - `hex`: A color such as `"#ff8800"` or `"#f80"`
///
/// # Returns
/// The decoded 8-bit channels, or `ColorError::InvalidFormat`
pub fn parse_hex(hex: &str) -> Result<Rgb8> {
    let digits = HEX_REGEX
        .captures(hex)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ColorError::invalid_format(hex))?
        .as_str();

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::invalid_format(hex))
    };

    if digits.len() == 3 {
        // #RGB: each digit doubled, 0xA -> 0xAA
        Ok(Rgb8::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        ))
    } else {
        Ok(Rgb8::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Channels scaled to the unit interval, with their extremes precomputed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UnitRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub max: f64,
    pub min: f64,
}

impl UnitRgb {
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        Self {
            r,
            g,
            b,
            max: r.max(g).max(b),
            min: r.min(g).min(b),
        }
    }

    /// Chroma, `max - min`. Zero for grays.
    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// Hue as a sector position in `[0, 6)`, or `None` for achromatic colors.
    ///
    /// Shared by HSL and HWB. The branch follows whichever channel is the
    /// maximum; red wraps negative positions around by adding 6.
    pub fn hue_sector(&self) -> Option<f64> {
        let d = self.delta();
        if d == 0.0 {
            return None;
        }

        let sector = if self.max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if self.max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        Some(sector)
    }
}

/// Rounds a hue to whole degrees. Hues just below a full turn round up to 360.
pub(crate) fn round_degrees(degrees: f64) -> u32 {
    degrees.round() as u32
}

/// Rounds a unit-interval value to a whole percentage.
pub(crate) fn round_percent(value: f64) -> u32 {
    (value * 100.0).round() as u32
}
