//! # egui_color_notes
//!
//! A color picker for egui that shows the selected color in five CSS notations.
//!
//! ## Features
//!
//! - Converts `#RGB` / `#RRGGBB` hex colors to `rgb()`, `hsl()`, `hwb()` and `color(srgb ...)`
//! - Validates input once and reports malformed hex as [`ColorError::InvalidFormat`]
//! - Provides a ready-made [`ColorPicker`] widget with a native color button
//!
//! ## Usage Example
//!
//! ```rust
//! use egui_color_notes::{ColorValue, to_hsl};
//!
//! let value = ColorValue::from_hex("#ff0000")?;
//! assert_eq!(value.rgb, "rgb(255, 0, 0)");
//! assert_eq!(value.color, "color(srgb 1 0 0)");
//!
//! assert_eq!(to_hsl("#abc")?, to_hsl("#aabbcc")?);
//! # Ok::<(), egui_color_notes::ColorError>(())
//! ```

use std::fmt;

pub mod error;
mod notations;
mod widget;

pub use error::{ColorError, Result};
// Re-export notation modules
pub use notations::*;
pub use widget::ColorPicker;

/// One color written out in every supported notation.
///
/// All fields describe the same color; `hex` is the source the others were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorValue {
    pub rgb: String,
    pub hex: String,
    pub hsl: String,
    pub hwb: String,
    pub color: String,
}

impl ColorValue {
    /// Builds every notation for a hex color
    ///
    /// The stored `hex` is the canonical form rather than the raw input:
    /// `#ABC` is kept as `#aabbcc`.
    ///
    /// # Arguments
    /// - `hex`: `#RGB` or `#RRGGBB`, any case
    ///
    /// # Returns
    /// The value with `hex` normalized to lowercase `#rrggbb`, or `InvalidFormat`
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb8(parse_hex(hex)?))
    }

    /// Builds every notation for already decoded channels
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self {
            rgb: rgb.to_string(),
            hex: rgb.to_hex(),
            hsl: hsl::format_hsl(rgb),
            hwb: hwb::format_hwb(rgb),
            color: color_function::format_color_function(rgb),
        }
    }

    /// Label and value pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("RGB", self.rgb.as_str()),
            ("HEX", self.hex.as_str()),
            ("HSL", self.hsl.as_str()),
            ("HWB", self.hwb.as_str()),
            ("color()", self.color.as_str()),
        ]
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::from_rgb8(Rgb8::WHITE)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label:<8}{value}")?;
        }
        Ok(())
    }
}

/// Convenience function: converts a hex color to every notation at once
///
/// # Arguments
/// - `hex`: `#RGB` or `#RRGGBB`
///
/// # Returns
/// A [`ColorValue`], or `InvalidFormat` if the input is not a hex color
pub fn convert(hex: &str) -> Result<ColorValue> {
    ColorValue::from_hex(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_white() {
        let value = convert("#ffffff").unwrap();
        assert_eq!(value.rgb, "rgb(255, 255, 255)");
        assert_eq!(value.hex, "#ffffff");
        assert_eq!(value.hsl, "hsl(0, 0%, 100%)");
        assert_eq!(value.hwb, "hwb(0, 100%, 0%)");
        assert_eq!(value.color, "color(srgb 1 1 1)");
    }

    #[test]
    fn test_convert_black() {
        let value = convert("#000000").unwrap();
        assert_eq!(value.rgb, "rgb(0, 0, 0)");
        assert_eq!(value.hex, "#000000");
        assert_eq!(value.hsl, "hsl(0, 0%, 0%)");
        assert_eq!(value.hwb, "hwb(0, 0%, 100%)");
        assert_eq!(value.color, "color(srgb 0 0 0)");
    }

    #[test]
    fn test_convert_red() {
        let value = convert("#ff0000").unwrap();
        assert_eq!(value.rgb, "rgb(255, 0, 0)");
        assert_eq!(value.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(value.hwb, "hwb(0, 0%, 0%)");
        assert_eq!(value.color, "color(srgb 1 0 0)");
    }

    #[test]
    fn test_convert_normalizes_hex() {
        assert_eq!(convert("#ABC").unwrap().hex, "#aabbcc");
        assert_eq!(convert("#abc").unwrap(), convert("#aabbcc").unwrap());
    }

    #[test]
    fn test_convert_invalid() {
        for input in ["#12", "#xyzxyz", "abcdef", ""] {
            assert_eq!(convert(input), Err(ColorError::invalid_format(input)));
        }
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(ColorValue::default(), convert("#fff").unwrap());
    }

    #[test]
    fn test_rows_order() {
        let value = convert("#ff0000").unwrap();
        let labels: Vec<&str> = value.rows().iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["RGB", "HEX", "HSL", "HWB", "color()"]);
        assert_eq!(value.rows()[1].1, "#ff0000");
    }

    #[test]
    fn test_display() {
        let value = convert("#000").unwrap();
        let text = value.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "RGB     rgb(0, 0, 0)");
        assert_eq!(lines[4], "color() color(srgb 0 0 0)");
    }
}
