use super::{Rgb8, UnitRgb, parse_hex};
use crate::error::Result;

/// Rounds to three decimal places
fn round_milli(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Converts a hex color to CSS `color(srgb R G B)` notation.
///
/// Channels are scaled to `[0, 1]` and rounded to three decimal places.
/// They print in shortest form, so white is `color(srgb 1 1 1)`.
///
/// # Arguments
/// - `hex`: `#RGB` or `#RRGGBB`
pub fn to_color_function(hex: &str) -> Result<String> {
    Ok(format_color_function(parse_hex(hex)?))
}

pub(crate) fn format_color_function(rgb: Rgb8) -> String {
    let unit = UnitRgb::from_rgb8(rgb);

    format!(
        "color(srgb {} {} {})",
        round_milli(unit.r),
        round_milli(unit.g),
        round_milli(unit.b)
    )
}
