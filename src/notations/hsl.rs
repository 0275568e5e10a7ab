use super::{Rgb8, UnitRgb, parse_hex, round_degrees, round_percent};
use crate::error::Result;

/// Converts a hex color to `hsl(H, S%, L%)` notation.
///
/// Lightness is the midpoint of the largest and smallest channel.
/// Achromatic colors (all channels equal) report hue 0 and saturation 0.
///
/// # Arguments
/// - `hex`: `#RGB` or `#RRGGBB`
///
/// # Returns
/// The notation with hue in whole degrees and rounded percentages, e.g. `hsl(0, 100%, 50%)`
pub fn to_hsl(hex: &str) -> Result<String> {
    Ok(format_hsl(parse_hex(hex)?))
}

pub(crate) fn format_hsl(rgb: Rgb8) -> String {
    let unit = UnitRgb::from_rgb8(rgb);
    let l = (unit.max + unit.min) / 2.0;

    let (h, s) = match unit.hue_sector() {
        Some(sector) => {
            let d = unit.delta();
            let s = if l > 0.5 {
                d / (2.0 - unit.max - unit.min)
            } else {
                d / (unit.max + unit.min)
            };
            (sector / 6.0, s)
        }
        None => (0.0, 0.0),
    };

    format!(
        "hsl({}, {}%, {}%)",
        round_degrees(h * 360.0),
        round_percent(s),
        round_percent(l)
    )
}
