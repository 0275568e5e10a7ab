use super::{Rgb8, UnitRgb, parse_hex, round_degrees, round_percent};
use crate::error::Result;

/// Converts a hex color to `hwb(H, W%, B%)` notation.
///
/// Whiteness is the smallest channel and blackness is one minus the largest.
/// The hue matches the one reported by [`to_hsl`](super::to_hsl) and is 0 for grays.
///
/// # Arguments
/// - `hex`: `#RGB` or `#RRGGBB`
///
/// # Returns
/// The notation with every component rounded to an integer, e.g. `hwb(0, 100%, 0%)`
pub fn to_hwb(hex: &str) -> Result<String> {
    Ok(format_hwb(parse_hex(hex)?))
}

pub(crate) fn format_hwb(rgb: Rgb8) -> String {
    let unit = UnitRgb::from_rgb8(rgb);
    let whiteness = unit.min;
    let blackness = 1.0 - unit.max;
    let hue = unit.hue_sector().map_or(0.0, |sector| sector * 60.0);

    format!(
        "hwb({}, {}%, {}%)",
        round_degrees(hue),
        round_percent(whiteness),
        round_percent(blackness)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hwb_primaries() {
        assert_eq!(to_hwb("#ff0000").unwrap(), "hwb(0, 0%, 0%)");
        assert_eq!(to_hwb("#00ff00").unwrap(), "hwb(120, 0%, 0%)");
        assert_eq!(to_hwb("#0000ff").unwrap(), "hwb(240, 0%, 0%)");
    }

    #[test]
    fn test_to_hwb_black_and_white() {
        assert_eq!(to_hwb("#ffffff").unwrap(), "hwb(0, 100%, 0%)");
        assert_eq!(to_hwb("#000000").unwrap(), "hwb(0, 0%, 100%)");
    }

    #[test]
    fn test_to_hwb_mixed_colors() {
        assert_eq!(to_hwb("#ff69b4").unwrap(), "hwb(330, 41%, 0%)"); // Hot Pink
        assert_eq!(to_hwb("#4682b4").unwrap(), "hwb(207, 27%, 29%)"); // Steel Blue
        assert_eq!(to_hwb("#008080").unwrap(), "hwb(180, 0%, 50%)"); // Teal
    }

    #[test]
    fn test_to_hwb_grays_have_no_hue() {
        assert_eq!(to_hwb("#808080").unwrap(), "hwb(0, 50%, 50%)");
        assert_eq!(to_hwb("#c0c0c0").unwrap(), "hwb(0, 75%, 25%)");
    }

    #[test]
    fn test_to_hwb_hue_near_full_turn() {
        assert_eq!(to_hwb("#ff0001").unwrap(), "hwb(360, 0%, 0%)");
        assert_eq!(to_hwb("#ff0002").unwrap(), "hwb(360, 0%, 0%)");
    }

    #[test]
    fn test_to_hwb_short_form() {
        assert_eq!(to_hwb("#abc").unwrap(), "hwb(210, 67%, 20%)");
        assert_eq!(to_hwb("#abc").unwrap(), to_hwb("#aabbcc").unwrap());
    }
}
