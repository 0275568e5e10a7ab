use egui::Color32;
use std::fmt;

use super::parse_hex;
use crate::error::Result;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the channels as a lowercase `#rrggbb` string
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl From<Rgb8> for Color32 {
    fn from(rgb: Rgb8) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Converts a hex color to `rgb(R, G, B)` notation.
///
/// # Arguments
/// - `hex`: `#RGB` or `#RRGGBB`
///
/// # Returns
/// The notation with integer channels in 0-255, e.g. `rgb(255, 128, 0)`
pub fn to_rgb(hex: &str) -> Result<String> {
    Ok(parse_hex(hex)?.to_string())
}

/// Formats 8-bit channels as a lowercase `#rrggbb` hex color
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
