use egui::{Color32, Id, Response, Ui};
use tracing::{debug, warn};

use crate::ColorValue;
use crate::error::{ColorError, Result};
use crate::notations::{Rgb8, parse_hex};

/// Color picker widget showing the chosen color in every notation.
///
/// The picker owns a single [`ColorValue`]. Every edit builds a fresh value
/// and replaces the previous one.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    value: ColorValue,
    rgb: Rgb8,
    // Contents of the hex text field, may be mid-edit and invalid
    hex_input: String,
    error: Option<ColorError>,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::from_rgb8(Rgb8::WHITE)
    }
}

impl ColorPicker {
    /// Creates a picker starting at the given hex color
    pub fn new(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb8(parse_hex(hex)?))
    }

    fn from_rgb8(rgb: Rgb8) -> Self {
        let value = ColorValue::from_rgb8(rgb);
        Self {
            hex_input: value.hex.clone(),
            value,
            rgb,
            error: None,
        }
    }

    /// The color currently shown
    pub fn value(&self) -> &ColorValue {
        &self.value
    }

    /// The color currently shown, as 8-bit channels
    pub fn rgb(&self) -> Rgb8 {
        self.rgb
    }

    /// Error left by the last rejected hex input, if any
    pub fn error(&self) -> Option<&ColorError> {
        self.error.as_ref()
    }

    /// Replaces the current color with a hex color.
    ///
    /// On failure the previous value stays in place.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let rgb = parse_hex(hex)?;
        self.set_rgb(rgb);
        Ok(())
    }

    /// Replaces the current color
    pub fn set_rgb(&mut self, rgb: Rgb8) {
        *self = Self::from_rgb8(rgb);
        debug!(hex = %self.value.hex, "color changed");
    }

    /// Applies the hex text field, returns whether the color changed
    fn apply_hex_input(&mut self) -> bool {
        let input = self.hex_input.trim().to_owned();
        match parse_hex(&input) {
            Ok(rgb) if rgb == self.rgb => {
                self.error = None;
                false
            }
            Ok(rgb) => {
                let typed = std::mem::take(&mut self.hex_input);
                self.set_rgb(rgb);
                // Keep what the user typed so the cursor doesn't jump
                self.hex_input = typed;
                true
            }
            Err(err) => {
                warn!(%err, "rejected hex input");
                self.error = Some(err);
                false
            }
        }
    }

    /// Id of the hex text field when the picker is shown in `ui`
    fn hex_field_id(ui: &Ui) -> Id {
        ui.id().with("color_notes_hex")
    }

    /// Shows the picker.
    ///
    /// The returned response is marked changed when the color changed this frame.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let mut changed = false;
        let hex_id = Self::hex_field_id(ui);

        let inner = egui::Frame::default()
            .fill(self.rgb.into())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                egui::Frame::default()
                    .fill(Color32::WHITE)
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.visuals_mut().override_text_color = Some(Color32::BLACK);

                        ui.vertical_centered(|ui| {
                            ui.label("Current color values:");
                        });

                        egui::Grid::new("color_notes_grid")
                            .num_columns(2)
                            .striped(true)
                            .show(ui, |ui| {
                                for (label, value) in self.value.rows() {
                                    ui.label(label);
                                    ui.monospace(value);
                                    ui.end_row();
                                }
                            });

                        ui.add_space(20.0);

                        ui.horizontal(|ui| {
                            ui.label("Select a color:");
                            let mut srgb: [u8; 3] = self.rgb.into();
                            if ui.color_edit_button_srgb(&mut srgb).changed() {
                                self.set_rgb(srgb.into());
                                changed = true;
                            }
                        });

                        ui.horizontal(|ui| {
                            ui.label("Hex:");
                            let field = egui::TextEdit::singleline(&mut self.hex_input).id(hex_id);
                            if ui.add(field).changed() {
                                changed |= self.apply_hex_input();
                            }
                        });

                        if let Some(err) = &self.error {
                            let color = ui.visuals().error_fg_color;
                            ui.colored_label(color, err.to_string());
                        }
                    });
            });

        let mut response = inner.response;
        if changed {
            response.mark_changed();
        }
        response
    }
}
