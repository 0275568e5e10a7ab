use eframe::{App, Frame, egui};
use egui_color_notes::ColorPicker;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Default)]
struct PickerDemo {
    picker: ColorPicker,
}

impl App for PickerDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    if self.picker.ui(ui).changed() {
                        // Copyable summary of the new color
                        println!("{}\n", self.picker.value());
                    }
                });
            });
    }
}

fn main() -> Result<(), eframe::Error> {
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("egui_color_notes", LevelFilter::TRACE);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "egui_color_notes Demo",
        options,
        Box::new(|_cc| Ok(Box::new(PickerDemo::default()))),
    )
}
