use eframe::egui::{self, RichText};

use crate::data::features::DiagramSeries;
use crate::theme;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The viewer window: one black panel holding the title and the diagram.
/// The series is derived once at startup and never changes.
pub struct HrDiagramApp {
    series: DiagramSeries,
}

impl HrDiagramApp {
    pub fn new(series: DiagramSeries) -> Self {
        Self { series }
    }
}

impl eframe::App for HrDiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BACKGROUND).inner_margin(12))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new("H-R Diagram")
                            .color(theme::ACCENT)
                            .size(theme::TITLE_SIZE),
                    );
                });
                ui.add_space(8.0);

                plot::hr_scatter(ui, &self.series);
            });
    }
}
