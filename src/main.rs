use anyhow::{anyhow, Result};
use eframe::egui;

use hr_diagram::data::{features, loader};
use hr_diagram::HrDiagramApp;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = loader::load_default_catalog()?;
    let series = features::diagram_series(&catalog);
    log::info!(
        "loaded {} stars, {} plottable",
        series.len(),
        series.plottable()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 800.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the viewer window is closed.
    eframe::run_native(
        "H-R Diagram",
        options,
        Box::new(|_cc| Ok(Box::new(HrDiagramApp::new(series)))),
    )
    .map_err(|e| anyhow!("starting viewer: {e}"))
}
