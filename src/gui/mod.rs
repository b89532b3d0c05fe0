pub mod app;
pub mod search;

use crate::config::AppConfig;
use crate::Catalog;

/// Entry point: launch the native GUI window
pub fn run(catalog: Catalog, config: &AppConfig) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Hilite - Search")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        "Hilite",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::HiliteApp::new(cc, catalog, &config)))),
    )
    .map_err(|e| crate::HiliteError::Gui(e.to_string()))
}
