#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release
// Entry point stays small: logger, config, localization, then the window.

use eframe::egui;

mod app;
mod localization;
mod logger;
mod parser;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();
    let cfg = app::config::current();
    if let Err(e) = localization::initialize_localization(cfg.language.as_deref()) {
        log::error!("Localization initialization failed: {e}");
    }
    log::info!(
        "startup: language={} api_url={}",
        localization::get_current_language(),
        cfg.api_url
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 720.0])
            .with_min_inner_size([360.0, 320.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(move |_cc| Box::new(app::HotelGridApp::new(cfg.api_url))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
