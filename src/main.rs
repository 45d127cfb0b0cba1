#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Entry point stays minimal: window configuration and app startup. All
// application logic lives in the app module.

use eframe::{egui, egui_wgpu::WgpuConfiguration, wgpu::PresentMode};

mod animation;
mod app;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    // In-app GUI logger (optionally mirrored to stderr)
    logger::init();
    app::settings::load_settings_from_disk();

    let preferred_lang = app::settings::with_settings(|s| s.language);
    if let Err(e) = localization::initialize(preferred_lang) {
        log::error!("Localization initialization failed: {e}");
    }

    // Wgpu with vsync off keeps hover/entrance animation latency low.
    let wgpu_options = WgpuConfiguration {
        present_mode: PresentMode::AutoNoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        vsync: false,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 760.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(|_cc| Box::new(app::PortfolioApp::default())),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
