// About window (separate OS viewport) with a link to the repository.

use std::sync::RwLock;

use eframe::egui;
use lazy_static::lazy_static;

use crate::localization;

const REPO_URL: &str = "https://github.com/example/portfolio-showcase";

lazy_static! {
    static ref ABOUT_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_about() {
    *ABOUT_OPEN.write().unwrap() = true;
}

pub fn draw_about_viewport(ctx: &egui::Context) {
    if !*ABOUT_OPEN.read().unwrap() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("about_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(localization::translate("about-window-title"))
            .with_inner_size([360.0, 160.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                *ABOUT_OPEN.write().unwrap() = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(crate::ui_constants::spacing::LARGE);
                ui.vertical_centered(|ui| {
                    ui.heading(localization::translate("about-app-name"));
                    ui.add_space(crate::ui_constants::spacing::SMALL);
                    ui.label(localization::translate_with(
                        "about-version",
                        &[("version", env!("CARGO_PKG_VERSION").to_string())],
                    ));
                    ui.add_space(crate::ui_constants::spacing::MEDIUM);
                    if ui
                        .link(localization::translate("about-source"))
                        .clicked()
                    {
                        super::settings::open_in_browser(REPO_URL);
                    }
                });
            });
        },
    );
}
