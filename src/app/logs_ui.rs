// Logs window (separate OS viewport) over the in-app logger buffer.

use std::sync::RwLock;

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;

use crate::localization;

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn open_logs() {
    *LOGS_OPEN.write().unwrap() = true;
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    if !*LOGS_OPEN.read().unwrap() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("logs_window");
    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(localization::translate("logs-window-title"))
            .with_inner_size([800.0, 500.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                *LOGS_OPEN.write().unwrap() = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(localization::translate("logs-clear")).clicked() {
                        crate::logger::clear();
                    }
                    if ui.button(localization::translate("logs-copy")).clicked() {
                        let text = crate::logger::all_lines().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    let mut autoscroll = *AUTOSCROLL.read().unwrap();
                    if ui
                        .checkbox(&mut autoscroll, localization::translate("logs-autoscroll"))
                        .changed()
                    {
                        *AUTOSCROLL.write().unwrap() = autoscroll;
                    }
                    ui.separator();
                    ui.label(localization::translate_with(
                        "logs-line-count",
                        &[("count", crate::logger::len().to_string())],
                    ));
                });
                ui.separator();

                let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
                if *AUTOSCROLL.read().unwrap() {
                    scroll = scroll.stick_to_bottom(true);
                }

                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                // One layout job per visible window keeps the widget count flat.
                scroll.show_rows(ui, row_height, total, |ui, row_range| {
                    let mut job = egui::text::LayoutJob::default();
                    crate::logger::visit_range(row_range.start, row_range.end, |e| {
                        let mut fmt = egui::TextFormat {
                            color: level_color(e.level),
                            ..Default::default()
                        };
                        fmt.font_id = egui::FontId::monospace(12.0);
                        job.append(
                            &format!("[{:>5}] {}: {}\n", e.level, e.target, e.msg),
                            0.0,
                            fmt,
                        );
                    });
                    ui.label(job);
                });
            });
        },
    );
}

fn level_color(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
