// Detail modal: dimming backdrop plus a centered dialog. Mounting the modal
// is the open signal; it only reports the close request, the app owns the
// selection. Backdrop and dialog are sibling areas so the dialog receives
// pointer input ahead of the backdrop.

use eframe::egui::{self, Color32, Rounding, Sense, Stroke};

use crate::app::settings::open_in_browser;
use crate::app::CoverSlot;
use crate::localization;
use crate::types::Project;
use crate::ui_constants::{modal, spacing};
use crate::views::cards::items::paint_cover;

pub struct ModalResponse {
    pub close_requested: bool,
}

pub fn draw_project_modal(
    ctx: &egui::Context,
    project: &Project,
    cover: &CoverSlot<'_>,
) -> ModalResponse {
    let mut close = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("project_modal_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let resp = ui.allocate_rect(screen_rect, Sense::click());
            ui.painter().rect_filled(
                screen_rect,
                Rounding::ZERO,
                Color32::from_black_alpha(modal::BACKDROP_ALPHA),
            );
            if resp.clicked() {
                close = true;
            }
        });

    egui::Area::new(egui::Id::new("project_modal"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_rgb(28, 28, 28))
                .stroke(Stroke::new(1.0, Color32::from_gray(60)))
                .rounding(Rounding::same(crate::ui_constants::card::ROUNDING))
                .inner_margin(spacing::LARGE)
                .show(ui, |ui| {
                    ui.set_width(modal::WIDTH);

                    ui.horizontal(|ui| {
                        ui.heading(
                            egui::RichText::new(&project.title)
                                .color(Color32::from_rgb(235, 235, 235)),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let btn = egui::Button::new("✕").frame(false);
                                if ui
                                    .add(btn)
                                    .on_hover_text(localization::translate("modal-close"))
                                    .clicked()
                                {
                                    close = true;
                                }
                            },
                        );
                    });

                    ui.add_space(spacing::MEDIUM);

                    let cover_h = modal::WIDTH * 9.0 / 16.0;
                    let (cover_rect, _) = ui.allocate_exact_size(
                        egui::Vec2::new(modal::WIDTH, cover_h),
                        Sense::hover(),
                    );
                    paint_cover(ui, cover_rect, cover, 0.0);

                    if !project.technologies.is_empty() {
                        ui.add_space(spacing::MEDIUM);
                        ui.label(
                            egui::RichText::new(localization::translate("modal-technologies"))
                                .small()
                                .color(Color32::from_gray(150)),
                        );
                        ui.add_space(spacing::SMALL);
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = spacing::MEDIUM;
                            for tech in &project.technologies {
                                tech_chip(ui, tech);
                            }
                        });
                    }

                    ui.add_space(spacing::MEDIUM);
                    ui.label(
                        egui::RichText::new(&project.description)
                            .color(Color32::from_rgb(200, 200, 200)),
                    );

                    ui.add_space(spacing::LARGE);
                    ui.horizontal(|ui| {
                        if ui
                            .button(localization::translate("modal-open-live"))
                            .clicked()
                        {
                            open_in_browser(&project.live_url);
                        }
                        if ui
                            .button(localization::translate("modal-open-code"))
                            .clicked()
                        {
                            open_in_browser(&project.github_url);
                        }
                    });
                });
        });

    ModalResponse {
        close_requested: close,
    }
}

fn tech_chip(ui: &mut egui::Ui, label: &str) {
    egui::Frame::none()
        .fill(Color32::from_rgb(54, 54, 54))
        .rounding(Rounding::same(crate::ui_constants::card::PILL_ROUNDING))
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .small()
                    .color(Color32::from_rgb(200, 200, 200)),
            );
        });
}
