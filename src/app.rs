// Application state and per-frame drawing. The container owns the project
// list, the selection, the cover cache and the entrance clock; submodules own
// the grid, the fetch pipeline and the auxiliary windows.

use eframe::{egui, App};

use crate::animation::Entrance;
use crate::localization;
use crate::types::Project;
use crate::views;

mod about_ui;
mod fetch;
mod grid;
mod logs_ui;
mod projects;
mod runtime;
pub mod settings;
mod state;

pub use fetch::{CoverMsg, CoverSlot};
pub use runtime::{rt, RUNTIME};

use state::{ImagesState, SelectionState};

pub struct PortfolioApp {
    projects: Vec<Project>,
    selection: SelectionState,
    images: ImagesState,
    entrance: Entrance,
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self {
            projects: projects::load_projects(),
            selection: SelectionState::default(),
            images: ImagesState::new(),
            entrance: Entrance::new(),
        }
    }
}

impl PortfolioApp {
    /// Re-read the configured projects file. This is a remount of the grid:
    /// the selection resets and the entrance plays again. Textures stay
    /// cached, ids that survive the reload keep their covers.
    fn reload_projects(&mut self) {
        self.projects = projects::load_projects();
        self.selection.close();
        self.entrance.restart();
    }

    fn draw_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(crate::ui_constants::spacing::SMALL);
            ui.horizontal(|ui| {
                ui.heading(localization::translate("header-title"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(localization::translate("header-settings"))
                        .clicked()
                    {
                        settings::open_settings();
                    }
                    if ui.button(localization::translate("header-logs")).clicked() {
                        logs_ui::open_logs();
                    }
                    if ui
                        .button(localization::translate("header-about"))
                        .clicked()
                    {
                        about_ui::open_about();
                    }
                });
            });
            ui.add_space(crate::ui_constants::spacing::SMALL);
        });
    }
}

impl App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fresh log records mean the logs window may need a repaint.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        if settings::take_projects_reload_flag() {
            self.reload_projects();
        }

        self.poll_incoming(ctx);
        self.schedule_cover_downloads(ctx);

        self.draw_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(crate::ui_constants::spacing::LARGE);
                    self.draw_projects_grid(ui, ctx);
                });
        });

        // The selection mounts the modal; mounting is the open signal.
        if let Some(project) = self.selection.selected().cloned() {
            let resp = {
                let cover = self.cover_for(&project);
                views::modal::draw_project_modal(ctx, &project, &cover)
            };
            if resp.close_requested {
                self.selection.close();
            }
        }

        logs_ui::draw_logs_viewport(ctx);
        about_ui::draw_about_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}
