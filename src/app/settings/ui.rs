// Settings window in its own OS viewport. Inputs are staged in globals and
// only written back to the store on Apply.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use eframe::egui;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use super::store::{save_settings_to_disk, APP_SETTINGS};
use crate::localization::{self, SupportedLang};

lazy_static! {
    pub static ref SETTINGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref PROJECTS_FILE_INPUT: RwLock<String> = RwLock::new(String::new());
    static ref LANGUAGE_INPUT: RwLock<Option<SupportedLang>> = RwLock::new(None);
}

static PROJECTS_DIRTY: AtomicBool = AtomicBool::new(false);

pub fn open_settings() {
    {
        let s = APP_SETTINGS.read().unwrap();
        *PROJECTS_FILE_INPUT.write().unwrap() = s
            .projects_file
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        *LANGUAGE_INPUT.write().unwrap() = s.language;
    }
    *SETTINGS_OPEN.write().unwrap() = true;
}

/// True once after Apply changed the projects file; the app reloads the grid.
pub fn take_projects_reload_flag() -> bool {
    PROJECTS_DIRTY.swap(false, Ordering::Relaxed)
}

fn apply_staged() {
    let path_input = PROJECTS_FILE_INPUT.read().unwrap().trim().to_string();
    let language = *LANGUAGE_INPUT.read().unwrap();

    let projects_changed = {
        let mut s = APP_SETTINGS.write().unwrap();
        let new_path = if path_input.is_empty() {
            None
        } else {
            Some(std::path::PathBuf::from(path_input))
        };
        let changed = s.projects_file != new_path;
        s.projects_file = new_path;
        s.language = language;
        changed
    };
    save_settings_to_disk();
    localization::set_language(language);
    if projects_changed {
        PROJECTS_DIRTY.store(true, Ordering::Relaxed);
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if !*SETTINGS_OPEN.read().unwrap() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_immediate(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(localization::translate("settings-window-title"))
            .with_inner_size([460.0, 220.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                *SETTINGS_OPEN.write().unwrap() = false;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(crate::ui_constants::spacing::SMALL);

                ui.horizontal(|ui| {
                    ui.label(localization::translate("settings-language"));
                    let mut staged = *LANGUAGE_INPUT.read().unwrap();
                    let selected = match staged {
                        None => localization::translate("settings-language-auto"),
                        Some(lang) => lang.to_string(),
                    };
                    egui::ComboBox::from_id_source("settings_language")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut staged,
                                None,
                                localization::translate("settings-language-auto"),
                            );
                            for lang in SupportedLang::iter() {
                                ui.selectable_value(&mut staged, Some(lang), lang.to_string());
                            }
                        });
                    *LANGUAGE_INPUT.write().unwrap() = staged;
                });

                ui.add_space(crate::ui_constants::spacing::MEDIUM);

                ui.label(localization::translate("settings-projects-file"));
                {
                    let mut input = PROJECTS_FILE_INPUT.write().unwrap();
                    ui.add(
                        egui::TextEdit::singleline(&mut *input)
                            .desired_width(f32::INFINITY)
                            .hint_text("portfolio.json"),
                    );
                }
                ui.label(
                    egui::RichText::new(localization::translate("settings-projects-file-hint"))
                        .small()
                        .color(egui::Color32::from_gray(150)),
                );

                ui.add_space(crate::ui_constants::spacing::LARGE);

                ui.horizontal(|ui| {
                    if ui
                        .button(localization::translate("settings-apply"))
                        .clicked()
                    {
                        apply_staged();
                    }
                    if ui
                        .button(localization::translate("settings-close"))
                        .clicked()
                    {
                        *SETTINGS_OPEN.write().unwrap() = false;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        },
    );
}
