// Settings module split: store (data & persistence), helpers (OS utils),
// ui (egui viewport). This file aggregates submodules and re-exports the
// public API.

pub mod helpers;
pub mod store;
pub mod ui;

pub use helpers::open_in_browser;
pub use store::{load_settings_from_disk, save_settings_to_disk, AppSettings, APP_SETTINGS};
pub use ui::{draw_settings_viewport, open_settings, take_projects_reload_flag};

/// Read settings through a closure without spelling the lock dance out.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap();
    f(&st)
}
