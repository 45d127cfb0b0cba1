// Settings store: data type, global state and JSON persistence next to the
// executable, same scheme as the rest of the on-disk state.

use std::path::PathBuf;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::localization::SupportedLang;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Optional JSON file with the project list; `None` shows the built-in
    /// samples.
    #[serde(default)]
    pub projects_file: Option<PathBuf>,
    /// UI language override; `None` follows the system locale.
    #[serde(default)]
    pub language: Option<SupportedLang>,
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    // Working directory keeps the app self-contained, no extra dirs crate.
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            *APP_SETTINGS.write().unwrap() = s;
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = APP_SETTINGS.read().unwrap().clone();
    if let Err(e) = st.save_to_file(&path) {
        log::error!(
            "Failed to save settings to {}: {}",
            path.to_string_lossy(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "showcase_settings_{}.json",
            std::process::id()
        ));
        let s = AppSettings {
            projects_file: Some(PathBuf::from("portfolio.json")),
            language: Some(SupportedLang::Russian),
        };
        s.save_to_file(&path).unwrap();
        let loaded = AppSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.projects_file, s.projects_file);
        assert_eq!(loaded.language, Some(SupportedLang::Russian));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: AppSettings = serde_json::from_str("{}").unwrap();
        assert!(s.projects_file.is_none());
        assert!(s.language.is_none());
    }
}
