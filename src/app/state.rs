// App state grouped into small structs so app.rs stays readable.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use eframe::egui;

use super::fetch::CoverMsg;
use crate::types::Project;

/// Which project the detail modal shows. `None` means the modal is closed.
/// Set on card click, cleared when the modal reports a close request; picking
/// another card while open replaces the shown project without an intermediate
/// closed frame.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<Project>,
}

impl SelectionState {
    pub fn open(&mut self, project: Project) {
        self.selected = Some(project);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// Cover textures by project id, plus in-flight and failed sets so every URL
/// is fetched at most once. A failed id stays parked and renders as the
/// broken-image tile.
pub struct ImagesState {
    pub covers: HashMap<String, egui::TextureHandle>,
    pub covers_loading: HashSet<String>,
    pub covers_failed: HashSet<String>,
    pub cover_tx: mpsc::Sender<CoverMsg>,
    pub cover_rx: mpsc::Receiver<CoverMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (cover_tx, cover_rx) = mpsc::channel();
        Self {
            covers: HashMap::new(),
            covers_loading: HashSet::new(),
            covers_failed: HashSet::new(),
            cover_tx,
            cover_rx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::default_projects;

    #[test]
    fn selection_starts_closed() {
        let sel = SelectionState::default();
        assert!(!sel.is_open());
        assert!(sel.selected().is_none());
    }

    #[test]
    fn click_opens_and_close_clears() {
        let projects = default_projects();
        let mut sel = SelectionState::default();

        sel.open(projects[0].clone());
        assert!(sel.is_open());
        assert_eq!(sel.selected().unwrap().id, projects[0].id);

        sel.close();
        assert!(!sel.is_open());
    }

    #[test]
    fn selecting_while_open_replaces_directly() {
        let projects = default_projects();
        let mut sel = SelectionState::default();

        sel.open(projects[0].clone());
        sel.open(projects[1].clone());
        // Still open the whole time, now on the second record.
        assert!(sel.is_open());
        assert_eq!(sel.selected().unwrap().id, projects[1].id);
    }

    #[test]
    fn last_click_wins() {
        let projects = default_projects();
        let mut sel = SelectionState::default();
        for p in &projects {
            sel.open(p.clone());
        }
        assert_eq!(sel.selected().unwrap().id, projects.last().unwrap().id);
    }
}
