// Project list input: the desktop analog of the original component's optional
// prop. A configured JSON file supplies the list; no file means the built-in
// samples.

use std::path::Path;

use crate::types::{resolve_projects, Project};

pub fn load_list(path: &Path) -> std::io::Result<Vec<Project>> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Resolve the project list for the grid. A configured file is used verbatim
/// (even when it holds an empty array); an unreadable or malformed file is
/// logged and treated like no file at all.
pub fn load_projects() -> Vec<Project> {
    let path = super::settings::with_settings(|s| s.projects_file.clone());
    let supplied = match path {
        Some(path) => match load_list(&path) {
            Ok(list) => {
                log::info!(
                    "loaded {} project(s) from {}",
                    list.len(),
                    path.to_string_lossy()
                );
                Some(list)
            }
            Err(e) => {
                log::error!(
                    "cannot load projects from {}: {}; falling back to built-in samples",
                    path.to_string_lossy(),
                    e
                );
                None
            }
        },
        None => None,
    };
    resolve_projects(supplied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_json(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("showcase_{}_{}.json", std::process::id(), name));
        std::fs::write(&path, contents).unwrap_or_else(|e| panic!("write {:?}: {}", path, e));
        path
    }

    #[test]
    fn reads_a_camel_case_array() {
        let path = temp_json(
            "list",
            r#"[{
                "id": "a",
                "title": "A",
                "description": "first",
                "image": "https://example.com/a.png",
                "technologies": ["Rust"],
                "liveUrl": "https://a.example.com",
                "githubUrl": "https://github.com/example/a"
            }]"#,
        );
        let list = load_list(&path).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].github_url, "https://github.com/example/a");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn empty_array_is_a_valid_list() {
        let path = temp_json("empty", "[]");
        assert!(load_list(&path).unwrap().is_empty());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = temp_json("bad", "{ not json");
        assert!(load_list(&path).is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("showcase_definitely_missing.json");
        assert!(load_list(&path).is_err());
    }
}
