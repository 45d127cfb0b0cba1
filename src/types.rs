// Core data model: the project record shown by the grid and the modal.

use serde::{Deserialize, Serialize};

/// One portfolio entry. Field names follow the conventional portfolio JSON
/// shape (camelCase) so an external projects file can be dropped in as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

impl Project {
    fn sample(
        id: &str,
        title: &str,
        description: &str,
        image: &str,
        technologies: &[&str],
        live_url: &str,
        github_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
            live_url: live_url.to_string(),
            github_url: github_url.to_string(),
        }
    }
}

/// Built-in sample entries shown when no projects file is configured.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::sample(
            "1",
            "E-Commerce Platform",
            "A full-stack e-commerce solution with real-time inventory management.",
            "https://images.unsplash.com/photo-1517694712202-14dd9538aa97",
            &["React", "Node.js", "MongoDB"],
            "https://example.com",
            "https://github.com/example/ecommerce",
        ),
        Project::sample(
            "2",
            "Social Media Dashboard",
            "Analytics dashboard for social media management.",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f",
            &["Vue.js", "Express", "PostgreSQL"],
            "https://example.com",
            "https://github.com/example/dashboard",
        ),
        Project::sample(
            "3",
            "AI Chat Application",
            "Real-time chat application with AI-powered responses.",
            "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5",
            &["TypeScript", "OpenAI", "WebSocket"],
            "https://example.com",
            "https://github.com/example/ai-chat",
        ),
    ]
}

/// Resolution rule for the grid input: an omitted list means the built-in
/// samples, a supplied list is taken verbatim. An empty supplied list stays
/// empty; only omission falls back.
pub fn resolve_projects(supplied: Option<Vec<Project>>) -> Vec<Project> {
    match supplied {
        Some(list) => list,
        None => default_projects(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_three_known_titles_in_order() {
        let list = default_projects();
        let titles: Vec<&str> = list.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "E-Commerce Platform",
                "Social Media Dashboard",
                "AI Chat Application"
            ]
        );
    }

    #[test]
    fn default_ids_are_unique() {
        let list = default_projects();
        let mut ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn omission_falls_back_to_samples() {
        assert_eq!(resolve_projects(None), default_projects());
    }

    #[test]
    fn supplied_list_is_taken_verbatim() {
        let one = vec![Project::sample(
            "x",
            "X",
            "d",
            "https://example.com/x.png",
            &["Rust"],
            "https://example.com",
            "https://github.com/example/x",
        )];
        assert_eq!(resolve_projects(Some(one.clone())), one);
    }

    #[test]
    fn supplied_empty_list_stays_empty() {
        assert!(resolve_projects(Some(Vec::new())).is_empty());
    }

    #[test]
    fn record_deserializes_from_camel_case() {
        let json = r#"{
            "id": "42",
            "title": "Demo",
            "description": "A demo.",
            "image": "https://example.com/demo.png",
            "liveUrl": "https://demo.example.com",
            "githubUrl": "https://github.com/example/demo"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "42");
        assert_eq!(p.live_url, "https://demo.example.com");
        assert!(p.technologies.is_empty());
    }
}
