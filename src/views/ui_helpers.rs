use eframe::egui;

/// Clamp `text` to at most `max_lines` wrapped rows at `wrap_width`, replacing
/// the tail with an ellipsis when it does not fit.
pub fn clamp_to_lines(ui: &egui::Ui, text: &str, wrap_width: f32, max_lines: usize) -> String {
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let galley = ui.fonts(|f| {
        f.layout(
            text.to_owned(),
            font_id,
            egui::Color32::PLACEHOLDER,
            wrap_width,
        )
    });
    if galley.rows.len() <= max_lines {
        return text.to_owned();
    }
    let keep: usize = galley
        .rows
        .iter()
        .take(max_lines)
        .map(|r| r.char_count_including_newline())
        .sum();
    cut_with_ellipsis(text, keep)
}

/// Cut `text` to `keep_chars` characters, reserving room for the ellipsis.
pub fn cut_with_ellipsis(text: &str, keep_chars: usize) -> String {
    let budget = keep_chars.saturating_sub(2);
    let cut: String = text.chars().take(budget).collect();
    format!("{}…", cut.trim_end())
}

/// Single-line layout width of `text` in the given style, for hand-placed
/// pills and badges.
pub fn text_width(ui: &egui::Ui, text: &str, style: egui::TextStyle) -> f32 {
    let font_id = style.resolve(ui.style());
    ui.fonts(|f| {
        f.layout_no_wrap(text.to_owned(), font_id, egui::Color32::PLACEHOLDER)
            .rect
            .width()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_appends_ellipsis() {
        assert_eq!(cut_with_ellipsis("hello world", 7), "hello…");
    }

    #[test]
    fn cut_never_exceeds_budget() {
        let s = cut_with_ellipsis("abcdefghij", 6);
        assert!(s.chars().count() <= 6 - 1);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn cut_trims_trailing_whitespace_before_ellipsis() {
        assert_eq!(cut_with_ellipsis("ab   cdef", 7), "ab…");
    }

    #[test]
    fn tiny_budget_degenerates_to_bare_ellipsis() {
        assert_eq!(cut_with_ellipsis("abc", 0), "…");
        assert_eq!(cut_with_ellipsis("abc", 2), "…");
    }
}
