// Grid rendering: column math, virtualized rows and per-card wiring
// (entrance pose, hover, click routing) split out of app.rs.

use eframe::egui;

use crate::ui_constants::{card, CARD_GAP};
use crate::views::cards::{project_card, CARD_WIDTH};

/// Columns that fit `avail_w`, never less than one.
pub(super) fn compute_columns(avail_w: f32, card_w: f32, gap: f32) -> usize {
    let cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
    cols.max(1)
}

/// Left padding that centers `cols` cards in `avail_w`.
pub(super) fn row_left_pad(avail_w: f32, cols: usize, card_w: f32, gap: f32) -> f32 {
    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
    ((avail_w - row_w) / 2.0).max(0.0)
}

impl super::PortfolioApp {
    /// Stable card height for the fixed layout in `project_card`:
    /// frame margins, 16:9 cover, post-cover gap, one title line, a small
    /// gap, and the two-line description slot.
    fn card_height(&self, ui: &egui::Ui, card_w: f32) -> f32 {
        let heading_h = ui.text_style_height(&egui::TextStyle::Heading);
        let body_h = ui.text_style_height(&egui::TextStyle::Body);
        let inner_w = (card_w - card::INNER_MARGIN * 2.0).max(1.0);
        let cover_h = inner_w * 9.0 / 16.0;
        card::INNER_MARGIN * 2.0
            + cover_h
            + card::POST_COVER_GAP
            + heading_h
            + crate::ui_constants::spacing::SMALL
            + body_h * card::DESCRIPTION_LINES as f32
    }

    pub(super) fn draw_projects_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.entrance.ensure_started();
        if !self.entrance.is_settled(self.projects.len()) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }

        let total_items = self.projects.len();
        if total_items == 0 {
            return;
        }

        let avail_w = ui.available_width().floor();
        let card_w = CARD_WIDTH;
        let gap = CARD_GAP;
        let cols = compute_columns(avail_w, card_w, gap);
        let left_pad = row_left_pad(avail_w, cols, card_w, gap);
        let total_rows = (total_items + cols - 1) / cols;

        let card_h = self.card_height(ui, card_w);
        let row_h = card_h + gap;

        // Virtualized rows: only draw what intersects the visible viewport,
        // with a little overscan for smooth scrolling.
        let start_y = ui.cursor().min.y;
        let clip = ui.clip_rect();

        let mut first_row = ((clip.top() - start_y) / row_h).floor() as isize;
        let mut last_row = ((clip.bottom() - start_y) / row_h).ceil() as isize;
        let overscan: isize = 2;
        first_row = (first_row - overscan).max(0);
        last_row = (last_row + overscan).min(total_rows as isize);

        let start_row = first_row as usize;
        let end_row = last_row as usize;

        let top_skip = (start_row as f32) * row_h;
        if top_skip > 0.0 {
            ui.add_space(top_skip);
        }

        for r in start_row..end_row {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                let base = r * cols;
                for c in 0..cols {
                    let idx = base + c;
                    if idx < total_items {
                        self.on_card_ui(ui, idx, card_w, card_h, gap, c, cols);
                    }
                }
            });
            // Keep spacing consistent on the last row so total height is stable.
            ui.add_space(gap);
        }

        let rendered_rows = end_row.saturating_sub(start_row) as f32;
        let total_h = (total_rows as f32) * row_h;
        let used_h = top_skip + rendered_rows * row_h;
        let bottom_skip = (total_h - used_h).max(0.0);
        if bottom_skip > 0.0 {
            ui.add_space(bottom_skip);
        }
    }

    fn on_card_ui(
        &mut self,
        ui: &mut egui::Ui,
        idx: usize,
        card_w: f32,
        card_h: f32,
        gap: f32,
        c: usize,
        cols: usize,
    ) {
        let project = self.projects[idx].clone();
        let pose = self.entrance.card_pose(idx);
        let modal_open = self.selection.is_open();

        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            let (cell_rect, cell_resp) =
                ui.allocate_exact_size(egui::vec2(card_w, card_h), egui::Sense::hover());
            let hovered = !modal_open && ui.rect_contains_pointer(cell_rect);
            if hovered {
                let _ = cell_resp.on_hover_cursor(egui::CursorIcon::PointingHand);
            }

            // The rise offset is visual only: the cell keeps its place in the
            // flow while the card content is drawn shifted and veiled.
            let draw_rect = cell_rect.translate(egui::vec2(0.0, pose.rise));
            let mut card_ui = ui.child_ui(draw_rect, egui::Layout::top_down(egui::Align::Min));
            let card_resp = {
                let cover = self.cover_for(&project);
                project_card(&mut card_ui, &project, card_w, &cover, hovered)
            };

            if pose.alpha < 1.0 {
                let veil_rect = egui::Rect::from_min_max(
                    cell_rect.min,
                    cell_rect.max + egui::vec2(0.0, pose.rise),
                );
                let bg = ui.visuals().panel_fill;
                let veil_a = ((1.0 - pose.alpha) * 255.0) as u8;
                ui.painter().rect_filled(
                    veil_rect,
                    egui::Rounding::same(card::ROUNDING),
                    egui::Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), veil_a),
                );
            }

            // Body click selects; link clicks were already consumed by the
            // pills (the browser opened) and must not also open the modal.
            let body_clicked = hovered
                && !card_resp.link_hit
                && ui.input(|i| {
                    i.pointer.primary_clicked()
                        && i.pointer
                            .interact_pos()
                            .map_or(false, |pos| cell_rect.contains(pos))
                });
            if body_clicked {
                log::debug!("card selected: id={}", project.id);
                self.selection.open(project);
            }
        });
        if c + 1 < cols {
            ui.add_space(gap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_still_gets_one_column() {
        assert_eq!(compute_columns(10.0, 320.0, 16.0), 1);
        assert_eq!(compute_columns(0.0, 320.0, 16.0), 1);
    }

    #[test]
    fn columns_match_exact_fits() {
        // Three cards plus two gaps fit exactly.
        let w = 3.0 * 320.0 + 2.0 * 16.0;
        assert_eq!(compute_columns(w, 320.0, 16.0), 3);
        // One pixel less loses a column.
        assert_eq!(compute_columns(w - 1.0, 320.0, 16.0), 2);
    }

    #[test]
    fn left_pad_centers_the_row() {
        let avail = 1000.0;
        let cols = compute_columns(avail, 320.0, 16.0);
        let pad = row_left_pad(avail, cols, 320.0, 16.0);
        let row_w = cols as f32 * 320.0 + (cols - 1) as f32 * 16.0;
        assert!(pad >= 0.0);
        assert!((pad * 2.0 + row_w - avail).abs() <= 1.0);
    }

    #[test]
    fn row_never_overflows_available_width() {
        for avail in [300, 640, 991, 1280, 2560] {
            let avail = avail as f32;
            let cols = compute_columns(avail, 320.0, 16.0);
            let row_w = cols as f32 * 320.0 + (cols - 1) as f32 * 16.0;
            assert!(row_w <= avail.max(320.0));
        }
    }
}
