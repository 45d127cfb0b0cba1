use eframe::egui::{self, Color32, RichText, Rounding, Sense, Stroke, Vec2};

use super::cover_hover::draw_cover;
use crate::app::CoverSlot;
use crate::types::Project;
use crate::ui_constants::card;
use crate::views::ui_helpers::clamp_to_lines;

/// Interaction summary returned by `project_card` so the caller can decide
/// whether the click was a body click (select) or a link click (navigate).
pub struct CardResponse {
    pub link_hit: bool,
}

/// Fixed-width project tile: 16:9 cover with the hover link overlay, one-line
/// title, two-line description. Strictly constrained to `width` so rows form
/// a proper grid; the caller owns hover detection and click routing.
pub fn project_card(
    ui: &mut egui::Ui,
    project: &Project,
    width: f32,
    cover: &CoverSlot<'_>,
    hovered: bool,
) -> CardResponse {
    let fill = Color32::from_rgb(36, 36, 36);
    let stroke = if hovered {
        Stroke::new(1.0, Color32::from_rgb(96, 96, 96))
    } else {
        Stroke::new(1.0, Color32::from_rgb(64, 64, 64))
    };

    ui.set_min_width(width);
    ui.set_max_width(width);

    let mut link_hit = false;

    egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::symmetric(card::INNER_MARGIN, card::INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - card::INNER_MARGIN * 2.0;
            ui.set_width(inner_w);

            let cover_resp = draw_cover(ui, project, inner_w, cover, hovered);
            link_hit |= cover_resp.link_hit;

            ui.add_space(card::POST_COVER_GAP);
            ui.add(
                egui::Label::new(
                    RichText::new(&project.title)
                        .heading()
                        .color(Color32::from_rgb(230, 230, 230)),
                )
                .truncate(true)
                .wrap(false),
            );

            ui.add_space(crate::ui_constants::spacing::SMALL);

            // Two-line clamp with a fixed slot so every card has the same
            // height regardless of description length.
            let body_h = ui.text_style_height(&egui::TextStyle::Body);
            let desc_h = body_h * card::DESCRIPTION_LINES as f32;
            let (desc_rect, _) =
                ui.allocate_exact_size(Vec2::new(inner_w, desc_h), Sense::hover());
            let clamped = clamp_to_lines(ui, &project.description, inner_w, card::DESCRIPTION_LINES);
            let font_id = egui::TextStyle::Body.resolve(ui.style());
            let galley = ui.fonts(|f| {
                f.layout(clamped, font_id, Color32::from_rgb(170, 170, 170), inner_w)
            });
            ui.painter_at(desc_rect)
                .galley(desc_rect.min, galley, Color32::from_rgb(170, 170, 170));
        });

    CardResponse { link_hit }
}
