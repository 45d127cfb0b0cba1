use eframe::egui::{self, Color32, Rounding, Sense, Stroke, Vec2};

use crate::app::settings::open_in_browser;
use crate::app::CoverSlot;
use crate::localization;
use crate::types::Project;
use crate::ui_constants::card;
use crate::views::ui_helpers::text_width;

/// What happened inside the cover area this frame.
pub struct CoverResponse {
    /// Pointer is over (or clicked) one of the link pills; the caller must not
    /// treat this frame's click as a card-body click.
    pub link_hit: bool,
}

/// Draws the 16:9 cover across `inner_w` plus the hover overlay carrying the
/// two outbound link pills. The cover zooms slightly while the card is
/// hovered; link pills open the browser and swallow the click.
pub fn draw_cover(
    ui: &mut egui::Ui,
    project: &Project,
    inner_w: f32,
    cover: &CoverSlot<'_>,
    card_hovered: bool,
) -> CoverResponse {
    let cover_h = inner_w * 9.0 / 16.0;
    let (cover_rect, _) = ui.allocate_exact_size(Vec2::new(inner_w, cover_h), Sense::hover());

    let hover_t = ui
        .ctx()
        .animate_bool(egui::Id::new(("cover_hover", &project.id)), card_hovered);

    paint_cover(ui, cover_rect, cover, hover_t);

    let mut link_hit = false;
    if card_hovered || hover_t > 0.0 {
        // Dark veil between the image and the pills.
        let veil_alpha = (hover_t * card::HOVER_VEIL_OPACITY * 255.0) as u8;
        ui.painter().rect_filled(
            cover_rect,
            Rounding::same(card::ROUNDING),
            Color32::from_black_alpha(veil_alpha),
        );

        let live_label = localization::translate("card-live-link");
        let code_label = localization::translate("card-code-link");

        let pill_h = 22.0f32;
        let pad_x = 12.0f32;
        let gap = crate::ui_constants::spacing::LARGE;
        let live_w = text_width(ui, &live_label, egui::TextStyle::Small) + pad_x * 2.0;
        let code_w = text_width(ui, &code_label, egui::TextStyle::Small) + pad_x * 2.0;

        let total_w = live_w + gap + code_w;
        let origin = egui::pos2(
            cover_rect.center().x - total_w / 2.0,
            cover_rect.center().y - pill_h / 2.0,
        );
        let live_rect =
            egui::Rect::from_min_size(origin, Vec2::new(live_w, pill_h));
        let code_rect = egui::Rect::from_min_size(
            egui::pos2(origin.x + live_w + gap, origin.y),
            Vec2::new(code_w, pill_h),
        );

        // Pills only catch input while the overlay is actually up.
        if card_hovered {
            link_hit |= link_pill(
                ui,
                live_rect,
                ("live_link", &project.id),
                &live_label,
                &project.live_url,
                hover_t,
            );
            link_hit |= link_pill(
                ui,
                code_rect,
                ("code_link", &project.id),
                &code_label,
                &project.github_url,
                hover_t,
            );
        }
    }

    CoverResponse { link_hit }
}

/// Paints whatever the cover slot holds: the texture (zoomed by `hover_t`),
/// a loading fill, or the broken-image tile.
pub fn paint_cover(ui: &egui::Ui, rect: egui::Rect, cover: &CoverSlot<'_>, hover_t: f32) {
    let p = ui.painter_at(rect);
    match cover {
        CoverSlot::Ready(tex) => {
            let zoom = 1.0 + (card::HOVER_ZOOM - 1.0) * hover_t;
            let inset = (1.0 - 1.0 / zoom) / 2.0;
            let uv = egui::Rect::from_min_max(
                egui::pos2(inset, inset),
                egui::pos2(1.0 - inset, 1.0 - inset),
            );
            p.image(tex.id(), rect, uv, Color32::WHITE);
        }
        CoverSlot::Loading => {
            p.rect_filled(rect, Rounding::same(card::ROUNDING), Color32::from_rgb(58, 58, 58));
        }
        CoverSlot::Broken => {
            // Platform-default "broken image": flat tile with a struck glyph.
            p.rect_filled(rect, Rounding::same(card::ROUNDING), Color32::from_rgb(46, 46, 46));
            p.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼",
                egui::FontId::proportional(28.0),
                Color32::from_gray(110),
            );
            let r = 16.0;
            p.line_segment(
                [
                    rect.center() + Vec2::new(-r, -r),
                    rect.center() + Vec2::new(r, r),
                ],
                Stroke::new(2.0, Color32::from_gray(110)),
            );
        }
    }
}

fn link_pill(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    id_ns: (&'static str, &str),
    label: &str,
    url: &str,
    hover_t: f32,
) -> bool {
    ui.expand_to_include_rect(rect);
    let resp = ui
        .interact(rect, ui.id().with(id_ns), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let alpha = (hover_t * 255.0) as u8;
    let bg = if resp.hovered() {
        Color32::from_gray(84)
    } else {
        Color32::from_gray(60)
    };
    let p = ui.painter();
    p.rect_filled(
        rect,
        Rounding::same(card::PILL_ROUNDING),
        bg.gamma_multiply(hover_t),
    );
    p.rect_stroke(
        rect,
        Rounding::same(card::PILL_ROUNDING),
        Stroke::new(1.0, Color32::from_gray(100).gamma_multiply(hover_t)),
    );
    p.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::TextStyle::Small.resolve(ui.style()),
        Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
    );

    if resp.clicked() {
        log::info!("link pill clicked: {}", url);
        open_in_browser(url);
        return true;
    }
    resp.hovered()
}
