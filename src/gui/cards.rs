//! Social cards: one clickable card per campaign platform

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, RichText, Sense, Stroke, StrokeKind, Vec2};

use crate::analytics::Platform;
use crate::gui::constants::{
    CARD_FILL, CARD_FILL_HOVER, CARD_SIZE, ITEM_SPACING, SECTION_SPACING, TEXT_PRIMARY, TEXT_WEAK,
};

pub struct CardClick {
    pub platform: Platform,
    pub pos: Pos2,
}

pub struct CardsResponse {
    pub clicked: Option<CardClick>,
    pub any_hovered: bool,
}

pub fn ui(ui: &mut egui::Ui, scroll_into_view: bool) -> CardsResponse {
    let mut out = CardsResponse {
        clicked: None,
        any_hovered: false,
    };

    ui.vertical_centered(|ui| {
        let heading = ui.heading(
            RichText::new("Find us on social media")
                .size(28.0)
                .color(TEXT_PRIMARY),
        );
        if scroll_into_view {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.label(
            RichText::new("Tap a card to open the campaign profile")
                .size(15.0)
                .color(TEXT_WEAK),
        );
    });
    ui.add_space(ITEM_SPACING * 2.0);

    let count = Platform::ALL.len() as f32;
    let row_width = count * CARD_SIZE.x + (count - 1.0) * ITEM_SPACING;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(ITEM_SPACING);
        // Center the row while it fits on one line
        let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
        ui.add_space(pad);
        for platform in Platform::ALL {
            let (clicked, hovered) = card(ui, platform);
            out.any_hovered |= hovered;
            if let Some(pos) = clicked {
                out.clicked = Some(CardClick { platform, pos });
            }
        }
    });
    ui.add_space(SECTION_SPACING);

    out
}

fn card(ui: &mut egui::Ui, platform: Platform) -> (Option<Pos2>, bool) {
    let (rect, resp) = ui.allocate_exact_size(CARD_SIZE, Sense::click());
    let hovered = resp.hovered();

    if ui.is_rect_visible(rect) {
        let brand = brand_color(platform);
        // Lift the card a little under the pointer
        let draw_rect = if hovered {
            rect.translate(Vec2::new(0.0, -4.0))
        } else {
            rect
        };
        let (fill, stroke) = if hovered {
            (CARD_FILL_HOVER, Stroke::new(2.0, brand))
        } else {
            (CARD_FILL, Stroke::new(1.0, TEXT_WEAK.gamma_multiply(0.3)))
        };

        let painter = ui.painter();
        painter.rect_filled(draw_rect, CornerRadius::same(12), fill);
        painter.rect_stroke(draw_rect, CornerRadius::same(12), stroke, StrokeKind::Inside);

        if hovered {
            if let Some(p) = resp.hover_pos() {
                // Soft glow following the pointer, clipped to the card
                let glow = painter.with_clip_rect(draw_rect);
                glow.circle_filled(p, 60.0, brand.gamma_multiply(0.10));
            }
        }

        let top = draw_rect.center_top();
        let badge_center = top + Vec2::new(0.0, 52.0);
        painter.circle_filled(badge_center, 24.0, brand);
        painter.text(
            badge_center,
            Align2::CENTER_CENTER,
            badge_tag(platform),
            FontId::proportional(16.0),
            Color32::WHITE,
        );
        painter.text(
            top + Vec2::new(0.0, 104.0),
            Align2::CENTER_CENTER,
            platform.label(),
            FontId::proportional(18.0),
            TEXT_PRIMARY,
        );
        painter.text(
            top + Vec2::new(0.0, 128.0),
            Align2::CENTER_CENTER,
            "@jcttcampaign",
            FontId::proportional(13.0),
            TEXT_WEAK,
        );
    }

    let clicked = resp
        .clicked()
        .then(|| resp.interact_pointer_pos().unwrap_or(rect.center()));
    (clicked, hovered)
}

fn brand_color(platform: Platform) -> Color32 {
    match platform {
        Platform::Facebook => Color32::from_rgb(0x18, 0x77, 0xf2),
        Platform::Instagram => Color32::from_rgb(0xe4, 0x40, 0x5f),
        Platform::Tiktok => Color32::from_rgb(0x69, 0xc9, 0xd0),
        Platform::Twitter => Color32::from_rgb(0x1d, 0xa1, 0xf2),
    }
}

fn badge_tag(platform: Platform) -> &'static str {
    match platform {
        Platform::Facebook => "fb",
        Platform::Instagram => "ig",
        Platform::Tiktok => "tk",
        Platform::Twitter => "tw",
    }
}
