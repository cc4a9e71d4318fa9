// egui painter for a built card. The element tree is the source of truth;
// this only draws it and reports which carousel button was clicked.

use std::collections::HashMap;

use eframe::egui::{self, Color32, RichText, Rounding, Sense, Stroke, Vec2};
use strum::IntoEnumIterator;

use super::builder::class;
use super::card::HotelCard;
use crate::types::NavDirection;
use crate::ui_constants::{card, spacing};
use crate::views::dom::Element;

pub type Textures = HashMap<String, egui::TextureHandle>;

/// What happened on the card this frame.
pub struct CardResponse {
    pub nav_clicked: Option<NavDirection>,
}

/// Fixed-width card: 16:9 image with badge and carousel buttons, then the text body.
pub fn draw_card(
    ui: &mut egui::Ui,
    hotel: &HotelCard,
    width: f32,
    textures: &Textures,
) -> CardResponse {
    let root = hotel.root();
    let mut nav_clicked = None;

    ui.set_min_width(width);
    ui.set_max_width(width);

    egui::Frame::none()
        .fill(Color32::from_rgb(250, 250, 250))
        .stroke(Stroke::new(1.0, Color32::from_rgb(220, 220, 220)))
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::same(card::INNER_MARGIN))
        .show(ui, |ui| {
            let inner_w = width - card::INNER_MARGIN * 2.0;
            ui.set_width(inner_w);

            if let Some(media) = root.find(class::MEDIA) {
                nav_clicked = draw_media(ui, media, inner_w, textures);
            }
            if let Some(body) = root.find(class::BODY) {
                draw_body(ui, body, textures);
            }
        });

    CardResponse { nav_clicked }
}

fn draw_media(
    ui: &mut egui::Ui,
    media: &Element,
    inner_w: f32,
    textures: &Textures,
) -> Option<NavDirection> {
    let cover_h = inner_w * 9.0 / 16.0;
    let (cover_rect, cover_resp) =
        ui.allocate_exact_size(Vec2::new(inner_w, cover_h), Sense::hover());
    let painter = ui.painter_at(cover_rect);

    let image = media.find(class::IMAGE);
    let texture = image
        .and_then(|img| img.attr("src"))
        .and_then(|src| textures.get(src));
    match texture {
        Some(tex) => {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(tex.id(), cover_rect, uv, Color32::WHITE);
        }
        None => {
            painter.rect_filled(
                cover_rect,
                Rounding::same(card::ROUNDING),
                Color32::from_rgb(205, 210, 215),
            );
        }
    }
    if let Some(alt) = image.and_then(|img| img.attr("alt")) {
        cover_resp.on_hover_text(alt);
    }

    // Discount badge (top-left)
    if let Some(badge) = media.find(class::BADGE) {
        let font_id = egui::TextStyle::Small.resolve(ui.style());
        let galley = painter.layout_no_wrap(badge.text.clone(), font_id, Color32::WHITE);
        let pad = Vec2::new(6.0, 3.0);
        let badge_rect = egui::Rect::from_min_size(
            cover_rect.min + Vec2::splat(spacing::MEDIUM),
            galley.size() + pad * 2.0,
        );
        painter.rect_filled(
            badge_rect,
            Rounding::same(card::BADGE_ROUNDING),
            Color32::from_rgb(204, 41, 71),
        );
        painter.galley(badge_rect.min + pad, galley, Color32::WHITE);
    }

    // Carousel buttons, vertically centered on the image edges
    let mut clicked = None;
    for direction in NavDirection::iter() {
        let Some(button) = media.find(&class::nav_modifier(direction)) else {
            continue;
        };
        if button.hidden {
            continue;
        }
        let x = match direction {
            NavDirection::Previous => cover_rect.min.x + spacing::MEDIUM,
            NavDirection::Next => cover_rect.max.x - spacing::MEDIUM - card::NAV_SIZE,
        };
        let rect = egui::Rect::from_min_size(
            egui::pos2(x, cover_rect.center().y - card::NAV_SIZE / 2.0),
            Vec2::splat(card::NAV_SIZE),
        );
        let mut resp = ui.put(rect, egui::Button::new(button.text.as_str()));
        if let Some(label) = button.attr("aria-label") {
            resp = resp.on_hover_text(label);
        }
        if resp.clicked() {
            clicked = Some(direction);
        }
    }
    clicked
}

fn draw_body(ui: &mut egui::Ui, body: &Element, textures: &Textures) {
    ui.add_space(spacing::MEDIUM);
    if let Some(title) = body.find(class::TITLE) {
        ui.label(
            RichText::new(&title.text)
                .heading()
                .color(Color32::from_rgb(30, 30, 30)),
        );
    }

    if let Some(meta) = body.find(class::META) {
        ui.add_space(spacing::SMALL);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing::MEDIUM;
            if let Some(rating) = meta.find(class::RATING) {
                draw_rating(ui, rating, textures);
            }
            if let Some(city) = meta.find(class::CITY) {
                ui.label(
                    RichText::new(&city.text)
                        .small()
                        .color(Color32::from_rgb(90, 90, 90)),
                );
            }
        });
    }

    if let Some(description) = body.find(class::DESCRIPTION) {
        ui.add_space(spacing::SMALL);
        ui.label(RichText::new(&description.text).color(Color32::from_rgb(60, 60, 60)));
    }
}

fn draw_rating(ui: &mut egui::Ui, rating: &Element, textures: &Textures) {
    let Some(stars) = rating.find(class::STARS) else {
        ui.label(RichText::new(&rating.text).small().strong());
        return;
    };

    let resp = ui
        .horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 1.0;
            for star in &stars.children {
                match star.attr("src").and_then(|src| textures.get(src)) {
                    Some(tex) => {
                        ui.add(egui::Image::new((tex.id(), Vec2::splat(card::STAR_SIZE))));
                    }
                    None => {
                        ui.label(RichText::new("★").color(Color32::from_rgb(230, 170, 30)));
                    }
                }
            }
        })
        .response;
    if let Some(label) = rating.attr("aria-label") {
        resp.on_hover_text(label);
    }
}
