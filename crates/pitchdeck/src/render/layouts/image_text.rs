use eframe::egui::{self, Color32, Pos2};

use super::{HEADER_GAP, column_width, header_blocks, paragraph_blocks};
use crate::deck::SlideDefinition;
use crate::render::image_cache::fit_rect;
use crate::render::{Ink, text};
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    rect: egui::Rect,
    ink: Ink,
    texture: &egui::TextureHandle,
    scale: f32,
) {
    let padding = 96.0 * scale;
    let width = (rect.width() - padding * 2.0).min(1500.0 * scale);
    let left = rect.center().x - width / 2.0;
    let gap = 96.0 * scale;
    let column = column_width(width, gap);

    let header = header_blocks(ui, slide, theme, width, ink, scale);
    let header_height = text::stack_height(&header);
    let mut blocks = paragraph_blocks(ui, &slide.content, theme, column, ink, scale);
    if let Some(items) = slide.bullets.as_deref().filter(|b| !b.is_empty()) {
        let lines = items.iter().map(|item| format!("\u{2022}  {item}"));
        blocks.extend(lines.map(|line| {
            text::block(ui, &line, theme.bullet_size * scale, ink.full(), column, false, 16.0 * scale)
        }));
    }
    let text_height = text::stack_height(&blocks);

    let image_area_height = (rect.height() - padding * 2.0 - header_height - HEADER_GAP * scale)
        .max(0.0)
        .min(column * 0.75);
    let body_height = text_height.max(image_area_height);
    let total = header_height + HEADER_GAP * scale + body_height;
    let top = text::centered_top(rect.shrink(padding), total);

    text::paint_stack(ui, header, Pos2::new(rect.center().x, top));
    let body_top = top + header_height + HEADER_GAP * scale;
    let body_center = body_top + body_height / 2.0;
    text::paint_stack(ui, blocks, Pos2::new(left, body_center - text_height / 2.0));

    let area = egui::Rect::from_center_size(
        Pos2::new(left + column + gap + column / 2.0, body_center),
        egui::vec2(column, image_area_height),
    );
    let image_rect = fit_rect(texture.size_vec2(), area);
    let tint = Theme::with_opacity(Color32::WHITE, ink.opacity);
    ui.painter().image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}
