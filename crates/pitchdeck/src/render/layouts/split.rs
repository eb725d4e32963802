use eframe::egui::{self, Color32, Pos2};

use super::{HEADER_GAP, column_width, header_blocks, paragraph_blocks};
use crate::deck::SlideDefinition;
use crate::render::{Ink, text};
use crate::theme::Theme;

const DEFAULT_BULLETS_HEADING: &str = "Features";

/// Split slide: paragraphs beside a translucent panel holding the bullet
/// list, both columns centred on each other.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    rect: egui::Rect,
    ink: Ink,
    scale: f32,
) {
    let padding = 96.0 * scale;
    let width = (rect.width() - padding * 2.0).min(1500.0 * scale);
    let left = rect.center().x - width / 2.0;
    let gap = 128.0 * scale;
    let panel_padding = 48.0 * scale;

    let header = header_blocks(ui, slide, theme, width, ink, scale);
    let header_height = text::stack_height(&header);

    let bullets = slide.bullets.as_deref().filter(|b| !b.is_empty());
    let text_width = match bullets {
        Some(_) => column_width(width, gap),
        None => width,
    };
    let paragraphs = paragraph_blocks(ui, &slide.content, theme, text_width, ink, scale);
    let paragraphs_height = text::stack_height(&paragraphs);
    let list = bullets.map(|items| {
        text::BulletList::new(
            ui,
            Some(
                slide
                    .bullets_heading
                    .as_deref()
                    .unwrap_or(DEFAULT_BULLETS_HEADING),
            ),
            items,
            theme,
            ink.full(),
            ink.full(),
            column_width(width, gap) - panel_padding * 2.0,
            scale,
        )
    });
    let panel_height = list
        .as_ref()
        .map_or(0.0, |l| l.height() + panel_padding * 2.0);

    let body_height = paragraphs_height.max(panel_height);
    let total = header_height + HEADER_GAP * scale + body_height;
    let top = text::centered_top(rect.shrink(padding), total);

    text::paint_stack(ui, header, Pos2::new(rect.center().x, top));
    let body_top = top + header_height + HEADER_GAP * scale;
    let body_center = body_top + body_height / 2.0;

    text::paint_stack(
        ui,
        paragraphs,
        Pos2::new(left, body_center - paragraphs_height / 2.0),
    );

    if let Some(list) = list {
        let panel = egui::Rect::from_min_size(
            Pos2::new(left + text_width + gap, body_center - panel_height / 2.0),
            egui::vec2(column_width(width, gap), panel_height),
        );
        let fill = Theme::with_opacity(Color32::from_white_alpha(26), ink.opacity);
        ui.painter().rect_filled(panel, 24.0 * scale, fill);
        list.paint(ui, panel.min + egui::vec2(panel_padding, panel_padding));
    }
}
