use eframe::egui::{self, Pos2};

use super::{HEADER_GAP, column_width, header_blocks, paragraph_blocks};
use crate::deck::SlideDefinition;
use crate::render::{Ink, text};
use crate::theme::Theme;

const DEFAULT_BULLETS_HEADING: &str = "Key Statistics";

/// Content slide: centred header, paragraphs on the left and the bullet list
/// on the right. Without bullets the paragraphs take the full width.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    rect: egui::Rect,
    ink: Ink,
    scale: f32,
) {
    let padding = 96.0 * scale;
    let width = (rect.width() - padding * 2.0).min(1400.0 * scale);
    let left = rect.center().x - width / 2.0;
    let gap = 96.0 * scale;

    let header = header_blocks(ui, slide, theme, width, ink, scale);
    let header_height = text::stack_height(&header);

    let bullets = slide.bullets.as_deref().filter(|b| !b.is_empty());
    let text_width = match bullets {
        Some(_) => column_width(width, gap),
        None => width,
    };
    let paragraphs = paragraph_blocks(ui, &slide.content, theme, text_width, ink, scale);
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
            column_width(width, gap),
            scale,
        )
    });

    let body_height = text::stack_height(&paragraphs).max(list.as_ref().map_or(0.0, |l| l.height()));
    let total = header_height + HEADER_GAP * scale + body_height;
    let top = text::centered_top(rect.shrink(padding), total);

    text::paint_stack(ui, header, Pos2::new(rect.center().x, top));
    let body_top = top + header_height + HEADER_GAP * scale;
    text::paint_stack(ui, paragraphs, Pos2::new(left, body_top));
    if let Some(list) = list {
        list.paint(ui, Pos2::new(left + text_width + gap, body_top));
    }
}
