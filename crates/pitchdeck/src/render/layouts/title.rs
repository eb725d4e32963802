use eframe::egui::{self, Pos2};

use crate::deck::SlideDefinition;
use crate::render::{Ink, text};
use crate::theme::Theme;

/// Title slide: large centred title, subtitle and short lines beneath.
pub fn render(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    rect: egui::Rect,
    ink: Ink,
    scale: f32,
) {
    let padding = 96.0 * scale;
    let width = (rect.width() - padding * 2.0).min(1200.0 * scale);

    let mut blocks = vec![text::block(
        ui,
        &slide.title,
        theme.title_size * scale,
        ink.full(),
        width,
        true,
        40.0 * scale,
    )];
    if let Some(subtitle) = &slide.subtitle {
        blocks.push(text::block(
            ui,
            subtitle,
            theme.subtitle_size * scale,
            ink.at(0.9),
            width,
            true,
            40.0 * scale,
        ));
    }
    for line in &slide.content {
        blocks.push(text::block(
            ui,
            line,
            theme.body_size * scale,
            ink.at(0.8),
            width,
            true,
            16.0 * scale,
        ));
    }

    let top = text::centered_top(rect.shrink(padding), text::stack_height(&blocks));
    text::paint_stack(ui, blocks, Pos2::new(rect.center().x, top));
}
