pub mod content;
pub mod image_text;
pub mod split;
pub mod title;

use eframe::egui;

use crate::deck::SlideDefinition;
use crate::render::{Ink, text};
use crate::theme::Theme;

/// Gap between the header and the columns below it.
pub(crate) const HEADER_GAP: f32 = 56.0;

/// Centred title and optional subtitle shared by the multi-column layouts.
pub(crate) fn header_blocks(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    width: f32,
    ink: Ink,
    scale: f32,
) -> Vec<text::TextBlock> {
    let mut blocks = vec![text::block(
        ui,
        &slide.title,
        theme.heading_size * scale,
        ink.full(),
        width,
        true,
        20.0 * scale,
    )];
    if let Some(subtitle) = &slide.subtitle {
        blocks.push(text::block(
            ui,
            subtitle,
            theme.subtitle_size * scale,
            ink.at(0.8),
            width,
            true,
            0.0,
        ));
    }
    blocks
}

pub(crate) fn paragraph_blocks(
    ui: &egui::Ui,
    paragraphs: &[String],
    theme: &Theme,
    width: f32,
    ink: Ink,
    scale: f32,
) -> Vec<text::TextBlock> {
    paragraphs
        .iter()
        .map(|p| {
            text::block(
                ui,
                p,
                theme.body_size * scale,
                ink.full(),
                width,
                false,
                28.0 * scale,
            )
        })
        .collect()
}

/// Split `width` into two columns separated by `gap`, returning the column width.
pub(crate) fn column_width(width: f32, gap: f32) -> f32 {
    ((width - gap) / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width() {
        assert_eq!(column_width(1000.0, 100.0), 450.0);
        assert_eq!(column_width(50.0, 100.0), 0.0);
    }
}
