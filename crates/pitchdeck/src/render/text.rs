use std::sync::Arc;

use eframe::egui::{self, Color32, FontFamily, FontId, Pos2, Rect};

use crate::theme::Theme;

/// A laid-out piece of text waiting to be painted in a vertical stack.
pub struct TextBlock {
    pub galley: Arc<egui::Galley>,
    pub color: Color32,
    /// Space below this block.
    pub gap: f32,
}

/// Lay out wrapped text. With `centered`, the galley is centred on the x
/// coordinate it is later painted at.
pub fn layout(
    ui: &egui::Ui,
    text: &str,
    size: f32,
    color: Color32,
    max_width: f32,
    centered: bool,
) -> Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::simple(
        text.to_string(),
        FontId::new(size, FontFamily::Proportional),
        color,
        max_width,
    );
    if centered {
        job.halign = egui::Align::Center;
    }
    ui.painter().layout_job(job)
}

pub fn block(
    ui: &egui::Ui,
    text: &str,
    size: f32,
    color: Color32,
    max_width: f32,
    centered: bool,
    gap: f32,
) -> TextBlock {
    TextBlock {
        galley: layout(ui, text, size, color, max_width, centered),
        color,
        gap,
    }
}

pub fn stack_height(blocks: &[TextBlock]) -> f32 {
    let mut height: f32 = blocks.iter().map(|b| b.galley.rect.height() + b.gap).sum();
    if let Some(last) = blocks.last() {
        height -= last.gap;
    }
    height.max(0.0)
}

/// Paint blocks top to bottom starting at `pos`, returning the height used.
pub fn paint_stack(ui: &egui::Ui, blocks: Vec<TextBlock>, pos: Pos2) -> f32 {
    let mut y = pos.y;
    let count = blocks.len();
    for (i, b) in blocks.into_iter().enumerate() {
        let h = b.galley.rect.height();
        ui.painter().galley(Pos2::new(pos.x, y), b.galley, b.color);
        y += h;
        if i + 1 < count {
            y += b.gap;
        }
    }
    y - pos.y
}

/// Top y that centres content of `height` inside `rect`, never above its top.
pub fn centered_top(rect: Rect, height: f32) -> f32 {
    (rect.center().y - height / 2.0).max(rect.top())
}

/// Laid-out bullet list: a dot followed by wrapped text per item.
pub struct BulletList {
    heading: Option<TextBlock>,
    items: Vec<Arc<egui::Galley>>,
    color: Color32,
    dot_color: Color32,
    dot_radius: f32,
    item_size: f32,
    indent: f32,
    item_gap: f32,
}

impl BulletList {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ui: &egui::Ui,
        heading: Option<&str>,
        items: &[String],
        theme: &Theme,
        color: Color32,
        dot_color: Color32,
        width: f32,
        scale: f32,
    ) -> Self {
        let indent = 36.0 * scale;
        let heading = heading.map(|h| {
            block(
                ui,
                h,
                theme.bullet_size * 1.4 * scale,
                color,
                width,
                false,
                36.0 * scale,
            )
        });
        let items = items
            .iter()
            .map(|item| {
                layout(
                    ui,
                    item,
                    theme.bullet_size * scale,
                    color,
                    width - indent,
                    false,
                )
            })
            .collect();
        Self {
            heading,
            items,
            color,
            dot_color,
            dot_radius: 6.0 * scale,
            item_size: theme.bullet_size * scale,
            indent,
            item_gap: 24.0 * scale,
        }
    }

    pub fn height(&self) -> f32 {
        let heading = self
            .heading
            .as_ref()
            .map(|h| h.galley.rect.height() + h.gap)
            .unwrap_or(0.0);
        let items: f32 = self.items.iter().map(|g| g.rect.height()).sum();
        let gaps = self.item_gap * self.items.len().saturating_sub(1) as f32;
        heading + items + gaps
    }

    pub fn paint(self, ui: &egui::Ui, pos: Pos2) -> f32 {
        let mut y = pos.y;
        if let Some(heading) = self.heading {
            let h = heading.galley.rect.height();
            ui.painter()
                .galley(Pos2::new(pos.x, y), heading.galley, heading.color);
            y += h + heading.gap;
        }
        let count = self.items.len();
        for (i, galley) in self.items.into_iter().enumerate() {
            let dot = Pos2::new(pos.x + self.dot_radius, y + self.item_size * 0.6);
            ui.painter().circle_filled(dot, self.dot_radius, self.dot_color);
            let h = galley.rect.height();
            ui.painter()
                .galley(Pos2::new(pos.x + self.indent, y), galley, self.color);
            y += h;
            if i + 1 < count {
                y += self.item_gap;
            }
        }
        y - pos.y
    }
}
