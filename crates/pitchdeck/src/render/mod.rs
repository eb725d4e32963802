pub mod background;
pub mod image_cache;
pub mod layouts;
pub mod text;
pub mod transition;

use eframe::egui::{self, Color32};

use crate::deck::{Layout, SlideDefinition};
use crate::error::LoadFailure;
use crate::theme::{Theme, parse_color};

use image_cache::ImageCache;

/// Size of a slide that is fully faded out, relative to its frame.
pub const INACTIVE_SCALE: f32 = 0.95;

/// Text colour of one slide together with the opacity it is drawn at.
#[derive(Debug, Clone, Copy)]
pub struct Ink {
    pub color: Color32,
    pub opacity: f32,
}

impl Ink {
    /// The base colour at `alpha` of the slide's opacity.
    pub fn at(&self, alpha: f32) -> Color32 {
        Theme::with_opacity(self.color, self.opacity * alpha)
    }

    pub fn full(&self) -> Color32 {
        self.at(1.0)
    }
}

/// Which slides are laid out each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Every slide, inactive ones fully transparent.
    #[default]
    All,
    ActiveOnly,
}

impl RenderPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "active" => Some(Self::ActiveOnly),
            _ => None,
        }
    }
}

/// Frame of a slide drawn at `opacity`: inactive slides shrink towards the
/// centre as they fade out.
pub fn slide_rect(frame: egui::Rect, opacity: f32) -> egui::Rect {
    let t = opacity.clamp(0.0, 1.0);
    let factor = INACTIVE_SCALE + (1.0 - INACTIVE_SCALE) * t;
    egui::Rect::from_center_size(frame.center(), frame.size() * factor)
}

/// The layout actually drawn. An image-text slide without a usable image is
/// drawn as a content slide.
pub fn effective_layout(slide: &SlideDefinition, image_available: bool) -> Layout {
    match slide.layout {
        Layout::ImageText if slide.image.is_none() || !image_available => Layout::Content,
        layout => layout,
    }
}

fn text_color(slide: &SlideDefinition, theme: &Theme) -> Color32 {
    slide
        .text_color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(theme.slide_foreground)
}

/// Render a single slide into `frame`. A slide at opacity 0 is still laid
/// out, which keeps its galleys and textures warm for the next frame.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &SlideDefinition,
    theme: &Theme,
    frame: egui::Rect,
    opacity: f32,
    images: &ImageCache,
    scale: f32,
) {
    let rect = slide_rect(frame, opacity);
    background::paint(ui, rect, &slide.background, theme, opacity);

    let ink = Ink {
        color: text_color(slide, theme),
        opacity,
    };
    let texture = match (&slide.layout, &slide.image) {
        (Layout::ImageText, Some(path)) => images.get(ui.ctx(), path),
        _ => None,
    };

    match effective_layout(slide, texture.is_some()) {
        Layout::Title => layouts::title::render(ui, slide, theme, rect, ink, scale),
        Layout::Content => layouts::content::render(ui, slide, theme, rect, ink, scale),
        Layout::Split => layouts::split::render(ui, slide, theme, rect, ink, scale),
        Layout::ImageText => match texture {
            Some(texture) => {
                layouts::image_text::render(ui, slide, theme, rect, ink, &texture, scale)
            }
            None => layouts::content::render(ui, slide, theme, rect, ink, scale),
        },
    }
}

/// Lines shown in place of a slide that failed to load.
pub fn placeholder_lines(failure: &LoadFailure) -> [String; 3] {
    let index = failure.index();
    [
        format!("Slide {}", index + 1),
        "Slide content not found".to_string(),
        format!("Create slides/{index}/slide.yaml to add content"),
    ]
}

/// Render the stand-in for a slide position that failed to load.
pub fn render_placeholder(
    ui: &egui::Ui,
    failure: &LoadFailure,
    theme: &Theme,
    frame: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let rect = slide_rect(frame, opacity);
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(theme.slide_background, opacity));

    let ink = Ink {
        color: theme.slide_foreground,
        opacity,
    };
    let [heading, message, hint] = placeholder_lines(failure);
    let width = rect.width() * 0.8;
    let blocks = vec![
        text::block(ui, &heading, theme.heading_size * scale, ink.full(), width, true, 24.0 * scale),
        text::block(ui, &message, theme.subtitle_size * scale, ink.at(0.8), width, true, 16.0 * scale),
        text::block(ui, &hint, theme.body_size * 0.8 * scale, Theme::with_opacity(theme.accent_secondary, opacity), width, true, 0.0),
    ];
    let top = text::centered_top(rect, text::stack_height(&blocks));
    text::paint_stack(ui, blocks, egui::pos2(rect.center().x, top));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_image_text_without_image_falls_back() {
        let mut slide = SlideDefinition {
            layout: Layout::ImageText,
            ..Default::default()
        };
        assert_eq!(effective_layout(&slide, false), Layout::Content);

        slide.image = Some(PathBuf::from("chart.png"));
        assert_eq!(effective_layout(&slide, false), Layout::Content);
        assert_eq!(effective_layout(&slide, true), Layout::ImageText);

        slide.layout = Layout::Split;
        assert_eq!(effective_layout(&slide, false), Layout::Split);
    }

    #[test]
    fn test_slide_rect_scales_with_opacity() {
        let frame = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        assert_eq!(slide_rect(frame, 1.0), frame);
        let hidden = slide_rect(frame, 0.0);
        assert_eq!(hidden.center(), frame.center());
        assert!((hidden.width() - 190.0).abs() < 1e-3);
        assert!((hidden.height() - 95.0).abs() < 1e-3);
    }

    #[test]
    fn test_placeholder_names_missing_file() {
        let failure = LoadFailure::NotFound {
            index: 2,
            path: PathBuf::from("deck/slides/2/slide.yaml"),
        };
        let [heading, message, hint] = placeholder_lines(&failure);
        assert_eq!(heading, "Slide 3");
        assert_eq!(message, "Slide content not found");
        assert_eq!(hint, "Create slides/2/slide.yaml to add content");
    }

    #[test]
    fn test_text_color_prefers_slide_setting() {
        let theme = Theme::light();
        let mut slide = SlideDefinition::default();
        assert_eq!(text_color(&slide, &theme), theme.slide_foreground);
        slide.text_color = Some("white".to_string());
        assert_eq!(text_color(&slide, &theme), Color32::WHITE);
        slide.text_color = Some("no-such-colour".to_string());
        assert_eq!(text_color(&slide, &theme), theme.slide_foreground);
    }

    #[test]
    fn test_render_policy_names() {
        assert_eq!(RenderPolicy::from_name("all"), Some(RenderPolicy::All));
        assert_eq!(RenderPolicy::from_name("active"), Some(RenderPolicy::ActiveOnly));
        assert_eq!(RenderPolicy::from_name("some"), None);
        assert_eq!(RenderPolicy::default(), RenderPolicy::All);
    }
}
