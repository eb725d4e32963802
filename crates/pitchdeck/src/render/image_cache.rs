use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

/// Largest edge uploaded to the GPU; bigger images are downscaled first.
const MAX_TEXTURE_EDGE: u32 = 4096;

/// Textures for slide images, decoded on first use.
///
/// A path that fails to decode is remembered as `None` so the failure is
/// logged once and not retried every frame.
#[derive(Default)]
pub struct ImageCache {
    textures: RefCell<HashMap<PathBuf, Option<TextureHandle>>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ctx: &egui::Context, path: &Path) -> Option<TextureHandle> {
        if let Some(entry) = self.textures.borrow().get(path) {
            return entry.clone();
        }

        let texture = match decode(path) {
            Ok(image) => Some(ctx.load_texture(
                path.display().to_string(),
                image,
                TextureOptions::LINEAR,
            )),
            Err(e) => {
                tracing::warn!("could not load image {}: {e}", path.display());
                None
            }
        };
        self.textures
            .borrow_mut()
            .insert(path.to_path_buf(), texture.clone());
        texture
    }
}

fn decode(path: &Path) -> image::ImageResult<ColorImage> {
    let mut rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    if w.max(h) > MAX_TEXTURE_EDGE {
        let ratio = MAX_TEXTURE_EDGE as f32 / w.max(h) as f32;
        let (nw, nh) = (
            ((w as f32 * ratio) as u32).max(1),
            ((h as f32 * ratio) as u32).max(1),
        );
        rgba = image::imageops::resize(&rgba, nw, nh, image::imageops::FilterType::Triangle);
    }
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Fit an image of `size` inside `area`, preserving aspect ratio, centred.
pub fn fit_rect(size: egui::Vec2, area: egui::Rect) -> egui::Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Rect::from_center_size(area.center(), egui::Vec2::ZERO);
    }
    let ratio = (area.width() / size.x).min(area.height() / size.y);
    egui::Rect::from_center_size(area.center(), size * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_rect_preserves_aspect() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 200.0));
        let fitted = fit_rect(egui::vec2(100.0, 100.0), area);
        assert_eq!(fitted.size(), egui::vec2(200.0, 200.0));
        assert_eq!(fitted.center(), area.center());

        let wide = fit_rect(egui::vec2(800.0, 100.0), area);
        assert_eq!(wide.size(), egui::vec2(400.0, 50.0));
    }

    #[test]
    fn test_decode_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();
        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }

    #[test]
    fn test_decode_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(decode(&dir.path().join("nope.png")).is_err());
    }

    #[test]
    fn test_failed_load_is_remembered() {
        let ctx = egui::Context::default();
        let cache = ImageCache::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(cache.textures.borrow().get(&path).is_none());
        assert!(cache.get(&ctx, &path).is_none());
        assert!(matches!(cache.textures.borrow().get(&path), Some(None)));
    }
}
