use eframe::egui::Color32;

use crate::deck::DeckTheme;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Window fill behind the slides.
    pub background: Color32,
    /// Default slide fill when a slide names no background.
    pub slide_background: Color32,
    /// Default slide text colour when a slide names none.
    pub slide_foreground: Color32,
    pub accent: Color32,
    pub accent_secondary: Color32,
    pub chrome_background: Color32,
    pub chrome_foreground: Color32,
    pub title_size: f32,
    pub heading_size: f32,
    pub subtitle_size: f32,
    pub body_size: f32,
    pub bullet_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x11, 0x18, 0x27),
            slide_background: Color32::from_rgb(0x1F, 0x29, 0x37),
            slide_foreground: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            accent_secondary: Color32::from_rgb(0x93, 0xC5, 0xFD),
            chrome_background: Color32::from_rgba_unmultiplied(0, 0, 0, 90),
            chrome_foreground: Color32::WHITE,
            title_size: 110.0,
            heading_size: 84.0,
            subtitle_size: 44.0,
            body_size: 32.0,
            bullet_size: 28.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0x11, 0x18, 0x27),
            slide_background: Color32::WHITE,
            slide_foreground: Color32::from_rgb(0x1F, 0x29, 0x37),
            accent: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_secondary: Color32::from_rgb(0x1E, 0x40, 0xAF),
            chrome_background: Color32::from_rgba_unmultiplied(0, 0, 0, 51),
            chrome_foreground: Color32::WHITE,
            title_size: 110.0,
            heading_size: 84.0,
            subtitle_size: 44.0,
            body_size: 32.0,
            bullet_size: 28.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Apply a deck's colour overrides. Unparseable colours are skipped.
    pub fn with_deck_colors(mut self, colors: &DeckTheme) -> Self {
        let apply = |spec: &Option<String>, target: &mut Color32| {
            if let Some(spec) = spec {
                match parse_color(spec) {
                    Some(color) => *target = color,
                    None => tracing::warn!("ignoring unknown theme colour '{spec}'"),
                }
            }
        };
        apply(&colors.primary, &mut self.accent);
        apply(&colors.secondary, &mut self.accent_secondary);
        apply(&colors.background, &mut self.slide_background);
        apply(&colors.text, &mut self.slide_foreground);
        self
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Color32::from_rgba_unmultiplied(r, g, b, (a as f32 * opacity.clamp(0.0, 1.0)) as u8)
    }
}

const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

#[rustfmt::skip]
const PALETTE: &[(&str, [u32; 10])] = &[
    ("gray",    [0xF9FAFB, 0xF3F4F6, 0xE5E7EB, 0xD1D5DB, 0x9CA3AF, 0x6B7280, 0x4B5563, 0x374151, 0x1F2937, 0x111827]),
    ("red",     [0xFEF2F2, 0xFEE2E2, 0xFECACA, 0xFCA5A5, 0xF87171, 0xEF4444, 0xDC2626, 0xB91C1C, 0x991B1B, 0x7F1D1D]),
    ("orange",  [0xFFF7ED, 0xFFEDD5, 0xFED7AA, 0xFDBA74, 0xFB923C, 0xF97316, 0xEA580C, 0xC2410C, 0x9A3412, 0x7C2D12]),
    ("yellow",  [0xFEFCE8, 0xFEF9C3, 0xFEF08A, 0xFDE047, 0xFACC15, 0xEAB308, 0xCA8A04, 0xA16207, 0x854D0E, 0x713F12]),
    ("green",   [0xF0FDF4, 0xDCFCE7, 0xBBF7D0, 0x86EFAC, 0x4ADE80, 0x22C55E, 0x16A34A, 0x15803D, 0x166534, 0x14532D]),
    ("emerald", [0xECFDF5, 0xD1FAE5, 0xA7F3D0, 0x6EE7B7, 0x34D399, 0x10B981, 0x059669, 0x047857, 0x065F46, 0x064E3B]),
    ("teal",    [0xF0FDFA, 0xCCFBF1, 0x99F6E4, 0x5EEAD4, 0x2DD4BF, 0x14B8A6, 0x0D9488, 0x0F766E, 0x115E59, 0x134E4A]),
    ("blue",    [0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF, 0x1E3A8A]),
    ("indigo",  [0xEEF2FF, 0xE0E7FF, 0xC7D2FE, 0xA5B4FC, 0x818CF8, 0x6366F1, 0x4F46E5, 0x4338CA, 0x3730A3, 0x312E81]),
    ("purple",  [0xFAF5FF, 0xF3E8FF, 0xE9D5FF, 0xD8B4FE, 0xC084FC, 0xA855F7, 0x9333EA, 0x7E22CE, 0x6B21A8, 0x581C87]),
    ("pink",    [0xFDF2F8, 0xFCE7F3, 0xFBCFE8, 0xF9A8D4, 0xF472B6, 0xEC4899, 0xDB2777, 0xBE185D, 0x9D174D, 0x831843]),
];

fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Parse a colour given as `#RRGGBB`, `#RGB`, `white`, `black`, or a palette
/// name such as `blue-600`. Utility-class prefixes like `from-` or `text-`
/// are accepted and ignored.
pub fn parse_color(spec: &str) -> Option<Color32> {
    let spec = spec.trim();
    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }

    let name = ["from-", "via-", "to-", "text-", "bg-"]
        .iter()
        .find_map(|prefix| spec.strip_prefix(prefix))
        .unwrap_or(spec);

    match name {
        "white" => return Some(Color32::WHITE),
        "black" => return Some(Color32::BLACK),
        "transparent" => return Some(Color32::TRANSPARENT),
        _ => {}
    }

    let (hue, shade) = name.rsplit_once('-')?;
    let shade: u16 = shade.parse().ok()?;
    let slot = SHADES.iter().position(|s| *s == shade)?;
    PALETTE
        .iter()
        .find(|(h, _)| *h == hue)
        .map(|(_, shades)| rgb(shades[slot]))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(rgb),
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok().map(rgb)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#3B82F6"), Some(Color32::from_rgb(0x3B, 0x82, 0xF6)));
        assert_eq!(parse_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_parse_palette_names() {
        assert_eq!(parse_color("blue-600"), Some(Color32::from_rgb(0x25, 0x63, 0xEB)));
        assert_eq!(parse_color("from-indigo-800"), Some(Color32::from_rgb(0x37, 0x30, 0xA3)));
        assert_eq!(parse_color("text-gray-800"), Some(Color32::from_rgb(0x1F, 0x29, 0x37)));
        assert_eq!(parse_color("text-white"), Some(Color32::WHITE));
        assert_eq!(parse_color("blue-650"), None);
        assert_eq!(parse_color("chartreuse-500"), None);
        assert_eq!(parse_color("blue"), None);
    }

    #[test]
    fn test_deck_colors_override_theme() {
        let colors = DeckTheme {
            primary: Some("#FF0000".to_string()),
            text: Some("nonsense".to_string()),
            ..Default::default()
        };
        let theme = Theme::light().with_deck_colors(&colors);
        assert_eq!(theme.accent, Color32::from_rgb(255, 0, 0));
        assert_eq!(theme.slide_foreground, Theme::light().slide_foreground);
    }

    #[test]
    fn test_with_opacity_scales_existing_alpha() {
        let half = Theme::with_opacity(Color32::from_rgba_unmultiplied(10, 20, 30, 200), 0.5);
        assert_eq!(half.a(), 100);
        assert_eq!(Theme::with_opacity(Color32::WHITE, 2.0).a(), 255);
    }
}
