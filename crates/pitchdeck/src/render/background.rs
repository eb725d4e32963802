use eframe::egui::{self, Color32, Rect};

use crate::theme::{Theme, parse_color};

/// Corner colours `[top_left, top_right, bottom_right, bottom_left]` for a
/// diagonal gradient through `stops`. One stop is a flat fill; with two the
/// off-diagonal corners take the midpoint; with three or more the middle stop
/// sits on the off-diagonal.
pub fn corner_colors(stops: &[Color32]) -> Option<[Color32; 4]> {
    match stops {
        [] => None,
        [only] => Some([*only; 4]),
        [first, last] => {
            let mid = lerp(*first, *last, 0.5);
            Some([*first, mid, *last, mid])
        }
        [first, .., last] => {
            let mid = stops[stops.len() / 2];
            Some([*first, mid, *last, mid])
        }
    }
}

fn lerp(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Paint a slide's background. Unknown colour names are dropped; with no
/// usable stop the theme's slide fill is used.
pub fn paint(ui: &egui::Ui, rect: Rect, stops: &[String], theme: &Theme, opacity: f32) {
    let colors: Vec<Color32> = stops.iter().filter_map(|s| parse_color(s)).collect();
    let corners = corner_colors(&colors).unwrap_or([theme.slide_background; 4]);
    let corners = corners.map(|c| Theme::with_opacity(c, opacity));

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), corners[0]);
    mesh.colored_vertex(rect.right_top(), corners[1]);
    mesh.colored_vertex(rect.right_bottom(), corners[2]);
    mesh.colored_vertex(rect.left_bottom(), corners[3]);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    ui.painter().add(egui::Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stop_is_flat() {
        let red = Color32::from_rgb(255, 0, 0);
        assert_eq!(corner_colors(&[red]), Some([red; 4]));
        assert_eq!(corner_colors(&[]), None);
    }

    #[test]
    fn test_two_stops_blend_off_diagonal() {
        let black = Color32::from_rgb(0, 0, 0);
        let white = Color32::from_rgb(255, 255, 255);
        let [tl, tr, br, bl] = corner_colors(&[black, white]).unwrap();
        assert_eq!(tl, black);
        assert_eq!(br, white);
        assert_eq!(tr, bl);
        assert_eq!(tr, Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_three_stops_use_via_colour() {
        let a = Color32::from_rgb(1, 0, 0);
        let b = Color32::from_rgb(0, 1, 0);
        let c = Color32::from_rgb(0, 0, 1);
        assert_eq!(corner_colors(&[a, b, c]), Some([a, b, c, b]));
    }

    #[test]
    fn test_many_stops_keep_endpoints() {
        let stops: Vec<Color32> = (0..5).map(|i| Color32::from_rgb(i, 0, 0)).collect();
        let [tl, tr, br, _] = corner_colors(&stops).unwrap();
        assert_eq!(tl, stops[0]);
        assert_eq!(br, stops[4]);
        assert_eq!(tr, stops[2]);
    }
}
