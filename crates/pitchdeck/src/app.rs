use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::controller::Session;
use crate::controller::fullscreen::{DisplaySurface, HostFullscreenWatch};
use crate::controller::input::{self, BOUND_KEYS, Input};
use crate::controller::navigation::SlideChange;
use crate::deck::{self, Deck, Resolved};
use crate::error::SurfaceError;
use crate::render::image_cache::ImageCache;
use crate::render::transition::{Crossfade, slide_opacity};
use crate::render::{self, RenderPolicy};
use crate::theme::Theme;

/// Seconds the overlay takes to fade in or out.
const OVERLAY_FADE: f32 = 0.5;

const DEFAULT_TITLE: &str = "Pitch Deck Presentation";
const DEFAULT_DESCRIPTION: &str = "Navigate through slides using arrow keys or controls";

/// The egui viewport as a display surface. Commands are queued on the
/// context and take effect after the frame.
struct ViewportSurface {
    ctx: egui::Context,
    active: bool,
    minimized: bool,
}

impl ViewportSurface {
    fn new(ctx: &egui::Context) -> Self {
        let (active, minimized) = ctx.input(|i| {
            let viewport = i.viewport();
            (
                viewport.fullscreen.unwrap_or(false),
                viewport.minimized.unwrap_or(false),
            )
        });
        Self {
            ctx: ctx.clone(),
            active,
            minimized,
        }
    }
}

impl DisplaySurface for ViewportSurface {
    fn request_fullscreen(&mut self) -> Result<(), SurfaceError> {
        if self.minimized {
            return Err(SurfaceError::Refused("window is minimized".to_string()));
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), SurfaceError> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }

    fn is_fullscreen_active(&self) -> bool {
        self.active
    }
}

struct PitchDeckApp {
    deck: Deck,
    session: Session,
    theme: Theme,
    policy: RenderPolicy,
    images: ImageCache,
    fade: Option<Crossfade>,
    watch: HostFullscreenWatch,
}

impl PitchDeckApp {
    fn new(deck: Deck, session: Session, theme: Theme, policy: RenderPolicy) -> Self {
        Self {
            deck,
            session,
            theme,
            policy,
            images: ImageCache::new(),
            fade: None,
            watch: HostFullscreenWatch::default(),
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn display_title(&self) -> &str {
        if self.deck.meta.name.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.deck.meta.name
        }
    }

    fn display_description(&self) -> &str {
        if self.deck.meta.description.is_empty() {
            DEFAULT_DESCRIPTION
        } else {
            &self.deck.meta.description
        }
    }

    /// Feed this frame's fullscreen reading to the session.
    fn sync_fullscreen(&mut self, reported: Option<bool>, now: Instant) {
        if !self.watch.is_seeded() {
            if let Some(active) = reported {
                self.session.fullscreen.on_host_change(active);
            }
        }
        if let Some(active) = self.watch.observe(reported) {
            tracing::debug!(
                active,
                was_fullscreen = self.session.fullscreen.is_fullscreen(),
                "host fullscreen changed"
            );
            self.session.on_host_fullscreen_change(active, now);
        }
    }

    fn apply(&mut self, ctx: &egui::Context, inputs: &[Input], now: Instant) -> Vec<egui::Key> {
        let mut surface = ViewportSurface::new(ctx);
        let mut consumed = Vec::new();
        for &input in inputs {
            let routed = input::route(&mut self.session, input, &mut surface, now);
            if let Some(change) = routed.change {
                self.on_slide_change(change, now);
            }
            if let (true, Input::Key(key)) = (routed.is_handled(), input) {
                consumed.push(key);
            }
        }
        consumed
    }

    fn on_slide_change(&mut self, change: SlideChange, now: Instant) {
        tracing::debug!(
            from = change.from,
            to = change.to,
            direction = ?change.direction(),
            "slide changed"
        );
        self.fade = Some(Crossfade::new(change, now));
    }

    fn draw_slides(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, now: Instant) {
        let current = self.session.navigation.current();
        let total = self.deck.registry.count();
        let fade = self.fade.as_ref();

        // The active slide goes last so it paints over the one fading out.
        let order = (0..total)
            .filter(|&i| i != current)
            .chain(std::iter::once(current).filter(|&i| i < total));
        for index in order {
            let opacity = slide_opacity(index, current, fade, now);
            if self.policy == RenderPolicy::ActiveOnly && opacity <= 0.0 {
                continue;
            }
            match self.deck.registry.get(index) {
                Some(Resolved::Slide(slide)) => render::render_slide(
                    ui,
                    slide,
                    &self.theme,
                    rect,
                    opacity,
                    &self.images,
                    scale,
                ),
                Some(Resolved::Missing(failure)) => {
                    render::render_placeholder(ui, failure, &self.theme, rect, opacity, scale)
                }
                None => {}
            }
        }
    }

    /// One frame: sync, route input, hide idle controls, draw.
    fn frame(&mut self, ctx: &egui::Context, now: Instant) {
        let reported = ctx.input(|i| i.viewport().fullscreen);
        self.sync_fullscreen(reported, now);

        // Route outside the input closure: the fullscreen toggle sends a
        // viewport command, and sending inside ctx.input() deadlocks.
        let mut inputs: Vec<Input> = Vec::new();
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.is_none() && BOUND_KEYS.contains(key) => {
                        inputs.push(Input::Key(*key));
                    }
                    egui::Event::PointerMoved(_) => {
                        if !inputs.contains(&Input::PointerMoved) {
                            inputs.push(Input::PointerMoved);
                        }
                    }
                    _ => {}
                }
            }
        });

        let consumed = self.apply(ctx, &inputs, now);
        if !consumed.is_empty() {
            ctx.input_mut(|i| {
                for key in consumed {
                    i.consume_key(egui::Modifiers::NONE, key);
                }
            });
        }

        // Hide before drawing so the overlay starts fading on this frame.
        if self.session.tick(now) {
            ctx.request_repaint();
        }

        if self.fade.as_ref().is_some_and(|f| f.is_done(now)) {
            self.fade = None;
        }

        let visible = self.session.visibility.is_visible();
        let overlay_opacity =
            ctx.animate_bool_with_time(egui::Id::new("controls-overlay"), visible, OVERLAY_FADE);

        let bg = self.theme.background;
        let mut clicks: Vec<Input> = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = Self::compute_scale(rect);

                self.draw_slides(ui, rect, scale, now);

                let overlay = Overlay {
                    theme: &self.theme,
                    title: self.display_title(),
                    description: self.display_description(),
                    current: self.session.navigation.current(),
                    total: self.session.navigation.total(),
                    first: self.session.navigation.is_first(),
                    last: self.session.navigation.is_last(),
                    fullscreen: self.session.fullscreen.is_fullscreen(),
                    opacity: overlay_opacity,
                    interactive: visible,
                };
                clicks = overlay.draw(ui, rect);
            });

        if !clicks.is_empty() {
            self.apply(ctx, &clicks, now);
            ctx.request_repaint();
        }

        if self.fade.is_some() {
            ctx.request_repaint();
        }

        if let Some(deadline) = self.session.visibility.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl eframe::App for PitchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx, Instant::now());
    }
}

impl Drop for PitchDeckApp {
    fn drop(&mut self) {
        self.session.teardown();
        tracing::debug!("presentation closed");
    }
}

/// The control overlay: deck header, navigation bar and shortcut help.
struct Overlay<'a> {
    theme: &'a Theme,
    title: &'a str,
    description: &'a str,
    current: usize,
    total: usize,
    first: bool,
    last: bool,
    fullscreen: bool,
    opacity: f32,
    /// Buttons only respond while the controls are shown.
    interactive: bool,
}

impl Overlay<'_> {
    fn draw(&self, ui: &egui::Ui, rect: egui::Rect) -> Vec<Input> {
        let mut clicks = Vec::new();
        if self.opacity <= 0.0 {
            return clicks;
        }
        if !self.fullscreen {
            self.draw_header(ui, rect, &mut clicks);
            self.draw_help(ui, rect);
        }
        self.draw_navigation(ui, rect, &mut clicks);
        clicks
    }

    fn color(&self, color: egui::Color32, alpha: f32) -> egui::Color32 {
        Theme::with_opacity(color, self.opacity * alpha)
    }

    fn button(&self, ui: &egui::Ui, rect: egui::Rect, id: &str) -> Option<egui::Response> {
        self.interactive
            .then(|| ui.interact(rect, ui.id().with(id), egui::Sense::click()))
    }

    fn draw_header(&self, ui: &egui::Ui, rect: egui::Rect, clicks: &mut Vec<Input>) {
        let margin = 16.0;
        let padding = egui::vec2(16.0, 8.0);
        let fg = self.theme.chrome_foreground;

        let title = ui.painter().layout_no_wrap(
            self.title.to_string(),
            egui::FontId::proportional(16.0),
            self.color(fg, 1.0),
        );
        let description = ui.painter().layout_no_wrap(
            self.description.to_string(),
            egui::FontId::proportional(13.0),
            self.color(fg, 0.7),
        );
        let width = title.rect.width().max(description.rect.width()) + padding.x * 2.0;
        let height = title.rect.height() + description.rect.height() + 2.0 + padding.y * 2.0;
        let card = egui::Rect::from_min_size(
            rect.left_top() + egui::vec2(margin, margin),
            egui::vec2(width, height),
        );
        ui.painter()
            .rect_filled(card, 8.0, self.color(self.theme.chrome_background, 1.0));

        let title_height = title.rect.height();
        let title_color = self.color(fg, 1.0);
        ui.painter().galley(card.min + padding, title, title_color);
        ui.painter().galley(
            card.min + padding + egui::vec2(0.0, title_height + 2.0),
            description,
            self.color(fg, 0.7),
        );

        let size = 36.0;
        let button = egui::Rect::from_min_size(
            egui::pos2(rect.right() - margin - size, rect.top() + margin),
            egui::vec2(size, size),
        );
        let response = self.button(ui, button, "fullscreen-button");
        let hovered = response.as_ref().is_some_and(|r| r.hovered());
        let fill = if hovered {
            egui::Color32::from_black_alpha(77)
        } else {
            self.theme.chrome_background
        };
        ui.painter().rect_filled(button, 8.0, self.color(fill, 1.0));
        draw_expand_icon(ui, button.shrink(10.0), self.color(fg, 1.0));
        if response.is_some_and(|r| r.clicked()) {
            clicks.push(Input::FullscreenButton);
        }
    }

    fn draw_navigation(&self, ui: &egui::Ui, rect: egui::Rect, clicks: &mut Vec<Input>) {
        let fg = self.theme.chrome_foreground;
        let button_size = 48.0;
        let dot = 12.0;
        let dot_gap = 8.0;
        let spacing = 24.0;
        let padding = egui::vec2(24.0, 16.0);

        let dots_width = self.total as f32 * dot + self.total.saturating_sub(1) as f32 * dot_gap;
        let width = button_size * 2.0 + dots_width + spacing * 2.0 + padding.x * 2.0;
        let height = button_size + padding.y * 2.0;
        let pill = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.bottom() - 32.0 - 36.0 - height / 2.0),
            egui::vec2(width, height),
        );
        ui.painter()
            .rect_filled(pill, height / 2.0, self.color(self.theme.chrome_background, 1.0));

        let prev = egui::Rect::from_min_size(
            egui::pos2(pill.left() + padding.x, pill.top() + padding.y),
            egui::vec2(button_size, button_size),
        );
        if self.round_button(ui, prev, "previous-button", self.first, Chevron::Left) {
            clicks.push(Input::PreviousButton);
        }

        let next = egui::Rect::from_min_size(
            egui::pos2(pill.right() - padding.x - button_size, pill.top() + padding.y),
            egui::vec2(button_size, button_size),
        );
        if self.round_button(ui, next, "next-button", self.last, Chevron::Right) {
            clicks.push(Input::NextButton);
        }

        let mut x = prev.right() + spacing + dot / 2.0;
        for index in 0..self.total {
            let center = egui::pos2(x, pill.center().y);
            let hit = egui::Rect::from_center_size(center, egui::vec2(dot + dot_gap, button_size));
            let response = self.button(ui, hit, &format!("indicator-{index}"));
            let hovered = response.as_ref().is_some_and(|r| r.hovered());
            let (radius, color) = if index == self.current {
                (dot / 2.0 * 1.25, self.color(self.theme.accent, 1.0))
            } else if hovered {
                (dot / 2.0, self.color(fg, 0.6))
            } else {
                (dot / 2.0, self.color(fg, 0.4))
            };
            ui.painter().circle_filled(center, radius, color);
            if response.is_some_and(|r| r.clicked()) {
                clicks.push(Input::SelectSlide(index));
            }
            x += dot + dot_gap;
        }

        let counter_color = self.color(fg, 0.8);
        let counter = ui.painter().layout_no_wrap(
            format!("{} / {}", self.current + 1, self.total),
            egui::FontId::proportional(14.0),
            counter_color,
        );
        let pos = egui::pos2(
            pill.center().x - counter.rect.width() / 2.0,
            pill.bottom() + 16.0,
        );
        ui.painter().galley(pos, counter, counter_color);
    }

    /// Returns true when clicked. Disabled buttons are dimmed and inert.
    fn round_button(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        id: &str,
        disabled: bool,
        chevron: Chevron,
    ) -> bool {
        let fg = self.theme.chrome_foreground;
        let response = if disabled { None } else { self.button(ui, rect, id) };
        let hovered = response.as_ref().is_some_and(|r| r.hovered());
        let dim = if disabled { 0.5 } else { 1.0 };
        let fill = if hovered { 0.2 } else { 0.1 };
        ui.painter()
            .circle_filled(rect.center(), rect.width() / 2.0, self.color(fg, fill * dim));
        draw_chevron(ui, rect.shrink(14.0), chevron, self.color(fg, dim));
        response.is_some_and(|r| r.clicked())
    }

    fn draw_help(&self, ui: &egui::Ui, rect: egui::Rect) {
        let lines = [
            "\u{2190} \u{2192} : Navigate slides",
            "Space : Next slide",
            "F : Fullscreen",
        ];
        let margin = 16.0;
        let padding = 12.0;
        let color = self.color(self.theme.chrome_foreground, 0.7);
        let galleys: Vec<_> = lines
            .iter()
            .map(|l| {
                ui.painter()
                    .layout_no_wrap(l.to_string(), egui::FontId::proportional(12.0), color)
            })
            .collect();
        let width = galleys.iter().map(|g| g.rect.width()).fold(0.0, f32::max);
        let line_height = galleys.first().map_or(0.0, |g| g.rect.height()) + 4.0;
        let height = line_height * galleys.len() as f32 - 4.0;
        let card = egui::Rect::from_min_max(
            egui::pos2(
                rect.right() - margin - width - padding * 2.0,
                rect.bottom() - margin - height - padding * 2.0,
            ),
            rect.right_bottom() - egui::vec2(margin, margin),
        );
        ui.painter()
            .rect_filled(card, 8.0, self.color(self.theme.chrome_background, 1.0));
        let mut y = card.top() + padding;
        for galley in galleys {
            ui.painter()
                .galley(egui::pos2(card.left() + padding, y), galley, color);
            y += line_height;
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Chevron {
    Left,
    Right,
}

fn draw_chevron(ui: &egui::Ui, area: egui::Rect, chevron: Chevron, color: egui::Color32) {
    let stroke = egui::Stroke::new(2.0, color);
    let (tip, back) = match chevron {
        Chevron::Left => (area.left() + area.width() * 0.3, area.right() - area.width() * 0.3),
        Chevron::Right => (area.right() - area.width() * 0.3, area.left() + area.width() * 0.3),
    };
    let points = vec![
        egui::pos2(back, area.top()),
        egui::pos2(tip, area.center().y),
        egui::pos2(back, area.bottom()),
    ];
    ui.painter().add(egui::Shape::line(points, stroke));
}

/// Four corner brackets.
fn draw_expand_icon(ui: &egui::Ui, area: egui::Rect, color: egui::Color32) {
    let stroke = egui::Stroke::new(2.0, color);
    let arm = area.width() * 0.35;
    let corners = [
        (area.left_top(), egui::vec2(1.0, 1.0)),
        (area.right_top(), egui::vec2(-1.0, 1.0)),
        (area.left_bottom(), egui::vec2(1.0, -1.0)),
        (area.right_bottom(), egui::vec2(-1.0, -1.0)),
    ];
    for (corner, dir) in corners {
        let points = vec![
            corner + egui::vec2(arm * dir.x, 0.0),
            corner,
            corner + egui::vec2(0.0, arm * dir.y),
        ];
        ui.painter().add(egui::Shape::line(points, stroke));
    }
}

/// Zero-based start slide: the `--slide` flag (one-based) wins over the
/// configured start mode.
fn start_slide(cli_slide: Option<usize>, config_start: Option<&str>, total: usize) -> usize {
    let last = total.saturating_sub(1);
    let start = match (cli_slide, config_start) {
        (Some(n), _) => n.saturating_sub(1),
        (None, Some("last")) => last,
        (None, Some("first") | None) => 0,
        (None, Some(n)) => n.parse::<usize>().map_or(0, |n| n.saturating_sub(1)),
    };
    start.min(last)
}

pub fn run(
    path: PathBuf,
    windowed: bool,
    slide: Option<usize>,
    render: Option<RenderPolicy>,
) -> anyhow::Result<()> {
    let deck = deck::load(&path)?;
    if deck.registry.is_empty() {
        anyhow::bail!("No slides found in {}", path.display());
    }

    let total = deck.registry.count();

    let config = Config::load_or_default();
    let start = start_slide(slide, config.start_mode(), total);
    let policy = render
        .or_else(|| config.render().and_then(RenderPolicy::from_name))
        .unwrap_or_default();

    let mut theme = Theme::from_name(config.theme().unwrap_or("light"));
    if let Some(colors) = &deck.meta.theme {
        theme = theme.with_deck_colors(colors);
    }

    let title = if deck.meta.name.is_empty() {
        format!(
            "pitchdeck - {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        )
    } else {
        deck.meta.name.clone()
    };

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    tracing::info!(
        start = start + 1,
        total,
        ?policy,
        theme = %theme.name,
        windowed,
        "starting presentation"
    );

    let idle = config.idle_durations();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let session = Session::new(total, start, idle, !windowed, Instant::now());
            Ok(Box::new(PitchDeckApp::new(deck, session, theme, policy)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
