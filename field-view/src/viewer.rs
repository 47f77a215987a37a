//! Hosting view for the particle-field background, built with eframe/egui.
//!
//! This module defines [`Viewer`], which mounts a [`ParticleField`] on the
//! central panel, relays resize and frame events to it, and draws the
//! hero card on top.

use eframe::App;
use field_core::field::{FrameOutcome, ParticleField, StartOutcome};

use crate::{
    config::{HeroConfig, ViewConfig},
    panel::{EguiHost, PanelSurface},
};

/// Background behind the field, matching the page's dark theme.
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 12, 18);

/// Full pointer parallax range in pixels (`±PARALLAX_RANGE / 2`).
const PARALLAX_RANGE: f32 = 20.0;

/// Share of the parallax applied to the hero card.
const HERO_PARALLAX: f32 = 0.5;

/// Main application state.
///
/// [`Viewer`] glues together:
/// - The simulator: a [`ParticleField`] mounted on a [`PanelSurface`].
/// - The host side: an [`EguiHost`] that turns frame requests into repaints.
/// - The foreground hero card and the start/stop controls.
///
/// The per-update sequence is:
/// 1. Mount the field if it should run and is not mounted yet.
/// 2. Notify the field if the panel size changed.
/// 3. Deliver the pending frame, if any.
/// 4. Paint the recorded shapes, then the hero card.
///
/// ### Fields
/// - `cfg` - View configuration; `cfg.field` seeds every new mount.
/// - `seed` - Fixed seed for node placement, if reproducibility is wanted.
/// - `field` - The simulator.
/// - `host` - Frame scheduler and resize source.
/// - `want_running` - Whether the background should be mounted.
/// - `parallax` - Last pointer parallax offset.
pub struct Viewer {
    cfg: ViewConfig,
    seed: Option<u64>,
    field: ParticleField<PanelSurface>,
    host: EguiHost,
    want_running: bool,
    parallax: egui::Vec2,
}

impl Viewer {
    /// Creates a viewer; the field mounts on the first layout pass.
    ///
    /// ### Parameters
    /// - `ctx` - egui context used to request repaints.
    /// - `cfg` - Field and hero configuration.
    /// - `seed` - Optional fixed seed for node placement.
    /// - `paused` - Start with the background unmounted.
    pub fn new(ctx: egui::Context, cfg: ViewConfig, seed: Option<u64>, paused: bool) -> Self {
        let field = ParticleField::with_seed(cfg.field, seed);
        Self {
            cfg,
            seed,
            field,
            host: EguiHost::new(ctx),
            want_running: !paused,
            parallax: egui::Vec2::ZERO,
        }
    }

    /// Mounts the field on a surface covering `rect`.
    fn mount(&mut self, rect: egui::Rect) {
        match self.field.start(PanelSurface::new(rect), &mut self.host) {
            StartOutcome::Started => {}
            StartOutcome::NoContext(_) => {
                // The background is decorative; keep the rest of the view.
                self.want_running = false;
            }
            StartOutcome::AlreadyRunning(_) => {}
        }
    }

    /// Unmounts the field. A later mount reseeds from scratch.
    fn unmount(&mut self) {
        if self.field.stop(&mut self.host).is_some() {
            // Fresh rng state per mount so a fixed seed replays the same layout.
            self.field = ParticleField::with_seed(self.cfg.field, self.seed);
        }
    }

    /// Runs one update of the background for the panel at `rect`.
    ///
    /// ### Returns
    /// The outcome of the delivered frame, or `None` if no frame was due.
    fn drive_field(&mut self, rect: egui::Rect) -> Option<FrameOutcome> {
        if self.want_running && !self.field.is_running() {
            self.mount(rect);
        }

        let resized = self
            .field
            .element_mut()
            .is_some_and(|surface| surface.update_rect(rect));
        if resized && self.host.has_resize_listener() {
            self.field.handle_resize();
        }

        let handle = self.host.take_frame()?;
        Some(self.field.on_frame(handle, &mut self.host))
    }

    /// Builds the top panel (start/stop control).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.want_running { "⏸ Stop" } else { "▶ Start" };
                if ui.button(label).clicked() {
                    self.want_running = !self.want_running;
                    if !self.want_running {
                        self.unmount();
                    }
                }
            });
        });
    }

    /// Builds the bottom status bar (nodes, links, surface, frames).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("frames = {}", self.field.frames_drawn()));
                if let Some(surface) = self.field.element() {
                    let buffer = surface.buffer();
                    ui.label(format!("surface = {}x{}", buffer.width, buffer.height));
                }
                ui.separator();
                ui.label(format!("links = {}", self.field.last_stats().links));
                ui.label(format!("nodes = {}", self.field.node_count()));
            });
        });
    }

    /// Builds the central panel that hosts the field.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                self.drive_field(rect);

                if let Some(pointer) = response.hover_pos() {
                    self.parallax = parallax_offset(pointer, rect);
                }

                if let Some(surface) = self.field.element() {
                    ui.painter_at(rect).extend(surface.shapes().iter().cloned());
                }
            });
    }

    /// Draws the hero card above the field.
    fn ui_hero(&self, ctx: &egui::Context) {
        egui::Area::new("hero".into())
            .anchor(egui::Align2::CENTER_CENTER, self.parallax * HERO_PARALLAX)
            .movable(false)
            .interactable(false)
            .show(ctx, |ui| hero_card(ui, &self.cfg.hero));
    }
}

fn hero_card(ui: &mut egui::Ui, hero: &HeroConfig) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&hero.greeting).small().strong());
        ui.label(egui::RichText::new(&hero.name).size(48.0).strong());
        ui.label(egui::RichText::new(&hero.title).size(22.0));
        if !hero.tagline.is_empty() {
            ui.add_space(8.0);
            ui.label(hero.tagline.as_str());
        }
    });
}

/// Pointer parallax for `pointer` inside `rect`.
///
/// Each axis maps the pointer's relative position `t` in `[0, 1]` to
/// `(t - 0.5) * PARALLAX_RANGE`, so the centre gives zero and the edges
/// give `±PARALLAX_RANGE / 2`.
fn parallax_offset(pointer: egui::Pos2, rect: egui::Rect) -> egui::Vec2 {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let tx = (pointer.x - rect.min.x) / rect.width();
    let ty = (pointer.y - rect.min.y) / rect.height();
    egui::vec2(tx - 0.5, ty - 0.5) * PARALLAX_RANGE
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
        self.ui_hero(ctx);
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.field.stop(&mut self.host);
    }
}
