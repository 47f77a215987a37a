//! egui implementations of the field's element and host seams.
//!
//! - [`PanelSurface`] is the element: its container is the central panel
//!   rect, and its canvas records [`egui::Shape`]s that the viewer paints.
//! - [`EguiHost`] schedules frames as egui repaints.

use field_core::{
    color::Rgba,
    surface::{Canvas, FrameHost, Surface, SurfaceElement},
    types::{FrameHandle, ListenerId},
};
use glam::Vec2;

/// Display list standing in for a pixel buffer.
///
/// Coordinates arrive surface-relative and are offset by `origin`, the
/// screen position of the panel's top-left corner.
#[derive(Debug, Default)]
pub struct ShapeCanvas {
    origin: egui::Pos2,
    shapes: Vec<egui::Shape>,
}

impl ShapeCanvas {
    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl Canvas for ShapeCanvas {
    fn clear(&mut self, _surface: Surface) {
        self.shapes.clear();
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        let points = [self.to_screen(a), self.to_screen(b)];
        self.shapes.push(egui::Shape::line_segment(
            points,
            egui::Stroke::new(width, color32(color)),
        ));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.shapes.push(egui::Shape::circle_filled(
            self.to_screen(center),
            radius,
            color32(color),
        ));
    }
}

/// The central panel as a drawing surface.
///
/// ### Fields
/// - `container` - Panel size as of the last layout pass.
/// - `buffer` - Size the field last sized the buffer to.
/// - `canvas` - Shapes of the last drawn frame.
#[derive(Debug, Default)]
pub struct PanelSurface {
    container: Surface,
    buffer: Surface,
    canvas: ShapeCanvas,
}

impl PanelSurface {
    pub fn new(rect: egui::Rect) -> Self {
        let mut surface = Self::default();
        surface.update_rect(rect);
        surface
    }

    /// Records the panel's current rect.
    ///
    /// ### Returns
    /// `true` when the container size changed and the field should be
    /// notified.
    pub fn update_rect(&mut self, rect: egui::Rect) -> bool {
        self.canvas.origin = rect.min;
        let size = surface_of(rect);
        let changed = size != self.container;
        self.container = size;
        changed
    }

    pub fn buffer(&self) -> Surface {
        self.buffer
    }

    pub fn shapes(&self) -> &[egui::Shape] {
        &self.canvas.shapes
    }
}

/// Whole-pixel size of a rect, as a canvas would have.
pub fn surface_of(rect: egui::Rect) -> Surface {
    Surface::new(
        rect.width().max(0.0).floor() as u32,
        rect.height().max(0.0).floor() as u32,
    )
}

impl SurfaceElement for PanelSurface {
    fn container_size(&self) -> Surface {
        self.container
    }

    fn set_buffer_size(&mut self, size: Surface) {
        self.buffer = size;
    }

    fn context_2d(&mut self) -> Option<&mut dyn Canvas> {
        Some(&mut self.canvas)
    }
}

/// Frame scheduler and resize source backed by an [`egui::Context`].
///
/// At most one frame is pending; each request asks egui for a repaint and
/// the viewer delivers the handle on the next update.
#[derive(Debug)]
pub struct EguiHost {
    ctx: egui::Context,
    next_id: u64,
    pending: Option<FrameHandle>,
    listeners: Vec<ListenerId>,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_id: 0,
            pending: None,
            listeners: Vec::new(),
        }
    }

    /// Takes the pending frame handle, if any.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn has_resize_listener(&self) -> bool {
        !self.listeners.is_empty()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl FrameHost for EguiHost {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        self.pending = Some(handle);
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next());
        self.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|&l| l != id);
    }
}
