//! Recording doubles for the canvas, element and host seams.

use glam::Vec2;

use crate::{
    color::Rgba,
    surface::{Canvas, FrameHost, Surface, SurfaceElement},
    types::{FrameHandle, ListenerId},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Draw {
    Clear(Surface),
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub draws: Vec<Draw>,
}

impl RecordingCanvas {
    pub fn lines(&self) -> Vec<(Vec2, Vec2, f32, Rgba)> {
        self.draws
            .iter()
            .filter_map(|d| match *d {
                Draw::Line { a, b, width, color } => Some((a, b, width, color)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.draws
            .iter()
            .filter(|d| matches!(d, Draw::Circle { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, surface: Surface) {
        self.draws.push(Draw::Clear(surface));
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        self.draws.push(Draw::Line { a, b, width, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.draws.push(Draw::Circle {
            center,
            radius,
            color,
        });
    }
}

/// An element whose container size is set by the test.
#[derive(Debug)]
pub struct TestElement {
    pub container: Surface,
    pub buffer: Surface,
    pub canvas: Option<RecordingCanvas>,
}

impl TestElement {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            container: Surface::new(width, height),
            buffer: Surface::default(),
            canvas: Some(RecordingCanvas::default()),
        }
    }

    /// An element in an environment without 2D drawing support.
    pub fn without_context(width: u32, height: u32) -> Self {
        Self {
            canvas: None,
            ..Self::new(width, height)
        }
    }

    pub fn draws(&self) -> usize {
        self.canvas.as_ref().map_or(0, |c| c.draws.len())
    }
}

impl SurfaceElement for TestElement {
    fn container_size(&self) -> Surface {
        self.container
    }

    fn set_buffer_size(&mut self, size: Surface) {
        self.buffer = size;
    }

    fn context_2d(&mut self) -> Option<&mut dyn Canvas> {
        self.canvas.as_mut().map(|c| c as &mut dyn Canvas)
    }
}

/// Host that hands out sequential ids and tracks what is registered.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next: u64,
    pub pending_frames: Vec<FrameHandle>,
    pub listeners: Vec<ListenerId>,
    pub frames_requested: usize,
    pub frames_cancelled: usize,
}

impl RecordingHost {
    /// Takes the oldest pending frame handle, as a display refresh would.
    pub fn next_frame(&mut self) -> Option<FrameHandle> {
        if self.pending_frames.is_empty() {
            None
        } else {
            Some(self.pending_frames.remove(0))
        }
    }
}

impl FrameHost for RecordingHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending_frames.push(handle);
        self.frames_requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending_frames.retain(|&h| h != handle);
        self.frames_cancelled += 1;
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|&l| l != id);
    }
}
