//! Drawing surface and the seams the field is driven through.
//!
//! The field never talks to a window system directly. A host view
//! provides:
//! - a [`SurfaceElement`] that knows its container size and may hand out
//!   a 2D [`Canvas`],
//! - a [`FrameHost`] that schedules frame callbacks and delivers resize
//!   notifications.
//!
//! Tests drive the field by implementing both with recorders and feeding
//! synthetic frame and resize events.

use glam::Vec2;

use crate::{
    color::Rgba,
    types::{FrameHandle, ListenerId},
};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Size as a float vector, for bounds checks in surface coordinates.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Whether `p` lies in `[0, width] × [0, height]`.
    pub fn contains(&self, p: Vec2) -> bool {
        let e = self.extent();
        (0.0..=e.x).contains(&p.x) && (0.0..=e.y).contains(&p.y)
    }
}

/// Immediate-mode 2D drawing context, in surface coordinates.
pub trait Canvas {
    /// Erases everything on the surface.
    fn clear(&mut self, surface: Surface);

    /// Strokes a straight segment from `a` to `b`.
    fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// The element a field is mounted on.
pub trait SurfaceElement {
    /// Current usable size of the element's container.
    fn container_size(&self) -> Surface;

    /// Resizes the drawing buffer. Called before the next frame draws.
    fn set_buffer_size(&mut self, size: Surface);

    /// The element's 2D drawing context, or `None` if the environment
    /// cannot provide one.
    fn context_2d(&mut self) -> Option<&mut dyn Canvas>;
}

/// Frame scheduling and resize notification, owned by the host view.
pub trait FrameHost {
    /// Requests one frame callback; the host later calls
    /// [`crate::field::ParticleField::on_frame`] with the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Revokes a pending frame request.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Subscribes to container size changes; notifications are delivered
    /// through [`crate::field::ParticleField::handle_resize`].
    fn add_resize_listener(&mut self) -> ListenerId;

    fn remove_resize_listener(&mut self, id: ListenerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_does_not_overflow_u32() {
        let s = Surface::new(100_000, 100_000);
        assert_eq!(s.area(), 10_000_000_000);
    }

    #[test]
    fn contains_includes_edges() {
        let s = Surface::new(100, 50);
        assert!(s.contains(Vec2::new(0.0, 0.0)));
        assert!(s.contains(Vec2::new(100.0, 50.0)));
        assert!(!s.contains(Vec2::new(100.1, 10.0)));
        assert!(!s.contains(Vec2::new(10.0, -0.1)));
    }
}
