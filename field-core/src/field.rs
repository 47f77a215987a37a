//! The particle field simulator and its mount/unmount lifecycle.
//!
//! A [`ParticleField`] owns its node set and, while running, the
//! [`SurfaceElement`] it draws on. The host view drives it:
//!
//! 1. [`ParticleField::start`] on mount: sizes the element, seeds the
//!    nodes, registers one resize listener and requests one frame.
//! 2. [`ParticleField::handle_resize`] whenever the container size changes.
//! 3. [`ParticleField::on_frame`] for each frame callback; draws one frame
//!    and requests the next.
//! 4. [`ParticleField::stop`] on teardown: revokes both registrations and
//!    drops the nodes.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::FieldConfig,
    node::NodeSet,
    phases::{self, FrameStats},
    surface::{FrameHost, Surface, SurfaceElement},
    types::{FrameHandle, ListenerId},
};

/// Result of [`ParticleField::start`].
///
/// When the field does not start, the element is handed back untouched.
#[derive(Debug)]
pub enum StartOutcome<E> {
    Started,
    /// The element has no 2D drawing context; nothing was registered.
    NoContext(E),
    /// A loop is already running; the caller must `stop` it first.
    AlreadyRunning(E),
}

impl<E> StartOutcome<E> {
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}

/// Result of [`ParticleField::on_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn(FrameStats),
    /// The context disappeared; nothing drawn, next frame still requested.
    Skipped,
    /// Not the pending handle, or the field is stopped.
    Ignored,
}

/// State held only while the loop runs.
#[derive(Debug)]
struct Run<E> {
    element: E,
    frame: FrameHandle,
    listener: ListenerId,
}

/// Decorative particle-network simulator.
///
/// ### Fields
/// - `cfg` - Constants of the field (link distance, density, colours).
/// - `rng` - Used once per mount to seed the nodes.
/// - `surface` - Current buffer size; reflection bounds read it every frame.
/// - `nodes` - `None` until the first sizing of a mount.
/// - `run` - Element and host registrations of the active loop.
#[derive(Debug)]
pub struct ParticleField<E> {
    cfg: FieldConfig,
    rng: StdRng,
    surface: Surface,
    nodes: Option<NodeSet>,
    run: Option<Run<E>>,
    frames_drawn: u64,
    last_stats: FrameStats,
}

impl<E: SurfaceElement> ParticleField<E> {
    pub fn new(cfg: FieldConfig, rng: StdRng) -> Self {
        Self {
            cfg,
            rng,
            surface: Surface::default(),
            nodes: None,
            run: None,
            frames_drawn: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Creates a field seeded from `seed`, or from the OS when `None`.
    pub fn with_seed(cfg: FieldConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(cfg, rng)
    }

    /// Mounts the field on `element` and starts the frame loop.
    ///
    /// The element must already report the size it should render at.
    /// The steps are:
    /// 1. Refuse if a loop is running, or if the element has no 2D context.
    /// 2. Size the buffer to the container ([`Self::handle_resize`]).
    /// 3. Seed `cfg.node_count(surface)` nodes if this mount has none yet.
    /// 4. Register one resize listener and request one frame.
    ///
    /// ### Returns
    /// [`StartOutcome::Started`], or the element back when nothing was done.
    pub fn start(&mut self, mut element: E, host: &mut impl FrameHost) -> StartOutcome<E> {
        if self.run.is_some() {
            log::warn!("particle field already running; start ignored");
            return StartOutcome::AlreadyRunning(element);
        }
        if element.context_2d().is_none() {
            log::warn!("no 2D drawing context; particle field disabled");
            return StartOutcome::NoContext(element);
        }

        self.surface = resize_element(&mut element);
        if self.nodes.is_none() {
            self.nodes = Some(NodeSet::seed(self.surface, &self.cfg, &mut self.rng));
        }

        let listener = host.add_resize_listener();
        let frame = host.request_frame();
        self.run = Some(Run {
            element,
            frame,
            listener,
        });

        log::info!(
            "particle field started: {}x{} surface, {} nodes",
            self.surface.width,
            self.surface.height,
            self.node_count()
        );
        StartOutcome::Started
    }

    /// Cancels the loop and unmounts.
    ///
    /// No draw happens after this returns, even if the host still
    /// delivers the old frame handle. Calling it again, or before any
    /// `start`, does nothing.
    ///
    /// ### Returns
    /// The element the field was mounted on, if it was running.
    pub fn stop(&mut self, host: &mut impl FrameHost) -> Option<E> {
        let run = self.run.take()?;
        host.cancel_frame(run.frame);
        host.remove_resize_listener(run.listener);
        self.nodes = None;

        log::info!("particle field stopped after {} frames", self.frames_drawn);
        Some(run.element)
    }

    /// Resize notification: rereads the container size and resizes the
    /// buffer. Never re-seeds; only the reflection bounds change.
    pub fn handle_resize(&mut self) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let size = resize_element(&mut run.element);
        if size != self.surface {
            log::debug!(
                "particle field resized: {}x{} -> {}x{}",
                self.surface.width,
                self.surface.height,
                size.width,
                size.height
            );
        }
        self.surface = size;
    }

    /// Frame callback.
    ///
    /// Draws one frame (see [`phases::draw_frame`]) if `handle` is the
    /// pending request, then requests the next frame.
    pub fn on_frame(&mut self, handle: FrameHandle, host: &mut impl FrameHost) -> FrameOutcome {
        let Some(run) = self.run.as_mut() else {
            return FrameOutcome::Ignored;
        };
        if run.frame != handle {
            return FrameOutcome::Ignored;
        }
        let Some(nodes) = self.nodes.as_mut() else {
            return FrameOutcome::Ignored;
        };

        let outcome = match run.element.context_2d() {
            Some(canvas) => {
                let stats = phases::draw_frame(nodes, self.surface, canvas, &self.cfg);
                self.frames_drawn += 1;
                self.last_stats = stats;
                FrameOutcome::Drawn(stats)
            }
            None => FrameOutcome::Skipped,
        };

        run.frame = host.request_frame();
        outcome
    }
}

impl<E> ParticleField<E> {
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn nodes(&self) -> Option<&NodeSet> {
        self.nodes.as_ref()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.as_ref().map_or(0, NodeSet::len)
    }

    /// Frame handle the field is waiting for, if running.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.run.as_ref().map(|r| r.frame)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    pub fn element(&self) -> Option<&E> {
        self.run.as_ref().map(|r| &r.element)
    }

    pub fn element_mut(&mut self) -> Option<&mut E> {
        self.run.as_mut().map(|r| &mut r.element)
    }
}

fn resize_element(element: &mut impl SurfaceElement) -> Surface {
    let size = element.container_size();
    element.set_buffer_size(size);
    size
}
