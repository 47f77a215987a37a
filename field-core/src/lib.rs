//! Core of the animated particle-network background.
//!
//! Main components:
//! - [`field`] — the [`field::ParticleField`] simulator and its start/stop lifecycle.
//! - [`phases`] — the per-frame pipeline (links, advance, nodes).
//! - [`node`] — nodes and the fixed-size node set.
//! - [`surface`] — surface dimensions and the canvas/element/host seams.
//! - [`config`] — tunable constants of the field, loadable from TOML.
//! - [`color`] — HSLA colours and their RGBA conversion.
//! - [`error`] — configuration errors.
//! - [`types`] — shared ids and handles.

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod node;
pub mod phases;
pub mod surface;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
