//! batik-motion renders choreographed procedural batik motifs.
//!
//! Three motifs (banded diagonal, diamond vine, radial petal) are drawn cell by cell, tiled
//! across a grid, and revealed over a fixed-length looping cycle:
//!
//! - Pick a [`MotifKind`] and thread one [`AnimationState`] through [`advance`]
//! - Turn a state into a [`Scene`] of draw ops with [`render`]
//! - Rasterize with [`CpuBackend`] and stream frames into a [`FrameSink`]
//!
//! [`Player`] bundles all of that with key commands and GIF recording for headless hosts.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// Engine configuration.
pub mod config;
/// Frame sinks (GIF, PNG sequence, in-memory).
pub mod encode;
pub(crate) mod geometry;
/// Motif catalog and per-cell renderers.
pub mod motif;
/// Rasterization backends.
pub mod render;
pub(crate) mod scene;
/// Key commands, recording and the headless player.
pub mod session;
/// Frame counter, global time and the step/render functions.
pub mod timeline;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, Size, Vec2,
};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::stage::{StageProgress, StageSchedule, StageWindow};
pub use crate::config::EngineConfig;
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::geometry::curve::{CURVE_RESOLUTION, CurveTable, STRIPE_CURVE, sample_stripe_curve};
pub use crate::motif::{MotifKind, MotifRenderer};
pub use crate::render::backend::{FrameRGBA, RenderBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::scene::grid::{GridShape, compose};
pub use crate::scene::op::{DrawOp, Scene};
pub use crate::scene::painter::Painter;
pub use crate::session::input::Command;
pub use crate::session::player::Player;
pub use crate::session::recorder::{RecordFormat, Recorder, RecorderPhase, RecordingOutcome};
pub use crate::timeline::{AnimationState, FrameClock, Timeline, advance, render};
