//! Timeline driver: the frame counter, the global time it implies, and the pure step/render
//! functions a host loop threads its single [`AnimationState`] through.

use crate::config::EngineConfig;
use crate::foundation::error::{MotionError, MotionResult};
use crate::motif::MotifKind;
use crate::scene::grid::compose;
use crate::scene::op::Scene;
use crate::scene::painter::Painter;

/// Cycle length and pacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Frames per cycle (`TOTAL_FRAMES`), at least 2.
    pub total_frames: u32,
    /// Leading fraction of the cycle that carries the whole animation; the rest holds at 1.
    pub animate_portion: f64,
    /// During the radial-petal hold the frame only advances on ticks divisible by this.
    pub hold_divisor: u32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            total_frames: 400,
            animate_portion: 0.8,
            hold_divisor: 15,
        }
    }
}

impl Timeline {
    pub fn validate(&self) -> MotionResult<()> {
        if self.total_frames < 2 {
            return Err(MotionError::validation("total_frames must be >= 2"));
        }
        if !self.animate_portion.is_finite()
            || self.animate_portion <= 0.0
            || self.animate_portion > 1.0
        {
            return Err(MotionError::validation(
                "animate_portion must be finite and in (0, 1]",
            ));
        }
        if self.hold_divisor == 0 {
            return Err(MotionError::validation("hold_divisor must be >= 1"));
        }
        Ok(())
    }

    pub fn last_frame(&self) -> u32 {
        self.total_frames.saturating_sub(1)
    }

    /// `frame / (total_frames - 1)`, before any remapping.
    pub fn raw_progress(&self, frame_index: u32) -> f64 {
        f64::from(frame_index) / f64::from(self.last_frame().max(1))
    }

    /// Raw progress stretched over the animate portion, then held at 1.
    pub fn global_time(&self, frame_index: u32) -> f64 {
        let raw = self.raw_progress(frame_index);
        if raw < self.animate_portion {
            raw / self.animate_portion
        } else {
            1.0
        }
    }
}

/// Every time source a motif may read for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameClock {
    /// Raw frame progress in `[0, 1]`.
    pub raw: f64,
    /// Remapped global time in `[0, 1]`.
    pub global: f64,
    /// Free-running tick counter.
    pub tick: u64,
}

impl FrameClock {
    pub fn at(state: &AnimationState, timeline: &Timeline) -> Self {
        Self {
            raw: timeline.raw_progress(state.frame_index),
            global: timeline.global_time(state.frame_index),
            tick: state.tick,
        }
    }

    /// Clock pinned to explicit values, handy for rendering a single cell.
    pub fn fixed(raw: f64, global: f64, tick: u64) -> Self {
        Self { raw, global, tick }
    }
}

/// The only mutable animation state; hosts own exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationState {
    pub motif: MotifKind,
    /// Position in the cycle, `0..total_frames`.
    pub frame_index: u32,
    /// Ticks elapsed since the host started; never reset.
    pub tick: u64,
}

impl AnimationState {
    pub fn new(motif: MotifKind) -> Self {
        Self {
            motif,
            frame_index: 0,
            tick: 0,
        }
    }

    /// Switch motif, discarding all stage progress.
    pub fn select(self, motif: MotifKind) -> Self {
        Self {
            motif,
            frame_index: 0,
            ..self
        }
    }

    /// Restart the current motif's cycle.
    pub fn restart(self) -> Self {
        Self {
            frame_index: 0,
            ..self
        }
    }

    pub fn clock(&self, timeline: &Timeline) -> FrameClock {
        FrameClock::at(self, timeline)
    }
}

/// One tick: bump the tick counter, then step the frame index.
///
/// The frame wraps to 0 after the last frame. While the radial-petal motif sits on its last frame
/// it only steps on ticks divisible by `hold_divisor`.
pub fn advance(state: AnimationState, timeline: &Timeline) -> AnimationState {
    let tick = state.tick.wrapping_add(1);
    let holding = state.motif == MotifKind::RadialPetal
        && timeline.raw_progress(state.frame_index) >= 1.0;
    let steps = !holding || tick % u64::from(timeline.hold_divisor.max(1)) == 0;
    let frame_index = if steps {
        (state.frame_index + 1) % timeline.total_frames.max(1)
    } else {
        state.frame_index
    };
    AnimationState {
        frame_index,
        tick,
        ..state
    }
}

/// Build the full scene for `state`. Pure: equal inputs give equal op lists.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(motif = state.motif.name(), frame = state.frame_index)
)]
pub fn render(state: &AnimationState, cfg: &EngineConfig) -> Scene {
    let timeline = cfg.timeline();
    let clock = state.clock(&timeline);
    let mut painter = Painter::new();
    compose(&mut painter, state.motif, cfg.canvas, &clock);
    Scene {
        canvas: cfg.canvas,
        clear: cfg.clear_rgba,
        ops: painter.finish(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/timeline.rs"]
mod tests;
