//! Stage scheduling: one global time value fanned out into independent local progress values.
//!
//! A [`StageWindow`] is a `[start, end]` slice of the cycle. The scheduler never orders stages;
//! visual dependencies (a fill after its outline) come from how renderers pick their windows.

use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::clamp01;

/// `[start, end]` slice of normalized time during which one sub-animation runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageWindow {
    start: f64,
    end: f64,
}

impl StageWindow {
    /// Create a validated window with `0 <= start <= end <= 1`.
    pub fn new(start: f64, end: f64) -> MotionResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(MotionError::validation("stage window bounds must be finite"));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return Err(MotionError::validation(format!(
                "stage window [{start}, {end}] must lie within [0, 1]"
            )));
        }
        if start > end {
            return Err(MotionError::validation(format!(
                "stage window start {start} must be <= end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Window with bounds known to be valid at compile time.
    pub(crate) const fn fixed(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> f64 {
        self.start
    }

    pub fn end(self) -> f64 {
        self.end
    }

    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Local progress at time `t`, always in `[0, 1]`.
    ///
    /// Zero-length windows are instantaneous: 0 before `start`, 1 from `start` on.
    pub fn progress(self, t: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if t >= self.start { 1.0 } else { 0.0 };
        }
        clamp01((t - self.start) / span)
    }

    /// Eased local progress at time `t`.
    pub fn eased(self, t: f64, ease: Ease) -> f64 {
        ease.apply(self.progress(t))
    }

    /// The `index`-th of `count` equal consecutive sub-windows.
    ///
    /// `count == 0` yields the whole window.
    pub fn subdivide(self, index: usize, count: usize) -> Self {
        if count == 0 {
            return self;
        }
        let step = self.duration() / count as f64;
        let start = self.start + index as f64 * step;
        Self {
            start,
            end: start + step,
        }
    }
}

/// A named table of stage windows.
#[derive(Clone, Debug, Default)]
pub struct StageSchedule {
    stages: Vec<(&'static str, StageWindow)>,
}

impl StageSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the window registered under `name`.
    pub fn with(mut self, name: &'static str, window: StageWindow) -> Self {
        match self.stages.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = window,
            None => self.stages.push((name, window)),
        }
        self
    }

    pub fn window(&self, name: &str) -> Option<StageWindow> {
        self.stages
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Local progress of every stage at global time `t`.
    pub fn evaluate(&self, t: f64) -> StageProgress {
        StageProgress {
            values: self
                .stages
                .iter()
                .map(|(name, w)| (*name, w.progress(t)))
                .collect(),
        }
    }
}

/// Stage name to local progress, as produced by [`StageSchedule::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub struct StageProgress {
    values: Vec<(&'static str, f64)>,
}

impl StageProgress {
    /// Progress of `name`, or 0 for an unknown stage.
    pub fn get(&self, name: &str) -> f64 {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    pub fn eased(&self, name: &str, ease: Ease) -> f64 {
        ease.apply(self.get(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stage.rs"]
mod tests;
