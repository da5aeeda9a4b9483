use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::timeline::Timeline;

/// Engine-wide settings. Every field has a default, so a JSON file only lists overrides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Drawing surface size.
    pub canvas: Canvas,
    /// Tick rate; also fixes the exported per-frame delay.
    pub fps: Fps,
    /// Frames per cycle.
    pub total_frames: u32,
    /// Leading fraction of the cycle that carries the animation.
    pub animate_portion: f64,
    /// Radial-petal hold slow-down divisor.
    pub hold_divisor: u32,
    /// GIF quantizer speed, 1 (best) to 30 (fastest).
    pub gif_speed: i32,
    /// Canvas clear color before the grid is drawn.
    pub clear_rgba: Rgba8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let timeline = Timeline::default();
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            total_frames: timeline.total_frames,
            animate_portion: timeline.animate_portion,
            hold_divisor: timeline.hold_divisor,
            gif_speed: 10,
            clear_rgba: Rgba8::WHITE,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| MotionError::serde(format!("invalid engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> MotionResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(MotionError::validation("canvas width/height must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(MotionError::validation(
                "canvas width/height must fit in u16",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(MotionError::validation("fps must have num>0 and den>0"));
        }
        if !(1..=30).contains(&self.gif_speed) {
            return Err(MotionError::validation("gif_speed must be in 1..=30"));
        }
        self.timeline().validate()
    }

    pub fn timeline(&self) -> Timeline {
        Timeline {
            total_frames: self.total_frames,
            animate_portion: self.animate_portion,
            hold_divisor: self.hold_divisor,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
