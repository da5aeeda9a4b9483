use std::path::PathBuf;

use anyhow::Context as _;

use crate::encode::flatten_over_bg;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::FrameRGBA;

/// Writes every frame as `frame_NNNNN.png` into one directory.
pub struct PngSequenceSink {
    dir: PathBuf,
    bg: [u8; 3],
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, bg_rgba: [u8; 4]) -> Self {
        Self {
            dir: dir.into(),
            bg: [bg_rgba[0], bg_rgba[1], bg_rgba[2]],
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(MotionError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MotionResult<()> {
        if self.cfg.is_none() {
            return Err(MotionError::encode("png sink not started"));
        }
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(MotionError::encode(format!(
                "frames must be pushed in increasing order (got {} after {})",
                idx.0, last.0
            )));
        }
        flatten_over_bg(&mut self.scratch, frame, self.bg)?;
        let path = self.dir.join(Self::file_name(idx));
        image::save_buffer_with_format(
            &path,
            &self.scratch,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| MotionError::encode(format!("failed to write '{}': {e}", path.display())))?;
        self.last_idx = Some(idx);
        Ok(())
    }

    fn end(&mut self) -> MotionResult<()> {
        if self.cfg.take().is_none() {
            return Err(MotionError::encode("png sink not started"));
        }
        Ok(())
    }
}
