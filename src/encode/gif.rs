use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::{ensure_parent_dir, flatten_over_bg};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::FrameRGBA;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// NeuQuant speed, 1 (best quality) to 30 (fastest).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [255, 255, 255, 255],
            speed: 10,
        }
    }
}

/// Sink that quantizes each frame and appends it to an infinitely looping GIF.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    delay: Option<Delay>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            delay: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
            frames_written: 0,
        }
    }

    /// Path the GIF is written to.
    pub fn out_path(&self) -> &std::path::Path {
        &self.opts.out_path
    }

    /// Frames appended since the last `begin`.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(MotionError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(MotionError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(MotionError::validation(
                "gif sink width/height must fit in u16",
            ));
        }
        if !(1..=30).contains(&self.opts.speed) {
            return Err(MotionError::validation("gif speed must be in 1..=30"));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(MotionError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let file = File::create(&self.opts.out_path).with_context(|| {
            format!("failed to create '{}'", self.opts.out_path.display())
        })?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), self.opts.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| MotionError::encode(format!("gif repeat: {e}")))?;

        let (numer, denom) = cfg.fps.frame_delay_ms();
        self.delay = Some(Delay::from_numer_denom_ms(numer, denom));
        self.encoder = Some(encoder);
        self.scratch = Vec::with_capacity((cfg.width as usize) * (cfg.height as usize) * 4);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MotionResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| MotionError::encode("gif sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(MotionError::encode(format!(
                "frames must be pushed in increasing order (got {} after {})",
                idx.0, last.0
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(MotionError::validation(format!(
                "frame size {}x{} does not match sink config {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }

        let [r, g, b, _] = self.opts.bg_rgba;
        flatten_over_bg(&mut self.scratch, frame, [r, g, b])?;
        let buffer = RgbaImage::from_raw(frame.width, frame.height, std::mem::take(&mut self.scratch))
            .ok_or_else(|| MotionError::encode("flattened frame has the wrong length"))?;
        let delay = self
            .delay
            .ok_or_else(|| MotionError::encode("gif sink not started"))?;

        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| MotionError::encode("gif sink not started"))?;
        encoder
            .encode_frame(Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| MotionError::encode(format!("gif frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> MotionResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| MotionError::encode("gif sink not started"))?;
        // Dropping the encoder writes the trailer and flushes the file.
        drop(encoder);
        self.cfg = None;

        if self.frames_written == 0 {
            return Err(MotionError::encode("gif sink finished without any frames"));
        }
        let len = std::fs::metadata(&self.opts.out_path)
            .with_context(|| format!("failed to stat '{}'", self.opts.out_path.display()))?
            .len();
        if len == 0 {
            return Err(MotionError::encode(format!(
                "gif '{}' is empty after finalizing",
                self.opts.out_path.display()
            )));
        }
        tracing::debug!(
            path = %self.opts.out_path.display(),
            frames = self.frames_written,
            bytes = len,
            "gif finalized"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
