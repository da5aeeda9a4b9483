use crate::config::EngineConfig;
use crate::foundation::error::MotionResult;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::cpu::CpuBackend;
use crate::session::input::Command;
use crate::session::recorder::{Recorder, RecordingOutcome};
use crate::timeline::{AnimationState, Timeline, advance, render};

/// Windowless host loop: one [`AnimationState`], a rasterizer and a [`Recorder`].
///
/// Each [`Player::tick`] is one display refresh: render the current frame, feed the recorder,
/// then advance.
pub struct Player {
    cfg: EngineConfig,
    timeline: Timeline,
    state: AnimationState,
    backend: CpuBackend,
    recorder: Recorder,
    last_frame: Option<FrameRGBA>,
}

impl Player {
    pub fn new(cfg: EngineConfig, recorder: Recorder) -> MotionResult<Self> {
        cfg.validate()?;
        Ok(Self {
            timeline: cfg.timeline(),
            cfg,
            state: AnimationState::default(),
            backend: CpuBackend::new(),
            recorder,
            last_frame: None,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut Recorder {
        &mut self.recorder
    }

    /// The frame drawn by the most recent tick.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Apply a key command between ticks.
    pub fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::SelectMotif(motif) => {
                self.state = self.state.select(motif);
                tracing::info!(motif = motif.name(), "motif selected");
            }
            Command::StartRecording => {
                if self.recorder.start(self.state.motif, &self.cfg) {
                    self.state = self.state.restart();
                }
            }
        }
    }

    /// Route a raw key press; unbound keys are ignored.
    pub fn key(&mut self, key: char) {
        if let Some(cmd) = Command::from_key(key) {
            self.handle(cmd);
        }
    }

    /// Render, record, advance. Returns a recording outcome when one completes on this tick.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn tick(&mut self) -> MotionResult<Option<RecordingOutcome>> {
        let scene = render(&self.state, &self.cfg);
        let frame = self.backend.render_scene(&scene)?;
        tracing::debug!(
            motif = self.state.motif.name(),
            frame = self.state.frame_index,
            tick = self.state.tick,
            "frame rendered"
        );

        if self.recorder.is_recording() {
            self.recorder.push(frame.clone());
            if self.state.frame_index == self.timeline.last_frame() {
                self.recorder.finish(self.state.motif);
            }
        }
        self.last_frame = Some(frame);

        self.state = advance(self.state, &self.timeline);
        Ok(self.recorder.poll())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
