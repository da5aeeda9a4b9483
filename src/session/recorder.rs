//! Recording state machine.
//!
//! `Idle -> Recording -> Finalizing -> Idle`. While recording, frames are handed over a bounded
//! channel to a worker thread that owns the [`FrameSink`]. The sink writes into a staging path in
//! the output directory; only a completed session is moved to its `pattern{N}` name, chosen from
//! the motif active at completion. A session closed before completion is cancelled and its staging
//! output removed. Nothing here blocks the caller except a full channel.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, SyncSender, TrySendError, sync_channel};
use std::thread::JoinHandle;

use anyhow::Context as _;

use crate::config::EngineConfig;
use crate::encode::gif::{GifSink, GifSinkOpts};
use crate::encode::png::PngSequenceSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{MotionError, MotionResult};
use crate::motif::MotifKind;
use crate::render::backend::FrameRGBA;

const CHANNEL_CAPACITY: usize = 4;

/// Artifact format produced by a recording.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// One looping `pattern{N}.gif`.
    #[default]
    Gif,
    /// A `pattern{N}/` directory of numbered PNG frames.
    PngSequence,
}

impl RecordFormat {
    fn staging_name(self) -> &'static str {
        match self {
            Self::Gif => ".recording.gif.part",
            Self::PngSequence => ".recording.frames.part",
        }
    }
}

/// Coarse recorder state, for hosts and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderPhase {
    Idle,
    Recording,
    Finalizing,
}

/// Result of a closed recording session.
#[derive(Debug)]
pub enum RecordingOutcome {
    /// The full cycle was encoded and saved under the completion motif's name.
    Finished { motif: MotifKind, path: PathBuf },
    /// Closed before the cycle completed; nothing was saved.
    Cancelled { motif: MotifKind, frames: u64 },
    Failed { motif: MotifKind, error: MotionError },
}

enum Message {
    Frame(FrameRGBA),
    Complete(PathBuf),
}

type Worker = JoinHandle<MotionResult<Option<PathBuf>>>;

enum State {
    Idle,
    Recording {
        motif: MotifKind,
        tx: SyncSender<Message>,
        worker: Worker,
        frames: u64,
    },
    Finalizing {
        motif: MotifKind,
        worker: Worker,
        frames: u64,
    },
}

/// Owns at most one recording session at a time.
pub struct Recorder {
    out_dir: PathBuf,
    format: RecordFormat,
    state: State,
}

impl Recorder {
    pub fn new(out_dir: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            out_dir: out_dir.into(),
            format,
            state: State::Idle,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn phase(&self) -> RecorderPhase {
        match self.state {
            State::Idle => RecorderPhase::Idle,
            State::Recording { .. } => RecorderPhase::Recording,
            State::Finalizing { .. } => RecorderPhase::Finalizing,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, State::Recording { .. })
    }

    /// Where a recording completed on `motif` lands.
    pub fn artifact_path(&self, motif: MotifKind) -> PathBuf {
        match self.format {
            RecordFormat::Gif => self.out_dir.join(motif.export_file_name()),
            RecordFormat::PngSequence => self.out_dir.join(format!("pattern{}", motif.id())),
        }
    }

    /// Where an open session writes before it is completed.
    pub fn staging_path(&self) -> PathBuf {
        self.out_dir.join(self.format.staging_name())
    }

    /// Open a session while `motif` is active. Returns `false` (and does nothing) unless idle.
    pub fn start(&mut self, motif: MotifKind, cfg: &EngineConfig) -> bool {
        if !matches!(self.state, State::Idle) {
            tracing::debug!(phase = ?self.phase(), "record request ignored; session active");
            return false;
        }

        let staging = self.staging_path();
        let bg = cfg.clear_rgba.to_array();
        let sink: Box<dyn FrameSink> = match self.format {
            RecordFormat::Gif => {
                let mut opts = GifSinkOpts::new(&staging);
                opts.bg_rgba = bg;
                opts.speed = cfg.gif_speed;
                Box::new(GifSink::new(opts))
            }
            RecordFormat::PngSequence => Box::new(PngSequenceSink::new(&staging, bg)),
        };
        let sink_cfg = SinkConfig {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
            fps: cfg.fps,
        };

        let (tx, rx) = sync_channel::<Message>(CHANNEL_CAPACITY);
        let worker = std::thread::spawn(move || drain(sink, sink_cfg, rx, staging));
        tracing::info!(motif = motif.name(), "recording started");
        self.state = State::Recording {
            motif,
            tx,
            worker,
            frames: 0,
        };
        true
    }

    /// Queue one frame. No-op unless recording.
    ///
    /// A worker that already failed moves the session to finalizing; the error surfaces from
    /// [`Recorder::poll`].
    pub fn push(&mut self, frame: FrameRGBA) {
        let State::Recording { tx, frames, .. } = &mut self.state else {
            return;
        };
        if send(tx, Message::Frame(frame)) {
            *frames += 1;
        } else {
            tracing::warn!("recording worker stopped early");
            self.cancel();
        }
    }

    /// Complete the session with `motif` active and let the worker finalize in the background.
    ///
    /// The artifact is named after `motif`.
    pub fn finish(&mut self, motif: MotifKind) {
        let target = self.artifact_path(motif);
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Recording {
                tx, worker, frames, ..
            } => {
                if !send(&tx, Message::Complete(target)) {
                    tracing::warn!("recording worker stopped before completion");
                }
                drop(tx);
                tracing::info!(motif = motif.name(), frames, "recording finalizing");
                self.state = State::Finalizing {
                    motif,
                    worker,
                    frames,
                };
            }
            other => self.state = other,
        }
    }

    /// Close an open session without completing it. Its output is discarded.
    pub fn cancel(&mut self) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Recording {
                motif,
                tx,
                worker,
                frames,
            } => {
                drop(tx);
                tracing::info!(motif = motif.name(), frames, "recording cancelled");
                self.state = State::Finalizing {
                    motif,
                    worker,
                    frames,
                };
            }
            other => self.state = other,
        }
    }

    /// Non-blocking completion check. Yields an outcome exactly once per session.
    pub fn poll(&mut self) -> Option<RecordingOutcome> {
        match &self.state {
            State::Finalizing { worker, .. } if worker.is_finished() => self.collect(),
            _ => None,
        }
    }

    /// Block until the current session is closed.
    ///
    /// A session still capturing is cancelled first, so a partial cycle never lands under an
    /// artifact name.
    pub fn wait(&mut self) -> Option<RecordingOutcome> {
        self.cancel();
        self.collect()
    }

    fn collect(&mut self) -> Option<RecordingOutcome> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Finalizing {
                motif,
                worker,
                frames,
            } => {
                let result = worker
                    .join()
                    .unwrap_or_else(|_| Err(MotionError::encode("recording worker panicked")));
                Some(match result {
                    Ok(Some(path)) => {
                        tracing::info!(motif = motif.name(), path = %path.display(), "recording saved");
                        RecordingOutcome::Finished { motif, path }
                    }
                    Ok(None) => RecordingOutcome::Cancelled { motif, frames },
                    Err(error) => {
                        tracing::warn!(motif = motif.name(), %error, "recording failed");
                        RecordingOutcome::Failed { motif, error }
                    }
                })
            }
            other => {
                self.state = other;
                None
            }
        }
    }
}

fn send(tx: &SyncSender<Message>, msg: Message) -> bool {
    match tx.try_send(msg) {
        Ok(()) => true,
        Err(TrySendError::Full(msg)) => tx.send(msg).is_ok(),
        Err(TrySendError::Disconnected(_)) => false,
    }
}

fn drain(
    sink: Box<dyn FrameSink>,
    cfg: SinkConfig,
    rx: Receiver<Message>,
    staging: PathBuf,
) -> MotionResult<Option<PathBuf>> {
    discard(&staging);
    let result = encode(sink, cfg, rx).and_then(|target| match target {
        Some(path) => promote(&staging, &path).map(|()| Some(path)),
        None => Ok(None),
    });
    if !matches!(result, Ok(Some(_))) {
        discard(&staging);
    }
    result
}

fn encode(
    mut sink: Box<dyn FrameSink>,
    cfg: SinkConfig,
    rx: Receiver<Message>,
) -> MotionResult<Option<PathBuf>> {
    sink.begin(cfg)?;
    let mut next = 0u64;
    for msg in rx {
        match msg {
            Message::Frame(frame) => {
                sink.push_frame(FrameIndex(next), &frame)?;
                next += 1;
            }
            Message::Complete(target) => {
                sink.end()?;
                return Ok(Some(target));
            }
        }
    }
    if let Err(error) = sink.end() {
        tracing::debug!(%error, "cancelled sink did not close cleanly");
    }
    Ok(None)
}

fn promote(staging: &Path, target: &Path) -> MotionResult<()> {
    if target.is_dir() {
        std::fs::remove_dir_all(target)
            .with_context(|| format!("failed to replace '{}'", target.display()))?;
    } else if target.exists() {
        std::fs::remove_file(target)
            .with_context(|| format!("failed to replace '{}'", target.display()))?;
    }
    std::fs::rename(staging, target).with_context(|| {
        format!(
            "failed to move '{}' to '{}'",
            staging.display(),
            target.display()
        )
    })?;
    Ok(())
}

fn discard(staging: &Path) {
    let removed = if staging.is_dir() {
        std::fs::remove_dir_all(staging)
    } else if staging.exists() {
        std::fs::remove_file(staging)
    } else {
        Ok(())
    };
    if let Err(error) = removed {
        tracing::warn!(path = %staging.display(), %error, "failed to remove partial recording");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/recorder.rs"]
mod tests;
