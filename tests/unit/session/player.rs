use super::*;
use crate::foundation::core::Canvas;
use crate::motif::MotifKind;
use crate::session::recorder::{RecordFormat, RecorderPhase};
use image::AnimationDecoder as _;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("batik_player_{name}_{}_{nanos}", std::process::id()))
}

fn small_cfg(total_frames: u32) -> EngineConfig {
    EngineConfig {
        canvas: Canvas {
            width: 40,
            height: 40,
        },
        total_frames,
        hold_divisor: 3,
        ..EngineConfig::default()
    }
}

fn player(name: &str, total_frames: u32) -> Player {
    Player::new(
        small_cfg(total_frames),
        Recorder::new(temp_dir(name), RecordFormat::Gif),
    )
    .unwrap()
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = EngineConfig {
        total_frames: 0,
        ..EngineConfig::default()
    };
    assert!(Player::new(cfg, Recorder::new(temp_dir("bad"), RecordFormat::Gif)).is_err());
}

#[test]
fn tick_renders_then_advances() {
    let mut p = player("tick", 10);
    assert!(p.last_frame().is_none());
    assert!(p.tick().unwrap().is_none());
    assert_eq!(p.state().frame_index, 1);
    assert_eq!(p.state().tick, 1);
    let frame = p.last_frame().unwrap();
    assert_eq!((frame.width, frame.height), (40, 40));
}

#[test]
fn keys_switch_motif_and_restart() {
    let mut p = player("keys", 10);
    for _ in 0..5 {
        p.tick().unwrap();
    }
    p.key('3');
    assert_eq!(p.state().motif, MotifKind::RadialPetal);
    assert_eq!(p.state().frame_index, 0);
    assert_eq!(p.state().tick, 5);

    p.key('x');
    assert_eq!(p.state().motif, MotifKind::RadialPetal);
}

#[test]
fn recording_captures_exactly_one_cycle() {
    let mut p = player("cycle", 6);
    p.key('2');
    p.tick().unwrap();
    p.tick().unwrap();
    p.key('r');
    assert_eq!(p.state().frame_index, 0);
    assert_eq!(p.recorder().phase(), RecorderPhase::Recording);

    // Another 'r' mid-session changes nothing.
    p.tick().unwrap();
    p.key('R');
    assert_eq!(p.state().frame_index, 1);

    let mut outcome = None;
    for _ in 0..50 {
        outcome = p.tick().unwrap();
        if outcome.is_some() || p.recorder().phase() == RecorderPhase::Finalizing {
            break;
        }
    }
    let outcome = outcome.or_else(|| p.recorder_mut().wait());
    let (motif, path) = match outcome {
        Some(RecordingOutcome::Finished { motif, path }) => (motif, path),
        other => panic!("recording did not finish: {other:?}"),
    };
    assert_eq!(motif, MotifKind::DiamondVine);
    assert!(path.ends_with("pattern2.gif"));

    let file = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let frames = image::codecs::gif::GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 6);
    assert_eq!(p.recorder().phase(), RecorderPhase::Idle);
    let _ = std::fs::remove_dir_all(p.recorder().out_dir());
}

#[test]
fn playback_continues_while_finalizing() {
    let mut p = player("finalize", 3);
    p.key('3');
    p.key('r');
    for _ in 0..3 {
        p.tick().unwrap();
    }
    // The last frame was recorded; tick 3 is a multiple of the hold divisor, so the cycle wrapped.
    assert_ne!(p.recorder().phase(), RecorderPhase::Recording);
    assert_eq!(p.state().frame_index, 0);
    assert_eq!(p.state().tick, 3);
    let before = p.state().tick;
    p.tick().unwrap();
    assert_eq!(p.state().tick, before + 1);
    let _ = p.recorder_mut().wait();
    let _ = std::fs::remove_dir_all(p.recorder().out_dir());
}

fn tick_until_closed(p: &mut Player) -> Option<RecordingOutcome> {
    for _ in 0..100 {
        if let Some(outcome) = p.tick().unwrap() {
            return Some(outcome);
        }
        if p.recorder().phase() == RecorderPhase::Finalizing {
            return p.recorder_mut().wait();
        }
    }
    None
}

#[test]
fn switching_motif_mid_recording_names_the_artifact_after_it() {
    let mut p = player("switch", 6);
    p.key('1');
    p.key('r');
    p.tick().unwrap();
    p.tick().unwrap();
    p.key('3');
    assert_eq!(p.recorder().phase(), RecorderPhase::Recording);

    match tick_until_closed(&mut p) {
        Some(RecordingOutcome::Finished { motif, path }) => {
            assert_eq!(motif, MotifKind::RadialPetal);
            assert!(path.ends_with("pattern3.gif"), "{}", path.display());
            assert!(path.is_file());
        }
        other => panic!("recording did not finish: {other:?}"),
    }
    assert_eq!(p.state().motif, MotifKind::RadialPetal);
    assert!(!p.recorder().out_dir().join("pattern1.gif").exists());
    let _ = std::fs::remove_dir_all(p.recorder().out_dir());
}

#[test]
fn truncated_recording_is_cancelled_not_saved() {
    let mut p = player("truncated", 6);
    p.key('r');
    p.tick().unwrap();
    p.tick().unwrap();
    match p.recorder_mut().wait() {
        Some(RecordingOutcome::Cancelled { motif, frames }) => {
            assert_eq!(motif, MotifKind::BandedDiagonal);
            assert_eq!(frames, 2);
        }
        other => panic!("partial cycle was not cancelled: {other:?}"),
    }
    assert!(!p.recorder().artifact_path(MotifKind::BandedDiagonal).exists());
    assert!(!p.recorder().staging_path().exists());

    // A fresh session can start afterwards.
    p.key('r');
    assert_eq!(p.recorder().phase(), RecorderPhase::Recording);
    let _ = p.recorder_mut().wait();
    let _ = std::fs::remove_dir_all(p.recorder().out_dir());
}
