use super::*;
use crate::foundation::core::Canvas;

fn temp_dir(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("batik_rec_{name}_{}_{nanos}", std::process::id()))
}

fn small_cfg() -> EngineConfig {
    EngineConfig {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        total_frames: 4,
        ..EngineConfig::default()
    }
}

fn solid(rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 8,
        height: 8,
        data: rgba.repeat(64),
        premultiplied: true,
    }
}

#[test]
fn artifact_names_follow_motif() {
    let rec = Recorder::new("/out", RecordFormat::Gif);
    assert_eq!(
        rec.artifact_path(MotifKind::DiamondVine),
        Path::new("/out/pattern2.gif")
    );
    let png = Recorder::new("/out", RecordFormat::PngSequence);
    assert_eq!(
        png.artifact_path(MotifKind::RadialPetal),
        Path::new("/out/pattern3")
    );
}

#[test]
fn lifecycle_idle_recording_finalizing_idle() {
    let dir = temp_dir("cycle");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::Gif);
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(rec.poll().is_none());

    assert!(rec.start(MotifKind::BandedDiagonal, &cfg));
    assert_eq!(rec.phase(), RecorderPhase::Recording);
    // A second start while active is ignored.
    assert!(!rec.start(MotifKind::RadialPetal, &cfg));

    for shade in [0u8, 80, 160, 240] {
        rec.push(solid([shade, shade, shade, 255]));
    }
    rec.finish(MotifKind::BandedDiagonal);
    assert_eq!(rec.phase(), RecorderPhase::Finalizing);

    match rec.wait() {
        Some(RecordingOutcome::Finished { motif, path }) => {
            assert_eq!(motif, MotifKind::BandedDiagonal);
            assert_eq!(path, dir.join("pattern1.gif"));
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
            assert!(!rec.staging_path().exists());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(rec.poll().is_none());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn push_while_idle_is_a_no_op() {
    let mut rec = Recorder::new(temp_dir("idle"), RecordFormat::Gif);
    rec.push(solid([0, 0, 0, 255]));
    rec.finish(MotifKind::BandedDiagonal);
    rec.cancel();
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(rec.wait().is_none());
}

#[test]
fn sink_errors_surface_as_failed_outcome() {
    let dir = temp_dir("fail");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::Gif);
    assert!(rec.start(MotifKind::DiamondVine, &cfg));
    // Wrong frame size for the 8x8 session.
    rec.push(FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 64],
        premultiplied: true,
    });
    match rec.wait() {
        Some(RecordingOutcome::Failed { motif, error }) => {
            assert_eq!(motif, MotifKind::DiamondVine);
            assert!(matches!(error, MotionError::Validation(_)), "{error}");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(!rec.staging_path().exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sequence_writes_numbered_frames() {
    let dir = temp_dir("png");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::PngSequence);
    assert!(rec.start(MotifKind::RadialPetal, &cfg));
    rec.push(solid([255, 0, 0, 255]));
    rec.push(solid([0, 255, 0, 255]));
    rec.finish(MotifKind::RadialPetal);
    let Some(RecordingOutcome::Finished { path, .. }) = rec.wait() else {
        panic!("png recording failed");
    };
    assert!(path.join("frame_00000.png").is_file());
    assert!(path.join("frame_00001.png").is_file());
    let img = image::open(path.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(3, 3).0, [0, 255, 0, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn artifact_is_named_by_the_completing_motif() {
    let dir = temp_dir("retarget");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::Gif);
    assert!(rec.start(MotifKind::BandedDiagonal, &cfg));
    rec.push(solid([10, 20, 30, 255]));
    rec.push(solid([40, 50, 60, 255]));
    rec.finish(MotifKind::RadialPetal);
    match rec.wait() {
        Some(RecordingOutcome::Finished { motif, path }) => {
            assert_eq!(motif, MotifKind::RadialPetal);
            assert_eq!(path, dir.join("pattern3.gif"));
            assert!(path.is_file());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!dir.join("pattern1.gif").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn waiting_on_an_open_session_cancels_it() {
    let dir = temp_dir("cancel");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::Gif);
    assert!(rec.start(MotifKind::DiamondVine, &cfg));
    rec.push(solid([0, 0, 0, 255]));
    rec.push(solid([255, 255, 255, 255]));
    match rec.wait() {
        Some(RecordingOutcome::Cancelled { motif, frames }) => {
            assert_eq!(motif, MotifKind::DiamondVine);
            assert_eq!(frames, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(rec.phase(), RecorderPhase::Idle);
    assert!(!rec.artifact_path(MotifKind::DiamondVine).exists());
    assert!(!rec.staging_path().exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn png_sequence_replaces_an_older_recording() {
    let dir = temp_dir("png_replace");
    let cfg = small_cfg();
    let mut rec = Recorder::new(&dir, RecordFormat::PngSequence);
    for frames in [3, 1] {
        assert!(rec.start(MotifKind::BandedDiagonal, &cfg));
        for _ in 0..frames {
            rec.push(solid([0, 0, 255, 255]));
        }
        rec.finish(MotifKind::BandedDiagonal);
        assert!(matches!(rec.wait(), Some(RecordingOutcome::Finished { .. })));
    }
    let out = rec.artifact_path(MotifKind::BandedDiagonal);
    assert!(out.join("frame_00000.png").is_file());
    assert!(!out.join("frame_00001.png").exists());
    let _ = std::fs::remove_dir_all(&dir);
}
