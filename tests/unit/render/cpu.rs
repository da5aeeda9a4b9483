use super::*;
use crate::geometry::shapes::rect;

fn scene(width: u32, height: u32, clear: Rgba8, ops: Vec<DrawOp>) -> Scene {
    Scene {
        canvas: Canvas { width, height },
        clear,
        ops,
    }
}

#[test]
fn empty_scene_is_the_clear_color() {
    let mut be = CpuBackend::new();
    let frame = be
        .render_scene(&scene(16, 8, Rgba8::rgb(10, 20, 30), Vec::new()))
        .unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), frame.expected_len());
    assert!(frame.premultiplied);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, [10, 20, 30, 255]);
    }
}

#[test]
fn fills_respect_their_transform() {
    let mut be = CpuBackend::new();
    let red = Rgba8::rgb(255, 0, 0);
    let ops = vec![DrawOp::Fill {
        path: rect(0.0, 0.0, 8.0, 8.0),
        transform: Affine::translate((8.0, 0.0)),
        color: red,
    }];
    let frame = be.render_scene(&scene(16, 8, Rgba8::WHITE, ops)).unwrap();
    assert_eq!(frame.pixel(2, 4), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(12, 4), Some([255, 0, 0, 255]));
}

#[test]
fn strokes_cover_their_centerline() {
    let mut be = CpuBackend::new();
    let mut path = BezPath::new();
    path.move_to((0.0, 8.0));
    path.line_to((16.0, 8.0));
    let ops = vec![DrawOp::Stroke {
        path,
        transform: Affine::IDENTITY,
        color: Rgba8::rgb(0, 0, 0),
        width: 4.0,
    }];
    let frame = be.render_scene(&scene(16, 16, Rgba8::WHITE, ops)).unwrap();
    let on = frame.pixel(8, 8).unwrap();
    let off = frame.pixel(8, 1).unwrap();
    assert!(on[0] < 32, "{on:?}");
    assert_eq!(off, [255, 255, 255, 255]);
}

#[test]
fn translucent_paint_blends_over_clear() {
    let mut be = CpuBackend::new();
    let ops = vec![DrawOp::Fill {
        path: rect(0.0, 0.0, 4.0, 4.0),
        transform: Affine::IDENTITY,
        color: Rgba8::rgb(0, 0, 0).with_alpha(128),
    }];
    let px = be
        .render_scene(&scene(4, 4, Rgba8::WHITE, ops))
        .unwrap()
        .pixel(1, 1)
        .unwrap();
    assert_eq!(px[3], 255);
    assert!(px[0] > 100 && px[0] < 155, "{px:?}");
}

#[test]
fn backend_survives_size_changes() {
    let mut be = CpuBackend::new();
    let a = be.render_scene(&scene(4, 4, Rgba8::WHITE, Vec::new())).unwrap();
    let b = be.render_scene(&scene(8, 2, Rgba8::WHITE, Vec::new())).unwrap();
    let c = be.render_scene(&scene(8, 2, Rgba8::WHITE, Vec::new())).unwrap();
    assert_eq!((a.width, a.height), (4, 4));
    assert_eq!((b.width, b.height), (8, 2));
    assert_eq!(b, c);
}

#[test]
fn bad_canvas_sizes_are_render_errors() {
    let mut be = CpuBackend::new();
    for (w, h) in [(0, 4), (4, 0), (70_000, 4)] {
        let err = be
            .render_scene(&scene(w, h, Rgba8::WHITE, Vec::new()))
            .unwrap_err();
        assert!(matches!(err, MotionError::Render(_)), "{err}");
    }
}
