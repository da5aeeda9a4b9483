use super::*;
use crate::scene::op::DrawOp;

const CELL: Size = Size::new(160.0, 160.0);

fn ops(raw: f64) -> Vec<DrawOp> {
    RadialPetal.render_cell(CELL, &FrameClock::fixed(raw, (raw / 0.8).min(1.0), 0))
}

#[test]
fn draw_progress_covers_active_portion() {
    assert_eq!(draw_progress(0.0), 0.0);
    assert!((draw_progress(0.35) - 0.5).abs() < 1e-12);
    assert_eq!(draw_progress(ACTIVE_PORTION), 1.0);
    assert_eq!(draw_progress(0.95), 1.0);
}

#[test]
fn hold_dots_split_the_hold() {
    assert_eq!(dot_progress(0.5), (0.0, 0.0));
    let (a, b) = dot_progress(0.775);
    assert!((a - 0.5).abs() < 1e-9);
    assert_eq!(b, 0.0);
    let (a, b) = dot_progress(0.925);
    assert_eq!(a, 1.0);
    assert!((b - 0.5).abs() < 1e-9);
    assert_eq!(dot_progress(1.0), (1.0, 1.0));
}

#[test]
fn opening_draws_only_arcs() {
    assert_eq!(ops(0.0).len(), 1);
    let opening = ops(0.5);
    assert_eq!(opening.len(), 1 + 4);
    assert!(
        opening[1..]
            .iter()
            .all(|op| matches!(op, DrawOp::Stroke { width, .. } if *width == ARC_WIDTH))
    );
    assert!(!opening.iter().any(|op| op.color().r == PETAL.r && matches!(op, DrawOp::Fill { .. })));
}

#[test]
fn hold_adds_fill_outline_and_dots() {
    // Arc, fill, outline and the first dot per petal.
    assert_eq!(ops(0.8).len(), 1 + 4 * 4);
    assert_eq!(ops(1.0).len(), 1 + 4 * 5);

    let fills: Vec<Rgba8> = ops(0.75)
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill { color, .. } if color.r == PETAL.r => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 4);
    assert!(fills.iter().all(|c| c.a == 255));
}

#[test]
fn ignores_global_time() {
    let a = RadialPetal.render_cell(CELL, &FrameClock::fixed(0.6, 0.2, 0));
    let b = RadialPetal.render_cell(CELL, &FrameClock::fixed(0.6, 0.9, 99));
    assert_eq!(a, b);
}

#[test]
fn petals_sit_on_the_diagonals() {
    let arcs: Vec<_> = ops(0.5)
        .into_iter()
        .filter(|op| matches!(op, DrawOp::Stroke { .. }))
        .map(|op| op.transform().translation())
        .collect();
    let off = CELL.height * SPACING / SQRT_2;
    for v in arcs {
        assert!(((v.x - 80.0).abs() - off).abs() < 1e-9);
        assert!(((v.y - 80.0).abs() - off).abs() < 1e-9);
    }
}
