use super::*;

const CELL: Size = Size::new(200.0, 200.0);

fn ops_at(t: f64) -> Vec<crate::scene::op::DrawOp> {
    BandedDiagonal.render_cell(CELL, &FrameClock::fixed(t, t, 0))
}

#[test]
fn five_stripes_share_the_cycle_evenly() {
    assert_eq!(STRIPES, 5);
    let w = stripe_window(2);
    assert!((w.start() - 0.4).abs() < 1e-12);
    assert!((w.end() - 0.6).abs() < 1e-12);

    let stages = schedule().evaluate(0.5);
    assert!((stages.get("stripe-2") - 0.5).abs() < 1e-9);
    assert_eq!(stages.get("stripe-1"), 1.0);
    assert_eq!(stages.get("stripe-3"), 0.0);
    assert_eq!(stages.get(BORDER), 1.0);
    assert_eq!(stages.get(DIAMONDS), 0.0);
}

#[test]
fn first_frame_is_background_only() {
    let ops = ops_at(0.0);
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].color(), BACKGROUND);
}

#[test]
fn diamonds_wait_for_their_window() {
    // Background, border bar, three finished stripes (contour, fill, teardrop fill and
    // outline) and the contour of the stripe in progress.
    assert_eq!(ops_at(0.69).len(), 1 + 1 + 3 * 4 + 1);
}

#[test]
fn full_cycle_draws_every_layer() {
    let m = BandMetrics::new(CELL);
    let count = m.diamond_count();
    assert!(count > 1);
    assert_eq!(ops_at(1.0).len(), 1 + 1 + STRIPES * 4 + count * 5);
}

#[test]
fn stripe_fill_appears_only_after_contour_completes() {
    let gold_fills = |t: f64| {
        ops_at(t)
            .iter()
            .filter(|op| matches!(op, crate::scene::op::DrawOp::Fill { color, .. } if color.r == GOLD.r && color.g == GOLD.g))
            .count()
    };
    // Stripe 0 runs over [0, 0.2].
    assert_eq!(gold_fills(0.19), 0);
    assert_eq!(gold_fills(0.21), 2);
}

#[test]
fn border_bar_grows_with_eased_reach() {
    let bar_len = |t: f64| {
        ops_at(t)
            .iter()
            .find(|op| op.color() == BAR)
            .map(|op| kurbo::Shape::bounding_box(op.path()).width())
    };
    assert_eq!(bar_len(0.0), None);
    let early = bar_len(0.05).unwrap();
    let done = bar_len(0.5).unwrap();
    assert!(early > 0.0 && early < done);
    assert!((done - BandMetrics::new(CELL).run()).abs() < 1e-6);
}

#[test]
fn teardrop_is_closed_and_bounded() {
    let path = teardrop_path(10.0);
    let bbox = kurbo::Shape::bounding_box(&path);
    assert!(bbox.min_y() >= -10.0 - 1e-9);
    assert!(bbox.max_y() <= 8.0 + 1e-9);
    assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(ops_at(0.42), ops_at(0.42));
}
