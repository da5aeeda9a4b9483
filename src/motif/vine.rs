//! Diamond-vine motif: a wobbling diamond border, vines growing in from its corners, leaves,
//! a six-petal rosette and two layers of dot clusters.
//!
//! The border wobble is driven by the free-running tick counter, not by global time, so it keeps
//! moving through the hold at the end of each cycle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::animation::ease::Ease;
use crate::animation::stage::{StageSchedule, StageWindow};
use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Size, Vec2};
use crate::foundation::math::lerp;
use crate::geometry::shapes::{circle, polyline, rect};
use crate::motif::MotifRenderer;
use crate::scene::grid::GridShape;
use crate::scene::painter::Painter;
use crate::timeline::FrameClock;

const BACKGROUND: Rgba8 = Rgba8::rgb(247, 254, 254);
const BORDER: Rgba8 = Rgba8::rgb(88, 46, 60);
const VINE: Rgba8 = Rgba8::rgb(28, 37, 61);
const LEAF: Rgba8 = Rgba8::rgb(59, 64, 96);
const ROSETTE: Rgba8 = Rgba8::rgb(4, 5, 13);

const BORDER_WIDTH: f64 = 19.0;
const WOBBLE_AMPLITUDE: f64 = 4.0;
const WOBBLE_WAVES: f64 = 3.0;
/// Radians of phase per tick.
const WOBBLE_SPEED: f64 = 0.02;
pub(crate) const EDGE_SEGMENTS: usize = 80;

const VINE_WIDTH: f64 = 2.0;
const VINE_STEPS: usize = 20;
const VINE_BEND: f64 = PI / 8.0;
const PETALS: usize = 6;
/// Rosette petal length and width in pixels; they do not scale with the cell.
const PETAL_LENGTH: f64 = 25.0;
const PETAL_WIDTH: f64 = 12.0;

pub(crate) const DOTS: &str = "dots";
pub(crate) const VINES: &str = "vines";
pub(crate) const LEAVES: &str = "leaves";
pub(crate) const ROSETTE_STAGE: &str = "rosette";

pub(crate) fn schedule() -> StageSchedule {
    StageSchedule::new()
        .with(DOTS, StageWindow::fixed(0.4, 0.6))
        .with(VINES, StageWindow::fixed(0.2, 0.8))
        .with(LEAVES, StageWindow::fixed(0.65, 1.0))
        .with(ROSETTE_STAGE, StageWindow::fixed(0.5, 1.0))
}

/// Pattern 2. Tiled on a plain 4x4 grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiamondVine;

impl MotifRenderer for DiamondVine {
    fn grid(&self) -> GridShape {
        GridShape {
            cols: 4,
            rows: 4,
            bleed: false,
        }
    }

    fn draw_cell(&self, p: &mut Painter, cell: Size, clock: &FrameClock) {
        let (w, h) = (cell.width, cell.height);
        let t = clock.global;
        p.fill(rect(0.0, 0.0, w, h), BACKGROUND);

        let pts = wobble_points(w, h, clock.tick);
        let shown = if t < 1.0 {
            (pts.len() as f64 * t).floor() as usize
        } else {
            pts.len()
        };
        p.stroke(polyline(&pts[..shown.min(pts.len())]), BORDER, BORDER_WIDTH);

        let stages = schedule().evaluate(t);
        let dot_scale = stages.eased(DOTS, Ease::InOutQuad);
        if dot_scale > 0.0 {
            let mids = [
                Point::new(w / 2.0, 0.0),
                Point::new(w, h / 2.0),
                Point::new(w / 2.0, h),
                Point::new(0.0, h / 2.0),
            ];
            for mid in mids {
                dot_cluster(p, mid, w, dot_scale, BACKGROUND);
            }
        }

        draw_vines(
            p,
            cell,
            stages.get(VINES),
            stages.eased(LEAVES, Ease::InOutCubic),
        );

        let center = Point::new(w / 2.0, h / 2.0);
        draw_rosette(p, center, stages.eased(ROSETTE_STAGE, Ease::OutCubic));

        if dot_scale > 0.0 {
            dot_cluster(p, center, w, dot_scale, LEAF);
        }
    }
}

/// Diamond outline through the edge midpoints of the cell, pushed along each edge normal by a
/// traveling sine. `EDGE_SEGMENTS + 1` points per edge, four edges.
pub(crate) fn wobble_points(w: f64, h: f64, tick: u64) -> Vec<Point> {
    let corners = [
        Point::new(w / 2.0, 0.0),
        Point::new(w, h / 2.0),
        Point::new(w / 2.0, h),
        Point::new(0.0, h / 2.0),
        Point::new(w / 2.0, 0.0),
    ];
    // The tick being drawn counts as elapsed.
    let drift = WOBBLE_SPEED * tick.saturating_add(1) as f64;
    let mut out = Vec::with_capacity(4 * (EDGE_SEGMENTS + 1));
    for (edge, pair) in corners.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let normal = Vec2::new(b.y - a.y, -(b.x - a.x)).normalize();
        for j in 0..=EDGE_SEGMENTS {
            let u = j as f64 / EDGE_SEGMENTS as f64;
            let phase = drift + edge as f64 * FRAC_PI_2 + u * TAU * WOBBLE_WAVES;
            let offset = phase.sin() * WOBBLE_AMPLITUDE;
            out.push(Point::new(lerp(a.x, b.x, u), lerp(a.y, b.y, u)) + normal * offset);
        }
    }
    out
}

/// Four small circles around `anchor`, each scaled about its own center.
fn dot_cluster(p: &mut Painter, anchor: Point, cell_w: f64, scale: f64, color: Rgba8) {
    let radius = cell_w * 0.02;
    let off = cell_w * 0.035;
    let offsets = [(0.0, -off), (off, 0.0), (0.0, off), (-off, 0.0)];
    p.with_transform(Affine::translate(anchor.to_vec2()), |p| {
        for o in offsets {
            p.with_transform(Affine::translate(o) * Affine::scale(scale), |p| {
                p.fill(circle(Point::ZERO, radius * 2.0), color);
            });
        }
    });
}

/// Three branches per diamond corner growing toward the cell center, each tipped by a leaf.
fn draw_vines(p: &mut Painter, cell: Size, growth: f64, leaf: f64) {
    let (w, h) = (cell.width, cell.height);
    let inset = BORDER_WIDTH / 2.0 + 4.0;
    let max_len = w * 0.30;
    let center = Point::new(w / 2.0, h / 2.0);
    let corners = [
        Point::new(w / 2.0, inset),
        Point::new(w - inset, h / 2.0),
        Point::new(w / 2.0, h - inset),
        Point::new(inset, h / 2.0),
    ];
    let reach = VINE_STEPS as f64 * growth;

    for c in corners {
        let heading = (center.y - c.y).atan2(center.x - c.x);
        for dir in [-1.0, 0.0, 1.0f64] {
            let straight = dir == 0.0;
            let len = max_len * if straight { 0.6 } else { 0.5 };
            let bend = if straight { 0.0 } else { VINE_BEND };

            let branch: Vec<Point> = (0..=VINE_STEPS)
                .take_while(|&i| i as f64 <= reach)
                .map(|i| {
                    let u = i as f64 / VINE_STEPS as f64;
                    let a = heading + dir * bend * u;
                    c + Vec2::from_angle(a) * (len * u)
                })
                .collect();
            p.stroke(polyline(&branch), VINE, VINE_WIDTH);

            if leaf > 0.0 {
                let tip_angle = heading + dir * bend;
                let tip = c + Vec2::from_angle(tip_angle) * len;
                draw_leaf(p, tip, tip_angle, w * 0.06, w * 0.12, leaf);
            }
        }
    }
}

/// Bilaterally symmetric pointed shape from the origin to `(0, -len)`.
pub(crate) fn spindle_path(outer: f64, inner: f64, len: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to((outer, -len * 0.3), (inner, -len * 0.8), (0.0, -len));
    path.curve_to((-inner, -len * 0.8), (-outer, -len * 0.3), (0.0, 0.0));
    path.close_path();
    path
}

fn draw_leaf(p: &mut Painter, at: Point, angle: f64, half_w: f64, len: f64, grow: f64) {
    let (w, l) = (half_w * grow, len * grow);
    let frame = Affine::translate(at.to_vec2()) * Affine::rotate(angle + FRAC_PI_2);
    p.with_transform(frame, |p| p.fill(spindle_path(w * 0.8, w * 0.5, l), LEAF));
}

fn draw_rosette(p: &mut Painter, center: Point, u: f64) {
    if u <= 0.0 {
        return;
    }
    p.with_transform(Affine::translate(center.to_vec2()), |p| {
        for i in 0..PETALS {
            let turn = TAU * i as f64 / PETALS as f64;
            p.with_transform(Affine::rotate(turn), |p| {
                p.fill(
                    spindle_path(PETAL_WIDTH * u, PETAL_WIDTH * 0.5 * u, PETAL_LENGTH * u),
                    ROSETTE,
                );
            });
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/motif/vine.rs"]
mod tests;
