//! Banded-diagonal motif: bands drawn along the cell diagonal, a sweeping border bar and a
//! row of nested diamonds that pop in one by one.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::animation::ease::Ease;
use crate::animation::stage::{StageSchedule, StageWindow};
use crate::foundation::core::{Affine, BezPath, Point, Rgba8, Size};
use crate::foundation::math::clamp01;
use crate::geometry::curve::{CURVE_RESOLUTION, sample_stripe_curve};
use crate::geometry::shapes::{diamond, line, polygon, polyline, rect};
use crate::motif::MotifRenderer;
use crate::scene::grid::GridShape;
use crate::scene::painter::Painter;
use crate::timeline::FrameClock;

const BACKGROUND: Rgba8 = Rgba8::rgb(230, 204, 154);
const BAR: Rgba8 = Rgba8::gray(50);
const INK: Rgba8 = Rgba8::rgb(60, 30, 0);
const GOLD: Rgba8 = Rgba8::rgb(222, 185, 105);

/// Bands per cell diagonal.
const BAND_ROWS: usize = 3;
/// Bands actually drawn: one extra on each side covers the bleed.
pub(crate) const STRIPES: usize = BAND_ROWS + 2;
const OUTLINE_WIDTH: f64 = 2.0;
/// Lead of the fill fade relative to a completed stripe.
const FILL_FADE_LEAD: f64 = 0.2;

pub(crate) const BORDER: &str = "border";
pub(crate) const DIAMONDS: &str = "diamonds";
pub(crate) const STRIPE_STAGES: [&str; STRIPES] =
    ["stripe-0", "stripe-1", "stripe-2", "stripe-3", "stripe-4"];

const BORDER_WINDOW: StageWindow = StageWindow::fixed(0.0, 0.2);
const DIAMOND_WINDOW: StageWindow = StageWindow::fixed(0.7, 1.0);

/// Window of stripe `j`: `[j / STRIPES, (j + 1) / STRIPES]`.
pub(crate) fn stripe_window(j: usize) -> StageWindow {
    let n = STRIPES as f64;
    StageWindow::fixed(j as f64 / n, (j + 1) as f64 / n)
}

pub(crate) fn schedule() -> StageSchedule {
    STRIPE_STAGES.iter().enumerate().fold(
        StageSchedule::new()
            .with(BORDER, BORDER_WINDOW)
            .with(DIAMONDS, DIAMOND_WINDOW),
        |s, (j, name)| s.with(*name, stripe_window(j)),
    )
}

/// Lengths derived from the cell, all in the rotated band frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BandMetrics {
    pub(crate) diag: f64,
    pub(crate) stripe_w: f64,
    /// Side of the square box each band curve is drawn in; doubles as the margin.
    pub(crate) bleed: f64,
    pub(crate) y_bar: f64,
}

impl BandMetrics {
    pub(crate) fn new(cell: Size) -> Self {
        let diag = cell.width.hypot(cell.height);
        let stripe_w = diag / BAND_ROWS as f64;
        Self {
            diag,
            stripe_w,
            bleed: stripe_w * 1.1,
            y_bar: stripe_w * 1.3,
        }
    }

    pub(crate) fn margin(self) -> f64 {
        self.bleed
    }

    /// Full length of the border bar.
    pub(crate) fn run(self) -> f64 {
        self.diag + self.margin()
    }

    pub(crate) fn diamond_spacing(self) -> f64 {
        self.stripe_w * 0.6
    }

    pub(crate) fn diamond_count(self) -> usize {
        (self.run() / self.diamond_spacing()).floor() as usize + 1
    }
}

/// Pattern 1. Tiled on a 4x4 grid with a one-cell bleed ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct BandedDiagonal;

impl MotifRenderer for BandedDiagonal {
    fn grid(&self) -> GridShape {
        GridShape {
            cols: 4,
            rows: 4,
            bleed: true,
        }
    }

    fn draw_cell(&self, p: &mut Painter, cell: Size, clock: &FrameClock) {
        let t = clock.global;
        p.fill(rect(0.0, 0.0, cell.width, cell.height), BACKGROUND);

        let m = BandMetrics::new(cell);
        let stages = schedule().evaluate(t);
        let back = -m.diag / 2.0 - m.margin() / 2.0;
        let band_frame = Affine::translate((cell.width / 2.0, cell.height / 2.0))
            * Affine::rotate(-FRAC_PI_4)
            * Affine::translate((back, back));

        p.with_transform(band_frame, |p| {
            let reach = stages.eased(BORDER, Ease::OutCubic);
            if reach > 0.0 {
                p.stroke(
                    line(
                        Point::new(0.0, m.y_bar),
                        Point::new(m.run() * reach, m.y_bar),
                    ),
                    BAR,
                    m.stripe_w * 0.4,
                );
            }

            for (j, name) in STRIPE_STAGES.iter().enumerate() {
                let shift = (j as f64 - 1.0) * m.stripe_w;
                p.with_transform(Affine::translate((shift, 0.0)), |p| {
                    draw_stripe(p, m.bleed, m.bleed, stages.get(name));
                });
            }

            draw_diamonds(p, m, t);
        });
    }
}

/// One band: the "S" contour drawn progressively, then its fill and a teardrop.
fn draw_stripe(p: &mut Painter, w: f64, h: f64, u: f64) {
    let pts = sample_stripe_curve(w, h);
    let count = ((u * CURVE_RESOLUTION as f64).floor() as usize).min(pts.len() - 1);
    p.stroke(polyline(&pts[..=count]), INK, OUTLINE_WIDTH);

    if u < 1.0 {
        return;
    }
    let fade = clamp01((u - 1.0 + FILL_FADE_LEAD) / FILL_FADE_LEAD);
    let mut region = pts.clone();
    region.push(Point::new(w, h));
    region.push(Point::new(0.0, h));
    p.fill(polygon(&region), GOLD.with_opacity(Ease::OutCubic.apply(fade)));

    let a = pts[CURVE_RESOLUTION / 3];
    let b = pts[2 * CURVE_RESOLUTION / 3];
    draw_teardrop(
        p,
        Point::new((a.x + b.x) / 2.0 + w * 0.5, (a.y + b.y) / 2.0),
        w * 0.25,
    );
}

pub(crate) fn teardrop_path(r: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, -r));
    path.curve_to((r * 0.8, -r * 0.2), (r * 0.6, r * 0.8), (0.0, r * 0.8));
    path.curve_to((-r * 0.6, r * 0.8), (-r * 0.8, -r * 0.2), (0.0, -r));
    path.close_path();
    path
}

fn draw_teardrop(p: &mut Painter, center: Point, r: f64) {
    let tilt = 4.0 * PI / 3.0 + 10f64.to_radians();
    let frame = Affine::translate((center.x - r * 0.2, center.y)) * Affine::rotate(tilt);
    p.with_transform(frame, |p| {
        p.fill(teardrop_path(r), GOLD);
        p.stroke(teardrop_path(r), INK, OUTLINE_WIDTH);
    });
}

/// Nested diamonds along the border bar, one sub-window each inside the diamond stage.
fn draw_diamonds(p: &mut Painter, m: BandMetrics, t: f64) {
    let (dw, dh) = (m.stripe_w * 0.25, m.stripe_w * 0.5);
    let count = m.diamond_count();
    for k in 0..count {
        let u = DIAMOND_WINDOW.subdivide(k, count).progress(t);
        if u <= 0.0 {
            continue;
        }
        let s = Ease::OutCubic.apply(u);
        let frame = Affine::translate((k as f64 * m.diamond_spacing(), m.y_bar))
            * Affine::rotate(FRAC_PI_2)
            * Affine::scale(s);
        p.with_transform(frame, |p| {
            p.fill(diamond(dw, dh), GOLD);
            for n in 1..=4u32 {
                let sc = 1.0 - f64::from(n) / 5.0;
                let color = if n % 2 == 1 { INK } else { GOLD };
                p.fill(diamond(dw * sc, dh * sc), color);
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motif/banded.rs"]
mod tests;
