//! Radial-petal motif: four ovals around each cell center, opened by an arc sweep, then filled,
//! outlined and dotted during a hold.
//!
//! Everything here is paced by raw frame progress against the motif's own active portion; the
//! globally remapped time is ignored.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2, TAU};

use crate::animation::ease::Ease;
use crate::foundation::core::{Affine, Point, Rgba8, Size};
use crate::foundation::math::clamp01;
use crate::geometry::shapes::{arc, circle, ellipse, rect};
use crate::motif::MotifRenderer;
use crate::scene::grid::GridShape;
use crate::scene::painter::Painter;
use crate::timeline::FrameClock;

const BACKGROUND: Rgba8 = Rgba8::rgb(60, 26, 8);
const PETAL: Rgba8 = Rgba8::rgb(158, 84, 28);
const CREAM: Rgba8 = Rgba8::rgb(240, 235, 220);

/// Fraction of raw progress spent opening the petals; the rest is a hold.
pub const ACTIVE_PORTION: f64 = 0.7;
const SPACING: f64 = 0.355;
const ARC_WIDTH: f64 = 4.0;
const OUTLINE_WIDTH: f64 = 5.0;

const DIRECTIONS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Arc-sweep progress: `raw / ACTIVE_PORTION` while opening, 1 afterwards.
pub fn draw_progress(raw: f64) -> f64 {
    if raw < ACTIVE_PORTION {
        clamp01(raw / ACTIVE_PORTION)
    } else {
        1.0
    }
}

/// Progress of the two hold-period dots, each over half of the hold.
pub(crate) fn dot_progress(raw: f64) -> (f64, f64) {
    let hold = 1.0 - ACTIVE_PORTION;
    let each = hold / 2.0;
    (
        clamp01((raw - ACTIVE_PORTION) / each),
        clamp01((raw - (ACTIVE_PORTION + each)) / each),
    )
}

/// Pattern 3. Tiled on a plain 5x5 grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct RadialPetal;

impl MotifRenderer for RadialPetal {
    fn grid(&self) -> GridShape {
        GridShape {
            cols: 5,
            rows: 5,
            bleed: false,
        }
    }

    fn draw_cell(&self, p: &mut Painter, cell: Size, clock: &FrameClock) {
        let (w, h) = (cell.width, cell.height);
        let raw = clock.raw;
        p.fill(rect(0.0, 0.0, w, h), BACKGROUND);

        let (oval_w, oval_h) = (w * 0.6, h * 0.35);
        let hole_r = w * 0.03;
        let off = h * SPACING;
        let sweep = draw_progress(raw);

        for (dx, dy) in DIRECTIONS {
            let center = Point::new(w / 2.0 + dx * off / SQRT_2, h / 2.0 + dy * off / SQRT_2);
            let rot = dy.atan2(dx) + PI;
            let frame = Affine::translate(center.to_vec2()) * Affine::rotate(rot);

            p.with_transform(frame, |p| {
                let opening = arc(
                    Point::ZERO,
                    oval_w,
                    oval_h,
                    -FRAC_PI_2,
                    -FRAC_PI_2 + TAU * sweep,
                );
                if let Some(path) = opening {
                    p.stroke(path, PETAL, ARC_WIDTH);
                }
            });

            if sweep < 1.0 {
                continue;
            }

            // Fill fade re-derives its own progress from raw time.
            let fade = clamp01(raw / ACTIVE_PORTION);
            p.with_transform(frame, |p| {
                p.fill(
                    ellipse(Point::ZERO, oval_w, oval_h),
                    PETAL.with_opacity(Ease::OutCubic.apply(fade)),
                );
                p.stroke(ellipse(Point::ZERO, oval_w, oval_h), CREAM, OUTLINE_WIDTH);
            });

            let (first, second) = dot_progress(raw);
            let dot_off = hole_r * 2.0;
            let across = Affine::translate(center.to_vec2()) * Affine::rotate(rot + FRAC_PI_2);
            p.with_transform(across, |p| {
                if first > 0.0 {
                    let d = hole_r * 2.0 * Ease::OutCubic.apply(first);
                    p.fill(circle(Point::new(0.0, -dot_off), d), CREAM);
                }
                if second > 0.0 {
                    let d = hole_r * 2.0 * Ease::OutCubic.apply(second);
                    p.fill(circle(Point::new(0.0, dot_off), d), CREAM);
                }
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motif/petal.rs"]
mod tests;
