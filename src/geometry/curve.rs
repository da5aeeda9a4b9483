//! Composite cubic Bezier sampling.
//!
//! Curves are described as ratio tables so one table serves any cell size: every coordinate is a
//! fraction of the target width (x) or height (y).

use crate::foundation::core::{Point, Size};
use kurbo::{CubicBez, ParamCurve};

/// Default number of sample intervals; a curve yields `CURVE_RESOLUTION + 1` points.
pub const CURVE_RESOLUTION: usize = 100;

/// Three cubic segments sharing endpoints, expressed as `(x/w, y/h)` ratios.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveTable {
    /// Start point of the first segment.
    pub start: (f64, f64),
    /// Per segment: first control, second control, end point.
    pub segments: [[(f64, f64); 3]; 3],
}

/// The "S" contour swept by each diagonal band.
pub const STRIPE_CURVE: CurveTable = CurveTable {
    start: (0.0, 0.9),
    segments: [
        [(0.18, 0.82), (0.32, 0.38), (0.12, 0.18)],
        [(0.02, 0.02), (0.40, 0.02), (0.52, 0.30)],
        [(0.62, 0.52), (0.72, 0.78), (1.00, 0.90)],
    ],
};

impl CurveTable {
    /// Scale the ratio table into three absolute cubic segments.
    pub fn cubics(&self, size: Size) -> [CubicBez; 3] {
        let pt = |(x, y): (f64, f64)| Point::new(x * size.width, y * size.height);
        let mut from = pt(self.start);
        self.segments.map(|[c1, c2, end]| {
            let seg = CubicBez::new(from, pt(c1), pt(c2), pt(end));
            from = seg.p3;
            seg
        })
    }

    /// Sample `resolution + 1` ordered points over `u` in `[0, 1]`.
    ///
    /// `u` is split evenly across the three segments (`u < 1/3`, `1/3 <= u < 2/3`, `u >= 2/3`),
    /// each evaluated at its segment-local parameter rescaled to `[0, 1]`.
    pub fn sample(&self, size: Size, resolution: usize) -> Vec<Point> {
        let segs = self.cubics(size);
        let n = resolution.max(1);
        (0..=n)
            .map(|i| {
                let u = i as f64 / n as f64;
                let (seg, v) = if u < 1.0 / 3.0 {
                    (&segs[0], u * 3.0)
                } else if u < 2.0 / 3.0 {
                    (&segs[1], (u - 1.0 / 3.0) * 3.0)
                } else {
                    (&segs[2], (u - 2.0 / 3.0) * 3.0)
                };
                seg.eval(v)
            })
            .collect()
    }
}

/// Sample the band contour for a `w x h` box at the default resolution.
pub fn sample_stripe_curve(w: f64, h: f64) -> Vec<Point> {
    STRIPE_CURVE.sample(Size::new(w, h), CURVE_RESOLUTION)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/curve.rs"]
mod tests;
