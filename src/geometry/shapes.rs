use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use kurbo::Shape;

/// Flattening tolerance for conic shapes, in local units.
pub const SHAPE_TOLERANCE: f64 = 0.05;

/// Open path through `points`. Fewer than two points yield an empty path.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path
}

/// Closed path through `points`. Fewer than three points yield an empty path.
pub fn polygon(points: &[Point]) -> BezPath {
    if points.len() < 3 {
        return BezPath::new();
    }
    let mut path = polyline(points);
    path.close_path();
    path
}

pub fn line(a: Point, b: Point) -> BezPath {
    polyline(&[a, b])
}

pub fn rect(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    Rect::new(x, y, x + w, y + h).to_path(SHAPE_TOLERANCE)
}

/// Circle given by center and diameter.
pub fn circle(center: Point, diameter: f64) -> BezPath {
    kurbo::Circle::new(center, diameter / 2.0).to_path(SHAPE_TOLERANCE)
}

/// Axis-aligned ellipse given by center and full width/height.
pub fn ellipse(center: Point, w: f64, h: f64) -> BezPath {
    kurbo::Ellipse::new(center, Vec2::new(w / 2.0, h / 2.0), 0.0).to_path(SHAPE_TOLERANCE)
}

/// Open elliptical arc from `start` to `stop` radians (clockwise on a y-down surface).
///
/// Returns `None` when the sweep is empty.
pub fn arc(center: Point, w: f64, h: f64, start: f64, stop: f64) -> Option<BezPath> {
    let sweep = stop - start;
    if sweep.abs() <= f64::EPSILON {
        return None;
    }
    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(w / 2.0, h / 2.0),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    Some(arc.to_path(SHAPE_TOLERANCE))
}

/// Rhombus centered on the origin with full width `w` and height `h`.
pub fn diamond(w: f64, h: f64) -> BezPath {
    polygon(&[
        Point::new(0.0, -h / 2.0),
        Point::new(w / 2.0, 0.0),
        Point::new(0.0, h / 2.0),
        Point::new(-w / 2.0, 0.0),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
