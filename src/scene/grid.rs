//! Grid compositor: tiles one motif across the canvas.

use crate::foundation::core::{Affine, Canvas, Size, Vec2};
use crate::motif::{MotifKind, MotifRenderer};
use crate::scene::painter::Painter;
use crate::timeline::FrameClock;

/// Per-motif tiling rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
    /// Draw one extra ring of cells around the grid (indices `-1..=cols`, `-1..=rows`).
    pub bleed: bool,
}

impl GridShape {
    /// Cell size for a canvas (`width / cols`, `height / rows`).
    pub fn cell_size(self, canvas: Canvas) -> Size {
        let size = canvas.size();
        Size::new(
            size.width / f64::from(self.cols.max(1)),
            size.height / f64::from(self.rows.max(1)),
        )
    }

    /// Cell indices in draw order: column-major, top-to-bottom within each column.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let pad = i32::from(self.bleed);
        let cols = self.cols as i32;
        let rows = self.rows as i32;
        (-pad..cols + pad).flat_map(move |i| (-pad..rows + pad).map(move |j| (i, j)))
    }

    pub fn cell_count(self) -> usize {
        let pad = if self.bleed { 2 } else { 0 };
        ((self.cols + pad) * (self.rows + pad)) as usize
    }
}

/// Draw `motif` once per grid cell, each inside its own translated scope.
pub fn compose(painter: &mut Painter, motif: MotifKind, canvas: Canvas, clock: &FrameClock) {
    let grid = motif.grid();
    let cell = grid.cell_size(canvas);
    for (i, j) in grid.cells() {
        let origin = Vec2::new(f64::from(i) * cell.width, f64::from(j) * cell.height);
        painter.with_transform(Affine::translate(origin), |p| {
            motif.draw_cell(p, cell, clock);
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/grid.rs"]
mod tests;
