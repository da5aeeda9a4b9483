//! The three procedural motifs and their shared rendering capability.

pub(crate) mod banded;
pub(crate) mod petal;
pub(crate) mod vine;

use crate::foundation::core::Size;
use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::grid::GridShape;
use crate::scene::op::DrawOp;
use crate::scene::painter::Painter;
use crate::timeline::FrameClock;

pub use banded::BandedDiagonal;
pub use petal::RadialPetal;
pub use vine::DiamondVine;

/// Capability shared by every motif: draw one grid cell at a point in the cycle.
///
/// The cell's local origin is its top-left corner. Implementations must leave the painter's
/// transform as they found it, which [`Painter::with_transform`] guarantees.
pub trait MotifRenderer {
    /// Tiling rule for this motif.
    fn grid(&self) -> GridShape;

    /// Emit the ops for one `cell`-sized cell.
    fn draw_cell(&self, painter: &mut Painter, cell: Size, clock: &FrameClock);

    /// Ops for a single cell drawn at the origin.
    fn render_cell(&self, cell: Size, clock: &FrameClock) -> Vec<DrawOp> {
        let mut painter = Painter::new();
        self.draw_cell(&mut painter, cell, clock);
        painter.finish()
    }
}

/// Closed set of motifs the engine can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifKind {
    /// Diagonal bands with a sweeping border bar and popping diamonds (pattern 1).
    #[default]
    BandedDiagonal,
    /// Wobbling diamond with vines, leaves, rosette and dot clusters (pattern 2).
    DiamondVine,
    /// Four radial petals opened by an arc sweep (pattern 3).
    RadialPetal,
}

impl MotifKind {
    pub const ALL: [MotifKind; 3] = [
        MotifKind::BandedDiagonal,
        MotifKind::DiamondVine,
        MotifKind::RadialPetal,
    ];

    /// 1-based pattern number used by key bindings and export file names.
    pub fn id(self) -> u8 {
        match self {
            Self::BandedDiagonal => 1,
            Self::DiamondVine => 2,
            Self::RadialPetal => 3,
        }
    }

    pub fn from_id(id: u8) -> MotionResult<Self> {
        match id {
            1 => Ok(Self::BandedDiagonal),
            2 => Ok(Self::DiamondVine),
            3 => Ok(Self::RadialPetal),
            other => Err(MotionError::validation(format!(
                "unknown motif id {other} (expected 1, 2 or 3)"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BandedDiagonal => "banded-diagonal",
            Self::DiamondVine => "diamond-vine",
            Self::RadialPetal => "radial-petal",
        }
    }

    /// File name of a recorded cycle of this motif.
    pub fn export_file_name(self) -> String {
        format!("pattern{}.gif", self.id())
    }

    fn renderer(self) -> &'static dyn MotifRenderer {
        match self {
            Self::BandedDiagonal => &BandedDiagonal,
            Self::DiamondVine => &DiamondVine,
            Self::RadialPetal => &RadialPetal,
        }
    }
}

impl MotifRenderer for MotifKind {
    fn grid(&self) -> GridShape {
        self.renderer().grid()
    }

    fn draw_cell(&self, painter: &mut Painter, cell: Size, clock: &FrameClock) {
        self.renderer().draw_cell(painter, cell, clock);
    }
}

#[cfg(test)]
#[path = "../tests/unit/motif/kind.rs"]
mod tests;
