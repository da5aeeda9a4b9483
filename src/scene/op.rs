use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};

/// One vector drawing operation.
///
/// Paths are in local space; `transform` is the absolute transform in effect when the op was
/// emitted, so ops can be replayed in any backend without a shared transform stack.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Fill the interior of `path` (non-zero winding).
    Fill {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
    },
    /// Stroke `path` with round caps and joins.
    Stroke {
        path: BezPath,
        transform: Affine,
        color: Rgba8,
        width: f64,
    },
}

impl DrawOp {
    pub fn transform(&self) -> Affine {
        match self {
            Self::Fill { transform, .. } | Self::Stroke { transform, .. } => *transform,
        }
    }

    pub fn color(&self) -> Rgba8 {
        match self {
            Self::Fill { color, .. } | Self::Stroke { color, .. } => *color,
        }
    }

    pub fn path(&self) -> &BezPath {
        match self {
            Self::Fill { path, .. } | Self::Stroke { path, .. } => path,
        }
    }
}

/// A fully specified frame: clear color plus ops in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub clear: Rgba8,
    pub ops: Vec<DrawOp>,
}
