use crate::foundation::core::{Affine, BezPath, Rgba8};
use crate::scene::op::DrawOp;

/// Command-list builder with a scoped transform stack.
///
/// Nested transforms are only reachable through [`Painter::with_transform`], which restores the
/// enclosing transform when the closure returns, so sibling cells and glyphs never observe each
/// other's translation, rotation or scale.
#[derive(Debug, Default)]
pub struct Painter {
    current: Affine,
    depth: usize,
    ops: Vec<DrawOp>,
}

impl Painter {
    pub fn new() -> Self {
        Self::with_base(Affine::IDENTITY)
    }

    pub fn with_base(base: Affine) -> Self {
        Self {
            current: base,
            depth: 0,
            ops: Vec::new(),
        }
    }

    /// Absolute transform in effect right now.
    pub fn transform(&self) -> Affine {
        self.current
    }

    /// Nesting depth of active [`Painter::with_transform`] scopes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run `f` with `local` post-multiplied onto the current transform.
    pub fn with_transform<R>(&mut self, local: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.current;
        self.current = saved * local;
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        self.current = saved;
        out
    }

    pub fn fill(&mut self, path: BezPath, color: Rgba8) {
        if path.elements().is_empty() || color.a == 0 {
            return;
        }
        self.ops.push(DrawOp::Fill {
            path,
            transform: self.current,
            color,
        });
    }

    pub fn stroke(&mut self, path: BezPath, color: Rgba8, width: f64) {
        if path.elements().is_empty() || color.a == 0 || width <= 0.0 {
            return;
        }
        self.ops.push(DrawOp::Stroke {
            path,
            transform: self.current,
            color,
            width,
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn finish(self) -> Vec<DrawOp> {
        self.ops
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/painter.rs"]
mod tests;
