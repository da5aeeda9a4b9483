use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::scene::op::{DrawOp, Scene};

/// CPU backend powered by `vello_cpu`.
///
/// The render context and output pixmap are kept between frames and only rebuilt when the canvas
/// size changes.
#[derive(Default)]
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "debug", skip_all, fields(ops = scene.ops.len()))]
    fn render_scene(&mut self, scene: &Scene) -> MotionResult<FrameRGBA> {
        let (width, height) = surface_dims(scene.canvas)?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        clear_pixmap(&mut pixmap, scene.clear.to_premul());

        // Clear color is also the bottom layer of the scene.
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint(scene.clear));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        for op in &scene.ops {
            draw_op(&mut ctx, op);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let frame = FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.ctx = Some(ctx);
        self.pixmap = Some(pixmap);
        Ok(frame)
    }
}

fn surface_dims(canvas: Canvas) -> MotionResult<(u16, u16)> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| MotionError::render("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| MotionError::render("surface height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(MotionError::render("surface width/height must be > 0"));
    }
    Ok((width, height))
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match op {
        DrawOp::Fill {
            path,
            transform,
            color,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(paint(*color));
            ctx.fill_path(&bezpath_to_cpu(path));
        }
        DrawOp::Stroke {
            path,
            transform,
            color,
            width,
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(paint(*color));
            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(*width)
                    .with_caps(vello_cpu::kurbo::Cap::Round)
                    .with_join(vello_cpu::kurbo::Join::Round),
            );
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, premul: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&premul);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
