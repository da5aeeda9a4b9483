//! Frame sinks: consumers of rendered frames in cycle order.

/// Looping GIF output via the `image` crate.
pub mod gif;
/// Numbered PNG frames in a directory.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;

/// Composite a premultiplied frame over an opaque `bg`, producing straight opaque RGBA8.
pub(crate) fn flatten_over_bg(dst: &mut Vec<u8>, frame: &FrameRGBA, bg: [u8; 3]) -> MotionResult<()> {
    if frame.data.len() != frame.expected_len() {
        return Err(MotionError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    dst.clear();
    dst.reserve(frame.data.len());
    for px in frame.data.chunks_exact(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            dst.extend_from_slice(&[px[0], px[1], px[2], 255]);
            continue;
        }
        let inv = 255 - a;
        for (c, b) in px[..3].iter().zip(bg) {
            let straight = if frame.premultiplied {
                u16::from(*c)
            } else {
                mul_div255_u16(u16::from(*c), a)
            };
            dst.push((straight + mul_div255_u16(u16::from(b), inv)).min(255) as u8);
        }
        dst.push(255);
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> MotionResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/encode/flatten.rs"]
mod tests;
