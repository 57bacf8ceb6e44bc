//! Triangle fill algorithms and line drawing.
//!
//! Two independent fill paths exist:
//! - [`barycentric::fill_shaded`]: bounding-box walk with per-pixel
//!   barycentric containment, depth testing, and fragment shading. Used
//!   by the render pass.
//! - [`scanline::fill_wireframe`]: edge-walking flat-top/flat-bottom
//!   span fill drawn with the current color, no depth buffer. Used for
//!   explicit wireframe drawing.

pub mod barycentric;
pub mod scanline;

pub use barycentric::fill_shaded;
pub use scanline::fill_wireframe;

use super::framebuffer::FrameBuffer;
use crate::math::{Vec2, Vec3};

/// A screen-space triangle ready for filling: three viewport-mapped
/// vertices and their texture coordinates.
///
/// Produced by primitive assembly during a render pass and consumed
/// immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub vertices: [Vec3; 3],
    pub texcoords: [Vec2; 3],
}

/// Draws a line between two points with integer error-accumulation
/// stepping (Bresenham family).
///
/// Endpoints are truncated to pixel coordinates and always included.
/// A zero-length segment draws a single point. Steep lines swap axes so
/// the walk always advances along the major axis, which also makes the
/// painted pixel set symmetric under endpoint exchange.
pub fn draw_line(fb: &mut FrameBuffer, v0: Vec2, v1: Vec2, color: u32) {
    let mut x0 = v0.x as i32;
    let mut y0 = v0.y as i32;
    let mut x1 = v1.x as i32;
    let mut y1 = v1.y as i32;

    if x0 == x1 && y0 == y1 {
        fb.set_pixel(x0, y0, color);
        return;
    }

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let slope = dy as f32 / dx as f32;
    let y_step = if y0 < y1 { 1 } else { -1 };

    let mut offset = 0.0;
    let mut limit = 0.5;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            fb.set_pixel(y, x, color);
        } else {
            fb.set_pixel(x, y, color);
        }

        offset += slope;
        if offset >= limit {
            y += y_step;
            limit += 1.0;
        }
    }
}
