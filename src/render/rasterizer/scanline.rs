//! Wireframe triangle fill using edge-walking scanlines.
//!
//! The triangle is decomposed into flat-bottom and flat-top halves split
//! at the middle vertex's height, and each half is painted as horizontal
//! spans walked along the edges with inverse slopes. The outline is drawn
//! first so degenerate halves still leave a visible trace.
//!
//! This path is line-only: it writes the given color with no depth
//! testing and is independent of the z-buffered shaded fill.

use super::draw_line;
use crate::math::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Outlines and span-fills a screen-space triangle with a single color.
pub fn fill_wireframe(fb: &mut FrameBuffer, a: Vec2, b: Vec2, c: Vec2, color: u32) {
    // Sort so a.y >= b.y >= c.y (a topmost).
    let (mut a, mut b, mut c) = (a, b, c);
    if a.y < b.y {
        std::mem::swap(&mut a, &mut b);
    }
    if a.y < c.y {
        std::mem::swap(&mut a, &mut c);
    }
    if b.y < c.y {
        std::mem::swap(&mut b, &mut c);
    }

    draw_line(fb, a, b, color);
    draw_line(fb, b, c, color);
    draw_line(fb, c, a, color);

    if b.y == c.y {
        fill_flat_bottom(fb, a, b, c, color);
    } else if a.y == b.y {
        fill_flat_top(fb, a, b, c, color);
    } else {
        // Split at the point D on edge A-C at B's height.
        let d = Vec2::new(a.x + ((b.y - a.y) / (c.y - a.y)) * (c.x - a.x), b.y);
        fill_flat_bottom(fb, a, b, d, color);
        fill_flat_top(fb, b, d, c, color);
    }
}

/// Fills a triangle whose bottom edge B-C is horizontal, walking spans
/// upward from B's height to A's.
fn fill_flat_bottom(fb: &mut FrameBuffer, a: Vec2, b: Vec2, c: Vec2, color: u32) {
    let dy_ba = b.y - a.y;
    let dy_ca = c.y - a.y;
    if dy_ba == 0.0 || dy_ca == 0.0 {
        return; // degenerate half, outline already drawn
    }
    let slope_ba = (b.x - a.x) / dy_ba;
    let slope_ca = (c.x - a.x) / dy_ca;

    let mut x0 = b.x;
    let mut x1 = c.x;
    for y in (b.y as i32)..(a.y as i32) {
        draw_line(
            fb,
            Vec2::new(x0, y as f32),
            Vec2::new(x1, y as f32),
            color,
        );
        x0 += slope_ba;
        x1 += slope_ca;
    }
}

/// Fills a triangle whose top edge A-B is horizontal, walking spans
/// downward from A's height to C's.
fn fill_flat_top(fb: &mut FrameBuffer, a: Vec2, b: Vec2, c: Vec2, color: u32) {
    let dy_ca = c.y - a.y;
    let dy_cb = c.y - b.y;
    if dy_ca == 0.0 || dy_cb == 0.0 {
        return;
    }
    let slope_ca = (c.x - a.x) / dy_ca;
    let slope_cb = (c.x - b.x) / dy_cb;

    let mut x0 = a.x;
    let mut x1 = b.x;
    let mut y = a.y as i32;
    while y > c.y as i32 {
        draw_line(
            fb,
            Vec2::new(x0, y as f32),
            Vec2::new(x1, y as f32),
            color,
        );
        x0 -= slope_ca;
        x1 -= slope_cb;
        y -= 1;
    }
}
