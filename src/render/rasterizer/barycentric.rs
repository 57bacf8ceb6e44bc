//! Shaded triangle fill: bounding-box walk with barycentric containment
//! and z-buffer testing.
//!
//! For each candidate pixel inside the triangle's pixel-rounded bounding
//! box the fill computes barycentric weights against the screen-space
//! vertices, interpolates depth and texture coordinates with the same
//! weights, depth-tests, and asks the fragment shader for a color. The
//! per-pixel barycentric call dominates the cost of shaded fills.

use super::Primitive;
use crate::math::{barycentric, Vec2};
use crate::render::framebuffer::FrameBuffer;
use crate::shader::FragmentShader;
use crate::texture::Texture;

/// Fills one screen-space triangle with depth testing and per-fragment
/// shading.
///
/// Degenerate triangles produce no containment anywhere and are skipped
/// pixel by pixel; that is a normal rasterization outcome, not an error.
/// The caller guarantees a fragment shader is present (enforced before
/// the render pass begins).
pub fn fill_shaded(
    prim: &Primitive,
    fb: &mut FrameBuffer,
    shader: &dyn FragmentShader,
    texture: Option<&Texture>,
) {
    let [va, vb, vc] = prim.vertices;
    let [ta, tb, tc] = prim.texcoords;

    let a = Vec2::new(va.x, va.y);
    let b = Vec2::new(vb.x, vb.y);
    let c = Vec2::new(vc.x, vc.y);

    // Pixel-rounded bounding box, clipped to the framebuffer.
    let min_x = (a.x.min(b.x).min(c.x).round() as i32).max(0);
    let max_x = (a.x.max(b.x).max(c.x).round() as i32).min(fb.width() as i32 - 1);
    let min_y = (a.y.min(b.y).min(c.y).round() as i32).max(0);
    let max_y = (a.y.max(b.y).max(c.y).round() as i32).min(fb.height() as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);
            let Some([u, v, w]) = barycentric(a, b, c, p) else {
                continue;
            };

            let depth = u * va.z + v * vb.z + w * vc.z;
            // Test before shading so rejected fragments cost no shader
            // invocation. depth_at is Some within the clipped box.
            if fb.depth_at(x, y).is_some_and(|stored| depth <= stored) {
                continue;
            }

            let uv = Vec2::new(
                u * ta.x + v * tb.x + w * tc.x,
                u * ta.y + v * tb.y + w * tc.y,
            );
            let color = shader.shade(uv, texture);
            fb.set_pixel_with_depth(x, y, depth, color.pack());
        }
    }
}
