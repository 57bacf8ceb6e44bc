//! Pluggable shader stages for the rendering pipeline.
//!
//! The rasterizer is fixed-function: it assembles primitives, walks pixels,
//! and depth-tests. Everything programmable lives in two caller-supplied
//! stages:
//!
//! - the **vertex stage** receives a raw model-space position plus the
//!   full matrix context and must return a viewport-mapped screen
//!   position (it owns the whole transform chain, including perspective
//!   division),
//! - the **fragment stage** receives interpolated texture coordinates and
//!   the active texture, and returns the pixel color.
//!
//! Both traits have blanket impls for plain closures with the matching
//! signature.

use crate::colors::Color;
use crate::math::{Mat4, Vec2, Vec3};
use crate::texture::Texture;

/// Matrix context handed to the vertex stage for every vertex.
#[derive(Clone, Copy, Debug)]
pub struct ShaderContext {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub viewport: Mat4,
}

/// Vertex transform stage.
pub trait VertexShader {
    /// Transforms a model-space position into a screen-space position.
    ///
    /// The returned position must already be perspective-divided and
    /// viewport-mapped; the rasterizer applies no matrices itself.
    fn transform(&self, position: Vec3, ctx: &ShaderContext) -> Vec3;
}

impl<F> VertexShader for F
where
    F: Fn(Vec3, &ShaderContext) -> Vec3,
{
    fn transform(&self, position: Vec3, ctx: &ShaderContext) -> Vec3 {
        self(position, ctx)
    }
}

/// Per-fragment color stage, invoked once per accepted pixel.
pub trait FragmentShader {
    /// Computes the color for a fragment, channels in [0, 1].
    fn shade(&self, uv: Vec2, texture: Option<&Texture>) -> Color;
}

impl<F> FragmentShader for F
where
    F: Fn(Vec2, Option<&Texture>) -> Color,
{
    fn shade(&self, uv: Vec2, texture: Option<&Texture>) -> Color {
        self(uv, texture)
    }
}

/// Standard vertex stage: model -> view -> projection -> viewport.
///
/// Perspective division happens between projection and viewport mapping.
pub struct PipelineVertexShader;

impl VertexShader for PipelineVertexShader {
    fn transform(&self, position: Vec3, ctx: &ShaderContext) -> Vec3 {
        let clip = ctx.projection * ctx.view * ctx.model;
        // Mat4 * Vec3 performs the perspective divide, so the viewport
        // matrix must be applied in a second step, after the divide.
        ctx.viewport * (clip * position)
    }
}

/// Standard fragment stage: samples the bound texture, flat white when
/// the mesh has no texture.
pub struct TextureFragmentShader;

impl FragmentShader for TextureFragmentShader {
    fn shade(&self, uv: Vec2, texture: Option<&Texture>) -> Color {
        match texture {
            Some(tex) => tex.sample(uv.x, uv.y),
            None => Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{viewport_matrix, Projection};
    use approx::assert_relative_eq;

    fn context(width: f32, height: f32) -> ShaderContext {
        ShaderContext {
            model: Mat4::identity(),
            view: Mat4::identity(),
            projection: Projection::default().matrix(width / height),
            viewport: viewport_matrix(0.0, 0.0, width, height),
        }
    }

    #[test]
    fn pipeline_maps_view_axis_to_screen_center() {
        let ctx = context(200.0, 100.0);
        // A point straight ahead of the camera projects to the viewport
        // center.
        let p = PipelineVertexShader.transform(Vec3::new(0.0, 0.0, -5.0), &ctx);
        assert_relative_eq!(p.x, 100.0, epsilon = 1e-2);
        assert_relative_eq!(p.y, 50.0, epsilon = 1e-2);
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn closure_acts_as_vertex_shader() {
        let passthrough = |position: Vec3, _ctx: &ShaderContext| position;
        let p = passthrough.transform(Vec3::new(1.0, 2.0, 3.0), &context(10.0, 10.0));
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn texture_stage_is_white_without_texture() {
        let c = TextureFragmentShader.shade(Vec2::new(0.5, 0.5), None);
        assert_eq!(c, Color::WHITE);
    }
}
