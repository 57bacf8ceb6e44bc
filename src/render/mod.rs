//! Rasterization primitives and frame storage.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::Primitive;

/// Primitive topologies.
///
/// Only [`PrimitiveType::Triangles`] is implemented by the render pass;
/// the other tags exist for API parity and draw nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveType {
    Points,
    Lines,
    #[default]
    Triangles,
    Quads,
}
