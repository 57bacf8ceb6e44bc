//! A CPU-based software 3D rasterizer.
//!
//! Loads OBJ meshes with texture coordinates, transforms vertices through
//! a model/view/projection/viewport pipeline driven by pluggable shader
//! stages, rasterizes triangles with z-buffer depth testing, and writes
//! the framebuffer as an uncompressed 24-bit BMP.
//!
//! # Quick Start
//!
//! ```ignore
//! use softgl::prelude::*;
//!
//! let mut rend = Renderer::new(512, 512);
//! rend.set_vertex_shader(PipelineVertexShader);
//! rend.set_fragment_shader(TextureFragmentShader);
//! rend.look_at(Vec3::new(-5.0, -5.0, -5.0), Vec3::new(0.0, 0.0, -3.0))?;
//! rend.load_model("model.obj", None, Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::ONE)?;
//! rend.render()?;
//! rend.write_bmp("output.bmp")?;
//! ```

pub mod bmp;
pub mod camera;
pub mod colors;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod renderer;
pub mod shader;
pub mod texture;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, CameraError};
pub use mesh::{Face, FaceVertex, LoadError, Mesh};
pub use renderer::{RenderError, Renderer};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softgl::prelude::*;
/// ```
pub mod prelude {
    // Renderer
    pub use crate::renderer::{RenderError, Renderer};

    // Scene
    pub use crate::camera::Camera;
    pub use crate::mesh::{LoadError, Mesh};
    pub use crate::projection::Projection;
    pub use crate::texture::Texture;
    pub use crate::transform::Transform;

    // Shading
    pub use crate::colors::Color;
    pub use crate::shader::{
        FragmentShader, PipelineVertexShader, ShaderContext, TextureFragmentShader, VertexShader,
    };

    // Rendering
    pub use crate::render::{FrameBuffer, Primitive, PrimitiveType};

    // Math
    pub use crate::math::{Mat4, Vec2, Vec3};
}
