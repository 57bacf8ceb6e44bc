//! Vector and matrix math for the rendering pipeline.

pub mod barycentric;
pub mod mat4;
pub mod vec2;
pub mod vec3;

pub use barycentric::barycentric;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
