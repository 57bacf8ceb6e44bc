//! The renderer context: all pipeline state and the render pass.
//!
//! A [`Renderer`] owns the framebuffer, depth buffer, configured matrices,
//! loaded meshes, and the two shader slots. Rendering a frame is one
//! blocking call; no state mutates concurrently during it.
//!
//! The viewport, projection, and camera matrices are recomputed only on
//! explicit reconfiguration and stay stable across render calls.

use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::bmp;
use crate::camera::{Camera, CameraError};
use crate::colors::Color;
use crate::math::{Mat4, Vec2, Vec3};
use crate::mesh::{LoadError, Mesh};
use crate::projection::{viewport_matrix, Projection};
use crate::render::rasterizer::{draw_line, fill_shaded, fill_wireframe, Primitive};
use crate::render::{FrameBuffer, PrimitiveType};
use crate::shader::{FragmentShader, ShaderContext, VertexShader};
use crate::texture::Texture;
use crate::transform::Transform;

/// Errors raised by a render pass.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Shaded fills cannot run without a fragment stage; detected before
    /// any pixel is touched.
    #[error("no fragment shader configured; set one before rendering")]
    MissingFragmentShader,
}

/// Pipeline state and buffers for software rendering.
///
/// Buffers are sized once at construction; changing resolution means
/// constructing a new renderer.
pub struct Renderer {
    framebuffer: FrameBuffer,
    clear_color: u32,
    draw_color: u32,

    vp_x: f32,
    vp_y: f32,
    vp_width: f32,
    vp_height: f32,
    viewport_matrix: Mat4,

    camera: Camera,
    projection: Projection,
    projection_matrix: Mat4,

    primitive_type: PrimitiveType,
    meshes: Vec<Mesh>,

    vertex_shader: Option<Box<dyn VertexShader>>,
    fragment_shader: Option<Box<dyn FragmentShader>>,
}

impl Renderer {
    /// Creates a renderer with a cleared-to-black framebuffer, a full
    /// viewport, a default perspective projection, and an identity camera.
    pub fn new(width: u32, height: u32) -> Self {
        let clear_color = Color::BLACK.pack();
        let projection = Projection::default();
        let aspect = width as f32 / height as f32;

        Self {
            framebuffer: FrameBuffer::new(width, height, clear_color),
            clear_color,
            draw_color: Color::WHITE.pack(),
            vp_x: 0.0,
            vp_y: 0.0,
            vp_width: width as f32,
            vp_height: height as f32,
            viewport_matrix: viewport_matrix(0.0, 0.0, width as f32, height as f32),
            camera: Camera::identity(),
            projection,
            projection_matrix: projection.matrix(aspect),
            primitive_type: PrimitiveType::default(),
            meshes: Vec::new(),
            vertex_shader: None,
            fragment_shader: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    // ---- state configuration ----

    /// Sets the color used by [`Renderer::clear`].
    pub fn set_clear_color(&mut self, r: f32, g: f32, b: f32) {
        self.clear_color = Color::new(r, g, b).pack();
    }

    /// Sets the color used by the point, line, and wireframe drawing ops.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.draw_color = Color::new(r, g, b).pack();
    }

    /// Fills the framebuffer with the clear color and resets every depth
    /// to negative infinity.
    pub fn clear(&mut self) {
        self.framebuffer.clear(self.clear_color);
    }

    /// Reconfigures the viewport rectangle and recomputes its matrix.
    ///
    /// The projection matrix is left untouched; call
    /// [`Renderer::set_projection`] afterwards if the aspect ratio
    /// changed.
    pub fn set_viewport(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.vp_x = x;
        self.vp_y = y;
        self.vp_width = width;
        self.vp_height = height;
        self.viewport_matrix = viewport_matrix(x, y, width, height);
    }

    /// Reconfigures the projection; the matrix is derived with the
    /// current viewport's aspect ratio.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.projection_matrix = projection.matrix(self.vp_width / self.vp_height);
    }

    /// Installs an explicit camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Places the camera at `cam_pos` looking toward `eye_pos`.
    pub fn look_at(&mut self, cam_pos: Vec3, eye_pos: Vec3) -> Result<(), CameraError> {
        self.camera = Camera::look_at(cam_pos, eye_pos)?;
        Ok(())
    }

    /// Builds the camera from a translation and rotation, like a model
    /// matrix.
    pub fn set_camera_transform(
        &mut self,
        translation: Vec3,
        rotation_degrees: Vec3,
    ) -> Result<(), CameraError> {
        self.camera = Camera::from_transform(translation, rotation_degrees)?;
        Ok(())
    }

    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
    }

    pub fn set_vertex_shader(&mut self, shader: impl VertexShader + 'static) {
        self.vertex_shader = Some(Box::new(shader));
    }

    pub fn set_fragment_shader(&mut self, shader: impl FragmentShader + 'static) {
        self.fragment_shader = Some(Box::new(shader));
    }

    // ---- mesh loading ----

    /// Appends a mesh to the scene. Meshes are never removed mid-session.
    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// Loads an OBJ model, optionally binds a texture, applies the given
    /// instance transform, and appends it to the scene.
    pub fn load_model<P: AsRef<Path>>(
        &mut self,
        path: P,
        texture_path: Option<&Path>,
        translation: Vec3,
        rotation_degrees: Vec3,
        scale: Vec3,
    ) -> Result<(), LoadError> {
        let mut mesh = Mesh::from_obj(path.as_ref())?;
        if let Some(texture_path) = texture_path {
            mesh.set_texture(Texture::from_file(texture_path)?);
        }
        *mesh.transform_mut() = Transform::new(translation, rotation_degrees, scale);

        info!(
            "loaded model {:?}: {} vertices, {} faces",
            path.as_ref(),
            mesh.vertices().len(),
            mesh.faces().len()
        );
        self.meshes.push(mesh);
        Ok(())
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    // ---- immediate drawing ----

    /// Writes a single pixel in the current draw color.
    pub fn draw_point(&mut self, x: i32, y: i32) {
        self.framebuffer.set_pixel(x, y, self.draw_color);
    }

    /// Draws a line in the current draw color.
    pub fn draw_line(&mut self, v0: Vec2, v1: Vec2) {
        draw_line(&mut self.framebuffer, v0, v1, self.draw_color);
    }

    /// Outlines and span-fills a screen-space triangle in the current
    /// draw color, without depth testing.
    pub fn draw_wireframe_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        fill_wireframe(&mut self.framebuffer, a, b, c, self.draw_color);
    }

    // ---- render pass ----

    /// Renders every loaded mesh into the framebuffer.
    ///
    /// Per face: vertex positions and texture coordinates are gathered,
    /// quads split into two triangles, each vertex run through the vertex
    /// stage (or passed through raw when none is set), and the resulting
    /// triangles filled with depth testing and the fragment stage.
    ///
    /// Fails fast when no fragment shader is configured.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let fragment_shader = self
            .fragment_shader
            .as_deref()
            .ok_or(RenderError::MissingFragmentShader)?;
        let vertex_shader = self.vertex_shader.as_deref();

        if self.primitive_type != PrimitiveType::Triangles {
            // Points/Lines/Quads tags exist for API parity only.
            debug!("primitive type {:?} has no fill path", self.primitive_type);
            return Ok(());
        }

        let view = self.camera.view_matrix();
        let mut triangle_count = 0usize;

        for mesh in &self.meshes {
            let ctx = ShaderContext {
                model: mesh.transform().to_matrix(),
                view,
                projection: self.projection_matrix,
                viewport: self.viewport_matrix,
            };
            let texture = mesh.texture();

            // Transform + assembly: flat vertex/texcoord runs grouped
            // into primitives of three.
            let mut vertices = Vec::new();
            let mut texcoords = Vec::new();
            for face in mesh.faces() {
                let corners = face.corners();
                for triple in face.triangle_corners() {
                    for &ci in triple {
                        let corner = &corners[ci];
                        let mut position = mesh.position(corner);
                        if let Some(shader) = vertex_shader {
                            position = shader.transform(position, &ctx);
                        }
                        vertices.push(position);
                        texcoords.push(mesh.texcoord(corner));
                    }
                }
            }

            for i in (0..vertices.len()).step_by(3) {
                let prim = Primitive {
                    vertices: [vertices[i], vertices[i + 1], vertices[i + 2]],
                    texcoords: [texcoords[i], texcoords[i + 1], texcoords[i + 2]],
                };
                fill_shaded(&prim, &mut self.framebuffer, fragment_shader, texture);
            }

            let mesh_triangles = vertices.len() / 3;
            triangle_count += mesh_triangles;
            debug!("mesh rasterized: {mesh_triangles} triangles");
        }

        info!("frame complete: {triangle_count} triangles");
        Ok(())
    }

    // ---- output ----

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Serializes the framebuffer to an uncompressed 24-bit BMP file.
    pub fn write_bmp<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        bmp::write_bmp(&self.framebuffer, path)
    }
}
