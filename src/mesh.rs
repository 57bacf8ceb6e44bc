//! Mesh loading and in-memory representation.
//!
//! A [`Mesh`] owns the attribute lists parsed from an OBJ file plus a
//! per-instance [`Transform`] and an optionally bound [`Texture`]. The
//! attribute data is immutable after loading; only transform and texture
//! can change.
//!
//! Face indices are stored 0-based. `tobj` already converts from the OBJ
//! file's 1-based convention, and [`Mesh::new`] validates every index
//! against the attribute lists so the rest of the pipeline can look up
//! without bounds anxiety.

use std::path::Path;

use thiserror::Error;

use crate::math::{Vec2, Vec3};
use crate::texture::Texture;
use crate::transform::Transform;

/// Errors raised while loading a mesh or its texture.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("unsupported face with {arity} vertices; only triangles and quads are supported")]
    UnsupportedArity { arity: usize },
    #[error("{kind} index {index} out of range ({len} available)")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    #[error("failed to load texture: {0}")]
    Texture(#[from] image::ImageError),
}

/// One corner of a face: indices into the mesh's attribute lists.
///
/// Texture coordinate and normal references are optional because OBJ
/// faces may omit them (`f v`, `f v//vn` forms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: usize,
    pub texcoord: Option<usize>,
    pub normal: Option<usize>,
}

/// A polygonal face: exactly three or four corners.
///
/// Quads survive loading and are split into two triangles at primitive
/// assembly time with the fixed diagonal (0,1,2) and (0,2,3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Face {
    Triangle([FaceVertex; 3]),
    Quad([FaceVertex; 4]),
}

impl Face {
    pub fn corners(&self) -> &[FaceVertex] {
        match self {
            Face::Triangle(c) => c,
            Face::Quad(c) => c,
        }
    }

    /// Corner-index triples after the fixed quad split.
    pub fn triangle_corners(&self) -> &'static [[usize; 3]] {
        match self {
            Face::Triangle(_) => &[[0, 1, 2]],
            Face::Quad(_) => &[[0, 1, 2], [0, 2, 3]],
        }
    }
}

/// An in-memory model: attribute lists, faces, instance transform, and an
/// optional texture.
#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
    transform: Transform,
    texture: Option<Texture>,
}

impl Mesh {
    /// Builds a mesh from raw attribute and face lists, validating that
    /// every face index points inside its attribute list.
    pub fn new(
        vertices: Vec<Vec3>,
        texcoords: Vec<Vec2>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        for face in &faces {
            for corner in face.corners() {
                check_index("vertex", corner.position, vertices.len())?;
                if let Some(t) = corner.texcoord {
                    check_index("texture coordinate", t, texcoords.len())?;
                }
                if let Some(n) = corner.normal {
                    check_index("normal", n, normals.len())?;
                }
            }
        }

        Ok(Self {
            vertices,
            texcoords,
            normals,
            faces,
            transform: Transform::default(),
            texture: None,
        })
    }

    /// Loads a mesh from an OBJ file.
    ///
    /// All objects in the file are merged into a single mesh. Quads are
    /// kept as quads; faces with any other arity than 3 or 4 abort the
    /// load.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let mut load_options = tobj::LoadOptions::default();
        load_options.single_index = false;
        load_options.triangulate = false;
        load_options.ignore_points = true;
        load_options.ignore_lines = true;
        let (models, _materials) = tobj::load_obj(path.as_ref(), &load_options)?;

        let mut vertices = Vec::new();
        let mut texcoords = Vec::new();
        let mut normals = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let vertex_base = vertices.len();
            let texcoord_base = texcoords.len();
            let normal_base = normals.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2])),
            );
            texcoords.extend(mesh.texcoords.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])));
            normals.extend(
                mesh.normals
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2])),
            );

            let has_texcoords = !mesh.texcoord_indices.is_empty();
            let has_normals = !mesh.normal_indices.is_empty();

            // Empty face_arities means the file contained triangles only.
            let arity_of = |face: usize| -> usize {
                if mesh.face_arities.is_empty() {
                    3
                } else {
                    mesh.face_arities[face] as usize
                }
            };
            let face_count = if mesh.face_arities.is_empty() {
                mesh.indices.len() / 3
            } else {
                mesh.face_arities.len()
            };

            let mut cursor = 0;
            for face in 0..face_count {
                let arity = arity_of(face);
                let mut corners = Vec::with_capacity(arity);
                for k in cursor..cursor + arity {
                    corners.push(FaceVertex {
                        position: vertex_base + mesh.indices[k] as usize,
                        texcoord: has_texcoords
                            .then(|| texcoord_base + mesh.texcoord_indices[k] as usize),
                        normal: has_normals.then(|| normal_base + mesh.normal_indices[k] as usize),
                    });
                }
                cursor += arity;

                faces.push(match *corners.as_slice() {
                    [a, b, c] => Face::Triangle([a, b, c]),
                    [a, b, c, d] => Face::Quad([a, b, c, d]),
                    _ => return Err(LoadError::UnsupportedArity { arity }),
                });
            }
        }

        Mesh::new(vertices, texcoords, normals, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Position for a face corner. Indices were validated at construction.
    #[inline]
    pub fn position(&self, corner: &FaceVertex) -> Vec3 {
        self.vertices[corner.position]
    }

    /// Texture coordinate for a face corner; zero when the face carries
    /// no texture coordinates.
    #[inline]
    pub fn texcoord(&self, corner: &FaceVertex) -> Vec2 {
        corner.texcoord.map_or(Vec2::ZERO, |i| self.texcoords[i])
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}

fn check_index(kind: &'static str, index: usize, len: usize) -> Result<(), LoadError> {
    if index < len {
        Ok(())
    } else {
        Err(LoadError::IndexOutOfRange { kind, index, len })
    }
}
