//! Perspective projection and viewport mapping.
//!
//! [`Projection`] is the single source of truth for the perspective
//! parameters (vertical FOV, near/far planes); the aspect ratio comes from
//! the viewport at matrix-generation time. [`viewport_matrix`] maps clip
//! space into pixel coordinates.

use crate::math::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_degrees(60.0, 0.1, 1000.0)
    }
}

impl Projection {
    /// Creates a new projection.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `z_near` - Near plane distance (must be > 0)
    /// * `z_far` - Far plane distance (must be > z_near)
    pub fn new(fov_y: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_y,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), z_near, z_far)
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Generates the right-handed perspective projection matrix for the
    /// given aspect ratio (width / height).
    ///
    /// Maps camera space to clip space with near/far remapped to the
    /// [-1, 1] depth convention the viewport matrix then takes to [0, 1].
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        let t = (self.fov_y / 2.0).tan() * self.z_near;
        let r = t * aspect_ratio;
        let (n, f) = (self.z_near, self.z_far);
        Mat4::new([
            [n / r, 0.0, 0.0, 0.0],
            [0.0, n / t, 0.0, 0.0],
            [0.0, 0.0, -(f + n) / (f - n), -2.0 * f * n / (f - n)],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}

/// Builds the viewport matrix mapping clip-space x,y in [-1, 1] to pixel
/// coordinates inside the (x, y, width, height) rectangle, and z in
/// [-1, 1] to the [0, 1] depth range.
pub fn viewport_matrix(x: f32, y: f32, width: f32, height: f32) -> Mat4 {
    Mat4::new([
        [width / 2.0, 0.0, 0.0, x + width / 2.0],
        [0.0, height / 2.0, 0.0, y + height / 2.0],
        [0.0, 0.0, 0.5, 0.5],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
