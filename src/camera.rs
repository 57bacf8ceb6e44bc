//! Camera matrix construction.
//!
//! The camera matrix places the camera in world space; its inverse is the
//! view matrix that brings world-space geometry into camera space. Both
//! are computed once per reconfiguration, never per frame.

use thiserror::Error;

use crate::math::{Mat4, Vec3};
use crate::transform::Transform;

/// Errors raised by camera configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CameraError {
    #[error("camera position and look-at target coincide or are vertically aligned")]
    DegenerateLookAt,
    #[error("camera matrix is singular and cannot be inverted")]
    SingularMatrix,
}

/// A world-space camera and its derived view matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    matrix: Mat4,
    view: Mat4,
}

impl Camera {
    /// Camera at the world origin looking down the default axis.
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
            view: Mat4::identity(),
        }
    }

    /// Builds a camera at `cam_pos` looking toward `eye_pos`.
    ///
    /// The basis is derived from the world up axis (0,1,0):
    /// forward = normalize(cam_pos - eye_pos), right = normalize(up ×
    /// forward), up = forward × right. The camera matrix has columns
    /// [right, up, forward, cam_pos].
    ///
    /// Fails when the two points coincide, or when the forward axis is
    /// parallel to world up (no well-defined right axis).
    pub fn look_at(cam_pos: Vec3, eye_pos: Vec3) -> Result<Self, CameraError> {
        let gaze = cam_pos - eye_pos;
        if gaze.magnitude() < f32::EPSILON {
            return Err(CameraError::DegenerateLookAt);
        }
        let forward = gaze.normalize();

        let right = Vec3::UP.cross(forward);
        if right.magnitude() < f32::EPSILON {
            return Err(CameraError::DegenerateLookAt);
        }
        let right = right.normalize();

        // Cross of two unit orthogonal vectors is already unit length.
        let up = forward.cross(right);

        let matrix = Mat4::new([
            [right.x, up.x, forward.x, cam_pos.x],
            [right.y, up.y, forward.y, cam_pos.y],
            [right.z, up.z, forward.z, cam_pos.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let view = matrix.inverse().ok_or(CameraError::SingularMatrix)?;

        Ok(Self { matrix, view })
    }

    /// Builds a camera from an explicit translation and rotation, the same
    /// way a model matrix is composed.
    pub fn from_transform(translation: Vec3, rotation_degrees: Vec3) -> Result<Self, CameraError> {
        let matrix = Transform::new(translation, rotation_degrees, Vec3::ONE).to_matrix();
        let view = matrix.inverse().ok_or(CameraError::SingularMatrix)?;
        Ok(Self { matrix, view })
    }

    /// World-space camera matrix.
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// View matrix: the inverse of the camera matrix.
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_identity(m: Mat4) {
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(m.get(row, col), expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn view_is_inverse_of_camera() {
        let camera = Camera::look_at(Vec3::new(-5.0, -5.0, -5.0), Vec3::new(0.0, 0.0, -3.0))
            .expect("valid look-at");
        assert_identity(camera.matrix() * camera.view_matrix());
    }

    #[test]
    fn view_is_inverse_for_transform_camera() {
        let camera =
            Camera::from_transform(Vec3::new(1.0, 2.0, 0.0), Vec3::new(10.0, -30.0, 5.0)).unwrap();
        assert_identity(camera.matrix() * camera.view_matrix());
    }

    #[test]
    fn coincident_positions_are_rejected() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Camera::look_at(p, p), Err(CameraError::DegenerateLookAt));
    }

    #[test]
    fn vertical_gaze_is_rejected() {
        // Forward parallel to world up leaves no right axis.
        let err = Camera::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO).unwrap_err();
        assert_eq!(err, CameraError::DegenerateLookAt);
    }

    #[test]
    fn camera_basis_is_orthonormal() {
        let camera = Camera::look_at(Vec3::new(3.0, 1.0, -2.0), Vec3::ZERO).unwrap();
        let m = camera.matrix();
        for col in 0..3 {
            let axis = Vec3::new(m.get(0, col), m.get(1, col), m.get(2, col));
            assert_relative_eq!(axis.magnitude(), 1.0, epsilon = 1e-5);
        }
    }
}
