//! Per-instance transform for loaded meshes.

use crate::math::{Mat4, Vec3};

/// Translation, rotation (Euler angles in degrees), and scale for a mesh
/// instance.
///
/// Rotation angles are kept in degrees because that is the unit the model
/// configuration speaks; conversion to radians happens inside
/// [`Transform::to_matrix`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation_degrees: Vec3, // x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(translation: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation_degrees,
            scale,
        }
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    /// Rotation as Euler angles in degrees.
    pub fn rotation_degrees(&self) -> Vec3 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, rotation_degrees: Vec3) -> &mut Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Generate the model matrix.
    ///
    /// Order: Translation * Rotation * Scale, with the rotation composed
    /// as pitch * yaw * roll from per-axis matrices.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.translation.x, self.translation.y, self.translation.z)
            * self.rotation_matrix()
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }

    fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_x(self.rotation_degrees.x.to_radians())
            * Mat4::rotation_y(self.rotation_degrees.y.to_radians())
            * Mat4::rotation_z(self.rotation_degrees.z.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_transform_is_identity() {
        let m = Transform::default().to_matrix();
        assert_eq!(m, Mat4::identity());
    }

    #[test]
    fn scale_applies_before_translation() {
        let t = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::new(2.0, 2.0, 2.0),
        );
        let p = t.to_matrix() * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 12.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_rotation_request_stays_zero() {
        // Pitch must be exactly what was asked for, with no hidden offset.
        let t = Transform::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE);
        let p = t.to_matrix() * Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-7);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn yaw_quarter_turn_maps_x_to_minus_z() {
        let t = Transform::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), Vec3::ONE);
        let p = t.to_matrix() * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-5);
    }
}
