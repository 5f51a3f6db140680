/// Transformation matrices for placing the word in the scene
use nalgebra::{Matrix4, Point3, Vector3};
use serde::Serialize;

/// Euler rotation around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotation about the vertical axis only
    pub fn yaw(y: f32) -> Self {
        Self::new(0.0, y, 0.0)
    }
}

/// Translation, rotation and uniform scale applied to a group of blocks
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupTransform {
    pub position: Point3<f32>,
    pub rotation: RotationState,
    pub scale: f32,
}

impl GroupTransform {
    pub fn new(position: Point3<f32>, rotation: RotationState) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Local-to-parent matrix: scale first, then rotate, then translate
    pub fn matrix(&self) -> Matrix4<f32> {
        Transform::translation_matrix(self.position.coords)
            * Transform::rotation_matrix(&self.rotation)
            * Transform::scale_matrix(self.scale)
    }

    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        self.matrix().transform_point(point)
    }
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self::new(Point3::origin(), RotationState::zero())
    }
}

/// Matrix builders
pub struct Transform;

impl Transform {
    /// Rotation matrix applying X, then Y, then Z
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(rotation.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, rotation.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, rotation.z));
        rz * ry * rx
    }

    pub fn translation_matrix(offset: Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(&offset)
    }

    pub fn scale_matrix(scale: f32) -> Matrix4<f32> {
        Matrix4::new_scaling(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&RotationState::zero());
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let transform = GroupTransform::new(Point3::origin(), RotationState::yaw(PI / 2.0));
        let rotated = transform.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!((rotated - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_scale_then_translate() {
        let mut transform = GroupTransform::new(Point3::new(-5.0, 0.0, 0.0), RotationState::zero());
        transform.scale = 0.5;
        let placed = transform.apply(&Point3::new(1.0, 1.0, 0.0));
        assert!((placed - Point3::new(-4.5, 0.5, 0.0)).norm() < 1e-6);
    }
}
