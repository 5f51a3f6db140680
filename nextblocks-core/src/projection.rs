/// Camera, projection, and orbit controls
use nalgebra::{Matrix4, Point3, Vector3};
use serde::Serialize;

/// Opening camera position of the scene
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [10.047021, -0.127436, -11.137374];

/// Opening vertical field of view, in degrees
pub const INITIAL_FOV_DEGREES: f32 = 50.0;

/// Keeps the orbit away from the poles where the up vector degenerates
const POLAR_EPSILON: f32 = 1e-3;

/// Perspective camera looking at a target
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let [x, y, z] = INITIAL_CAMERA_POSITION;
        Self {
            position: Point3::new(x, y, z),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: INITIAL_FOV_DEGREES.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            near: 0.1,
            far: 2000.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Project a world-space point to screen space as (x, y, distance)
    pub fn project_to_screen(&self, point: &Point3<f32>, width: u32, height: u32) -> Option<(f32, f32, f32)> {
        let clip = self.projection_matrix() * self.view_matrix() * point.to_homogeneous();

        // Behind or on the camera plane
        if clip.w < 1e-6 {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, clip.w))
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Serializable opening view handed to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: INITIAL_CAMERA_POSITION,
            fov: INITIAL_FOV_DEGREES,
        }
    }
}

/// Orbit-style camera controller around the camera target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitControls {
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub auto_rotate: bool,
    /// 2.0 completes one orbit every 30 seconds
    pub auto_rotate_speed: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_zoom: true,
            enable_pan: true,
            enable_rotate: true,
            auto_rotate: true,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitControls {
    /// Angular velocity of auto-rotation in radians per second
    pub fn auto_rotate_rate(&self) -> f32 {
        2.0 * std::f32::consts::PI / 60.0 * self.auto_rotate_speed
    }

    /// Advance auto-rotation by `dt` seconds
    pub fn update(&self, camera: &mut Camera, dt: f32) {
        if self.auto_rotate {
            orbit(camera, -self.auto_rotate_rate() * dt, 0.0);
        }
    }

    /// Orbit around the target by azimuth and polar deltas (radians)
    pub fn rotate(&self, camera: &mut Camera, d_azimuth: f32, d_polar: f32) {
        if self.enable_rotate {
            orbit(camera, d_azimuth, d_polar);
        }
    }

    /// Scale the camera distance; factors below 1 move closer
    pub fn zoom(&self, camera: &mut Camera, factor: f32) {
        if !self.enable_zoom || factor <= 0.0 {
            return;
        }
        let offset = (camera.position - camera.target) * factor;
        if offset.norm() > camera.near {
            camera.position = camera.target + offset;
        }
    }

    /// Move camera and target together in the view plane
    pub fn pan(&self, camera: &mut Camera, dx: f32, dy: f32) {
        if !self.enable_pan {
            return;
        }
        let forward = (camera.target - camera.position).normalize();
        let right = forward.cross(&camera.up).normalize();
        let up = right.cross(&forward);
        let shift = right * dx + up * dy;
        camera.position += shift;
        camera.target += shift;
    }
}

fn orbit(camera: &mut Camera, d_azimuth: f32, d_polar: f32) {
    let offset = camera.position - camera.target;
    let radius = offset.norm();
    if radius < 1e-6 {
        return;
    }

    let azimuth = offset.x.atan2(offset.z) + d_azimuth;
    let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_polar)
        .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);

    let offset = Vector3::new(
        radius * polar.sin() * azimuth.sin(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.cos(),
    );
    camera.position = camera.target + offset;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((camera.fov - 50f32.to_radians()).abs() < 1e-6);
        assert!((camera.position.x - 10.047021).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix() {
        let camera = Camera::new(800, 600);
        assert!(camera.view_matrix().norm() > 0.0);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = Camera::new(800, 600);
        let (x, y, depth) = camera.project_to_screen(&Point3::origin(), 800, 600).unwrap();
        assert!((x - 400.0).abs() < 1e-2);
        assert!((y - 300.0).abs() < 1e-2);
        assert!((depth - camera.distance()).abs() < 1e-3);
    }

    #[test]
    fn test_point_behind_camera_is_clipped() {
        let camera = Camera::new(800, 600);
        let behind = camera.position + (camera.position - camera.target);
        assert!(camera.project_to_screen(&behind, 800, 600).is_none());
    }

    #[test]
    fn test_auto_rotate_keeps_distance_and_height() {
        let controls = OrbitControls::default();
        let mut camera = Camera::default();
        let distance = camera.distance();
        let height = camera.position.y;

        controls.update(&mut camera, 1.0);
        assert!((camera.distance() - distance).abs() < 1e-3);
        assert!((camera.position.y - height).abs() < 1e-3);
    }

    #[test]
    fn test_auto_rotate_full_orbit() {
        let controls = OrbitControls::default();
        let mut camera = Camera::default();
        let start = camera.position;
        for _ in 0..300 {
            controls.update(&mut camera, 0.1);
        }
        assert!((camera.position - start).norm() < 1e-2);
    }

    #[test]
    fn test_disabled_auto_rotate() {
        let controls = OrbitControls {
            auto_rotate: false,
            ..Default::default()
        };
        let mut camera = Camera::default();
        let start = camera.position;
        controls.update(&mut camera, 1.0);
        assert_eq!(camera.position, start);
    }

    #[test]
    fn test_zoom_and_pan() {
        let controls = OrbitControls::default();
        let mut camera = Camera::default();
        let distance = camera.distance();
        controls.zoom(&mut camera, 0.5);
        assert!((camera.distance() - distance * 0.5).abs() < 1e-3);

        controls.pan(&mut camera, 1.0, 0.0);
        assert!((camera.target - Point3::origin()).norm() > 0.9);
        assert!((camera.distance() - distance * 0.5).abs() < 1e-3);
    }
}
