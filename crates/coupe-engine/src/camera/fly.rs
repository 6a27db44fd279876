use glam::{Mat4, Vec3};

/// Movement directions understood by [`FlyCamera::process_keyboard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Euler-angle fly camera. Angles are in degrees; `zoom` is the vertical fov.
///
/// `front`, `right` and `up` are derived from yaw/pitch and stay orthonormal.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,

    pub yaw: f32,
    pub pitch: f32,

    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl FlyCamera {
    /// Camera at `position` looking down -Z with +Y as world up.
    pub fn new(position: Vec3) -> Self {
        Self::with_angles(position, Vec3::Y, YAW, PITCH)
    }

    pub fn with_angles(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective with 0..1 depth, fov taken from `zoom`.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    /// Moves along the camera basis. `offset` is usually speed-scaled frame time.
    pub fn process_keyboard(&mut self, direction: CameraMovement, offset: f32) {
        let velocity = self.movement_speed * offset;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Applies a mouse delta; `yoffset` is positive when the mouse moves up.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());

        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_basis_looks_down_negative_z() {
        let cam = FlyCamera::new(Vec3::ZERO);
        assert!(cam.front.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(cam.right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(cam.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn view_matrix_is_translation_when_looking_down_z() {
        let cam = FlyCamera::new(Vec3::new(0.0, 0.0, 5.0));
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        assert!(cam.view_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch, 89.0);
        cam.process_mouse_movement(0.0, -100_000.0, true);
        assert_eq!(cam.pitch, -89.0);
        assert!(cam.front.is_normalized());
    }

    #[test]
    fn unconstrained_pitch_can_leave_range() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 1_000.0, false);
        assert!(cam.pitch > 89.0);
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_scroll(-10.0);
        assert_eq!(cam.zoom, 45.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom, 1.0);
        cam.process_mouse_scroll(-4.0);
        assert_eq!(cam.zoom, 5.0);
    }

    #[test]
    fn keyboard_velocity_scales_with_speed_and_offset() {
        let mut cam = FlyCamera::new(Vec3::ZERO);
        cam.process_keyboard(CameraMovement::Forward, 2.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
        cam.process_keyboard(CameraMovement::Right, 1.0);
        cam.process_keyboard(CameraMovement::Up, 1.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(2.5, 2.5, -5.0), 1e-5));
    }
}
