use glam::{EulerRot, Quat, Vec3};

use super::state::CameraState;
use super::CameraView;

pub const LOOK_SPEED: f32 = 0.02;
pub const PITCH_LIMIT: f32 = 0.5;

/// First-person camera turned by [`CameraState`] one step per frame
///
/// Rotation order is yaw then pitch (YXZ); looking down -Z at zero rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub fov: f32,
}

impl LookCamera {
    pub fn new(position: Vec3, fov: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            speed: LOOK_SPEED,
            fov,
        }
    }

    /// Apply one frame of look input
    pub fn apply(&mut self, state: CameraState) {
        match state {
            CameraState::Up => self.tilt(self.speed),
            CameraState::Down => self.tilt(-self.speed),
            CameraState::Left => self.yaw += self.speed,
            CameraState::Right => self.yaw -= self.speed,
            CameraState::Idle => {}
        }
    }

    fn tilt(&mut self, amount: f32) {
        self.pitch = (self.pitch + amount).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            fov: self.fov,
            ..CameraView::looking(self.position, self.position + self.forward())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_facing_negative_z() {
        let camera = LookCamera::new(Vec3::new(0.0, 1.75, 0.0), 75.0);
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((camera.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = LookCamera::new(Vec3::ZERO, 75.0);
        for _ in 0..100 {
            camera.apply(CameraState::Up);
        }
        assert_eq!(camera.pitch, PITCH_LIMIT);
        for _ in 0..100 {
            camera.apply(CameraState::Down);
        }
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut camera = LookCamera::new(Vec3::ZERO, 75.0);
        for _ in 0..500 {
            camera.apply(CameraState::Left);
        }
        assert!((camera.yaw - 10.0).abs() < 1e-2);
    }

    #[test]
    fn left_turns_towards_negative_x() {
        let mut camera = LookCamera::new(Vec3::ZERO, 75.0);
        camera.apply(CameraState::Left);
        assert!(camera.forward().x < 0.0);
        camera.apply(CameraState::Idle);
        assert_eq!(camera.yaw, LOOK_SPEED);
    }

    #[test]
    fn up_tilts_forward_upwards() {
        let mut camera = LookCamera::new(Vec3::ZERO, 75.0);
        camera.apply(CameraState::Up);
        assert!(camera.forward().y > 0.0);
    }
}
