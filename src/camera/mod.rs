mod look;
mod state;

pub use look::{LookCamera, LOOK_SPEED, PITCH_LIMIT};
pub use state::{classify, normalize_cursor, CameraState, EDGE_THRESHOLD};

use glam::Vec3;

/// Perspective camera snapshot handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraView {
    pub fn looking(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}
