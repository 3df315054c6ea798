use glam::Vec2;

/// Cursor distance from centre, in normalized units, that starts a look
pub const EDGE_THRESHOLD: f32 = 0.8;

/// Look direction requested by the cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraState {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Idle,
}

/// Map a window-space cursor position to [-1, 1] on both axes, +y up
///
/// A zero-sized window maps everything to the centre.
pub fn normalize_cursor(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Classify a normalized cursor position
///
/// Horizontal edges take precedence over vertical ones, so corners resolve to
/// Left or Right.
pub fn classify(cursor: Vec2) -> CameraState {
    if cursor.x < -EDGE_THRESHOLD {
        CameraState::Left
    } else if cursor.x > EDGE_THRESHOLD {
        CameraState::Right
    } else if cursor.y > EDGE_THRESHOLD {
        CameraState::Up
    } else if cursor.y < -EDGE_THRESHOLD {
        CameraState::Down
    } else {
        CameraState::Idle
    }
}
