use glam::{Vec2, Vec3};
use scene_demos::camera::{classify, normalize_cursor, CameraState, LookCamera, PITCH_LIMIT};
use scene_demos::input::CursorTracker;

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[test]
    fn test_centre_is_idle() {
        assert_eq!(classify(Vec2::ZERO), CameraState::Idle);
    }

    #[test]
    fn test_each_edge() {
        assert_eq!(classify(Vec2::new(-0.95, 0.0)), CameraState::Left);
        assert_eq!(classify(Vec2::new(0.95, 0.0)), CameraState::Right);
        assert_eq!(classify(Vec2::new(0.0, 0.95)), CameraState::Up);
        assert_eq!(classify(Vec2::new(0.0, -0.95)), CameraState::Down);
    }

    #[test]
    fn test_window_top_is_up() {
        let cursor = normalize_cursor(400.0, 5.0, 800.0, 600.0);
        assert!(cursor.y > 0.9);
        assert_eq!(classify(cursor), CameraState::Up);
    }

    #[test]
    fn test_classify_is_total() {
        for i in -20..=20 {
            for j in -20..=20 {
                let cursor = Vec2::new(i as f32 / 10.0, j as f32 / 10.0);
                let state = classify(cursor);
                let inner = cursor.x.abs() <= 0.8 && cursor.y.abs() <= 0.8;
                assert_eq!(state == CameraState::Idle, inner, "{cursor}");
            }
        }
    }
}

#[cfg(test)]
mod look_camera_tests {
    use super::*;

    #[test]
    fn test_cursor_drives_camera() {
        let mut tracker = CursorTracker::new(800, 600);
        let mut camera = LookCamera::new(Vec3::new(0.0, 1.75, 0.0), 75.0);

        tracker.move_cursor(400.0, 2.0);
        for _ in 0..10 {
            camera.apply(tracker.camera_state());
        }
        assert!((camera.pitch - 0.2).abs() < 1e-5);

        tracker.move_cursor(799.0, 300.0);
        camera.apply(tracker.camera_state());
        assert!((camera.yaw + 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_never_leaves_limits() {
        let mut camera = LookCamera::new(Vec3::ZERO, 75.0);
        let pattern = [CameraState::Up, CameraState::Up, CameraState::Down, CameraState::Left];
        for state in pattern.iter().cycle().take(400) {
            camera.apply(*state);
            assert!(camera.pitch.abs() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_view_looks_along_forward() {
        let mut camera = LookCamera::new(Vec3::new(0.0, 1.75, 0.0), 75.0);
        camera.apply(CameraState::Right);
        let view = camera.view();
        assert!((view.forward() - camera.forward()).length() < 1e-5);
        assert_eq!(view.fov, 75.0);
    }
}
