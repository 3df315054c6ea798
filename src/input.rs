use glam::Vec2;
use winit::event::WindowEvent;

use crate::camera::{classify, normalize_cursor, CameraState};

/// Tracks the cursor over a winit window and derives the look state
///
/// Owned by whoever drives the camera; there is no global cursor state.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    window_size: (f32, f32),
    cursor: Option<(f32, f32)>,
}

impl CursorTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            window_size: (width as f32, height as f32),
            cursor: None,
        }
    }

    /// Process a winit window event, ignoring anything but resize and cursor movement
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            _ => {}
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width as f32, height as f32);
    }

    pub fn move_cursor(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    /// Cursor in [-1, 1] coordinates, if it is over the window
    pub fn normalized(&self) -> Option<Vec2> {
        let (x, y) = self.cursor?;
        let (width, height) = self.window_size;
        Some(normalize_cursor(x, y, width, height))
    }

    /// Idle until the cursor has entered the window
    pub fn camera_state(&self) -> CameraState {
        self.normalized().map(classify).unwrap_or_default()
    }
}
