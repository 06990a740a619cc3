//! Input handling for camera control.
//!
//! Turns winit mouse and keyboard events into [`OrbitCamera`] calls. Cursor
//! positions arrive in pixels and are converted to viewport fractions here;
//! the camera never sees pixels.

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::camera::{OrbitCamera, Radians, ViewportPoint};

/// Sensitivity constants for input handling.
pub struct InputConfig {
    /// Zoom per scroll line (fraction of the current distance)
    pub zoom_sensitivity: f64,
    /// Smallest radius multiplier a single scroll event may apply
    pub min_zoom_factor: f64,
    /// Rotation per arrow key press
    pub key_rotate_step: Radians,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: 0.1,
            min_zoom_factor: 0.1,
            key_rotate_step: Radians(0.05),
        }
    }
}

/// Tracks mouse state between events.
#[derive(Default)]
pub struct InputState {
    /// Left mouse button held
    pub left_pressed: bool,
    /// Last cursor position in pixels
    pub cursor: Option<(f64, f64)>,
    /// Viewport size in pixels
    pub viewport: (f64, f64),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position as viewport fractions, if both are known.
    pub fn pointer(&self) -> Option<ViewportPoint> {
        let (x, y) = self.cursor?;
        let (width, height) = self.viewport;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(ViewportPoint::from_pixels(x, y, width, height))
    }
}

/// Input controller that processes events and updates camera.
pub struct InputController {
    pub config: InputConfig,
    pub state: InputState,
}

impl InputController {
    pub fn new(width: u32, height: u32) -> Self {
        let mut controller = Self {
            config: InputConfig::default(),
            state: InputState::new(),
        };
        controller.set_viewport(width, height);
        controller
    }

    /// Record the viewport size used to normalize cursor positions.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.state.viewport = (width as f64, height as f64);
    }

    /// Handle mouse button press/release. Left button drives rotation.
    pub fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        camera: &mut OrbitCamera,
    ) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => {
                self.state.left_pressed = true;
                if let Some(pointer) = self.state.pointer() {
                    camera.begin_rotate(pointer);
                }
            }
            ElementState::Released => {
                self.state.left_pressed = false;
                camera.end_rotate();
            }
        }
    }

    /// Handle cursor movement. Returns true if the camera received input.
    pub fn handle_mouse_move(&mut self, x: f64, y: f64, camera: &mut OrbitCamera) -> bool {
        self.state.cursor = Some((x, y));

        if !self.state.left_pressed {
            return false;
        }
        let Some(pointer) = self.state.pointer() else {
            return false;
        };

        // Press arrived before any cursor position; anchor here instead
        if camera.is_dragging() {
            camera.rotate(pointer);
        } else {
            camera.begin_rotate(pointer);
        }
        true
    }

    /// Handle mouse scroll for zooming.
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta, camera: &mut OrbitCamera) {
        let scroll_amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(pos) => pos.y * 0.1,
        };

        let factor = (1.0 - scroll_amount * self.config.zoom_sensitivity)
            .max(self.config.min_zoom_factor);
        camera.scale_by(factor);
    }

    /// Handle keyboard key press/release.
    pub fn handle_keyboard(&mut self, key: KeyCode, state: ElementState, camera: &mut OrbitCamera) {
        if state != ElementState::Pressed {
            return;
        }

        let step = self.config.key_rotate_step;
        match key {
            KeyCode::KeyR => camera.reset(),
            KeyCode::Space => {
                camera.auto_rotate = !camera.auto_rotate;
                log::debug!("Auto-rotate {}", if camera.auto_rotate { "on" } else { "off" });
            }
            KeyCode::ArrowLeft => camera.rotate_by(step, Radians::ZERO),
            KeyCode::ArrowRight => camera.rotate_by(-step, Radians::ZERO),
            KeyCode::ArrowUp => camera.rotate_by(Radians::ZERO, -step),
            KeyCode::ArrowDown => camera.rotate_by(Radians::ZERO, step),
            _ => {}
        }
    }
}
