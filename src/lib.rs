//! Orbit-camera pyramid viewer.
//!
//! The interesting part is [`camera::OrbitCamera`]: a controller that turns
//! pointer drags into a view matrix by orbiting a target point in spherical
//! coordinates. The rest is a thin wgpu/winit/egui harness around it.
//!
//! ```
//! use orbit_pyramid::camera::{OrbitCamera, ViewportPoint};
//!
//! let mut camera = OrbitCamera::default();
//! camera.begin_rotate(ViewportPoint::new(0.5, 0.5));
//! camera.rotate(ViewportPoint::new(0.6, 0.5));
//! camera.end_rotate();
//! camera.update();
//!
//! // Dragging right swings the camera towards -X
//! assert!(camera.position().x < 0.0);
//! ```

pub mod camera;
pub mod cli;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod ui;
