//! Command-line arguments and their validation.

use clap::Parser;
use glam::DVec3;
use thiserror::Error;

use crate::camera::{CameraOptions, OrbitLimits, Radians};
use crate::renderer::RenderMode;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Camera distance must be positive, got {0}")]
    NonPositiveDistance(f64),
    #[error("Field of view must be between 0 and 180 degrees, got {0}")]
    FovOutOfRange(f64),
    #[error("Clip planes need 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f64, far: f64 },
    #[error("Rotate speed must be a positive finite number, got {0}")]
    InvalidRotateSpeed(f64),
    #[error("Distance limits need 0 < min <= max, got min={min} max={max}")]
    InvalidDistanceLimits { min: f64, max: f64 },
    #[error("Aspect ratio must be positive, got {0}")]
    InvalidAspect(f64),
}

#[derive(Parser, Debug)]
#[command(name = "orbit-pyramid")]
#[command(about = "Orbit a wireframe pyramid with the mouse")]
pub struct Args {
    /// Initial distance from the pyramid, along +Z
    #[arg(long, default_value = "10.0")]
    pub distance: f64,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "45.0")]
    pub fov: f64,

    /// Near clipping plane
    #[arg(long, default_value = "0.1")]
    pub near: f64,

    /// Far clipping plane
    #[arg(long, default_value = "2000.0")]
    pub far: f64,

    /// Closest the camera may zoom in
    #[arg(long, default_value = "1.5")]
    pub min_distance: f64,

    /// Farthest the camera may zoom out
    #[arg(long, default_value = "500.0")]
    pub max_distance: f64,

    /// Rotation per viewport width dragged, in turns
    #[arg(long, default_value = "1.0")]
    pub rotate_speed: f64,

    /// Spin the camera on its own
    #[arg(long)]
    pub auto_rotate: bool,

    /// What to draw
    #[arg(long, value_enum, default_value_t = RenderMode::Both)]
    pub mode: RenderMode,
}

impl Args {
    /// Build camera options for a viewport with the given aspect ratio.
    pub fn camera_options(&self, aspect: f64) -> Result<CameraOptions, ConfigError> {
        if !(self.distance > 0.0) {
            return Err(ConfigError::NonPositiveDistance(self.distance));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::FovOutOfRange(self.fov));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(ConfigError::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        if !(self.min_distance > 0.0 && self.min_distance <= self.max_distance) {
            return Err(ConfigError::InvalidDistanceLimits {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if !(self.rotate_speed.is_finite() && self.rotate_speed > 0.0) {
            return Err(ConfigError::InvalidRotateSpeed(self.rotate_speed));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(ConfigError::InvalidAspect(aspect));
        }

        Ok(CameraOptions {
            position: DVec3::new(0.0, 0.0, self.distance),
            fov: Radians::from_degrees(self.fov),
            aspect,
            near: self.near,
            far: self.far,
            limits: OrbitLimits {
                min_distance: self.min_distance,
                max_distance: self.max_distance,
                ..Default::default()
            },
            rotate_speed: self.rotate_speed,
            auto_rotate: self.auto_rotate,
            ..Default::default()
        })
    }
}
