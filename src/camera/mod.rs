//! Orbit camera controller.
//!
//! This module provides:
//! - [`OrbitCamera`] - spherical-coordinate camera orbiting a target point
//! - [`CameraOptions`] / [`OrbitLimits`] - construction parameters
//! - [`Radians`] / [`ViewportPoint`] - unit newtypes for angles and pointer positions
//! - [`Spherical`] - offset decomposition around the up axis
//!
//! Input only accumulates deltas. Nothing moves until [`OrbitCamera::update`]
//! runs, which the render loop calls once per frame. Every update consumes the
//! pending deltas, so they never carry over into the next frame.

pub mod spherical;
pub mod units;

use std::f64::consts::{FRAC_PI_4, PI, TAU};

use glam::{DMat4, DVec3};

pub use spherical::Spherical;
pub use units::{Radians, ViewportPoint};

/// Margin keeping the polar angle away from the poles, where look-at breaks down.
pub const EPS: f64 = 1e-6;

/// Angular step injected on both axes every frame while auto-rotating.
pub const AUTO_ROTATE_STEP: Radians = Radians(0.01);

/// How far the camera may orbit and dolly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Lower polar bound, 0 = straight above the target
    pub min_polar: Radians,
    /// Upper polar bound, π = straight below the target
    pub max_polar: Radians,
    pub min_azimuth: Radians,
    pub max_azimuth: Radians,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_polar: Radians::ZERO,
            max_polar: Radians::PI,
            min_azimuth: Radians::NEG_INFINITY,
            max_azimuth: Radians::INFINITY,
            min_distance: 0.0,
            max_distance: f64::INFINITY,
        }
    }
}

/// Construction parameters for [`OrbitCamera`].
///
/// Inputs are not validated here; see [`crate::cli::Args::camera_options`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraOptions {
    pub position: DVec3,
    pub target: DVec3,
    /// Vertical field of view
    pub fov: Radians,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub limits: OrbitLimits,
    pub rotate_speed: f64,
    pub auto_rotate: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 10.0),
            target: DVec3::ZERO,
            fov: Radians(FRAC_PI_4),
            aspect: 1.0,
            near: 0.1,
            far: 2000.0,
            limits: OrbitLimits::default(),
            rotate_speed: 1.0,
            auto_rotate: false,
        }
    }
}

/// Deltas accumulated from input since the last update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDeltas {
    /// Azimuth change
    pub theta: Radians,
    /// Polar angle change
    pub phi: Radians,
    /// Radius multiplier, 1 = no zoom
    pub scale: f64,
}

impl Default for PendingDeltas {
    fn default() -> Self {
        Self {
            theta: Radians::ZERO,
            phi: Radians::ZERO,
            scale: 1.0,
        }
    }
}

/// Whether a pointer drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `anchor` is the pointer position seen by the previous rotate call
    Dragging { anchor: ViewportPoint },
}

/// Camera orbiting a target point on a sphere.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    position: DVec3,
    target: DVec3,
    up: DVec3,
    view_matrix: DMat4,
    projection_matrix: DMat4,
    limits: OrbitLimits,
    pending: PendingDeltas,
    drag: DragState,
    options: CameraOptions,

    /// Inject [`AUTO_ROTATE_STEP`] every frame, replacing pointer input
    pub auto_rotate: bool,
    /// Multiplier for pointer-derived rotation
    pub rotate_speed: f64,
}

impl OrbitCamera {
    pub fn new(options: CameraOptions) -> Self {
        let up = DVec3::Y;
        let projection_matrix = DMat4::perspective_rh(
            options.fov.get(),
            options.aspect,
            options.near,
            options.far,
        );
        let view_matrix = DMat4::look_at_rh(options.position, options.target, up);

        Self {
            position: options.position,
            target: options.target,
            up,
            view_matrix,
            projection_matrix,
            limits: options.limits,
            pending: PendingDeltas::default(),
            drag: DragState::Idle,
            auto_rotate: options.auto_rotate,
            rotate_speed: options.rotate_speed,
            options,
        }
    }

    /// Rebuild the camera from the options it was created with.
    pub fn reset(&mut self) {
        log::debug!("Resetting camera to {:?}", self.options.position);
        *self = Self::new(self.options.clone());
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Move the orbit center. Takes effect on the next update.
    pub fn set_target(&mut self, target: DVec3) {
        self.target = target;
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn view_matrix(&self) -> DMat4 {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> DMat4 {
        self.projection_matrix
    }

    pub fn pending(&self) -> &PendingDeltas {
        &self.pending
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current pose relative to the target.
    pub fn spherical(&self) -> Spherical {
        Spherical::from_offset(self.position - self.target)
    }

    /// Start a drag at `pointer`.
    pub fn begin_rotate(&mut self, pointer: ViewportPoint) {
        log::debug!("Drag started at ({:.3}, {:.3})", pointer.x(), pointer.y());
        self.drag = DragState::Dragging { anchor: pointer };
    }

    /// Accumulate rotation for pointer motion since the previous call.
    ///
    /// A full viewport width of horizontal motion is one turn of azimuth.
    /// Dragging right decreases theta, dragging down decreases phi.
    pub fn rotate(&mut self, pointer: ViewportPoint) {
        let DragState::Dragging { anchor } = self.drag else {
            log::trace!("Ignoring rotate while idle");
            return;
        };

        let delta = pointer - anchor;
        self.pending.theta -= Radians(TAU * delta.x * self.rotate_speed);
        self.pending.phi -= Radians(TAU * delta.y * self.rotate_speed);

        self.drag = DragState::Dragging { anchor: pointer };
    }

    /// Finish the drag. Rotation already accumulated still applies on the next update.
    pub fn end_rotate(&mut self) {
        if self.is_dragging() {
            log::debug!("Drag ended");
        }
        self.drag = DragState::Idle;
    }

    /// Add angular deltas directly.
    pub fn rotate_by(&mut self, d_theta: Radians, d_phi: Radians) {
        self.pending.theta += d_theta;
        self.pending.phi += d_phi;
    }

    /// Multiply the radius for the next update.
    pub fn scale_by(&mut self, factor: f64) {
        self.pending.scale *= factor;
    }

    /// Take the pending deltas, leaving neutral ones behind.
    pub fn consume_pending_deltas(&mut self) -> PendingDeltas {
        std::mem::take(&mut self.pending)
    }

    /// Apply pending deltas and rebuild the view matrix.
    pub fn update(&mut self) {
        let offset = self.position - self.target;
        let Spherical {
            radius,
            mut theta,
            mut phi,
        } = Spherical::from_offset(offset);

        let mut deltas = self.consume_pending_deltas();
        if self.auto_rotate {
            deltas.theta = AUTO_ROTATE_STEP;
            deltas.phi = AUTO_ROTATE_STEP;
        }

        theta += deltas.theta;
        phi += deltas.phi;

        let limits = &self.limits;
        theta = theta.clamp(limits.min_azimuth, limits.max_azimuth);
        phi = phi.clamp(limits.min_polar, limits.max_polar);

        let radius = limits
            .min_distance
            .max(limits.max_distance.min(radius * deltas.scale));

        phi = phi.clamp(Radians(EPS), Radians(PI - EPS));

        let offset = Spherical::new(radius, theta, phi).to_offset();
        self.position = self.target + offset;
        self.view_matrix = DMat4::look_at_rh(self.position, self.target, self.up);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOL,
            "expected {expected}, got {actual}"
        );
    }

    // ==================== Construction ====================

    #[test]
    fn test_camera_default() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.position(), DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.target(), DVec3::ZERO);
        assert_eq!(camera.up(), DVec3::Y);
        assert!(!camera.auto_rotate);
        assert_eq!(camera.rotate_speed, 1.0);
        assert_eq!(camera.drag_state(), DragState::Idle);
        assert_eq!(*camera.pending(), PendingDeltas::default());
    }

    #[test]
    fn test_projection_from_options() {
        let camera = OrbitCamera::default();
        let expected = DMat4::perspective_rh(FRAC_PI_4, 1.0, 0.1, 2000.0);
        assert_eq!(camera.projection_matrix(), expected);
    }

    #[test]
    fn test_initial_view_is_look_at() {
        let camera = OrbitCamera::default();
        let expected = DMat4::look_at_rh(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        assert_eq!(camera.view_matrix(), expected);
    }

    #[test]
    fn test_position_does_not_alias_target() {
        let camera = OrbitCamera::new(CameraOptions {
            position: DVec3::new(5.0, 5.0, 5.0),
            ..Default::default()
        });
        assert_eq!(camera.target(), DVec3::ZERO);
    }

    #[test]
    fn test_projection_unchanged_by_updates() {
        let mut camera = OrbitCamera::default();
        let before = camera.projection_matrix();
        camera.rotate_by(Radians(0.3), Radians(0.2));
        camera.scale_by(3.0);
        camera.update();
        camera.update();
        assert_eq!(camera.projection_matrix(), before);
    }

    // ==================== Update ====================

    #[test]
    fn test_update_round_trip_reproduces_look_at() {
        let mut camera = OrbitCamera::default();
        camera.update();

        let expected = DMat4::look_at_rh(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, TOL));
    }

    #[test]
    fn test_update_is_idempotent_without_input() {
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians(0.7), Radians(-0.4));
        camera.update();

        let position = camera.position();
        let view = camera.view_matrix();
        camera.update();

        assert!(camera.position().abs_diff_eq(position, TOL));
        assert!(camera.view_matrix().abs_diff_eq(view, TOL));
    }

    #[test]
    fn test_update_resets_pending_deltas() {
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians(0.5), Radians(0.5));
        camera.scale_by(2.0);
        camera.update();
        assert_eq!(*camera.pending(), PendingDeltas::default());
    }

    #[test]
    fn test_theta_is_unbounded_by_default() {
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians(100.0), Radians::ZERO);
        camera.update();

        // Starting azimuth is 0 and the camera is level, so it lands at 100 rad
        let expected = DVec3::new(10.0 * 100f64.sin(), 0.0, 10.0 * 100f64.cos());
        assert!(camera.position().abs_diff_eq(expected, TOL));
    }

    #[test]
    fn test_theta_clamped_by_azimuth_limits() {
        let mut camera = OrbitCamera::new(CameraOptions {
            limits: OrbitLimits {
                min_azimuth: Radians(-1.0),
                max_azimuth: Radians(1.0),
                ..Default::default()
            },
            ..Default::default()
        });
        camera.rotate_by(Radians(5.0), Radians::ZERO);
        camera.update();
        assert_close(camera.spherical().theta.get(), 1.0);

        camera.rotate_by(Radians(-5.0), Radians::ZERO);
        camera.update();
        assert_close(camera.spherical().theta.get(), -1.0);
    }

    #[test]
    fn test_phi_stays_inside_poles_for_extreme_deltas() {
        for delta in [-1000.0, -10.0, -3.0, 3.0, 10.0, 1000.0] {
            let mut camera = OrbitCamera::default();
            camera.rotate_by(Radians::ZERO, Radians(delta));
            camera.update();

            let phi = camera.spherical().phi.get();
            assert!(phi >= EPS - TOL, "phi {phi} below EPS for delta {delta}");
            assert!(phi <= PI - EPS + TOL, "phi {phi} above PI - EPS for delta {delta}");
            assert!(camera.view_matrix().is_finite());
        }
    }

    #[test]
    fn test_phi_clamps_to_lower_pole_margin() {
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians::ZERO, Radians(-1000.0));
        camera.update();
        assert_close(camera.spherical().phi.get(), EPS);
    }

    #[test]
    fn test_phi_clamps_to_upper_pole_margin() {
        // Level with the target, phi = π/2
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians::ZERO, Radians(10.0));
        camera.update();

        let phi = camera.spherical().phi.get();
        assert_close(phi, PI - EPS);
        assert!(phi < PI);
    }

    #[test]
    fn test_phi_clamped_by_polar_limits() {
        let mut camera = OrbitCamera::new(CameraOptions {
            limits: OrbitLimits {
                min_polar: Radians(FRAC_PI_4),
                max_polar: Radians(FRAC_PI_2 + 0.25),
                ..Default::default()
            },
            ..Default::default()
        });
        camera.rotate_by(Radians::ZERO, Radians(-2.0));
        camera.update();
        assert_close(camera.spherical().phi.get(), FRAC_PI_4);

        camera.rotate_by(Radians::ZERO, Radians(2.0));
        camera.update();
        assert_close(camera.spherical().phi.get(), FRAC_PI_2 + 0.25);
    }

    #[test]
    fn test_scale_doubles_distance() {
        let mut camera = OrbitCamera::default();
        camera.scale_by(2.0);
        assert_eq!(camera.pending().scale, 2.0);

        camera.update();
        assert_close(camera.position().distance(camera.target()), 20.0);
        assert_eq!(camera.pending().scale, 1.0);
    }

    #[test]
    fn test_scale_is_clamped_by_distance_limits() {
        let options = CameraOptions {
            limits: OrbitLimits {
                min_distance: 5.0,
                max_distance: 15.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut camera = OrbitCamera::new(options.clone());
        camera.scale_by(2.0);
        camera.update();
        assert_close(camera.spherical().radius, 15.0);

        let mut camera = OrbitCamera::new(options);
        camera.scale_by(0.1);
        camera.update();
        assert_close(camera.spherical().radius, 5.0);
    }

    #[test]
    fn test_update_orbits_moved_target() {
        let mut camera = OrbitCamera::new(CameraOptions {
            position: DVec3::new(1.0, 2.0, 8.0),
            target: DVec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        });
        camera.rotate_by(Radians(FRAC_PI_2), Radians::ZERO);
        camera.update();

        assert!(camera
            .position()
            .abs_diff_eq(DVec3::new(6.0, 2.0, 3.0), TOL));
    }

    #[test]
    fn test_set_target_moves_orbit_center() {
        let mut camera = OrbitCamera::default();
        camera.update();

        camera.set_target(DVec3::new(0.0, 0.0, 5.0));
        camera.update();
        assert!(camera
            .position()
            .abs_diff_eq(DVec3::new(0.0, 0.0, 10.0), TOL));

        camera.rotate_by(Radians(FRAC_PI_2), Radians::ZERO);
        camera.update();
        assert!(camera
            .position()
            .abs_diff_eq(DVec3::new(5.0, 0.0, 5.0), TOL));

        let expected = DMat4::look_at_rh(camera.position(), DVec3::new(0.0, 0.0, 5.0), DVec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, TOL));
    }

    #[test]
    fn test_degenerate_position_on_target_yields_nan_view() {
        let mut camera = OrbitCamera::new(CameraOptions {
            position: DVec3::ZERO,
            target: DVec3::ZERO,
            ..Default::default()
        });
        camera.update();

        assert_eq!(camera.position(), DVec3::ZERO);
        assert!(camera.view_matrix().is_nan());
    }

    // ==================== Auto-rotate ====================

    #[test]
    fn test_auto_rotate_overrides_pending_rotation() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.0, 0.0));
        camera.rotate(ViewportPoint::new(0.3, 0.2));
        assert!(camera.pending().theta.get() < 0.0);

        camera.auto_rotate = true;
        camera.update();

        let s = camera.spherical();
        assert_close(s.theta.get(), AUTO_ROTATE_STEP.get());
        assert_close(s.phi.get(), FRAC_PI_2 + AUTO_ROTATE_STEP.get());
        assert_eq!(*camera.pending(), PendingDeltas::default());
    }

    #[test]
    fn test_auto_rotate_advances_every_frame() {
        let mut camera = OrbitCamera::default();
        camera.auto_rotate = true;
        for _ in 0..10 {
            camera.update();
        }

        let s = camera.spherical();
        assert_close(s.theta.get(), 0.1);
        assert_close(s.phi.get(), FRAC_PI_2 + 0.1);
    }

    #[test]
    fn test_auto_rotate_keeps_scale() {
        let mut camera = OrbitCamera::default();
        camera.auto_rotate = true;
        camera.scale_by(0.5);
        camera.update();
        assert_close(camera.spherical().radius, 5.0);
    }

    // ==================== Drag ====================

    #[test]
    fn test_drag_accumulates_linearly() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.0, 0.0));
        camera.rotate(ViewportPoint::new(0.1, 0.0));
        camera.rotate(ViewportPoint::new(0.2, 0.0));

        let step = TAU * 0.1 * camera.rotate_speed;
        assert_close(camera.pending().theta.get(), -2.0 * step);
        assert_eq!(camera.pending().phi, Radians::ZERO);
    }

    #[test]
    fn test_drag_vertical_changes_phi() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.5, 0.5));
        camera.rotate(ViewportPoint::new(0.5, 0.75));

        assert_close(camera.pending().phi.get(), -FRAC_PI_2);
        assert_eq!(camera.pending().theta, Radians::ZERO);
    }

    #[test]
    fn test_drag_respects_rotate_speed() {
        let mut camera = OrbitCamera::default();
        camera.rotate_speed = 0.5;
        camera.begin_rotate(ViewportPoint::new(0.0, 0.0));
        camera.rotate(ViewportPoint::new(0.5, 0.0));

        assert_close(camera.pending().theta.get(), -FRAC_PI_2);
    }

    #[test]
    fn test_drag_anchor_advances() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.5, 0.5));
        camera.rotate(ViewportPoint::new(0.6, 0.4));

        assert_eq!(
            camera.drag_state(),
            DragState::Dragging {
                anchor: ViewportPoint::new(0.6, 0.4)
            }
        );
    }

    #[test]
    fn test_rotate_while_idle_is_ignored() {
        let mut camera = OrbitCamera::default();
        camera.rotate(ViewportPoint::new(0.9, 0.9));
        assert_eq!(*camera.pending(), PendingDeltas::default());
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_end_rotate_keeps_pending_motion() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.0, 0.0));
        camera.rotate(ViewportPoint::new(0.25, 0.0));
        camera.end_rotate();

        assert!(!camera.is_dragging());
        assert_close(camera.pending().theta.get(), -FRAC_PI_2);

        camera.rotate(ViewportPoint::new(0.5, 0.0));
        assert_close(camera.pending().theta.get(), -FRAC_PI_2);
    }

    #[test]
    fn test_drag_right_moves_camera_towards_negative_x() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.5, 0.5));
        camera.rotate(ViewportPoint::new(0.55, 0.5));
        camera.update();

        assert!(camera.position().x < 0.0);
    }

    #[test]
    fn test_consume_pending_deltas() {
        let mut camera = OrbitCamera::default();
        camera.rotate_by(Radians(0.25), Radians(-0.5));
        camera.scale_by(4.0);

        let taken = camera.consume_pending_deltas();
        assert_eq!(taken.theta, Radians(0.25));
        assert_eq!(taken.phi, Radians(-0.5));
        assert_eq!(taken.scale, 4.0);
        assert_eq!(*camera.pending(), PendingDeltas::default());
    }

    // ==================== Reset ====================

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut camera = OrbitCamera::default();
        camera.begin_rotate(ViewportPoint::new(0.0, 0.0));
        camera.rotate(ViewportPoint::new(0.3, 0.1));
        camera.update();
        camera.auto_rotate = true;

        camera.reset();

        assert_eq!(camera.position(), DVec3::new(0.0, 0.0, 10.0));
        assert!(!camera.is_dragging());
        assert!(!camera.auto_rotate);
    }
}
