use glam::DVec3;

use super::units::Radians;

/// Spherical coordinates of an offset around the +Y axis.
///
/// - `theta`: azimuth, measured from +Z towards +X
/// - `phi`: polar angle from +Y (0 = straight above, π = straight below)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub theta: Radians,
    pub phi: Radians,
}

impl Spherical {
    pub fn new(radius: f64, theta: Radians, phi: Radians) -> Self {
        Self { radius, theta, phi }
    }

    /// Decompose an offset vector. A zero offset yields all zeros.
    pub fn from_offset(offset: DVec3) -> Self {
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.x * offset.x + offset.z * offset.z)
            .sqrt()
            .atan2(offset.y);
        Self {
            radius: offset.length(),
            theta: Radians(theta),
            phi: Radians(phi),
        }
    }

    /// Recompose the offset vector.
    pub fn to_offset(&self) -> DVec3 {
        let (sin_phi, cos_phi) = self.phi.get().sin_cos();
        let (sin_theta, cos_theta) = self.theta.get().sin_cos();
        DVec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }
}
