// Chassis geometry for a 4-wheel mecanum base
// Wheel order is fixed throughout: front-left, front-right, rear-left, rear-right.

use std::f64::consts::FRAC_1_SQRT_2;

/// A mecanum base always carries four wheels.
pub const WHEEL_COUNT: usize = 4;

/// Tolerance for the unit-push and equal-radius checks
const GEOMETRY_EPS: f64 = 1e-6;

/// One wheel: contact point and the body-frame direction the chassis moves
/// when the wheel spins forward.
///
/// Coordinate system is standard: +x forward, +y right, +z down, so a right
/// turn is positive rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    pub x: f64,
    pub y: f64,
    pub push_x: f64,
    pub push_y: f64,
}

impl Wheel {
    pub fn new(x: f64, y: f64, push_x: f64, push_y: f64) -> Self {
        Self { x, y, push_x, push_y }
    }

    /// Distance from the chassis center to the contact point
    fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn push_len(&self) -> f64 {
        (self.push_x * self.push_x + self.push_y * self.push_y).sqrt()
    }
}

/// Rejected wheel layouts, surfaced once at construction
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("mecanum geometry needs exactly 4 wheels, got {0}")]
    WheelCount(usize),
    #[error("wheel {index} push direction has length {len}, must be unit")]
    NonUnitPush { index: usize, len: f64 },
    #[error("{name} must be positive and finite, got {value}")]
    BadDimension { name: &'static str, value: f64 },
    #[error("wheels must sit equidistant from the chassis center ({0} m vs {1} m)")]
    UnevenLayout(f64, f64),
}

/// Immutable chassis description: wheel layout plus speed limits.
///
/// Built and validated once at startup; the per-tick kinematics only borrow
/// it. `max_rotation_rate` is derived so a full-stick spin command runs a
/// wheel at `max_wheel_speed` through its 45-degree roller projection:
/// `sqrt(2) * max_wheel_speed / r` with `r` the center-to-wheel distance.
#[derive(Debug, Clone)]
pub struct DriveGeometry {
    wheels: [Wheel; WHEEL_COUNT],
    max_wheel_speed: f64,
    max_rotation_rate: f64,
}

impl DriveGeometry {
    /// Standard rectangular X-configuration from half dimensions (meters).
    ///
    /// `half_wheelbase` is the front/rear wheel offset along +x and
    /// `half_track` the left/right offset along +y. The rollers contact at
    /// 45 degrees, so push directions pair up across the diagonals:
    /// front-left with rear-right, front-right with rear-left.
    pub fn rectangular(
        half_wheelbase: f64,
        half_track: f64,
        max_wheel_speed: f64,
    ) -> Result<Self, GeometryError> {
        check_dimension("half_wheelbase", half_wheelbase)?;
        check_dimension("half_track", half_track)?;
        let c = FRAC_1_SQRT_2;
        let wheels = [
            Wheel::new(half_wheelbase, -half_track, c, c), // front left
            Wheel::new(half_wheelbase, half_track, c, -c), // front right
            Wheel::new(-half_wheelbase, -half_track, c, -c), // rear left
            Wheel::new(-half_wheelbase, half_track, c, c), // rear right
        ];
        Self::from_wheels(&wheels, max_wheel_speed)
    }

    /// Build from an explicit wheel layout in canonical order.
    ///
    /// Push directions must be unit length and all wheels equidistant from
    /// the chassis center (the rotation-rate limit assumes a symmetric
    /// layout).
    pub fn from_wheels(wheels: &[Wheel], max_wheel_speed: f64) -> Result<Self, GeometryError> {
        if wheels.len() != WHEEL_COUNT {
            return Err(GeometryError::WheelCount(wheels.len()));
        }
        check_dimension("max_wheel_speed", max_wheel_speed)?;
        for (index, wheel) in wheels.iter().enumerate() {
            let len = wheel.push_len();
            if (len - 1.0).abs() > GEOMETRY_EPS {
                return Err(GeometryError::NonUnitPush { index, len });
            }
        }
        let r = wheels[0].radius();
        check_dimension("wheel radius", r)?;
        for wheel in &wheels[1..] {
            if (wheel.radius() - r).abs() > GEOMETRY_EPS {
                return Err(GeometryError::UnevenLayout(r, wheel.radius()));
            }
        }
        let max_rotation_rate = 2.0_f64.sqrt() * max_wheel_speed / r;
        Ok(Self {
            wheels: [wheels[0], wheels[1], wheels[2], wheels[3]],
            max_wheel_speed,
            max_rotation_rate,
        })
    }

    /// Wheels in canonical order [front-left, front-right, rear-left, rear-right]
    pub fn wheels(&self) -> &[Wheel; WHEEL_COUNT] {
        &self.wheels
    }

    /// Wheel tangential speed limit, m/s
    pub fn max_wheel_speed(&self) -> f64 {
        self.max_wheel_speed
    }

    /// Rotation rate commanded by a full-stick spin, rad/s
    pub fn max_rotation_rate(&self) -> f64 {
        self.max_rotation_rate
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::BadDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_layout_and_push_diagonals() {
        let g = DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap();
        let w = g.wheels();

        assert_eq!((w[0].x, w[0].y), (0.18, -0.22), "front left");
        assert_eq!((w[1].x, w[1].y), (0.18, 0.22), "front right");
        assert_eq!((w[2].x, w[2].y), (-0.18, -0.22), "rear left");
        assert_eq!((w[3].x, w[3].y), (-0.18, 0.22), "rear right");

        // FL/RR share one roller diagonal, FR/RL the other
        assert_eq!((w[0].push_x, w[0].push_y), (w[3].push_x, w[3].push_y));
        assert_eq!((w[1].push_x, w[1].push_y), (w[2].push_x, w[2].push_y));
        assert!(w[0].push_y > 0.0 && w[1].push_y < 0.0);

        for wheel in w {
            assert!((wheel.push_len() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rotation_rate_limit_formula() {
        // sqrt(2) * 0.4 / sqrt(0.18^2 + 0.22^2)
        let g = DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap();
        assert!((g.max_rotation_rate() - 1.9900743804199788).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            DriveGeometry::rectangular(0.0, 0.22, 0.4),
            Err(GeometryError::BadDimension { name: "half_wheelbase", .. })
        ));
        assert!(matches!(
            DriveGeometry::rectangular(0.18, -0.22, 0.4),
            Err(GeometryError::BadDimension { name: "half_track", .. })
        ));
        assert!(matches!(
            DriveGeometry::rectangular(0.18, 0.22, 0.0),
            Err(GeometryError::BadDimension { name: "max_wheel_speed", .. })
        ));
        assert!(matches!(
            DriveGeometry::rectangular(f64::NAN, 0.22, 0.4),
            Err(GeometryError::BadDimension { .. })
        ));
    }

    #[test]
    fn rejects_wrong_wheel_count() {
        let g = DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap();
        let three = &g.wheels()[..3];
        assert!(matches!(
            DriveGeometry::from_wheels(three, 0.4),
            Err(GeometryError::WheelCount(3))
        ));
    }

    #[test]
    fn rejects_non_unit_push() {
        let mut wheels = *DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap().wheels();
        wheels[2].push_x = 1.0;
        wheels[2].push_y = 1.0;
        assert!(matches!(
            DriveGeometry::from_wheels(&wheels, 0.4),
            Err(GeometryError::NonUnitPush { index: 2, .. })
        ));
    }

    #[test]
    fn rejects_uneven_layout() {
        let mut wheels = *DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap().wheels();
        wheels[3].x = -0.5;
        assert!(matches!(
            DriveGeometry::from_wheels(&wheels, 0.4),
            Err(GeometryError::UnevenLayout(..))
        ));
    }
}
