// Mecanum chassis kinematics: body twist -> per-wheel tangential speeds.
// Everything here is a pure function of its arguments; the control loop calls
// it once per tick.

use crate::drive::geometry::{DriveGeometry, WHEEL_COUNT};

/// Desired chassis velocity: linear in m/s, angular in rad/s.
///
/// Expressed in the world frame until `to_local` rotates it into the chassis
/// frame; heading-unaware callers can treat the two as identical.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyTwist {
    pub vx: f64,
    pub vy: f64,
    pub omega: f64,
}

impl BodyTwist {
    pub fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate a world-frame twist into the chassis frame.
    ///
    /// `heading` is the chassis orientation in the world frame, radians.
    /// Callers supply the angle in a consistent range; no wrapping here.
    pub fn to_local(self, heading: f64) -> Self {
        let (sin, cos) = heading.sin_cos();
        Self {
            vx: self.vx * cos + self.vy * sin,
            vy: -self.vx * sin + self.vy * cos,
            omega: self.omega,
        }
    }
}

/// Rotation center for the twist, offset from the chassis center.
///
/// Driving "about the block" puts the pivot at an attached end effector so
/// spin commands orbit it instead of the chassis center.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

impl Pivot {
    /// Chassis geometric center, the everyday rotation center
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tangential wheel speeds in canonical order, m/s
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelSpeeds {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

impl WheelSpeeds {
    pub fn new(front_left: f64, front_right: f64, rear_left: f64, rear_right: f64) -> Self {
        Self { front_left, front_right, rear_left, rear_right }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Speeds as array [front-left, front-right, rear-left, rear-right]
    pub fn as_array(&self) -> [f64; WHEEL_COUNT] {
        [self.front_left, self.front_right, self.rear_left, self.rear_right]
    }

    /// Largest magnitude across the four wheels
    pub fn max_magnitude(&self) -> f64 {
        self.as_array().iter().fold(0.0, |m, w| m.max(w.abs()))
    }

    pub(crate) fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            front_left: f(self.front_left),
            front_right: f(self.front_right),
            rear_left: f(self.rear_left),
            rear_right: f(self.rear_right),
        }
    }
}

impl From<[f64; WHEEL_COUNT]> for WheelSpeeds {
    fn from(w: [f64; WHEEL_COUNT]) -> Self {
        Self::new(w[0], w[1], w[2], w[3])
    }
}

/// Project a chassis-local twist onto each wheel's rolling direction.
///
/// The local velocity at a wheel is the translation plus the cross product
/// of omega with the arm from the pivot to the wheel; its dot product with
/// the push direction is the tangential speed that wheel must roll at.
pub fn wheel_speeds(geometry: &DriveGeometry, twist: BodyTwist, pivot: Pivot) -> WheelSpeeds {
    let mut w = [0.0; WHEEL_COUNT];
    for (speed, wheel) in w.iter_mut().zip(geometry.wheels()) {
        let v_x = twist.vx - twist.omega * (wheel.y - pivot.y);
        let v_y = twist.vy + twist.omega * (wheel.x - pivot.x);
        *speed = wheel.push_x * v_x + wheel.push_y * v_y;
    }
    WheelSpeeds::from(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> DriveGeometry {
        DriveGeometry::rectangular(0.18, 0.22, 0.4).unwrap()
    }

    #[test]
    fn zero_heading_is_identity() {
        let t = BodyTwist::new(0.3, -0.2, 0.7);
        let local = t.to_local(0.0);
        assert!((local.vx - t.vx).abs() < 1e-15);
        assert!((local.vy - t.vy).abs() < 1e-15);
        assert_eq!(local.omega, t.omega);
    }

    #[test]
    fn heading_rotation_preserves_translation_norm() {
        let t = BodyTwist::new(0.3, -0.2, 0.7);
        let n0 = t.vx * t.vx + t.vy * t.vy;
        for heading in [-2.5, -0.4, 0.3, 1.2, 3.0, 7.1] {
            let local = t.to_local(heading);
            let n1 = local.vx * local.vx + local.vy * local.vy;
            assert!((n0 - n1).abs() < 1e-12, "norm changed at heading {heading}");
            assert_eq!(local.omega, t.omega, "omega changed at heading {heading}");
        }
    }

    #[test]
    fn quarter_turn_heading_maps_forward_to_left() {
        // Chassis turned 90 degrees to the right: a world-forward command
        // points out the chassis's left side.
        let local = BodyTwist::new(1.0, 0.0, 0.0).to_local(std::f64::consts::FRAC_PI_2);
        assert!(local.vx.abs() < 1e-12);
        assert!((local.vy + 1.0).abs() < 1e-12);
    }

    #[test]
    fn center_pivot_matches_canonical_formula() {
        let g = geometry();
        let twist = BodyTwist::new(0.11, -0.07, 0.9);
        let w = wheel_speeds(&g, twist, Pivot::CENTER);
        for (speed, wheel) in w.as_array().iter().zip(g.wheels()) {
            let v_x = twist.vx - twist.omega * wheel.y;
            let v_y = twist.vy + twist.omega * wheel.x;
            let expected = wheel.push_x * v_x + wheel.push_y * v_y;
            assert!((speed - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn pure_forward_drives_all_wheels_equally() {
        let g = geometry();
        let w = wheel_speeds(&g, BodyTwist::new(1.0, 0.0, 0.0), Pivot::CENTER).as_array();
        assert!(w[0] > 0.0);
        for speed in w {
            assert!((speed - w[0]).abs() < 1e-15, "wheels disagree: {w:?}");
        }
    }

    #[test]
    fn pure_spin_splits_into_opposite_diagonal_pairs() {
        let g = geometry();
        let w = wheel_speeds(&g, BodyTwist::new(0.0, 0.0, 1.0), Pivot::CENTER);
        let arr = w.as_array();
        for speed in arr {
            assert!((speed.abs() - arr[0].abs()).abs() < 1e-15, "magnitudes differ: {arr:?}");
        }
        // FL/RR and FR/RL counter each other
        assert!((w.front_left + w.rear_right).abs() < 1e-15);
        assert!((w.front_right + w.rear_left).abs() < 1e-15);
        // positive omega is a right turn: left side rolls forward
        assert!(w.front_left > 0.0 && w.front_right < 0.0);
    }

    #[test]
    fn offset_pivot_shifts_the_rotation_center() {
        let g = geometry();
        let pivot = Pivot::new(0.27, 0.0);
        let twist = BodyTwist::new(0.0, 0.0, 1.0);
        let w = wheel_speeds(&g, twist, pivot);
        for (speed, wheel) in w.as_array().iter().zip(g.wheels()) {
            let v_x = -(wheel.y - pivot.y);
            let v_y = wheel.x - pivot.x;
            let expected = wheel.push_x * v_x + wheel.push_y * v_y;
            assert!((speed - expected).abs() < 1e-15);
        }
        // spinning about a point ahead of the chassis is not a pure spin
        let centered = wheel_speeds(&g, twist, Pivot::CENTER);
        assert!((w.front_left - centered.front_left).abs() > 1e-6);
    }

    #[test]
    fn zero_twist_solves_to_zero_speeds() {
        let g = geometry();
        assert_eq!(wheel_speeds(&g, BodyTwist::zero(), Pivot::CENTER), WheelSpeeds::zero());
    }
}
