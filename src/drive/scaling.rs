// Output scaling: trade stick linearity against top speed.
//
// The solved wheel speeds can exceed the motor limit (worst case sqrt(2)
// amplification for this wheel layout). Linear mode derates everything by
// that worst case; boost mode rescales against the actual stick vector so
// the most-loaded wheel tracks the commanded effort fraction of full speed.

use std::f64::consts::SQRT_2;

use crate::drive::geometry::DriveGeometry;
use crate::drive::kinematics::{BodyTwist, WheelSpeeds};

/// Raw stick axes, each clamped into [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickInput {
    pub fwd: f64,
    pub side: f64,
    pub spin: f64,
}

impl StickInput {
    pub fn new(fwd: f64, side: f64, spin: f64) -> Self {
        Self {
            fwd: fwd.clamp(-1.0, 1.0),
            side: side.clamp(-1.0, 1.0),
            spin: spin.clamp(-1.0, 1.0),
        }
    }

    /// Map the stick onto the chassis limits: full deflection asks for the
    /// wheel speed limit in translation and the rotation-rate limit in spin.
    pub fn to_twist(&self, geometry: &DriveGeometry) -> BodyTwist {
        BodyTwist::new(
            geometry.max_wheel_speed() * self.fwd,
            geometry.max_wheel_speed() * self.side,
            geometry.max_rotation_rate() * self.spin,
        )
    }

    /// Commanded fraction of what the stick can reach in this direction.
    ///
    /// The reachable stick envelope is a cube, not a sphere, so the ceiling
    /// depends on direction: the vector rescaled until its dominant axis
    /// hits full deflection marks 100% effort. A centered stick reports 0.
    pub fn effort_level(&self) -> f64 {
        let limit_den = self.fwd.abs().max(self.side.abs()).max(self.spin.abs());
        if limit_den == 0.0 {
            return 0.0;
        }
        let effort_current =
            (self.fwd * self.fwd + self.side * self.side + self.spin * self.spin).sqrt();
        let f = self.fwd / limit_den;
        let s = self.side / limit_den;
        let p = self.spin / limit_den;
        let effort_max = (f * f + s * s + p * p).sqrt();
        effort_current / effort_max
    }
}

/// How solved wheel speeds map onto the motor range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalingMode {
    /// Rescale so the most-loaded wheel runs at the commanded effort
    /// fraction of the speed limit. Full motor range in every direction at
    /// the cost of a direction-dependent stick response. Carries the stick
    /// vector the effort is read from.
    Boost(StickInput),
    /// Flat sqrt(2) derate: linear stick response, top speed never reached
    Linear,
}

/// Apply the selected scaling to pre-scale wheel speeds
pub fn scale(speeds: WheelSpeeds, mode: ScalingMode, max_wheel_speed: f64) -> WheelSpeeds {
    match mode {
        ScalingMode::Boost(stick) => boost(speeds, stick, max_wheel_speed),
        ScalingMode::Linear => linear(speeds),
    }
}

/// Derate every wheel by the worst-case amplification factor
pub fn linear(speeds: WheelSpeeds) -> WheelSpeeds {
    speeds.map(|w| w / SQRT_2)
}

/// Rescale so the most-loaded wheel runs at `effort_level * max_wheel_speed`.
///
/// A centered stick or an all-zero solve short-circuits to a stop command
/// instead of dividing by zero.
pub fn boost(speeds: WheelSpeeds, stick: StickInput, max_wheel_speed: f64) -> WheelSpeeds {
    let effort = stick.effort_level();
    let w_max = speeds.max_magnitude();
    if effort == 0.0 || w_max == 0.0 {
        return WheelSpeeds::zero();
    }
    let gain = max_wheel_speed * effort / w_max;
    speeds.map(|w| w * gain)
}
