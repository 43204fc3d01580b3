// Drive module for a 4-wheel mecanum base
//
// Provides:
// - Validated chassis geometry (wheel layout, speed limits)
// - Body-twist kinematics (world-frame input, arbitrary rotation center)
// - Output scaling (boost normalization or linear derate)

pub mod geometry;
pub mod kinematics;
pub mod scaling;

pub use geometry::{DriveGeometry, GeometryError, Wheel, WHEEL_COUNT};
pub use kinematics::{wheel_speeds, BodyTwist, Pivot, WheelSpeeds};
pub use scaling::{scale, ScalingMode, StickInput};

/// Solve and scale wheel speeds for a world-frame twist.
///
/// `heading` rotates the twist into the chassis frame (0 when no heading
/// sensor is available), `pivot` relocates the rotation center (chassis
/// center by default), and `mode` picks the output scaler.
pub fn compute_wheel_speeds(
    geometry: &DriveGeometry,
    twist: BodyTwist,
    heading: f64,
    pivot: Pivot,
    mode: ScalingMode,
) -> WheelSpeeds {
    let raw = kinematics::wheel_speeds(geometry, twist.to_local(heading), pivot);
    scaling::scale(raw, mode, geometry.max_wheel_speed())
}

/// One mecanum chassis: validated geometry plus the stick-to-wheels pipeline
#[derive(Debug, Clone)]
pub struct MecanumDrive {
    geometry: DriveGeometry,
}

impl MecanumDrive {
    pub fn new(geometry: DriveGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &DriveGeometry {
        &self.geometry
    }

    /// Full pipeline for one control tick.
    ///
    /// The stick maps onto the chassis limits, rotates from world to chassis
    /// frame by `heading`, solves per-wheel speeds about `pivot`, then runs
    /// the boost or linear scaler.
    pub fn command(&self, stick: StickInput, heading: f64, pivot: Pivot, boost: bool) -> WheelSpeeds {
        let twist = stick.to_twist(&self.geometry);
        let mode = if boost {
            ScalingMode::Boost(stick)
        } else {
            ScalingMode::Linear
        };
        compute_wheel_speeds(&self.geometry, twist, heading, pivot, mode)
    }

    /// Pre-scale tangential speeds for a twist already in hand
    pub fn wheel_speeds(&self, twist: BodyTwist, heading: f64, pivot: Pivot) -> WheelSpeeds {
        kinematics::wheel_speeds(&self.geometry, twist.to_local(heading), pivot)
    }
}
