// Wire messages between teleop, runtime, and the motor bridge

use serde::{Deserialize, Serialize};

use crate::drive::WheelSpeeds;

/// Command from teleop/scripts -> runtime.
///
/// Stick axes are unitless deflections in [-1, 1]; the runtime scales them
/// onto the chassis limits. The flags and heading default so older
/// publishers that only send axes keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveCommand {
    pub fwd: f64,
    pub side: f64,
    pub spin: f64,
    /// Nonlinear max-range scaling instead of the flat derate
    #[serde(default)]
    pub boost: bool,
    /// Rotate about the configured attachment point instead of the chassis center
    #[serde(default)]
    pub pivot_drive: bool,
    /// Chassis heading in the world frame, radians; omitted = chassis-frame driving
    #[serde(default)]
    pub heading: Option<f64>,
}

/// Actuation output runtime -> motor bridge: tangential wheel speeds in m/s.
/// The bridge owns the conversion to motor units (rad/s, encoder counts).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WheelActuation {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
}

impl From<WheelSpeeds> for WheelActuation {
    fn from(w: WheelSpeeds) -> Self {
        Self {
            front_left: w.front_left,
            front_right: w.front_right,
            rear_left: w.rear_left,
            rear_right: w.rear_right,
        }
    }
}

/// Health status published by runtime
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeHealth {
    Ok,
    CmdStale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_command_defaults_the_optional_fields() {
        let cmd: DriveCommand =
            serde_json::from_str(r#"{"fwd":0.1,"side":0.0,"spin":-0.2}"#).unwrap();
        assert!(!cmd.boost);
        assert!(!cmd.pivot_drive);
        assert_eq!(cmd.heading, None);
    }

    #[test]
    fn health_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RuntimeHealth::CmdStale).unwrap(),
            "\"cmd_stale\""
        );
    }
}
