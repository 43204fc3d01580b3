// Loop rate, timeouts, topics, default chassis parameters

use std::time::Duration;

use clap::Parser;

// Runtime loop frequency
pub const LOOP_HZ: u64 = 50;

// Command timeout for watchdog
pub const CMD_TIMEOUT: Duration = Duration::from_millis(250);

// Zenoh topics
pub const TOPIC_CMD_BASE: &str = "mecanum/cmd/base"; // commands
pub const TOPIC_RT_WHEELS: &str = "mecanum/rt/wheels"; // actuation
pub const TOPIC_HEALTH: &str = "mecanum/state/health"; // health status

// Default chassis parameters
// Half the front/rear and left/right wheel separations, meters
pub const HALF_WHEELBASE: f64 = 0.18;
pub const HALF_TRACK: f64 = 0.22;
// Wheel tangential speed limit, m/s
pub const MAX_WHEEL_SPEED: f64 = 0.4;

// Default rotation center for pivot drive: an attachment point ahead of the
// front axle, chassis frame
pub const PIVOT_X: f64 = 1.5 * HALF_WHEELBASE;
pub const PIVOT_Y: f64 = 0.0;

/// Startup overrides for the chassis and pivot parameters.
///
/// Geometry built from these is validated before the runtime starts; invalid
/// values abort startup.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mecanum-zenoh-runtime",
    about = "Mecanum base runtime: stick commands in, wheel speeds out"
)]
pub struct RuntimeOptions {
    /// Half the front/rear wheel separation, meters
    #[arg(long, default_value_t = HALF_WHEELBASE)]
    pub half_wheelbase: f64,

    /// Half the left/right wheel separation, meters
    #[arg(long, default_value_t = HALF_TRACK)]
    pub half_track: f64,

    /// Wheel tangential speed limit, m/s
    #[arg(long, default_value_t = MAX_WHEEL_SPEED)]
    pub max_wheel_speed: f64,

    /// Pivot-drive rotation center, forward offset in meters
    #[arg(long, default_value_t = PIVOT_X)]
    pub pivot_x: f64,

    /// Pivot-drive rotation center, rightward offset in meters
    #[arg(long, default_value_t = PIVOT_Y)]
    pub pivot_y: f64,
}
