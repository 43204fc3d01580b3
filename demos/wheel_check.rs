// Wheel-speed report: offline sanity check for the drive kinematics
//
// No transport and no hardware - builds the default chassis and prints the
// per-wheel output for representative stick inputs in both scaling modes.
// Use this to eyeball sign conventions before pointing teleop at a real base.
//
// Usage: cargo run --example wheel_check

use mecanum_zenoh_runtime::config::{
    HALF_TRACK, HALF_WHEELBASE, MAX_WHEEL_SPEED, PIVOT_X, PIVOT_Y,
};
use mecanum_zenoh_runtime::drive::{DriveGeometry, MecanumDrive, Pivot, StickInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let geometry = DriveGeometry::rectangular(HALF_WHEELBASE, HALF_TRACK, MAX_WHEEL_SPEED)?;
    println!(
        "Chassis: half wheelbase {} m, half track {} m",
        HALF_WHEELBASE, HALF_TRACK
    );
    println!(
        "Limits: wheel {} m/s, rotation {:.4} rad/s",
        geometry.max_wheel_speed(),
        geometry.max_rotation_rate()
    );
    println!();

    let drive = MecanumDrive::new(geometry);
    let cases = [
        ("forward", StickInput::new(1.0, 0.0, 0.0)),
        ("strafe right", StickInput::new(0.0, 1.0, 0.0)),
        ("spin right", StickInput::new(0.0, 0.0, 1.0)),
        ("diagonal", StickInput::new(0.7, 0.7, 0.0)),
        ("mixed", StickInput::new(0.2, 0.2, -0.5)),
    ];

    println!(
        "{:<14} {:<7} {:>9} {:>9} {:>9} {:>9}",
        "stick", "mode", "FL", "FR", "RL", "RR"
    );
    for (label, stick) in cases {
        for (mode_label, boost) in [("linear", false), ("boost", true)] {
            let w = drive.command(stick, 0.0, Pivot::CENTER, boost);
            println!(
                "{:<14} {:<7} {:>9.4} {:>9.4} {:>9.4} {:>9.4}",
                label, mode_label, w.front_left, w.front_right, w.rear_left, w.rear_right
            );
        }
    }

    println!();
    println!("Pivot drive rotation center: ({}, {}) m", PIVOT_X, PIVOT_Y);
    let w = drive.command(
        StickInput::new(0.0, 0.0, 0.5),
        0.0,
        Pivot::new(PIVOT_X, PIVOT_Y),
        false,
    );
    println!(
        "spin about pivot: FL {:.4}  FR {:.4}  RL {:.4}  RR {:.4}",
        w.front_left, w.front_right, w.rear_left, w.rear_right
    );

    Ok(())
}
