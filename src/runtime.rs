// 50 Hz loop with watchdog
// If teleop crashes and commands stop arriving, the base must coast to a
// stop instead of replaying the last twist forever.

use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{info, warn};

use crate::config::{
    RuntimeOptions, CMD_TIMEOUT, LOOP_HZ, TOPIC_CMD_BASE, TOPIC_HEALTH, TOPIC_RT_WHEELS,
};
use crate::drive::{DriveGeometry, MecanumDrive, Pivot, StickInput, WheelSpeeds};
use crate::messages::{DriveCommand, RuntimeHealth, WheelActuation};

pub struct Runtime {
    drive: MecanumDrive,
    attachment_pivot: Pivot,
    latest_cmd: Option<DriveCommand>,
    cmd_received_at: Instant,
    health: RuntimeHealth,
}

impl Runtime {
    pub fn new(drive: MecanumDrive, attachment_pivot: Pivot) -> Self {
        Self {
            drive,
            attachment_pivot,
            latest_cmd: None,
            cmd_received_at: Instant::now(),
            health: RuntimeHealth::CmdStale, // Start stale until first cmd
        }
    }

    /// Process incoming command
    fn on_command(&mut self, cmd: DriveCommand) {
        info!("Received command: {:?}", &cmd);
        self.latest_cmd = Some(cmd);
        self.cmd_received_at = Instant::now();
    }

    /// Solve wheel speeds for this tick, stopping the base when stale
    fn compute_actuation(&mut self) -> WheelSpeeds {
        let cmd_age = self.cmd_received_at.elapsed();

        if cmd_age > CMD_TIMEOUT {
            // Watchdog triggered - stop the base
            if self.health != RuntimeHealth::CmdStale {
                warn!("Command stale ({:?} old), stopping base", cmd_age);
            }
            self.health = RuntimeHealth::CmdStale;
            WheelSpeeds::zero()
        } else if let Some(ref cmd) = self.latest_cmd {
            self.health = RuntimeHealth::Ok;
            let stick = StickInput::new(cmd.fwd, cmd.side, cmd.spin);
            let heading = cmd.heading.unwrap_or(0.0);
            let pivot = if cmd.pivot_drive {
                self.attachment_pivot
            } else {
                Pivot::CENTER
            };
            self.drive.command(stick, heading, pivot, cmd.boost)
        } else {
            // No command ever received
            self.health = RuntimeHealth::CmdStale;
            WheelSpeeds::zero()
        }
    }
}

pub async fn run(options: RuntimeOptions) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Validate chassis parameters before touching the network; bad geometry
    // is fatal at startup
    let geometry = DriveGeometry::rectangular(
        options.half_wheelbase,
        options.half_track,
        options.max_wheel_speed,
    )?;
    info!(
        "Chassis: wheelbase {} m, track {} m, max wheel speed {} m/s, max rotation {:.3} rad/s",
        2.0 * options.half_wheelbase,
        2.0 * options.half_track,
        geometry.max_wheel_speed(),
        geometry.max_rotation_rate()
    );
    let attachment_pivot = Pivot::new(options.pivot_x, options.pivot_y);
    let mut runtime = Runtime::new(MecanumDrive::new(geometry), attachment_pivot);

    info!("Opening Zenoh session...");
    let session = zenoh::open(zenoh::Config::default()).await?;

    info!("Setting up publishers and subscribers...");
    let subscriber = session.declare_subscriber(TOPIC_CMD_BASE).await?;
    let pub_wheels = session.declare_publisher(TOPIC_RT_WHEELS).await?;
    let pub_health = session.declare_publisher(TOPIC_HEALTH).await?;

    let mut tick = interval(Duration::from_millis(1000 / LOOP_HZ));

    info!(
        "Runtime started: {}Hz loop, {}ms watchdog timeout",
        LOOP_HZ,
        CMD_TIMEOUT.as_millis()
    );
    info!("Subscribed to: {}", TOPIC_CMD_BASE);
    info!("Publishing to: {}, {}", TOPIC_RT_WHEELS, TOPIC_HEALTH);

    loop {
        tick.tick().await;

        // 1. Drain all pending commands (non-blocking), keep latest
        while let Ok(Some(sample)) = subscriber.try_recv() {
            let payload = sample.payload().to_bytes();
            match serde_json::from_slice::<DriveCommand>(&payload) {
                Ok(cmd) => {
                    runtime.on_command(cmd);
                }
                Err(e) => {
                    warn!("Failed to parse command: {}", e);
                }
            }
        }

        // 2. Solve wheel speeds (includes watchdog logic)
        let wheels = runtime.compute_actuation();

        // 3. Publish actuation
        let actuation_json = serde_json::to_string(&WheelActuation::from(wheels))?;
        pub_wheels.put(actuation_json).await?;

        // 4. Publish health
        let health_json = serde_json::to_string(&runtime.health)?;
        pub_health.put(health_json).await?;
    }
}
