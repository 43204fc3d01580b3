// Keyboard teleop: WASD move, Z/X rotate, R/F speed, B boost, G pivot drive, Q quit
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::info;

const STICK_LEVELS: [f64; 3] = [0.25, 0.6, 1.0]; // fraction of full deflection
const INPUT_TIMEOUT_MS: u64 = 100; // Reset axes after this much time with no input

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    info!("Opening Zenoh session...");
    let session = zenoh::open(zenoh::Config::default()).await?;
    let publisher = session.declare_publisher("mecanum/cmd/base").await?;

    info!("Controls: WASD=move, Z/X=rotate, R/F=speed, B=boost, G=pivot drive, Q=quit");
    info!("Stick level: LOW");

    enable_raw_mode()?;
    let result = run_teleop(&publisher).await;
    disable_raw_mode()?;

    result
}

async fn run_teleop(
    publisher: &zenoh::pubsub::Publisher<'_>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut level_idx: usize = 0;
    let mut boost = false;
    let mut pivot_drive = false;

    // Persistent stick state (+fwd forward, +side right, +spin right turn)
    let mut fwd = 0.0;
    let mut side = 0.0;
    let mut spin = 0.0;
    let mut last_movement_input = Instant::now();

    loop {
        // Poll for key with 20ms timeout (50Hz effective rate)
        if event::poll(Duration::from_millis(20))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                let pressed = kind == KeyEventKind::Press || kind == KeyEventKind::Repeat;

                match code {
                    // Movement - update axis and refresh timestamp
                    KeyCode::Char('w') if pressed => {
                        fwd = STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }
                    KeyCode::Char('s') if pressed => {
                        fwd = -STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }
                    KeyCode::Char('a') if pressed => {
                        side = -STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }
                    KeyCode::Char('d') if pressed => {
                        side = STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }

                    // Rotation
                    KeyCode::Char('z') if pressed => {
                        spin = -STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }
                    KeyCode::Char('x') if pressed => {
                        spin = STICK_LEVELS[level_idx];
                        last_movement_input = Instant::now();
                    }

                    // Speed control
                    KeyCode::Char('r') if pressed => {
                        level_idx = (level_idx + 1).min(2);
                        print_level(level_idx);
                    }
                    KeyCode::Char('f') if pressed => {
                        level_idx = level_idx.saturating_sub(1);
                        print_level(level_idx);
                    }

                    // Mode toggles
                    KeyCode::Char('b') if pressed => {
                        boost = !boost;
                        info!("Boost: {}", if boost { "ON" } else { "OFF" });
                    }
                    KeyCode::Char('g') if pressed => {
                        pivot_drive = !pivot_drive;
                        info!("Pivot drive: {}", if pivot_drive { "ON" } else { "OFF" });
                    }

                    // Quit
                    KeyCode::Char('q') | KeyCode::Esc if pressed => break,

                    _ => {}
                }
            }
        }

        // Reset axes if no movement input for INPUT_TIMEOUT_MS
        if last_movement_input.elapsed() > Duration::from_millis(INPUT_TIMEOUT_MS) {
            fwd = 0.0;
            side = 0.0;
            spin = 0.0;
        }

        // Always publish at ~50Hz
        let cmd = json!({
            "fwd": fwd,
            "side": side,
            "spin": spin,
            "boost": boost,
            "pivot_drive": pivot_drive
        });
        publisher.put(cmd.to_string()).await?;
    }

    Ok(())
}

fn print_level(idx: usize) {
    let label = ["LOW", "MED", "HIGH"][idx];
    info!("Stick level: {}", label);
}
