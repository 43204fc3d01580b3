use clap::Parser;
use tracing_subscriber::EnvFilter;

use mecanum_zenoh_runtime::config::RuntimeOptions;

#[tokio::main]
async fn main() {
    // Setup logging (set RUST_LOG=info or debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init(); // installs the subscriber globally

    let options = RuntimeOptions::parse();

    if let Err(e) = mecanum_zenoh_runtime::runtime::run(options).await {
        eprintln!("Runtime error: {}", e);
        std::process::exit(1);
    }
}
