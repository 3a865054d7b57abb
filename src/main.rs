//! timepunch main entrypoint.

use timepunch::run;
use timepunch::ui::messages;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log filtering via TIMEPUNCH_LOG; silent unless asked for.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TIMEPUNCH_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_target(false)
        .init();

    println!();
    if let Err(e) = run().await {
        messages::error(format!("{}", e));
        std::process::exit(1);
    }
}
