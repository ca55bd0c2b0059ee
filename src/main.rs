use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use chess_duel::console::run_console_loop;
use chess_duel::engine::GameConfig;

/// Install a stderr subscriber at the configured level. Records from the `log` macros
/// are bridged into it, so stdout stays reserved for the board and replies.
fn init_tracing(config: &GameConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_directive()))
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
}

fn main() {
    let config = GameConfig::from_env();
    if let Err(e) = init_tracing(&config) {
        eprintln!("Error: {e}");
    }

    let stdin = io::stdin();
    if let Err(e) = run_console_loop(stdin.lock(), io::stdout(), &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
