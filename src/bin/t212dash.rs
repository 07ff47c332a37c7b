//! t212dash - Interactive TUI dashboard for the trading data backend.
//!
//! Usage:
//!   t212dash                                   # backend at 127.0.0.1:8000
//!   t212dash --backend http://127.0.0.1:9000   # custom backend
//!   t212dash --poll-interval 10                # slower health polling
//!   t212dash --log-file /tmp/t212dash.log -v   # debug logs to a file

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use t212dash::api::{BackendClient, DEFAULT_BACKEND_URL};
use t212dash::tui::App;

/// Interactive TUI dashboard for the trading data backend.
#[derive(Parser)]
#[command(name = "t212dash", about = "Trading data dashboard")]
struct Args {
    /// Backend base URL.
    #[arg(long, env = "T212DASH_BACKEND", default_value = DEFAULT_BACKEND_URL)]
    backend: String,

    /// Health poll interval in seconds (min: 1).
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    poll_interval: u64,

    /// UI tick rate in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 250)]
    tick_ms: u64,

    /// Write logs to this file. Without it logging is disabled; the
    /// terminal belongs to the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let Some(path) = &args.log_file else {
        return;
    };

    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let level = if args.quiet {
        Level::WARN
    } else {
        match args.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("t212dash={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();

    if args.poll_interval == 0 {
        eprintln!("Error: --poll-interval must be at least 1 second");
        std::process::exit(1);
    }

    init_logging(&args);

    let client = BackendClient::with_url(&args.backend);
    let app = App::new(client);

    let tick_rate = Duration::from_millis(args.tick_ms.max(50));
    let poll_interval = Duration::from_secs(args.poll_interval);

    if let Err(e) = app.run(tick_rate, poll_interval) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
