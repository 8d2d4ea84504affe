#![forbid(unsafe_code)]

mod analytics;
mod constants;
mod gui;
mod netwatch;
mod particles;
mod report;
mod session;
mod storage;

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use analytics::{AnalyticsRecorder, Viewport, VisitInfo};
use storage::FileStore;

#[derive(Parser)]
#[command(
    name = "campaign-kiosk",
    about = "Desktop kiosk for the JCTT digital campaign",
    version
)]
struct Cli {
    /// Analytics directory (defaults to the platform data directory)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print recorded campaign statistics and exit
    Stats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();

    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let data_root = storage::data_root(cli.data_dir.as_deref());

    if let Some(Command::Stats) = cli.command {
        let store = FileStore::new(data_root);
        return match report::run(&store) {
            Ok(()) => Ok(()),
            // Nothing recorded yet is a state worth explaining, not a failure
            Err(err @ report::ReportError::NotInitialized) => {
                println!("{err}");
                Ok(())
            }
            Err(err) => Err(err.into()),
        };
    }

    info!("Welcome to the JCTT digital campaign kiosk");
    info!("Run `campaign-kiosk stats` in a terminal to see recorded statistics");
    info!(path = %data_root.display(), "Analytics data directory");

    let store = FileStore::new(data_root);
    let mut session_store = FileStore::new(storage::session_root());
    let visit = VisitInfo {
        user_agent: kiosk_identity(),
        viewport: Viewport {
            width: gui::constants::WINDOW_WIDTH as u32,
            height: gui::constants::WINDOW_HEIGHT as u32,
        },
    };
    let recorder = AnalyticsRecorder::initialize(Box::new(store), &mut session_store, &visit);

    // Connectivity probe thread; the GUI drains the channel each frame
    let (net_tx, net_rx) = mpsc::channel();
    let _net_handle = netwatch::spawn_watcher(net_tx);

    gui::run_kiosk(recorder, net_rx, started)?;
    Ok(())
}

/// What this build reports as its user agent in visit records
fn kiosk_identity() -> String {
    format!(
        "campaign-kiosk/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
