use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{error, info};

use crate::core::{
    alerts::notifier::{LogNotifier, Notifier},
    capture::{PrimaryScreen, ScreenSource},
    config::ConfigManager,
    coordinator::Coordinator,
    snapshot::SnapshotWriter,
};

#[derive(Parser, Debug)]
#[command(
    name = "pixel-watcher",
    about = "Watches the screen for configured color patterns and saves periodic snapshots"
)]
struct Cli {
    /// Path to the XML color-combination list (overrides settings.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write periodic snapshots into (overrides settings.json)
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

pub async fn run() {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pixel_watcher=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pixel-watcher");
    let config_manager = ConfigManager::new(config_dir);
    let mut settings = config_manager.load();
    if let Some(path) = cli.config {
        settings.combinations_path = path;
    }
    if let Some(dir) = cli.snapshot_dir {
        settings.snapshot_dir = dir;
    }

    info!(
        "Watching combinations from {:?}, snapshots into {:?}",
        settings.combinations_path, settings.snapshot_dir
    );

    let writer = SnapshotWriter::new(settings.snapshot_dir.clone());
    if let Err(e) = writer.ensure_dir() {
        error!("Could not create snapshot directory {:?}: {e}", writer.dir());
    }

    // Snapshot task: captures its own frames, fully independent of the
    // watch loop. A failed capture or write only costs that one firing.
    let snapshot_interval = Duration::from_secs(settings.snapshot_interval_secs);
    tokio::spawn(async move {
        let screen = PrimaryScreen;
        let mut ticker = tokio::time::interval(snapshot_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // interval() fires immediately; the first snapshot waits one period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match screen.capture() {
                Ok(frame) => match writer.write(&frame) {
                    Ok(path) => info!("Snapshot saved to {:?}", path),
                    Err(e) => error!("Snapshot write failed: {e}"),
                },
                Err(e) => error!("Snapshot capture failed: {e}"),
            }
        }
    });

    // Watch loop: capture, scan, gate, alert, sleep.
    let poll_interval = Duration::from_millis(settings.poll_interval_ms);
    let cooldown = Duration::from_secs(settings.alert_cooldown_secs);
    let mut coordinator = Coordinator::new(
        PrimaryScreen,
        settings.combinations_path.clone(),
        cooldown,
    );
    let watcher = tokio::spawn(async move {
        let notifier = LogNotifier;
        loop {
            let output = coordinator.tick(Instant::now());
            for line in &output.logs {
                info!("{line}");
            }
            if let Some(alert) = output.alert {
                notifier.notify(&alert.message);
            }
            tokio::time::sleep(poll_interval).await;
        }
    });

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
    watcher.abort();
}
