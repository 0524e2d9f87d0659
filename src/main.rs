use anyhow::Result;
use termstat::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is opt-in (RUST_LOG): stdout is the repainted frame, so logs
    // go to stderr and are off by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app_config = config::AppConfig::load()?;

    let repo = sysinfo_repo::SysinfoRepo::new();
    let console = display::CrosstermConsole::new();
    let display_config = display::DisplayConfig {
        refresh_interval: app_config.monitoring.refresh_interval(),
        min_cols: app_config.terminal.min_cols,
        min_rows: app_config.terminal.min_rows,
        bar_width: app_config.terminal.bar_width,
    };

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let display_loop = display::DisplayLoop::new(repo, console, display_config);
    let mut loop_handle = tokio::spawn(display_loop.run(shutdown_rx));

    tokio::select! {
        result = &mut loop_handle => {
            result??;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            loop_handle.await??;
        }
    }

    Ok(())
}
