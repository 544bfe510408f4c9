// Forbid accidental stdout/stderr writes in the library portion of the
// TUI; the terminal backend owns stdout once the alternate screen is
// up.
#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::fs::OpenOptions;

use color_eyre::eyre::Result;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod app;
mod app_event;
mod app_event_sender;
mod cli;
mod confirm;
mod context;
mod display_state;
mod host_link;
mod indicator_widget;
mod local_host;
mod pause_intent;
mod progress_bar;
mod tui;

pub use cli::Cli;

pub async fn run_main(cli: Cli) -> Result<()> {
    let _log_guard = init_logging()?;

    let mut terminal = tui::init()?;
    let result = app::App::run(&mut terminal, &cli).await;
    tui::restore()?;
    result
}

/// File-backed tracing so log lines never corrupt the alternate
/// screen. `RUST_LOG` overrides the default filter.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("semdex");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("semdex-tui.log"))?;
    let (writer, guard) = non_blocking(log_file);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("semdex_tui=info,semdex_protocol=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
