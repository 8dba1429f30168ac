use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;

use todolist::config::{self, Config};
use todolist::store::TaskFile;
use todolist::tui;

#[derive(Parser)]
#[command(
    name = "todolist",
    version = todolist::VERSION,
    about = "A to-do list driven by single key presses"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    let cfg = config::load()?;
    init_logging(&cfg);

    tracing::info!("todolist {} starting", todolist::VERSION);

    let file = TaskFile::new(cfg.tasks_file());
    tracing::info!("tasks file: {}", file.path().display());
    let (store, load_error) = file.load_or_empty();

    // Run TUI (blocking)
    tui::run(store, file, load_error)
}

/// Log to a file; the terminal belongs to the UI. Logging is skipped when
/// the file can't be opened.
fn init_logging(cfg: &Config) {
    if cfg.log_file.is_none() && config::ensure_dirs().is_err() {
        return;
    }
    let Ok(path) = cfg.log_file() else {
        return;
    };
    let Ok(log_file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(cfg.log_level())
        .try_init();
}
