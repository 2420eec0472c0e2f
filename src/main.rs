//! Quill - a small terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! quill main.c
//! quill --tab-stop 4 notes.txt
//! QUILL_LOG_FILE=quill.log RUST_LOG=debug quill
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quill::app::App;
use quill::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
struct Cli {
    /// File to edit; created on first save if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(long, value_name = "N")]
    tab_stop: Option<usize>,

    /// Quit presses needed to discard unsaved changes
    #[arg(long, value_name = "N")]
    quit_times: Option<u8>,

    /// Disable syntax highlighting
    #[arg(long)]
    no_syntax: bool,

    /// Write log events to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            tab_stop: self.tab_stop,
            quit_times: self.quit_times,
            no_syntax: self.no_syntax,
            log_file: self.log_file.clone(),
        }
    }
}

/// Install a file-backed subscriber. The terminal belongs to the editor,
/// so without a log file nothing is recorded.
fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_path = effective
        .log_file
        .clone()
        .or_else(|| std::env::var_os("QUILL_LOG_FILE").map(PathBuf::from));
    init_logging(log_path.as_ref())?;

    let mut app = App::new(cli.file).with_settings(effective.settings());
    app.run().context("Editor error")
}
