//! metronome - terminal metronome
//!
//! Run with: cargo run --bin metronome
//!
//! Set `RUST_LOG` to control verbosity and `METRONOME_LOG` to a file path to
//! keep log output away from the terminal UI.

mod app;
mod ui;

use std::{env, fs::File, sync::Mutex};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use app::MetronomeApp;
use metronome_dsp::EngineConfig;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_tracing()?;

    MetronomeApp::new(EngineConfig::new()).run()
}

fn init_tracing() -> EyreResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match env::var_os("METRONOME_LOG") {
        Some(path) => {
            let file = File::create(&path)
                .wrap_err_with(|| format!("failed to create log file {}", path.to_string_lossy()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
