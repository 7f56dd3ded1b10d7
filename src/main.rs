//! Simple Converter - interactive numeric representation converter
//!
//! Classifies a typed token as single character / binary / decimal / hex
//! and performs the legal conversions between those representations.

mod app;
mod conversion;
mod state;

use state::{StateRecord, StateStore};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let data_dir = format!("{home}/.simple-converter");

    let log_path = std::env::var("SIMPLE_CONVERTER_LOG_PATH")
        .unwrap_or_else(|_| format!("{data_dir}/simple-converter.log"));
    let state_path = std::env::var("SIMPLE_CONVERTER_STATE_PATH")
        .unwrap_or_else(|_| format!("{data_dir}/state.txt"));

    // Log to a file; stdout belongs to the raw-mode terminal UI
    init_logging(&log_path)?;

    let store = StateStore::new(&state_path);
    let restored = store.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read state file, starting empty");
        StateRecord::default()
    });

    tracing::info!(state_path = %state_path, "Starting simple-converter");
    app::run(store, restored)?;
    tracing::info!("Exited");
    Ok(())
}

fn init_logging(log_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = PathBuf::from(log_path).parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_converter=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();
    Ok(())
}
