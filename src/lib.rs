// Voice command resolution and dispatch

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod events;
pub mod focus;
pub mod intent;
pub mod pipeline;
pub mod voice_commands;

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

/// Command-line entry point: reads one command per line from stdin and
/// dispatches it through a pipeline backed by the dry-run platform.
/// Note: This function cannot be unit tested as it owns stdin and the logger.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start tokio runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async {
        let config = match config::load_or_create_config() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                config::PipelineConfig::default()
            }
        };

        let pipeline = match pipeline::DispatchPipeline::from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                error!("Failed to set up dispatch pipeline: {}", e);
                return;
            }
        };
        let pipeline = Arc::new(pipeline);

        info!("voicepilot ready, reading commands from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let outcome = pipeline.dispatch(&line).await;
                    println!(
                        "{} {} ({} ms)",
                        if outcome.success { "ok" } else { "failed" },
                        outcome.message,
                        outcome.duration_ms
                    );
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        info!("Input closed, shutting down");
    });
}
