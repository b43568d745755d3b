//! Global subscriber with three sinks.
//!
//! | Sink | Format | Levels |
//! |------|--------|--------|
//! | console | text or JSON (`LOG_FORMAT`) | `RUST_LOG` filter |
//! | `<LOG_DIR>/error.log` | JSON lines | `ERROR` |
//! | `<LOG_DIR>/combined.log` | JSON lines | `INFO` and above |
//!
//! The file sinks only record events carrying a `service` field, i.e.
//! events emitted through [`TracingEventSink`](super::TracingEventSink).
//! Untagged library events stay on the console.
//!
//! File writes go through `tracing_appender` non-blocking workers; each
//! worker owns its file, so concurrent requests never interleave lines.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{FilterExt, LevelFilter, filter_fn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::Config;

pub const ERROR_LOG_FILE: &str = "error.log";
pub const COMBINED_LOG_FILE: &str = "combined.log";

const SERVICE_FIELD: &str = "service";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the file writer threads alive.
///
/// Dropping it flushes buffered lines and stops the workers, so hold it for
/// the lifetime of the process.
#[must_use = "dropping the guards stops file logging"]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Creates the log directory and installs the global subscriber.
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be created
/// - `RUST_LOG` is not a valid filter directive
/// - A global subscriber is already installed
pub fn init(config: &Config) -> Result<LogGuards> {
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            config.log_dir.display()
        )
    })?;

    let console_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    let console: BoxedLayer = if config.log_format == "json" {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer().with_filter(console_filter).boxed()
    };

    let (error_writer, error_guard) = file_writer(&config.log_dir, ERROR_LOG_FILE);
    let (combined_writer, combined_guard) = file_writer(&config.log_dir, COMBINED_LOG_FILE);

    let layers: Vec<BoxedLayer> = vec![
        console,
        json_file_layer(error_writer, LevelFilter::ERROR),
        json_file_layer(combined_writer, LevelFilter::INFO),
    ];

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LogGuards {
        _guards: vec![error_guard, combined_guard],
    })
}

fn file_writer(dir: &Path, file_name: &str) -> (NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name))
}

fn json_file_layer(writer: NonBlocking, level: LevelFilter) -> BoxedLayer {
    let tagged = filter_fn(|metadata| {
        metadata.is_event() && metadata.fields().field(SERVICE_FIELD).is_some()
    });

    fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(level.and(tagged))
        .boxed()
}
