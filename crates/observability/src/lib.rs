//! tintboard observability - logging setup shared by the CLI and the TUI
//!
//! # Features
//!
//! - `EnvFilter` from the configured level, else `RUST_LOG`
//! - Optional console output on stderr
//! - Optional [LogSink] so an in-app screen can show log lines
//!
//! # Quick Start
//!
//! ```no_run
//! use tintboard_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("tintboard").with_log_level("info");
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), tintboard_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;
mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::init;
pub use crate::tracing::record_error;
