//! # reqlog core library
//!
//! Leveled file logger with caller annotation and request correlation.
//!
//! ## Modules
//!
//! - `domain` - Severity levels, call-site provenance, configuration
//! - `service` - The file [`Logger`]
//! - `logging` - Trace id generation for per-request child loggers
//! - `error` - Error types
//!
//! ## Caller field
//!
//! Every line carries `path:function:line`. The `log_*!` macros record an
//! absolute source path and the enclosing function. The `debug`/`info`/
//! `warn`/`error` methods only know the compiler-recorded path (relative to
//! the workspace root inside a workspace) and leave the function empty:
//! `crates/app/src/main.rs::42`.
//!
//! ## Usage
//!
//! ```no_run
//! use reqlog_core::{log_info, Level, Logger};
//!
//! let logger = Logger::new("app.log", Level::Info).expect("log file must open");
//! let request = logger.with_correlation_id("req-42");
//! log_info!(request, "user", 17, "logged in");
//! ```

pub mod domain;
pub mod error;
pub mod logging;
mod macros;
pub mod service;

// Re-export commonly used types
pub use domain::*;
pub use error::{ConfigError, LoggerError};
pub use logging::generate_trace_id;
pub use service::*;
