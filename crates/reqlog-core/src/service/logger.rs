//! File logger - leveled, caller-annotated lines with request correlation
//!
//! Line layout (fields separated by a single space):
//!
//! ```text
//! 2026/10/18 09:12:45.120934 src/server.rs:handle:42 a1b2c3 [info] user logged in
//! ```
//!
//! An empty correlation id leaves its slot empty, so field positions never
//! shift.

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fmt::{self, Write as _};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::caller::Caller;
use crate::domain::Level;
use crate::error::LoggerError;

/// Local date, time and microseconds, e.g. `2026/10/18 09:12:45.120934`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Logger shared across the process
pub type SharedLogger = Arc<Logger>;

/// Open log file, shared by a logger and all of its children
#[derive(Debug)]
struct Sink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl Sink {
    fn write_line(&self, line: &str) {
        let mut guard = self.file.lock();
        let Some(file) = guard.as_mut() else {
            debug!("Dropping log line, {} is closed", self.path.display());
            return;
        };
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!("Failed to write to log file {}: {}", self.path.display(), e);
        }
    }
}

/// Leveled file logger.
///
/// Cloning (or [`Logger::with_correlation_id`]) yields a logger writing to
/// the same file. Writes are serialized, so lines from concurrent children
/// never interleave.
#[derive(Debug, Clone)]
pub struct Logger {
    sink: Arc<Sink>,
    level: Level,
    correlation_id: String,
}

impl Logger {
    /// Open (or create) `path` for appending and log at `level` and below.
    ///
    /// An error here means diagnostics would be silently lost; callers are
    /// expected to abort startup.
    pub fn new(path: impl AsRef<Path>, level: Level) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        let file = open_log_file(path).map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Opened log file {} (level={})", path.display(), level);

        Ok(Self {
            sink: Arc::new(Sink {
                path: path.to_path_buf(),
                file: Mutex::new(Some(file)),
            }),
            level,
            correlation_id: String::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.sink.path
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Tag all subsequent lines from this instance. Empty means no tag.
    pub fn set_correlation_id(&mut self, id: impl Into<String>) {
        self.correlation_id = id.into();
    }

    /// Child logger carrying its own correlation id, sharing this file.
    pub fn with_correlation_id(&self, id: impl Into<String>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            level: self.level,
            correlation_id: id.into(),
        }
    }

    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.level.allows(level)
    }

    /// Release the file. Children share it and stop writing too.
    ///
    /// Buffered data is synced to disk first and a sync failure is returned
    /// as [`LoggerError::Io`]. The descriptor itself is then dropped, and
    /// `std::fs::File` discards errors from that final close.
    ///
    /// Returns [`LoggerError::Closed`] if it was already released.
    pub fn close(&self) -> Result<(), LoggerError> {
        let file = self.sink.file.lock().take().ok_or(LoggerError::Closed)?;
        file.sync_all()?;
        drop(file);
        debug!("Closed log file {}", self.sink.path.display());
        Ok(())
    }

    // The methods tag lines with `path::line`: `#[track_caller]` gives no
    // function name and the path is the one the compiler recorded. The
    // `log_*!` macros fill in both.

    #[track_caller]
    pub fn debug(&self, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Debug) {
            self.log(Level::Debug, Some(Caller::from_location(Location::caller())), args);
        }
    }

    #[track_caller]
    pub fn info(&self, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Info) {
            self.log(Level::Info, Some(Caller::from_location(Location::caller())), args);
        }
    }

    #[track_caller]
    pub fn warn(&self, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Warn) {
            self.log(Level::Warn, Some(Caller::from_location(Location::caller())), args);
        }
    }

    #[track_caller]
    pub fn error(&self, args: &[&dyn fmt::Display]) {
        if self.enabled(Level::Error) {
            self.log(Level::Error, Some(Caller::from_location(Location::caller())), args);
        }
    }

    /// Write one line at `level` if the threshold allows it.
    ///
    /// Used by the `log_*!` macros, which resolve `caller` at the call site.
    pub fn log(&self, level: Level, caller: Option<Caller>, args: &[&dyn fmt::Display]) {
        if !self.enabled(level) {
            return;
        }
        let line = format_line(
            &Local::now(),
            caller.as_ref(),
            &self.correlation_id,
            level.tag(),
            args,
        );
        self.sink.write_line(&line);
    }
}

/// Compose a complete, newline-terminated log line.
pub fn format_line(
    timestamp: &DateTime<Local>,
    caller: Option<&Caller>,
    correlation_id: &str,
    tag: &str,
    args: &[&dyn fmt::Display],
) -> String {
    let mut line = String::with_capacity(128);
    // Writing into a String cannot fail
    let _ = write!(line, "{} ", timestamp.format(TIMESTAMP_FORMAT));
    if let Some(caller) = caller {
        let _ = write!(line, "{}", caller);
    }
    line.push(' ');
    line.push_str(correlation_id);
    line.push(' ');
    line.push_str(tag);
    for arg in args {
        let _ = write!(line, " {}", arg);
    }
    line.push('\n');
    line
}

fn open_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }
    options.open(path)
}
