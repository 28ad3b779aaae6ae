//! Shared test utilities and fixtures for reqlog integration tests.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use tempfile::TempDir;

pub use reqlog_core::{Level, Logger, LoggerError, TIMESTAMP_FORMAT};

/// Width of a rendered timestamp (`YYYY/MM/DD HH:MM:SS.ffffff`)
pub const TIMESTAMP_WIDTH: usize = 26;

/// Log file inside a scratch directory that lives as long as the fixture
pub struct TempLog {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempLog {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("app.log");
        Self { _dir: dir, path }
    }

    pub fn open(&self, level: Level) -> Logger {
        Logger::new(&self.path, level).expect("open log file")
    }

    pub fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<ParsedLine> {
        self.contents()
            .lines()
            .map(|line| parse_line(line).unwrap_or_else(|| panic!("malformed line: {:?}", line)))
            .collect()
    }
}

impl Default for TempLog {
    fn default() -> Self {
        Self::new()
    }
}

/// One log line split into its fields
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub timestamp: NaiveDateTime,
    pub caller: String,
    pub correlation_id: String,
    pub tag: String,
    pub message: String,
}

impl ParsedLine {
    /// Line number from the caller field (`path:function:line`)
    pub fn caller_line(&self) -> Option<u32> {
        self.caller.rsplit(':').next()?.parse().ok()
    }

    /// Source path segment of the caller field
    pub fn caller_path(&self) -> Option<PathBuf> {
        self.caller.rsplitn(3, ':').nth(2).map(PathBuf::from)
    }

    /// Function segment of the caller field; empty for method calls
    pub fn caller_function(&self) -> Option<&str> {
        let mut parts = self.caller.rsplitn(3, ':');
        parts.next()?;
        let function = parts.next()?;
        parts.next()?;
        Some(function)
    }
}

/// Split a line (without its newline) into fields.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let stamp = line.get(..TIMESTAMP_WIDTH)?;
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    let rest = line.get(TIMESTAMP_WIDTH..)?.strip_prefix(' ')?;

    let mut fields = rest.splitn(4, ' ');
    let caller = fields.next()?.to_string();
    let correlation_id = fields.next()?.to_string();
    let tag = fields.next()?.to_string();
    let message = fields.next().unwrap_or_default().to_string();

    Some(ParsedLine {
        timestamp,
        caller,
        correlation_id,
        tag,
        message,
    })
}
