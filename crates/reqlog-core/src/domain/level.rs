//! Severity levels and their textual tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity.
///
/// Ordered by verbosity: `Error < Warn < Info < Debug`. A logger configured
/// with a threshold emits every level that is not more verbose than it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Error, Level::Warn, Level::Info, Level::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Bracketed tag written into every line, e.g. `[warn]`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Error => "[error]",
            Self::Warn => "[warn]",
            Self::Info => "[info]",
            Self::Debug => "[debug]",
        }
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Error),
            1 => Some(Self::Warn),
            2 => Some(Self::Info),
            3 => Some(Self::Debug),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Whether a logger with `self` as threshold emits a line at `requested`.
    ///
    /// The threshold is a verbosity cutoff: `Warn` lets `Warn` and `Error`
    /// through and drops `Info` and `Debug`.
    #[inline]
    pub fn allows(self, requested: Level) -> bool {
        self >= requested
    }
}

/// Tag for a raw numeric severity; unknown values yield an empty tag.
pub fn tag_for_raw(raw: u8) -> String {
    Level::from_raw(raw)
        .map(|level| level.tag().to_string())
        .unwrap_or_default()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}' (expected error, warn, info or debug)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
