//! Domain types
//!
//! - `level` - severity ordering and tags
//! - `caller` - call-site provenance
//! - `config` - application configuration

pub mod caller;
pub mod config;
mod level;

pub use caller::Caller;
pub use config::{AppConfig, DEFAULT_CONFIG_FILE};
pub use level::*;
