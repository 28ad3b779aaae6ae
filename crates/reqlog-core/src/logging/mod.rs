//! Request correlation helpers
//!
//! Generates short ids used to tag per-request child loggers.

mod trace_id;

pub use trace_id::generate_trace_id;
