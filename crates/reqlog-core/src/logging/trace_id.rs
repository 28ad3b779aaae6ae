//! Trace ids for request correlation
//!
//! Ids are 6 lowercase hex digits: a per-process salt taken from the clock at
//! first use, plus a sequence number. Any 2^24 consecutive ids are distinct.

use chrono::Utc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

const TRACE_ID_MASK: u32 = 0x00FF_FFFF;

static SEQUENCE: AtomicU32 = AtomicU32::new(0);
static SALT: OnceLock<u32> = OnceLock::new();

/// Next trace id for a request or connection, e.g. `"3f09a2"`.
pub fn generate_trace_id() -> String {
    let salt = *SALT.get_or_init(|| Utc::now().timestamp_subsec_micros());
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{:06x}", salt.wrapping_add(seq) & TRACE_ID_MASK)
}
