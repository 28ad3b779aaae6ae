//! Services operating on the domain types

mod logger;

pub use logger::*;
