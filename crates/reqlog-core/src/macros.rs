//! Logging macros
//!
//! Each macro takes a logger (anything that derefs to [`Logger`](crate::Logger))
//! followed by any number of `Display` values, which are written
//! space-separated. The caller tag carries the enclosing function name:
//!
//! ```ignore
//! log_info!(logger, "accepted", peer, "in", elapsed_ms, "ms");
//! ```
//!
//! Arguments are only rendered when the logger's threshold lets the line
//! through.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(
                level,
                ::std::option::Option::Some($crate::caller!()),
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_at!($logger, $crate::Level::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_at!($logger, $crate::Level::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_at!($logger, $crate::Level::Warn $(, $arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_at!($logger, $crate::Level::Error $(, $arg)*)
    };
}
