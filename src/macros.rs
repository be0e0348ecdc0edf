//! Logging macros for ergonomic log message formatting.
//!
//! Templates follow `format!` syntax, so both sequential (`{}`) and
//! positional (`{0}`, `{1}`) placeholders work and a template that does not
//! match its arguments is a compile error. Arguments are only formatted when
//! the level passes the logger's threshold.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, log};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//! log!(logger, SeverityLevel::Debug, "Hello {1}!", "World", "Dog");
//! log!(logger, SeverityLevel::Info, "I would rather be {1} than {0}", "right", "happy");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::log;
/// log!(logger, SeverityLevel::Info, "Simple message");
/// log!(logger, SeverityLevel::Error, "{0} failed with code {1}", "job42", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, format_args!($($arg)+))
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::verbose;
/// verbose!(logger, "Entering calculate()");
/// ```
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Info, $($arg)+)
    };
}

/// Log an important-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::important;
/// important!(logger, "Loaded {} assets", 128);
/// ```
#[macro_export]
macro_rules! important {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Important, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::error;
/// error!(logger, "Error, but program can continue: {}", "retrying");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Error, $($arg)+)
    };
}

/// Log a failure-level message.
#[macro_export]
macro_rules! failure {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Failure, $($arg)+)
    };
}

/// Log a message without a meaningful severity (`Unknown`).
#[macro_export]
macro_rules! unknown {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::SeverityLevel::Unknown, $($arg)+)
    };
}
