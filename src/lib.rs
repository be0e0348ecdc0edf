//! # Leveled Logger
//!
//! A small, synchronous logging facility: a severity-leveled router that
//! fans formatted lines out to pluggable output targets.
//!
//! ## Features
//!
//! - **Severity Filtering**: Eight ordered levels, from `Verbose` to `Unknown`
//! - **Multiple Targets**: Console and file targets, plus custom ones via [`Target`]
//! - **Per-Target Display**: Prefixes, ANSI colors, UTC timestamps, thread ids
//! - **Thread Safe**: Targets are locked individually, lines never interleave
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::error;
//!
//! let logger = Logger::named("core");
//! logger.add_target(ConsoleTarget::new());
//! logger.set_verbose_level(SeverityLevel::Warning);
//!
//! logger.info("dropped, below the threshold");
//! error!(logger, "{0} failed with code {1}", "job42", 7);
//! ```

pub mod core;
pub mod macros;
pub mod targets;

pub mod prelude {
    pub use crate::core::{
        Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, SeverityLevel,
        Target, TargetConfig, TargetHandle, TargetSpec,
    };
    pub use crate::targets::{ConsoleTarget, FileTarget};
}

pub use crate::core::{
    current_thread_id, current_utc_timestamp, severity_to_color_code, severity_to_label, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, SeverityLevel, Target,
    TargetConfig, TargetHandle, TargetSpec, Threshold, RESET_CODE,
};
pub use targets::{ConsoleTarget, FileTarget};
