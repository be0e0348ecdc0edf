//! Core logger types and traits

pub mod config;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod target;
pub mod template;
pub mod timestamp;

pub use config::{LoggerConfig, TargetSpec, Threshold};
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder, TargetHandle};
pub use metrics::LoggerMetrics;
pub use severity::{severity_to_color_code, severity_to_label, SeverityLevel, RESET_CODE};
pub use target::{current_thread_id, Target, TargetConfig};
pub use timestamp::current_utc_timestamp;
