//! Target trait for log output destinations

use super::{
    error::Result,
    severity::{SeverityLevel, RESET_CODE},
    timestamp::current_utc_timestamp,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;

// Thread-local cache so the identifier is only formatted once per thread
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Stable, human-readable identifier for the calling thread, e.g. `ThreadId(3)`
pub fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Display settings shared by every target kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Written in front of every line; empty means none
    pub prefix: String,
    pub add_colors: bool,
    /// Color the whole line instead of only the severity label
    pub whole_message_color: bool,
    pub add_time: bool,
    pub add_thread_id: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            add_colors: true,
            whole_message_color: true,
            add_time: true,
            add_thread_id: true,
        }
    }
}

impl TargetConfig {
    /// Compose one output line, including the trailing newline
    ///
    /// Order: prefix, whole-line color, timestamp, label, thread id, message,
    /// newline, reset.
    pub fn render_line(&self, severity: SeverityLevel, message: &str) -> String {
        let whole_line = self.add_colors && self.whole_message_color;
        let mut line = String::with_capacity(message.len() + self.prefix.len() + 64);

        if !self.prefix.is_empty() {
            line.push_str(&self.prefix);
            line.push(' ');
        }
        if whole_line {
            line.push_str(&severity.color_code());
        }
        if self.add_time {
            line.push_str(&current_utc_timestamp());
            line.push(' ');
        }
        if self.add_colors && !self.whole_message_color {
            line.push_str(&severity.color_code());
            line.push_str(severity.label());
            line.push_str(RESET_CODE);
        } else {
            line.push_str(severity.label());
        }
        line.push(' ');
        if self.add_thread_id {
            line.push('[');
            line.push_str(&current_thread_id());
            line.push_str("] ");
        }
        line.push_str(message);
        line.push('\n');
        if whole_line {
            line.push_str(RESET_CODE);
        }

        line
    }
}

/// A configured destination for rendered log messages
///
/// Only `log`, `flush`, `name` and the config accessors are required; the
/// setters operate on [`TargetConfig`]. File-specific setters default to
/// no-ops so console-like targets can ignore them.
pub trait Target: Send {
    fn log(&mut self, severity: SeverityLevel, message: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    fn config(&self) -> &TargetConfig;
    fn config_mut(&mut self) -> &mut TargetConfig;

    fn set_prefix(&mut self, prefix: &str) {
        self.config_mut().prefix = prefix.to_string();
    }

    fn enable_colors(&mut self, enabled: bool, whole_message_color: bool) {
        let config = self.config_mut();
        config.add_colors = enabled;
        config.whole_message_color = whole_message_color;
    }

    fn disable_colors(&mut self) {
        self.config_mut().add_colors = false;
    }

    /// Takes effect the next time the file is opened
    fn change_file_path(&mut self, _path: PathBuf) {}

    /// Takes effect the next time the file is opened
    fn append_to_log_file(&mut self, _enabled: bool) {}
}
