//! File target implementation

use crate::core::{LoggerError, Result, SeverityLevel, Target, TargetConfig};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path used by [`FileTarget::default`]
pub const DEFAULT_LOG_PATH: &str = "logs/LogFile.log";

/// Writes rendered lines to a plain-text file
///
/// The file is opened on construction, truncating it unless append mode is
/// requested. Parent directories are never created. If the open fails the
/// failure is reported on stderr and every `log` call returns
/// [`LoggerError::TargetUnavailable`] until a later `flush` or `reopen`
/// succeeds.
///
/// Colors are off by default for files.
pub struct FileTarget {
    config: TargetConfig,
    file_path: PathBuf,
    append_mode: bool,
    writer: Option<BufWriter<File>>,
}

impl FileTarget {
    /// Truncating file target with timestamps and thread ids
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, false, true, true)
    }

    pub fn with_options(
        path: impl Into<PathBuf>,
        append_mode: bool,
        add_time: bool,
        add_thread_id: bool,
    ) -> Self {
        let mut target = Self::unopened(path.into(), append_mode, add_time, add_thread_id);
        match open_file(&target.file_path, append_mode) {
            Ok(file) => target.writer = Some(BufWriter::new(file)),
            Err(e) => report_open_failure(&e),
        }
        target
    }

    /// Like [`FileTarget::with_options`] with defaults for time and thread id,
    /// but an open failure is returned instead of reported
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use leveled_logger::targets::FileTarget;
    ///
    /// let target = FileTarget::open("/var/log/app.log", true)?;
    /// # Ok::<(), leveled_logger::LoggerError>(())
    /// ```
    pub fn open(path: impl Into<PathBuf>, append_mode: bool) -> Result<Self> {
        let mut target = Self::unopened(path.into(), append_mode, true, true);
        let file = open_file(&target.file_path, append_mode)?;
        target.writer = Some(BufWriter::new(file));
        Ok(target)
    }

    fn unopened(file_path: PathBuf, append_mode: bool, add_time: bool, add_thread_id: bool) -> Self {
        Self {
            config: TargetConfig {
                prefix: String::new(),
                add_colors: false,
                whole_message_color: true,
                add_time,
                add_thread_id,
            },
            file_path,
            append_mode,
            writer: None,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self, add_colors: bool, whole_message_color: bool) -> Self {
        self.config.add_colors = add_colors;
        self.config.whole_message_color = whole_message_color;
        self
    }

    #[must_use]
    pub fn with_time(mut self, add_time: bool) -> Self {
        self.config.add_time = add_time;
        self
    }

    #[must_use]
    pub fn with_thread_id(mut self, add_thread_id: bool) -> Self {
        self.config.add_thread_id = add_thread_id;
        self
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Path used by the next open; may differ from the open file after
    /// [`Target::change_file_path`]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn append_mode(&self) -> bool {
        self.append_mode
    }

    /// Close and reopen at the current path, truncating unless append mode is set
    pub fn reopen(&mut self) -> Result<()> {
        let append_mode = self.append_mode;
        self.reopen_with(append_mode)
    }

    fn reopen_with(&mut self, append_mode: bool) -> Result<()> {
        let flushed = match self.writer.take() {
            Some(mut writer) => writer.flush(),
            None => Ok(()),
        };

        match open_file(&self.file_path, append_mode) {
            Ok(file) => self.writer = Some(BufWriter::new(file)),
            Err(e) => {
                report_open_failure(&e);
                return Err(e);
            }
        }

        flushed.map_err(|e| LoggerError::io_operation("flushing log file", self.path_str(), e))
    }

    fn path_str(&self) -> String {
        self.file_path.display().to_string()
    }
}

impl Default for FileTarget {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

fn open_file(path: &Path, append_mode: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append_mode {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options
        .open(path)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
}

fn report_open_failure(error: &LoggerError) {
    eprintln!(
        "[LOGGER ERROR] {}. Please make sure any parent directories exist.",
        error
    );
}

impl Target for FileTarget {
    fn log(&mut self, severity: SeverityLevel, message: &str) -> Result<()> {
        let line = self.config.render_line(severity, message);
        let writer = self.writer.as_mut().ok_or_else(|| {
            LoggerError::target_unavailable(self.file_path.display().to_string(), "log file is not open")
        })?;

        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Push buffered lines to disk, then close and reopen in append mode
    ///
    /// Reopening in append mode means a truncating target never truncates
    /// again, and a target whose open failed gets another chance.
    fn flush(&mut self) -> Result<()> {
        self.reopen_with(true)
    }

    fn name(&self) -> &str {
        "file"
    }

    fn config(&self) -> &TargetConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TargetConfig {
        &mut self.config
    }

    fn change_file_path(&mut self, path: PathBuf) {
        self.file_path = path;
    }

    fn append_to_log_file(&mut self, enabled: bool) {
        self.append_mode = enabled;
    }
}

impl Drop for FileTarget {
    fn drop(&mut self) {
        if let Some(ref mut writer) = self.writer {
            let _ = writer.flush();
        }
    }
}
