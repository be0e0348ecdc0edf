//! Console target implementation

use crate::core::{Result, SeverityLevel, Target, TargetConfig};
use std::io::Write;

enum Stream {
    Stdout,
    Writer(Box<dyn Write + Send>),
}

/// Writes rendered lines to standard output
///
/// Colors, timestamps and thread ids are all on by default, with the color
/// spanning the whole line.
pub struct ConsoleTarget {
    config: TargetConfig,
    stream: Stream,
}

impl ConsoleTarget {
    pub fn new() -> Self {
        Self {
            config: TargetConfig::default(),
            stream: Stream::Stdout,
        }
    }

    /// Create a console target with every display option spelled out
    pub fn with_options(
        add_colors: bool,
        whole_message_color: bool,
        add_time: bool,
        add_thread_id: bool,
    ) -> Self {
        Self {
            config: TargetConfig {
                prefix: String::new(),
                add_colors,
                whole_message_color,
                add_time,
                add_thread_id,
            },
            stream: Stream::Stdout,
        }
    }

    /// Write to `writer` instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::targets::ConsoleTarget;
    ///
    /// let target = ConsoleTarget::new().with_writer(std::io::stderr());
    /// ```
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stream = Stream::Writer(Box::new(writer));
        self
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
}

impl Default for ConsoleTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for ConsoleTarget {
    fn log(&mut self, severity: SeverityLevel, message: &str) -> Result<()> {
        let line = self.config.render_line(severity, message);
        match &mut self.stream {
            Stream::Stdout => std::io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Writer(writer) => writer.write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn config(&self) -> &TargetConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut TargetConfig {
        &mut self.config
    }
}

impl Drop for ConsoleTarget {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
