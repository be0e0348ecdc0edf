//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    metrics::LoggerMetrics,
    severity::SeverityLevel,
    target::Target,
    template,
};
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

/// Opaque, stable reference to a target registered with a [`Logger`]
///
/// Handles are never reused within one logger, so a handle to a deleted
/// target stays dead even after new targets are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetHandle(u64);

impl fmt::Display for TargetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Registered {
    handle: TargetHandle,
    target: Mutex<Box<dyn Target>>,
}

/// Severity-filtered fan-out to an ordered set of owned targets
///
/// All methods take `&self`; share a logger between threads with `Arc`.
/// Each target is guarded by its own lock so concurrent lines never
/// interleave within one target.
pub struct Logger {
    name: Option<String>,
    threshold: AtomicI32,
    targets: RwLock<Vec<Registered>>,
    next_handle: AtomicU64,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with no targets that lets every severity through
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            threshold: AtomicI32::new(SeverityLevel::Verbose.value()),
            targets: RwLock::new(Vec::new()),
            next_handle: AtomicU64::new(0),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a logger with a name used in diagnostics, e.g. `"core"` or `"client"`
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the minimum severity that reaches the targets
    ///
    /// Accepts a [`SeverityLevel`] or any raw `i32`; values outside the
    /// level range are compared numerically like any other.
    pub fn set_verbose_level(&self, level: impl Into<i32>) {
        self.threshold.store(level.into(), Ordering::Relaxed);
    }

    pub fn verbose_level(&self) -> i32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Whether a message of `level` would be dispatched
    #[inline]
    pub fn is_enabled(&self, level: SeverityLevel) -> bool {
        level.value() >= self.verbose_level()
    }

    /// Register a target and take ownership of it
    pub fn add_target<T: Target + 'static>(&self, target: T) -> TargetHandle {
        self.add_boxed_target(Box::new(target))
    }

    pub fn add_boxed_target(&self, target: Box<dyn Target>) -> TargetHandle {
        let handle = TargetHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.targets.write().push(Registered {
            handle,
            target: Mutex::new(target),
        });
        handle
    }

    /// Unregister a target and hand it back to the caller
    ///
    /// Returns `None` if the handle is not registered. The target is not
    /// flushed; dropping the returned box closes it.
    pub fn delete_target(&self, handle: TargetHandle) -> Option<Box<dyn Target>> {
        let mut targets = self.targets.write();
        let index = targets.iter().position(|r| r.handle == handle)?;
        Some(targets.remove(index).target.into_inner())
    }

    pub fn contains(&self, handle: TargetHandle) -> bool {
        self.targets.read().iter().any(|r| r.handle == handle)
    }

    pub fn target_count(&self) -> usize {
        self.targets.read().len()
    }

    /// Handles of all registered targets, in dispatch order
    pub fn handles(&self) -> Vec<TargetHandle> {
        self.targets.read().iter().map(|r| r.handle).collect()
    }

    /// Run `f` against one registered target
    ///
    /// This is the way to reconfigure a single target after registration.
    /// The target's lock is held while `f` runs and is not re-entrant, so
    /// `f` must not call back into this logger at all: logging, prefix
    /// changes, flushing and registration can all deadlock.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let console = logger.add_target(ConsoleTarget::new());
    ///
    /// logger.with_target(console, |target| target.enable_colors(true, false));
    /// ```
    pub fn with_target<R>(
        &self,
        handle: TargetHandle,
        f: impl FnOnce(&mut dyn Target) -> R,
    ) -> Option<R> {
        let targets = self.targets.read();
        let registered = targets.iter().find(|r| r.handle == handle)?;
        let mut target = registered.target.lock();
        Some(f(&mut **target))
    }

    /// Write directly to one target, bypassing the threshold and the other targets
    pub fn log_to(
        &self,
        handle: TargetHandle,
        level: SeverityLevel,
        message: impl AsRef<str>,
    ) -> Result<()> {
        self.with_target(handle, |target| target.log(level, message.as_ref()))
            .unwrap_or(Err(LoggerError::TargetNotFound(handle)))
    }

    /// Set the prefix of every currently registered target
    pub fn set_prefix(&self, prefix: &str) {
        for registered in self.targets.read().iter() {
            registered.target.lock().set_prefix(prefix);
        }
    }

    /// Flush every target
    ///
    /// All targets are flushed even if one fails or panics; the first
    /// returned error is passed on. Panics are reported and counted only.
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for registered in self.targets.read().iter() {
            let mut target = registered.target.lock();
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| target.flush()));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.metrics.record_target_failure();
                    eprintln!(
                        "[LOGGER ERROR] {}: flush of target {} ({}) failed: {}",
                        self.display_name(),
                        registered.handle,
                        target.name(),
                        e
                    );
                    first_error.get_or_insert(e);
                }
                Err(panic_info) => {
                    self.metrics.record_target_failure();
                    eprintln!(
                        "[LOGGER CRITICAL] {}: target {} ({}) panicked during flush: {}. \
                         Other targets continue to function.",
                        self.display_name(),
                        registered.handle,
                        target.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Dispatch an already rendered message
    pub fn log(&self, level: SeverityLevel, message: impl AsRef<str>) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        self.dispatch(level, message.as_ref());
    }

    /// Dispatch a message built with `format_args!`
    ///
    /// The arguments are only rendered if `level` passes the threshold. The
    /// `log!` macro family expands to this call.
    pub fn log_args(&self, level: SeverityLevel, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }
        match args.as_str() {
            Some(literal) => self.dispatch(level, literal),
            None => self.dispatch(level, &args.to_string()),
        }
    }

    /// Dispatch a message rendered from a runtime template
    ///
    /// See [`template::render`] for the placeholder syntax. A filtered level
    /// returns `Ok(())` without looking at the template. A malformed template
    /// returns an error and nothing is dispatched.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::new();
    /// logger
    ///     .log_template(SeverityLevel::Error, "{0} failed with code {1}", &[&"job42", &7])
    ///     .unwrap();
    /// ```
    pub fn log_template(
        &self,
        level: SeverityLevel,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return Ok(());
        }
        let message = template::render(template, args)?;
        self.dispatch(level, &message);
        Ok(())
    }

    /// Dispatch a message without a severity; it is logged as `Unknown`
    pub fn log_unleveled(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Unknown, message);
    }

    #[inline]
    pub fn verbose(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Verbose, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Info, message);
    }

    #[inline]
    pub fn important(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Important, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Error, message);
    }

    #[inline]
    pub fn failure(&self, message: impl AsRef<str>) {
        self.log(SeverityLevel::Failure, message);
    }

    /// Dispatch counters for this logger
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("logger")
    }

    /// Write to every target in insertion order
    ///
    /// Each target is isolated: an error or panic in one is reported on
    /// stderr and the remaining targets still receive the message.
    fn dispatch(&self, level: SeverityLevel, message: &str) {
        self.metrics.record_dispatched();

        for registered in self.targets.read().iter() {
            let mut target = registered.target.lock();
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                target.log(level, message)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    self.metrics.record_target_failure();
                    eprintln!(
                        "[LOGGER ERROR] {}: target {} ({}) failed: {}",
                        self.display_name(),
                        registered.handle,
                        target.name(),
                        e
                    );
                }
                Err(panic_info) => {
                    self.metrics.record_target_failure();
                    eprintln!(
                        "[LOGGER CRITICAL] {}: target {} ({}) panicked: {}. \
                         Other targets continue to function.",
                        self.display_name(),
                        registered.handle,
                        target.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("verbose_level", &self.verbose_level())
            .field("targets", &self.handles())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("core")
///     .verbose_level(SeverityLevel::Info)
///     .target(ConsoleTarget::new())
///     .prefix("[ENGINE]")
///     .build();
///
/// assert_eq!(logger.target_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: Option<String>,
    verbose_level: i32,
    prefix: Option<String>,
    targets: Vec<Box<dyn Target>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            verbose_level: SeverityLevel::Verbose.value(),
            prefix: None,
            targets: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn verbose_level(mut self, level: impl Into<i32>) -> Self {
        self.verbose_level = level.into();
        self
    }

    /// Prefix applied to every target given to this builder
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add a target; targets are registered in the order given
    #[must_use = "builder methods return a new value"]
    pub fn target<T: Target + 'static>(mut self, target: T) -> Self {
        self.targets.push(Box::new(target));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_target(mut self, target: Box<dyn Target>) -> Self {
        self.targets.push(target);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = match self.name {
            Some(name) => Logger::named(name),
            None => Logger::new(),
        };
        logger.set_verbose_level(self.verbose_level);

        for target in self.targets {
            logger.add_boxed_target(target);
        }
        if let Some(prefix) = self.prefix {
            logger.set_prefix(&prefix);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
