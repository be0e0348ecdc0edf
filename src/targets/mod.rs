//! Target implementations

pub mod console;
pub mod file;

pub use console::ConsoleTarget;
pub use file::{FileTarget, DEFAULT_LOG_PATH};

// Re-export the trait so `targets::Target` works for custom targets
pub use crate::core::Target;
