//! Severity level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape sequence that terminates a colorized span
pub const RESET_CODE: &str = "\x1b[0m";

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum SeverityLevel {
    Verbose = -2,
    Debug = -1,
    Info = 0,
    Important = 1,
    Warning = 2,
    Error = 3,
    Failure = 4,
    /// Used for calls that carry no explicit severity
    #[default]
    Unknown = 5,
}

impl SeverityLevel {
    /// All levels, lowest to highest
    pub const ALL: [SeverityLevel; 8] = [
        SeverityLevel::Verbose,
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Important,
        SeverityLevel::Warning,
        SeverityLevel::Error,
        SeverityLevel::Failure,
        SeverityLevel::Unknown,
    ];

    /// Numeric value used for threshold comparison
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Exact conversion from a numeric value
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            -2 => Some(SeverityLevel::Verbose),
            -1 => Some(SeverityLevel::Debug),
            0 => Some(SeverityLevel::Info),
            1 => Some(SeverityLevel::Important),
            2 => Some(SeverityLevel::Warning),
            3 => Some(SeverityLevel::Error),
            4 => Some(SeverityLevel::Failure),
            5 => Some(SeverityLevel::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Verbose => "VERBOSE",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Important => "IMPORTANT",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
            SeverityLevel::Failure => "FAILURE",
            SeverityLevel::Unknown => "UNKNOWN",
        }
    }

    /// Fixed-width bracketed label written in front of every message
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Failure => "[ FAILURE ]",
            SeverityLevel::Error => "[  ERROR  ]",
            SeverityLevel::Warning => "[ WARNING ]",
            SeverityLevel::Important => "[IMPORTANT]",
            SeverityLevel::Info => "[  INFO   ]",
            SeverityLevel::Debug => "[  DEBUG  ]",
            SeverityLevel::Verbose => "[ VERBOSE ]",
            SeverityLevel::Unknown => "[ UNKNOWN ]",
        }
    }

    pub fn color(&self) -> Color {
        use colored::Color::*;
        match self {
            SeverityLevel::Failure => Red,
            SeverityLevel::Error => BrightRed,
            SeverityLevel::Warning => Yellow,
            SeverityLevel::Important => Green,
            SeverityLevel::Info => Blue,
            SeverityLevel::Debug | SeverityLevel::Verbose => Magenta,
            SeverityLevel::Unknown => BrightBlack,
        }
    }

    /// ANSI foreground escape for this level, e.g. `"\x1b[31m"` for Failure
    pub fn color_code(&self) -> String {
        format!("\x1b[{}m", self.color().to_fg_str())
    }
}

/// Bracketed label for any numeric severity; unrecognized values render as unknown.
pub fn severity_to_label(value: impl Into<SeverityLevel>) -> &'static str {
    value.into().label()
}

/// ANSI color escape for any numeric severity; unrecognized values get bright black.
pub fn severity_to_color_code(value: impl Into<SeverityLevel>) -> String {
    value.into().color_code()
}

impl From<i32> for SeverityLevel {
    fn from(value: i32) -> Self {
        SeverityLevel::from_value(value).unwrap_or(SeverityLevel::Unknown)
    }
}

impl From<SeverityLevel> for i32 {
    fn from(level: SeverityLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VERBOSE" | "TRACE" => Ok(SeverityLevel::Verbose),
            "DEBUG" => Ok(SeverityLevel::Debug),
            "INFO" => Ok(SeverityLevel::Info),
            "IMPORTANT" => Ok(SeverityLevel::Important),
            "WARNING" | "WARN" => Ok(SeverityLevel::Warning),
            "ERROR" => Ok(SeverityLevel::Error),
            "FAILURE" | "FATAL" => Ok(SeverityLevel::Failure),
            "UNKNOWN" => Ok(SeverityLevel::Unknown),
            _ => Err(format!("Invalid severity level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SeverityLevel::Failure.label(), "[ FAILURE ]");
        assert_eq!(SeverityLevel::Error.label(), "[  ERROR  ]");
        assert_eq!(SeverityLevel::Warning.label(), "[ WARNING ]");
        assert_eq!(SeverityLevel::Important.label(), "[IMPORTANT]");
        assert_eq!(SeverityLevel::Info.label(), "[  INFO   ]");
        assert_eq!(SeverityLevel::Debug.label(), "[  DEBUG  ]");
        assert_eq!(SeverityLevel::Verbose.label(), "[ VERBOSE ]");
        assert_eq!(SeverityLevel::Unknown.label(), "[ UNKNOWN ]");

        for level in SeverityLevel::ALL {
            assert_eq!(level.label().len(), 11);
        }
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(SeverityLevel::Failure.color_code(), "\x1b[31m");
        assert_eq!(SeverityLevel::Error.color_code(), "\x1b[91m");
        assert_eq!(SeverityLevel::Warning.color_code(), "\x1b[33m");
        assert_eq!(SeverityLevel::Important.color_code(), "\x1b[32m");
        assert_eq!(SeverityLevel::Info.color_code(), "\x1b[34m");
        assert_eq!(SeverityLevel::Debug.color_code(), "\x1b[35m");
        assert_eq!(SeverityLevel::Verbose.color_code(), "\x1b[35m");
        assert_eq!(SeverityLevel::Unknown.color_code(), "\x1b[90m");
        assert_eq!(RESET_CODE, "\x1b[0m");
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        assert_eq!(severity_to_label(42), "[ UNKNOWN ]");
        assert_eq!(severity_to_label(-7), "[ UNKNOWN ]");
        assert_eq!(severity_to_color_code(99), "\x1b[90m");
        assert_eq!(severity_to_label(3), "[  ERROR  ]");
    }

    #[test]
    fn test_numeric_order() {
        assert!(SeverityLevel::Verbose < SeverityLevel::Debug);
        assert!(SeverityLevel::Failure < SeverityLevel::Unknown);
        assert_eq!(SeverityLevel::Verbose.value(), -2);
        assert_eq!(SeverityLevel::Unknown.value(), 5);
        assert_eq!(SeverityLevel::default(), SeverityLevel::Unknown);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<SeverityLevel>(), Ok(SeverityLevel::Warning));
        assert_eq!("Important".parse::<SeverityLevel>(), Ok(SeverityLevel::Important));
        assert!("loud".parse::<SeverityLevel>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SeverityLevel::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");

        let levels: Vec<SeverityLevel> = serde_json::from_str("[\"Verbose\", \"Unknown\"]").unwrap();
        assert_eq!(levels, vec![SeverityLevel::Verbose, SeverityLevel::Unknown]);
        assert!(serde_json::from_str::<SeverityLevel>("\"Loud\"").is_err());
    }
}
