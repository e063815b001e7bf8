//! Startup errors for configuration, world layout and weather input.
//!
//! Anything that fails here is fatal: a session is never built from partial
//! input.

use std::fmt;

/// Errors raised while loading or validating [`super::params::Params`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration is not valid JSON or a field is missing.
    Parse(serde_json::Error),
    /// A field parsed but holds an unusable value.
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read configuration: {err}"),
            Self::Parse(err) => write!(f, "malformed configuration: {err}"),
            Self::InvalidValue { field, reason } => {
                write!(f, "invalid configuration value `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Errors raised while parsing the world layout or the weather schedule.
#[derive(Debug)]
pub enum LayoutError {
    /// The input file could not be read.
    Io(std::io::Error),
    /// A record starts with a type the game does not know.
    UnknownRecord {
        /// 1-based line number.
        line: usize,
        /// The unrecognised record type.
        kind: String,
    },
    /// A record has too few fields or a field does not parse.
    MalformedField {
        /// 1-based line number.
        line: usize,
        /// Name of the field that failed.
        field: &'static str,
    },
    /// The layout has no `TAXI` record.
    MissingTaxi,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read layout: {err}"),
            Self::UnknownRecord { line, kind } => {
                write!(f, "line {line}: unknown record type `{kind}`")
            }
            Self::MalformedField { line, field } => {
                write!(f, "line {line}: missing or malformed field `{field}`")
            }
            Self::MissingTaxi => write!(f, "world layout has no TAXI record"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
