//! Error types for stepper-console library.
//!
//! Provides unified error handling across configuration and protocol processing.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-console operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Protocol command error
    Protocol(ProtocolError),
}

/// Configuration-related errors.
///
/// These are startup-time errors: once a configuration validates, the
/// running system never produces them again.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// No axes declared in configuration
    NoAxes,
    /// More axes declared than the registry can hold
    TooManyAxes(usize),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u32),
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration(f32),
    /// Invalid fast (cruise) speed (must be > 0)
    InvalidFastSpeed(f32),
    /// Invalid slow (near-target) speed (must be > 0)
    InvalidSlowSpeed(f32),
    /// Invalid slow zone threshold (must be > 0)
    InvalidSlowZone(i64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Protocol command errors.
///
/// Every protocol error is recoverable: it is reported as a notice on the
/// output stream and processing resumes per the line-level failure policy
/// (skip one command, or abandon the rest of the line).
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// Axis index outside the configured range; the command is skipped.
    /// Carries the raw commanded index, which may be negative.
    IndexOutOfRange(i64),
    /// Verb present but one or both arguments missing; the rest of the
    /// line is abandoned
    MalformedCommand(crate::protocol::Verb),
    /// Verb token not recognized; the rest of the line is abandoned
    UnknownCommand(heapless::String<16>),
    /// Index or value token is not a number; the command is skipped
    InvalidNumber(heapless::String<16>),
}

impl ProtocolError {
    /// Build an `UnknownCommand` from the offending token, truncated to
    /// the bounded payload.
    pub fn unknown(token: &str) -> Self {
        ProtocolError::UnknownCommand(truncated(token))
    }

    /// Build an `InvalidNumber` from the offending token, truncated to
    /// the bounded payload.
    pub fn invalid_number(token: &str) -> Self {
        ProtocolError::InvalidNumber(truncated(token))
    }
}

fn truncated(token: &str) -> heapless::String<16> {
    let mut s = heapless::String::new();
    for c in token.chars() {
        if s.push(c).is_err() {
            break;
        }
    }
    s
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Protocol(e) => write!(f, "Protocol error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::NoAxes => write!(f, "Configuration declares no axes"),
            ConfigError::TooManyAxes(n) => {
                write!(f, "Too many axes: {}. Maximum is {}", n, crate::axis::MAX_AXES)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidFastSpeed(v) => write!(f, "Invalid fast speed: {}. Must be > 0", v),
            ConfigError::InvalidSlowSpeed(v) => write!(f, "Invalid slow speed: {}. Must be > 0", v),
            ConfigError::InvalidSlowZone(v) => {
                write!(f, "Invalid slow zone: {} steps. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::IndexOutOfRange(idx) => write!(f, "Axis index {} out of range", idx),
            ProtocolError::MalformedCommand(verb) => {
                write!(f, "Malformed {} command: missing argument", verb.token())
            }
            ProtocolError::UnknownCommand(token) => write!(f, "Unknown token: {}", token),
            ProtocolError::InvalidNumber(token) => write!(f, "Invalid number: {}", token),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ProtocolError> for Error {
    fn from(e: ProtocolError) -> Self {
        Error::Protocol(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
