use thiserror::Error;

/// Failures while setting up log output for the taint engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("unknown log format {0:?} (expected text, json or journald)")]
    InvalidFormat(String),
    #[error("journald output needs linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("cannot install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("invalid filter directive {0:?}")]
    InvalidFilter(String),
}
