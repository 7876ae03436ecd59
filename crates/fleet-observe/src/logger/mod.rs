mod config;
mod error;
mod format;
mod log;

pub use config::LoggerConfig;
pub use error::LoggerError;
pub use format::LoggerFormat;

use log::Logger;

/// Route `fleet-core` decision logs to the output picked in `cfg`.
///
/// Only one subscriber can be installed per process; later calls return
/// [`LoggerError::AlreadyInitialized`], which embedding controllers can
/// ignore when they bring their own subscriber.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    match cfg.format {
        LoggerFormat::Text => Logger::text(cfg),
        LoggerFormat::Json => Logger::json(cfg),
        LoggerFormat::Journald => Logger::journald(cfg),
    }
}
