use crate::common::{DomainError, DomainResult};
use crate::domains::logger::{DomainLogger, DynLogger};
use chrono::Utc;
use std::sync::Arc;

/// Writes through the `log` facade into a `fast_log` file appender.
pub struct FileLogger;

impl FileLogger {
    /// Installs `fast_log` as the process-wide `log` backend writing to `path`.
    /// Fails if another `log` backend was installed first.
    pub fn install(path: &str) -> DomainResult<DynLogger> {
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(log::LevelFilter::Info),
        )
        .map_err(|e| DomainError::InfrastructureError(format!("Failed to initialize fast_log: {}", e)))?;
        Ok(Arc::new(FileLogger))
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log::info!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn warn(&self, msg: &str) {
        log::warn!("{} - {}", Utc::now().to_rfc3339(), msg);
    }

    fn error(&self, msg: &str) {
        log::error!("{} - {}", Utc::now().to_rfc3339(), msg);
    }
}
