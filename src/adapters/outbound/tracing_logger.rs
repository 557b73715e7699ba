use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Forwards domain log lines as `tracing` events under the `autofollow` target.
pub struct TracingLogger;

impl DomainLogger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!(target: "autofollow", "{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "autofollow", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "autofollow", "{}", msg);
    }
}

pub fn init_tracing_logger() -> DynLogger {
    Arc::new(TracingLogger)
}
