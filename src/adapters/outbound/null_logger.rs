use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

struct NullLogger;

impl DomainLogger for NullLogger {
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Discards everything. Movement logic must keep working without a sink.
pub fn init_null_logger() -> DynLogger {
    Arc::new(NullLogger)
}
