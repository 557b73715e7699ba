use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Forwards every line to each of its sinks in order.
pub struct FanoutLogger {
    sinks: Vec<DynLogger>,
}

impl FanoutLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for FanoutLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|sink| sink.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|sink| sink.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|sink| sink.error(msg));
    }
}

/// Tracing output, plus a `fast_log` file when `file` is set and the file
/// backend can be installed. Falls back to tracing alone otherwise.
pub fn init_combined_logger(file: Option<&str>) -> DynLogger {
    let tracing_sink = super::init_tracing_logger();
    let Some(path) = file else {
        return tracing_sink;
    };

    match super::FileLogger::install(path) {
        Ok(file_sink) => Arc::new(FanoutLogger::new(vec![file_sink, tracing_sink])),
        Err(e) => {
            tracing_sink.warn(&format!("File logging disabled: {}", e));
            tracing_sink
        }
    }
}
