use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

enum Level {
    Info,
    Warn,
    Error,
}

struct LogLine {
    level: Level,
    msg: String,
}

/// Non-blocking logger. Lines go through a bounded channel to a background
/// task that forwards them to the wrapped sink; when the channel is full the
/// line is dropped and counted.
pub struct BufferedLogger {
    sender: mpsc::Sender<LogLine>,
    dropped: AtomicU64,
}

impl BufferedLogger {
    /// Spawns the forwarding task on the current tokio runtime.
    pub fn spawn(sink: DynLogger, capacity: usize) -> Arc<BufferedLogger> {
        let (sender, mut receiver) = mpsc::channel::<LogLine>(capacity.max(1));

        tokio::spawn(async move {
            while let Some(line) = receiver.recv().await {
                match line.level {
                    Level::Info => sink.info(&line.msg),
                    Level::Warn => sink.warn(&line.msg),
                    Level::Error => sink.error(&line.msg),
                }
            }
        });

        Arc::new(BufferedLogger {
            sender,
            dropped: AtomicU64::new(0),
        })
    }

    /// Lines discarded because the buffer was full or the forwarder was gone.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn push(&self, level: Level, msg: &str) {
        let line = LogLine {
            level,
            msg: msg.to_string(),
        };
        if self.sender.try_send(line).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}

pub fn init_buffered_logger(sink: DynLogger, capacity: usize) -> DynLogger {
    BufferedLogger::spawn(sink, capacity)
}
