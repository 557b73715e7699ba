use crate::common::{ApplicationError, ApplicationResult, LogicExecutor};
use crate::domains::logger::{tagged, DynLogger};
use crate::domains::settings::BotSettings;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

/// Result of a single scheduler tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickReport {
    /// An executor acted; the ones after it were skipped.
    Handled { executor: &'static str },
    Idle,
    /// An executor failed. The tick was abandoned, later ticks still run.
    Faulted { executor: &'static str, error: String },
}

/// Drives a priority-ordered list of logic executors, one tick at a time.
///
/// Settings are published through a `watch` channel and snapshotted at the
/// start of each tick, so a change never takes effect halfway through one.
pub struct TickScheduler {
    executors: Vec<Arc<dyn LogicExecutor>>,
    settings: watch::Receiver<BotSettings>,
    tick_interval: Duration,
    logger: DynLogger,
}

impl TickScheduler {
    pub fn new(settings: watch::Receiver<BotSettings>, tick_interval: Duration, logger: DynLogger) -> Self {
        Self {
            executors: Vec::new(),
            settings,
            tick_interval,
            logger,
        }
    }

    /// Appends an executor with lower priority than the ones already added.
    pub fn with_executor(mut self, executor: Arc<dyn LogicExecutor>) -> Self {
        self.executors.push(executor);
        self
    }

    pub async fn tick(&self) -> TickReport {
        let snapshot = self.settings.borrow().clone();

        for executor in &self.executors {
            match executor.execute_logic(&snapshot).await {
                Ok(true) => {
                    tracing::trace!(executor = executor.name(), "tick handled");
                    return TickReport::Handled {
                        executor: executor.name(),
                    };
                }
                Ok(false) => continue,
                Err(e) => {
                    self.logger.error(&tagged(executor.name(), format!("tick failed: {}", e)));
                    tracing::warn!(executor = executor.name(), error = %e, "tick abandoned");
                    return TickReport::Faulted {
                        executor: executor.name(),
                        error: e.to_string(),
                    };
                }
            }
        }

        TickReport::Idle
    }

    /// Ticks at the configured interval until `shutdown` turns true or its
    /// sender is dropped. Returns the number of ticks run.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> ApplicationResult<u64> {
        if self.tick_interval.is_zero() {
            return Err(ApplicationError::Scheduler("tick interval must be non-zero".to_string()));
        }

        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0u64;

        self.logger.info(&tagged(
            "TickScheduler",
            format!("running {} executor(s) every {:?}", self.executors.len(), self.tick_interval),
        ));

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    self.tick().await;
                    ticks += 1;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        self.logger.info(&tagged("TickScheduler", format!("stopped after {} tick(s)", ticks)));
        Ok(ticks)
    }
}
