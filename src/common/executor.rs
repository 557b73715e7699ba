use crate::common::DomainResult;
use crate::domains::settings::BotSettings;
use async_trait::async_trait;

/// A unit of bot logic run once per control tick.
///
/// `execute_logic` returns `true` when it acted (or wants to claim the tick),
/// which tells the scheduler to skip lower-priority executors for that tick.
#[async_trait]
pub trait LogicExecutor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute_logic(&self, settings: &BotSettings) -> DomainResult<bool>;
}
