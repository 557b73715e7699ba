use super::ports::FollowPorts;
use super::resolvers;
use super::types::BattleCharacter;
use crate::common::{DomainResult, LogicExecutor};
use crate::domains::logger::DynLogger;
use crate::domains::settings::{BotSettings, FollowMode};
use async_trait::async_trait;

/// Keeps the agent close to a reference entity chosen by the follow mode.
///
/// The controller holds no state between ticks. Each call to
/// [`FollowController::execute_logic`] re-reads the settings snapshot and the
/// world, resolves at most one reference entity and issues at most one
/// movement command for it.
pub struct FollowController {
    pub(super) ports: FollowPorts,
    pub(super) logger: DynLogger,
}

impl FollowController {
    pub fn new(ports: FollowPorts, logger: DynLogger) -> Self {
        Self { ports, logger }
    }

    pub async fn execute_logic(&self, settings: &BotSettings) -> DomainResult<bool> {
        if settings.paused {
            return Ok(false);
        }

        if !self.should_execute_auto_movement(settings) {
            return Ok(false);
        }

        if self.ports.avoidance.is_running_out_of_avoid() {
            tracing::trace!("avoidance active, holding the tick");
            return Ok(true);
        }

        let reference = match settings.follow.follow_mode {
            FollowMode::None => None,
            FollowMode::PartyLeader => self.follow_party_leader(),
            FollowMode::FixedCharacter => self.follow_fixed_character(settings),
            FollowMode::Tank => self.follow_tank(),
            FollowMode::TargetedCharacter => self.follow_target(),
        };

        match reference {
            Some(reference) => self.perform_follow_logic(settings, &reference).await,
            None => Ok(false),
        }
    }

    pub fn should_execute_auto_movement(&self, settings: &BotSettings) -> bool {
        settings.follow.enable_following
    }

    fn follow_party_leader(&self) -> Option<BattleCharacter> {
        resolvers::resolve_party_leader(self.ports.world.as_ref(), self.ports.party.as_ref())
    }

    fn follow_fixed_character(&self, settings: &BotSettings) -> Option<BattleCharacter> {
        resolvers::resolve_fixed_character(self.ports.world.as_ref(), &settings.follow.fixed_character)
    }

    fn follow_tank(&self) -> Option<BattleCharacter> {
        resolvers::resolve_tank(self.ports.world.as_ref(), self.ports.party.as_ref())
    }

    fn follow_target(&self) -> Option<BattleCharacter> {
        resolvers::resolve_target(self.ports.world.as_ref())
    }
}

#[async_trait]
impl LogicExecutor for FollowController {
    fn name(&self) -> &'static str {
        "Movement"
    }

    async fn execute_logic(&self, settings: &BotSettings) -> DomainResult<bool> {
        FollowController::execute_logic(self, settings).await
    }
}
