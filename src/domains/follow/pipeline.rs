//! Follow preconditions, evaluated in priority order: sprint, mount/dismount,
//! take-off, then navigate or stop. The first stage that acts ends the tick.

use super::controller::FollowController;
use super::types::{
    AgentState, BattleCharacter, FOLLOW_DISTANCE_TOLERANCE, MOUNT_ACTION, SPRINT_STATUS, TAKEOFF_ELEVATION,
};
use crate::common::DomainResult;
use crate::domains::logger::tagged;
use crate::domains::settings::BotSettings;

const NAVIGATION_STATUS: &str = "Following selected target";

impl FollowController {
    pub async fn perform_follow_logic(&self, settings: &BotSettings, reference: &BattleCharacter) -> DomainResult<bool> {
        let me = self.ports.world.agent();

        if self.perform_auto_sprint(reference)? {
            return Ok(true);
        }

        if self.perform_mount_dismount(settings, &me, reference).await? {
            return Ok(true);
        }

        if self.perform_flight_take_off(&me, reference).await? {
            return Ok(true);
        }

        let distance = me.location.distance_2d(&reference.location());
        if distance > follow_range(settings) && self.perform_navigation(settings, &me, reference).await? {
            return Ok(true);
        }

        self.ports.navigator.move_stop()?;
        Ok(false)
    }

    fn perform_auto_sprint(&self, reference: &BattleCharacter) -> DomainResult<bool> {
        if reference.has_status(SPRINT_STATUS) && self.ports.world.is_sprint_ready() {
            self.logger.info(&tagged("perform_auto_sprint", "Sprinting..."));
            self.ports.actions.sprint()?;
            return Ok(true);
        }

        Ok(false)
    }

    async fn perform_mount_dismount(
        &self,
        settings: &BotSettings,
        me: &AgentState,
        reference: &BattleCharacter,
    ) -> DomainResult<bool> {
        let casting_mount = reference.is_casting && reference.casting_spell_id == MOUNT_ACTION;
        if reference.is_mounted == me.is_mounted && !casting_mount {
            return Ok(false);
        }

        // The mount-up check reads the casting id without the casting flag.
        if !me.in_combat && (reference.is_mounted || reference.casting_spell_id == MOUNT_ACTION) {
            self.logger.info(&tagged("perform_mount_dismount", "Mounting..."));
            self.ports.actions.mount_up().await?;
            return Ok(true);
        }

        let distance = me.location.distance_2d(&reference.location());
        let range = follow_range(settings);
        if distance <= range {
            self.logger.info(&tagged(
                "perform_mount_dismount",
                format!("Dismounting, {:.2} <= {:.2}...", distance, range),
            ));
            self.ports.actions.stop_and_dismount().await?;
            return Ok(true);
        }

        Ok(false)
    }

    pub async fn perform_flight_take_off(&self, me: &AgentState, reference: &BattleCharacter) -> DomainResult<bool> {
        if me.is_flying {
            return Ok(false);
        }

        let location = reference.location();
        let airborne = reference.is_mounted && self.ports.world.is_over_ground(location, TAKEOFF_ELEVATION);
        let above = location.y > me.location.y + TAKEOFF_ELEVATION;
        if !(airborne || above) {
            return Ok(false);
        }

        tracing::debug!(reference = %reference.name(), "reference is airborne, taking off");
        self.ports.actions.take_off().await?;
        Ok(true)
    }

    pub async fn perform_navigation(
        &self,
        settings: &BotSettings,
        me: &AgentState,
        reference: &BattleCharacter,
    ) -> DomainResult<bool> {
        let location = reference.location();

        if !settings.follow.use_nav_graph {
            self.ports.navigator.move_towards(location)?;
            return Ok(true);
        }

        if !me.is_flying && !me.is_diving {
            self.ports
                .navigator
                .move_and_stop(location, settings.follow.follow_distance, true, NAVIGATION_STATUS)
                .await?;
        } else {
            self.ports.navigator.flight_move_to(location)?;
        }

        Ok(true)
    }
}

fn follow_range(settings: &BotSettings) -> f32 {
    settings.follow.follow_distance + FOLLOW_DISTANCE_TOLERANCE
}
