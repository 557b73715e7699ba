//! Reference-entity lookups, one per follow mode.
//!
//! Resolvers only read world and party state. A `None` result is the normal
//! "nothing to follow this tick" outcome, not an error.

use super::ports::{PartyState, WorldState};
use super::types::BattleCharacter;
use crate::domains::settings::FixedCharacter;

pub fn resolve_party_leader(world: &dyn WorldState, party: &dyn PartyState) -> Option<BattleCharacter> {
    let me = world.agent();
    if !me.in_party || me.is_party_leader {
        return None;
    }

    let leader = party.leader()?;
    if !leader.in_object_manager {
        return None;
    }

    world.battle_character(leader.id)
}

pub fn resolve_fixed_character(world: &dyn WorldState, selector: &FixedCharacter) -> Option<BattleCharacter> {
    if selector.name.is_empty() {
        return None;
    }

    let objects = world.game_objects();
    let found = objects
        .iter()
        .find(|obj| obj.identity() == selector.identity)
        .or_else(|| {
            objects
                .iter()
                .find(|obj| obj.name == selector.name && obj.object_type == selector.object_type)
        })?;

    world.battle_character(found.id)
}

pub fn resolve_tank(world: &dyn WorldState, party: &dyn PartyState) -> Option<BattleCharacter> {
    if !world.agent().in_party {
        return None;
    }

    let tank = party.visible_members().into_iter().find(|member| member.is_tank())?;
    world.battle_character(tank.id)
}

pub fn resolve_target(world: &dyn WorldState) -> Option<BattleCharacter> {
    let target = world.agent().target?;
    world.battle_character(target)
}
