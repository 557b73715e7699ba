#![allow(dead_code)]

use autofollow::adapters::outbound::{init_null_logger, Scenario, SimEntity, SimulatedWorld};
use autofollow::{
    AgentState, BattleCharacter, BotSettings, DomainLogger, FollowController, FollowMode, FollowPorts, FollowSettings,
    GameObject, Location, ObjectId, ObjectType, PartyMember, PartyRole,
};
use std::sync::{Arc, Mutex};

pub const LEADER: ObjectId = ObjectId(1);

pub fn character(id: u32, name: &str, location: Location) -> BattleCharacter {
    BattleCharacter::new(GameObject {
        id: ObjectId(id),
        name: name.to_string(),
        object_type: ObjectType::Pc,
        location,
    })
}

pub fn member(character: &BattleCharacter, role: PartyRole) -> PartyMember {
    PartyMember {
        id: character.id(),
        name: character.name().to_string(),
        role,
        in_object_manager: true,
    }
}

/// Agent at the origin, in a party led by `leader`.
pub fn party_world(leader: BattleCharacter) -> Arc<SimulatedWorld> {
    let leader_member = member(&leader, PartyRole::Tank);
    Arc::new(SimulatedWorld::new(Scenario {
        agent: AgentState {
            in_party: true,
            ..AgentState::default()
        },
        party_leader: Some(leader_member.clone()),
        party_members: vec![leader_member],
        entities: vec![SimEntity::Character(leader)],
        ..Scenario::default()
    }))
}

pub fn leader_at(x: f32, y: f32) -> BattleCharacter {
    character(LEADER.0, "Leader", Location::new(x, y, 0.0))
}

pub fn settings(mode: FollowMode) -> BotSettings {
    BotSettings {
        paused: false,
        follow: FollowSettings {
            enable_following: true,
            follow_mode: mode,
            follow_distance: 3.0,
            use_nav_graph: false,
            ..FollowSettings::default()
        },
    }
}

pub fn controller(world: &Arc<SimulatedWorld>) -> FollowController {
    FollowController::new(FollowPorts::from_single(world.clone()), init_null_logger())
}

pub struct CaptureLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.lock().unwrap().iter().any(|m| m.contains(needle))
    }
}

impl DomainLogger for CaptureLogger {
    fn info(&self, msg: &str) { self.messages.lock().unwrap().push(format!("INFO:{}", msg)); }
    fn warn(&self, msg: &str) { self.messages.lock().unwrap().push(format!("WARN:{}", msg)); }
    fn error(&self, msg: &str) { self.messages.lock().unwrap().push(format!("ERR:{}", msg)); }
}
