use crate::common::Location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActionId(pub u32);

/// Status effect granted by the sprint ability.
pub const SPRINT_STATUS: StatusId = StatusId(50);

/// General action used to summon a mount.
pub const MOUNT_ACTION: ActionId = ActionId(9);

/// Slack added to the follow distance before the agent reacts to range.
pub const FOLLOW_DISTANCE_TOLERANCE: f32 = 0.5;

/// Height gap that makes the agent take off after its reference entity.
pub const TAKEOFF_ELEVATION: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ObjectType {
    #[default]
    Pc,
    BattleNpc,
    EventNpc,
    Treasure,
    Other,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ObjectType::Pc => "Pc",
            ObjectType::BattleNpc => "BattleNpc",
            ObjectType::EventNpc => "EventNpc",
            ObjectType::Treasure => "Treasure",
            ObjectType::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub name: String,
    pub object_type: ObjectType,
    pub location: Location,
}

impl GameObject {
    /// Stable formatted identity used to pin a fixed character.
    pub fn identity(&self) -> String {
        format!("{} [{}] 0x{:08X}", self.name, self.object_type, self.id.0)
    }
}

/// View of a battle-capable character. This is what the agent follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleCharacter {
    pub object: GameObject,
    #[serde(default)]
    pub is_mounted: bool,
    #[serde(default)]
    pub is_casting: bool,
    #[serde(default)]
    pub casting_spell_id: ActionId,
    #[serde(default)]
    pub statuses: Vec<StatusId>,
}

impl BattleCharacter {
    pub fn new(object: GameObject) -> Self {
        Self {
            object,
            is_mounted: false,
            is_casting: false,
            casting_spell_id: ActionId::default(),
            statuses: Vec::new(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.object.id
    }

    pub fn name(&self) -> &str {
        &self.object.name
    }

    pub fn location(&self) -> Location {
        self.object.location
    }

    pub fn has_status(&self, status: StatusId) -> bool {
        self.statuses.contains(&status)
    }
}

/// Snapshot of the controlled entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentState {
    pub location: Location,
    pub is_mounted: bool,
    pub is_flying: bool,
    pub is_diving: bool,
    pub in_combat: bool,
    pub in_party: bool,
    pub is_party_leader: bool,
    pub target: Option<ObjectId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyRole {
    Tank,
    Healer,
    Dps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMember {
    pub id: ObjectId,
    pub name: String,
    pub role: PartyRole,
    /// Whether the member is currently present in the observable world.
    #[serde(default = "default_present")]
    pub in_object_manager: bool,
}

fn default_present() -> bool {
    true
}

impl PartyMember {
    pub fn is_tank(&self) -> bool {
        self.role == PartyRole::Tank
    }
}
