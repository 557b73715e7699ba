use crate::domains::follow::types::ObjectType;
use serde::{Deserialize, Serialize};

/// Which entity the agent keeps close to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FollowMode {
    #[default]
    None,
    PartyLeader,
    FixedCharacter,
    Tank,
    TargetedCharacter,
}

/// Selector for `FollowMode::FixedCharacter`.
///
/// `identity` is the exact formatted identity of a previously seen object (see
/// `GameObject::identity`) and wins over the looser `(name, object_type)` match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedCharacter {
    pub name: String,
    pub object_type: ObjectType,
    pub identity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSettings {
    pub enable_following: bool,
    pub follow_mode: FollowMode,
    pub follow_distance: f32,
    pub fixed_character: FixedCharacter,
    pub use_nav_graph: bool,
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            enable_following: true,
            follow_mode: FollowMode::PartyLeader,
            follow_distance: 3.0,
            fixed_character: FixedCharacter::default(),
            use_nav_graph: true,
        }
    }
}

/// Read-only snapshot of the bot-wide settings, taken once per tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    pub paused: bool,
    pub follow: FollowSettings,
}
