use super::types::{AgentState, BattleCharacter, GameObject, ObjectId, PartyMember};
use crate::common::{DomainResult, Location};
use async_trait::async_trait;
use std::sync::Arc;

/// Port for reading the agent's surroundings. Every call is a fresh snapshot.
pub trait WorldState: Send + Sync {
    fn agent(&self) -> AgentState;
    fn game_objects(&self) -> Vec<GameObject>;
    /// `None` when the object is unknown or not a battle character.
    fn battle_character(&self, id: ObjectId) -> Option<BattleCharacter>;
    fn is_sprint_ready(&self) -> bool;
    /// True when there is no ground within `clearance` units below `location`.
    fn is_over_ground(&self, location: Location, clearance: f32) -> bool;
}

pub trait PartyState: Send + Sync {
    fn leader(&self) -> Option<PartyMember>;
    fn visible_members(&self) -> Vec<PartyMember>;
}

pub trait AvoidanceMonitor: Send + Sync {
    /// Set while the avoidance system is dodging a hazard.
    fn is_running_out_of_avoid(&self) -> bool;
}

/// Action primitives. The async ones suspend the tick until the game has
/// finished (or given up on) the action.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    fn sprint(&self) -> DomainResult<()>;
    async fn mount_up(&self) -> DomainResult<()>;
    async fn stop_and_dismount(&self) -> DomainResult<()>;
    async fn take_off(&self) -> DomainResult<()>;
}

#[async_trait]
pub trait Navigator: Send + Sync {
    fn move_towards(&self, location: Location) -> DomainResult<()>;

    /// Graph-backed approach that stops once within `stop_distance`.
    async fn move_and_stop(
        &self,
        location: Location,
        stop_distance: f32,
        stop_in_range: bool,
        status: &str,
    ) -> DomainResult<()>;

    fn flight_move_to(&self, location: Location) -> DomainResult<()>;
    fn move_stop(&self) -> DomainResult<()>;
}

/// Bundle of collaborators the follow controller depends on.
#[derive(Clone)]
pub struct FollowPorts {
    pub world: Arc<dyn WorldState>,
    pub party: Arc<dyn PartyState>,
    pub avoidance: Arc<dyn AvoidanceMonitor>,
    pub actions: Arc<dyn ActionExecutor>,
    pub navigator: Arc<dyn Navigator>,
}

impl FollowPorts {
    /// Wires every port to the same adapter, which is how the simulated world
    /// and most game bridges are shaped.
    pub fn from_single<T>(adapter: Arc<T>) -> Self
    where
        T: WorldState + PartyState + AvoidanceMonitor + ActionExecutor + Navigator + 'static,
    {
        Self {
            world: adapter.clone(),
            party: adapter.clone(),
            avoidance: adapter.clone(),
            actions: adapter.clone(),
            navigator: adapter,
        }
    }
}
