use crate::common::{DomainError, DomainResult, Location};
use crate::domains::follow::{
    ActionExecutor, AgentState, AvoidanceMonitor, BattleCharacter, GameObject, Navigator, ObjectId, PartyMember,
    PartyState, WorldState,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Movement-affecting command as observed by the simulated world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IssuedCommand {
    Sprint,
    MountUp,
    StopAndDismount,
    TakeOff,
    MoveTowards(Location),
    MoveAndStop { location: Location, stop_distance: f32 },
    FlightMoveTo(Location),
    MoveStop,
}

impl IssuedCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            IssuedCommand::Sprint => CommandKind::Sprint,
            IssuedCommand::MountUp => CommandKind::MountUp,
            IssuedCommand::StopAndDismount => CommandKind::StopAndDismount,
            IssuedCommand::TakeOff => CommandKind::TakeOff,
            IssuedCommand::MoveTowards(_) => CommandKind::MoveTowards,
            IssuedCommand::MoveAndStop { .. } => CommandKind::MoveAndStop,
            IssuedCommand::FlightMoveTo(_) => CommandKind::FlightMoveTo,
            IssuedCommand::MoveStop => CommandKind::MoveStop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Sprint,
    MountUp,
    StopAndDismount,
    TakeOff,
    MoveTowards,
    MoveAndStop,
    FlightMoveTo,
    MoveStop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum SimEntity {
    Object(GameObject),
    Character(BattleCharacter),
}

impl SimEntity {
    fn object(&self) -> &GameObject {
        match self {
            SimEntity::Object(obj) => obj,
            SimEntity::Character(character) => &character.object,
        }
    }

    fn object_mut(&mut self) -> &mut GameObject {
        match self {
            SimEntity::Object(obj) => obj,
            SimEntity::Character(character) => &mut character.object,
        }
    }
}

/// Initial state of a simulated world, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub agent: AgentState,
    pub entities: Vec<SimEntity>,
    pub party_leader: Option<PartyMember>,
    pub party_members: Vec<PartyMember>,
    pub avoiding: bool,
    pub sprint_ready: bool,
    pub ground_height: f32,
    /// Distance covered by one movement command.
    pub move_speed: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            agent: AgentState::default(),
            entities: Vec::new(),
            party_leader: None,
            party_members: Vec::new(),
            avoiding: false,
            sprint_ready: true,
            ground_height: 0.0,
            move_speed: 6.0,
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// In-memory stand-in for the game. Implements every follow port, records the
/// commands it receives and applies a rough version of their effects.
pub struct SimulatedWorld {
    state: Mutex<Scenario>,
    commands: Mutex<Vec<IssuedCommand>>,
    failures: Mutex<HashSet<CommandKind>>,
}

impl SimulatedWorld {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            state: Mutex::new(scenario),
            commands: Mutex::new(Vec::new()),
            failures: Mutex::new(HashSet::new()),
        }
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(Self::new(Scenario::from_json(json)?))
    }

    pub async fn from_file(path: &str) -> DomainResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::InfrastructureError(format!("Failed to read scenario {}: {}", path, e)))?;
        Self::from_json(&content)
    }

    pub fn agent_state(&self) -> AgentState {
        self.state().agent.clone()
    }

    pub fn update_agent(&self, f: impl FnOnce(&mut AgentState)) {
        f(&mut self.state().agent);
    }

    /// Applies `f` to the battle character `id`. Returns false if there is none.
    pub fn update_character(&self, id: ObjectId, f: impl FnOnce(&mut BattleCharacter)) -> bool {
        let mut state = self.state();
        let found = state.entities.iter_mut().find_map(|entity| match entity {
            SimEntity::Character(character) if character.object.id == id => Some(character),
            _ => None,
        });
        match found {
            Some(character) => {
                f(character);
                true
            }
            None => false,
        }
    }

    pub fn move_entity(&self, id: ObjectId, location: Location) -> bool {
        let mut state = self.state();
        match state.entities.iter_mut().find(|entity| entity.object().id == id) {
            Some(entity) => {
                entity.object_mut().location = location;
                true
            }
            None => false,
        }
    }

    pub fn set_avoiding(&self, avoiding: bool) {
        self.state().avoiding = avoiding;
    }

    pub fn set_sprint_ready(&self, ready: bool) {
        self.state().sprint_ready = ready;
    }

    /// Makes the next command of `kind` fail with a collaborator error.
    pub fn fail_next(&self, kind: CommandKind) {
        lock(&self.failures).insert(kind);
    }

    pub fn commands(&self) -> Vec<IssuedCommand> {
        lock(&self.commands).clone()
    }

    pub fn take_commands(&self) -> Vec<IssuedCommand> {
        std::mem::take(&mut *lock(&self.commands))
    }

    fn state(&self) -> MutexGuard<'_, Scenario> {
        lock(&self.state)
    }

    fn issue(&self, command: IssuedCommand) -> DomainResult<()> {
        let kind = command.kind();
        if lock(&self.failures).remove(&kind) {
            return Err(DomainError::collaborator(
                format!("{:?}", kind),
                "injected failure",
            ));
        }
        tracing::trace!(?command, "simulated command");
        lock(&self.commands).push(command);
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl WorldState for SimulatedWorld {
    fn agent(&self) -> AgentState {
        self.agent_state()
    }

    fn game_objects(&self) -> Vec<GameObject> {
        self.state().entities.iter().map(|entity| entity.object().clone()).collect()
    }

    fn battle_character(&self, id: ObjectId) -> Option<BattleCharacter> {
        self.state().entities.iter().find_map(|entity| match entity {
            SimEntity::Character(character) if character.object.id == id => Some(character.clone()),
            _ => None,
        })
    }

    fn is_sprint_ready(&self) -> bool {
        self.state().sprint_ready
    }

    fn is_over_ground(&self, location: Location, clearance: f32) -> bool {
        location.y - self.state().ground_height > clearance
    }
}

impl PartyState for SimulatedWorld {
    fn leader(&self) -> Option<PartyMember> {
        self.state().party_leader.clone()
    }

    fn visible_members(&self) -> Vec<PartyMember> {
        self.state()
            .party_members
            .iter()
            .filter(|member| member.in_object_manager)
            .cloned()
            .collect()
    }
}

impl AvoidanceMonitor for SimulatedWorld {
    fn is_running_out_of_avoid(&self) -> bool {
        self.state().avoiding
    }
}

#[async_trait]
impl ActionExecutor for SimulatedWorld {
    fn sprint(&self) -> DomainResult<()> {
        self.issue(IssuedCommand::Sprint)?;
        self.state().sprint_ready = false;
        Ok(())
    }

    async fn mount_up(&self) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.issue(IssuedCommand::MountUp)?;
        self.state().agent.is_mounted = true;
        Ok(())
    }

    async fn stop_and_dismount(&self) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.issue(IssuedCommand::StopAndDismount)?;
        let mut state = self.state();
        state.agent.is_mounted = false;
        state.agent.is_flying = false;
        Ok(())
    }

    async fn take_off(&self) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.issue(IssuedCommand::TakeOff)?;
        self.state().agent.is_flying = true;
        Ok(())
    }
}

#[async_trait]
impl Navigator for SimulatedWorld {
    fn move_towards(&self, location: Location) -> DomainResult<()> {
        self.issue(IssuedCommand::MoveTowards(location))?;
        let mut state = self.state();
        let speed = state.move_speed;
        state.agent.location = state.agent.location.step_towards(&location, speed);
        Ok(())
    }

    async fn move_and_stop(
        &self,
        location: Location,
        stop_distance: f32,
        _stop_in_range: bool,
        status: &str,
    ) -> DomainResult<()> {
        tokio::task::yield_now().await;
        self.issue(IssuedCommand::MoveAndStop { location, stop_distance })?;
        tracing::trace!(status, "simulated graph navigation");

        let mut state = self.state();
        let remaining = state.agent.location.distance_2d(&location) - stop_distance;
        if remaining > 0.0 {
            let step = remaining.min(state.move_speed);
            state.agent.location = state.agent.location.step_towards(&location, step);
        }
        Ok(())
    }

    fn flight_move_to(&self, location: Location) -> DomainResult<()> {
        self.issue(IssuedCommand::FlightMoveTo(location))?;
        let mut state = self.state();
        let speed = state.move_speed;
        state.agent.location = state.agent.location.step_towards(&location, speed);
        Ok(())
    }

    fn move_stop(&self) -> DomainResult<()> {
        self.issue(IssuedCommand::MoveStop)
    }
}
