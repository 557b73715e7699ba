mod common;

use autofollow::adapters::outbound::{init_null_logger, IssuedCommand, Scenario, SimEntity, SimulatedWorld};
use autofollow::{
    resolve_fixed_character, resolve_party_leader, resolve_tank, resolve_target, AgentState, BattleCharacter,
    FixedCharacter, FollowController, FollowMode, FollowPorts, GameObject, Location, ObjectId, ObjectType, PartyRole,
    WorldState,
};
use common::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Delegates to the simulated world and counts object-table scans.
struct CountingWorld {
    inner: Arc<SimulatedWorld>,
    scans: AtomicUsize,
}

impl WorldState for CountingWorld {
    fn agent(&self) -> AgentState {
        self.inner.agent()
    }

    fn game_objects(&self) -> Vec<GameObject> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.game_objects()
    }

    fn battle_character(&self, id: ObjectId) -> Option<BattleCharacter> {
        self.inner.battle_character(id)
    }

    fn is_sprint_ready(&self) -> bool {
        self.inner.is_sprint_ready()
    }

    fn is_over_ground(&self, location: Location, clearance: f32) -> bool {
        self.inner.is_over_ground(location, clearance)
    }
}

fn crowd() -> Arc<SimulatedWorld> {
    let healer = character(2, "Healer", Location::new(4.0, 0.0, 0.0));
    let tank = character(3, "Tank", Location::new(8.0, 0.0, 0.0));
    let twin_a = character(10, "Twin", Location::new(20.0, 0.0, 0.0));
    let twin_b = character(11, "Twin", Location::new(30.0, 0.0, 0.0));
    let statue = GameObject {
        id: ObjectId(12),
        name: "Statue".to_string(),
        object_type: ObjectType::EventNpc,
        location: Location::new(5.0, 0.0, 5.0),
    };

    Arc::new(SimulatedWorld::new(Scenario {
        agent: AgentState {
            in_party: true,
            ..AgentState::default()
        },
        party_leader: Some(member(&healer, PartyRole::Healer)),
        party_members: vec![member(&healer, PartyRole::Healer), member(&tank, PartyRole::Tank)],
        entities: vec![
            SimEntity::Character(healer),
            SimEntity::Character(tank),
            SimEntity::Character(twin_a),
            SimEntity::Character(twin_b),
            SimEntity::Object(statue),
        ],
        ..Scenario::default()
    }))
}

fn selector(name: &str, identity: &str) -> FixedCharacter {
    FixedCharacter {
        name: name.to_string(),
        object_type: ObjectType::Pc,
        identity: identity.to_string(),
    }
}

#[test]
fn party_leader_requires_party_membership() {
    let world = crowd();
    assert_eq!(resolve_party_leader(&*world, &*world).unwrap().id(), ObjectId(2));

    world.update_agent(|agent| agent.in_party = false);
    assert!(resolve_party_leader(&*world, &*world).is_none());
}

#[test]
fn absent_party_leader_resolves_to_none() {
    let world = Arc::new(SimulatedWorld::new(Scenario {
        agent: AgentState {
            in_party: true,
            ..AgentState::default()
        },
        party_leader: Some(autofollow::PartyMember {
            id: ObjectId(2),
            name: "Far Away".to_string(),
            role: PartyRole::Dps,
            in_object_manager: false,
        }),
        ..Scenario::default()
    }));

    assert!(resolve_party_leader(&*world, &*world).is_none());
}

#[test]
fn tank_is_first_visible_tank() {
    let world = crowd();
    let tank = resolve_tank(&*world, &*world).unwrap();
    assert_eq!(tank.name(), "Tank");
}

#[tokio::test]
async fn no_tank_in_party_means_no_action() {
    let healer = character(2, "Healer", Location::new(10.0, 0.0, 0.0));
    let world = Arc::new(SimulatedWorld::new(Scenario {
        agent: AgentState {
            in_party: true,
            ..AgentState::default()
        },
        party_members: vec![member(&healer, PartyRole::Healer)],
        entities: vec![SimEntity::Character(healer)],
        ..Scenario::default()
    }));

    assert!(resolve_tank(&*world, &*world).is_none());
    assert!(!controller(&world).execute_logic(&settings(FollowMode::Tank)).await.unwrap());
    assert!(world.commands().is_empty());
}

#[tokio::test]
async fn tank_mode_follows_the_tank() {
    let world = crowd();

    assert!(controller(&world).execute_logic(&settings(FollowMode::Tank)).await.unwrap());
    assert_eq!(world.commands(), vec![IssuedCommand::MoveTowards(Location::new(8.0, 0.0, 0.0))]);
}

#[test]
fn fixed_character_prefers_exact_identity() {
    let world = crowd();
    let twin_b = world.battle_character(ObjectId(11)).unwrap();

    let found = resolve_fixed_character(&*world, &selector("Twin", &twin_b.object.identity())).unwrap();
    assert_eq!(found.id(), ObjectId(11));
}

#[test]
fn fixed_character_falls_back_to_name_and_type() {
    let world = crowd();

    let found = resolve_fixed_character(&*world, &selector("Twin", "stale identity")).unwrap();
    assert_eq!(found.id(), ObjectId(10));

    let mut wrong_type = selector("Twin", "");
    wrong_type.object_type = ObjectType::BattleNpc;
    assert!(resolve_fixed_character(&*world, &wrong_type).is_none());
}

#[test]
fn fixed_character_must_be_a_battle_character() {
    let world = crowd();
    let mut statue = selector("Statue", "");
    statue.object_type = ObjectType::EventNpc;

    assert!(resolve_fixed_character(&*world, &statue).is_none());
}

#[tokio::test]
async fn empty_fixed_name_skips_lookup() {
    let sim = crowd();
    let counting = Arc::new(CountingWorld {
        inner: sim.clone(),
        scans: AtomicUsize::new(0),
    });
    let ports = FollowPorts {
        world: counting.clone(),
        ..FollowPorts::from_single(sim.clone())
    };
    let controller = FollowController::new(ports, init_null_logger());

    let mut settings = settings(FollowMode::FixedCharacter);
    settings.follow.fixed_character = selector("", "Twin [Pc] 0x0000000A");

    assert!(!controller.execute_logic(&settings).await.unwrap());
    assert_eq!(counting.scans.load(Ordering::SeqCst), 0);
    assert!(sim.commands().is_empty());

    settings.follow.fixed_character = selector("Twin", "");
    assert!(controller.execute_logic(&settings).await.unwrap());
    assert_eq!(counting.scans.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn target_mode_follows_current_target() {
    let world = crowd();
    assert!(resolve_target(&*world).is_none());
    assert!(!controller(&world)
        .execute_logic(&settings(FollowMode::TargetedCharacter))
        .await
        .unwrap());

    world.update_agent(|agent| agent.target = Some(ObjectId(11)));
    assert!(controller(&world)
        .execute_logic(&settings(FollowMode::TargetedCharacter))
        .await
        .unwrap());
    assert_eq!(world.commands(), vec![IssuedCommand::MoveTowards(Location::new(30.0, 0.0, 0.0))]);
}

#[test]
fn target_that_is_not_a_battle_character_is_ignored() {
    let world = crowd();
    world.update_agent(|agent| agent.target = Some(ObjectId(12)));

    assert!(resolve_target(&*world).is_none());
}
