use autofollow::adapters::outbound::{init_buffered_logger, init_combined_logger, Scenario, SimEntity, SimulatedWorld};
use autofollow::application::TickScheduler;
use autofollow::{
    AgentState, BattleCharacter, Config, FollowController, FollowPorts, GameObject, Location, ObjectId, ObjectType,
    PartyMember, PartyRole,
};
use rand::Rng;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

const LEADER_ID: ObjectId = ObjectId(0x1001);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load("config.toml")?;

    // Installed without the `log` bridge: fast_log may own the `log` facade.
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    let logger = init_buffered_logger(
        init_combined_logger(config.logging.file.as_deref()),
        config.logging.buffer_capacity,
    );

    info!("Starting autofollow");
    info!("Follow mode: {:?}, distance {}", config.bot.follow.follow_mode, config.bot.follow.follow_distance);

    let world = match &config.scenario {
        Some(path) => Arc::new(SimulatedWorld::from_file(path).await?),
        None => Arc::new(SimulatedWorld::new(demo_scenario())),
    };

    let controller = Arc::new(FollowController::new(FollowPorts::from_single(world.clone()), logger.clone()));

    let (_settings_tx, settings_rx) = watch::channel(config.bot.clone());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let scheduler =
        TickScheduler::new(settings_rx, config.scheduler.tick_interval(), logger.clone()).with_executor(controller);
    let scheduler_task = tokio::spawn(scheduler.run(shutdown_rx));

    let wander_world = world.clone();
    let wander_task = tokio::spawn(async move {
        let mut position = Location::new(8.0, 0.0, 0.0);
        loop {
            tokio::time::sleep(Duration::from_millis(750)).await;
            let (dx, dz) = {
                let mut rng = rand::thread_rng();
                (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0))
            };
            position = Location::new(position.x + dx, position.y, position.z + dz);
            wander_world.move_entity(LEADER_ID, position);
        }
    });

    tokio::signal::ctrl_c().await?;
    info!("Shutting down autofollow");

    shutdown_tx.send(true)?;
    wander_task.abort();
    match scheduler_task.await? {
        Ok(ticks) => info!("Scheduler ran {} ticks", ticks),
        Err(e) => error!("Scheduler failed: {}", e),
    }

    Ok(())
}

fn demo_scenario() -> Scenario {
    let leader = GameObject {
        id: LEADER_ID,
        name: "Party Leader".to_string(),
        object_type: ObjectType::Pc,
        location: Location::new(8.0, 0.0, 0.0),
    };

    Scenario {
        agent: AgentState {
            in_party: true,
            ..AgentState::default()
        },
        entities: vec![SimEntity::Character(BattleCharacter::new(leader))],
        party_leader: Some(PartyMember {
            id: LEADER_ID,
            name: "Party Leader".to_string(),
            role: PartyRole::Tank,
            in_object_manager: true,
        }),
        ..Scenario::default()
    }
}
