use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::assets::AssetCatalog;
use crate::collision::{self, ObjectOutcome};
use crate::components::{Controls, FallingObject, Input, Session};
use crate::difficulty::{self, DifficultyTier};
use crate::game::SCREEN_HEIGHT;
use crate::motion;
use crate::rng::GameRng;
use crate::spawner::{self, SpawnTimer};

/// Replaces any running session with a fresh one at `tier`
pub fn start_session(world: &mut World, tier: DifficultyTier) {
    clear_objects(world);
    world.insert_resource(Session::new(tier));
    if let Some(mut timer) = world.get_resource_mut::<SpawnTimer>() {
        timer.rearm(tier.spawn_interval_ms());
    } else {
        world.insert_resource(SpawnTimer::for_tier(tier));
    }
    world.insert_resource(Input::default());
    info!(
        "Session started on {tier} (spawn every {} ms)",
        tier.spawn_interval_ms()
    );
}

/// Despawns every falling object
pub fn clear_objects(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<FallingObject>>()
        .iter(world)
        .collect();
    for entity in entities {
        world.despawn(entity);
    }
}

/// Snapshot of all live objects, in no particular order
pub fn objects(world: &mut World) -> Vec<FallingObject> {
    world
        .query::<&FallingObject>()
        .iter(world)
        .copied()
        .collect()
}

pub fn input_system(world: &mut World) {
    let input = world.resource::<Input>().clone();
    let controls = world.resource::<Controls>().clone();

    let Some(mut session) = world.get_resource_mut::<Session>() else {
        return;
    };

    motion::steer(
        &mut session.catcher,
        &input,
        controls.horizontal,
        controls.move_speed,
    );

    if input.jump && motion::trigger_jump(&mut session.catcher) {
        trace!("Jump at x={}", session.catcher.x);
    }
}

pub fn motion_system(world: &mut World) {
    if let Some(mut session) = world.get_resource_mut::<Session>() {
        motion::advance_jump(&mut session.catcher);
    }
}

/// Moves every object and resolves catches and escapes. Returns the catch count.
pub fn collision_system(world: &mut World) -> u32 {
    let (tier, catcher_box) = {
        let Some(session) = world.get_resource::<Session>() else {
            return 0;
        };
        let assets = world.resource::<AssetCatalog>();
        (session.tier, session.catcher.basket_box(assets))
    };

    let mut caught = Vec::new();
    let mut escaped = Vec::new();

    world.resource_scope::<GameRng, _>(|world, mut rng| {
        let mut query = world.query::<(Entity, &mut FallingObject)>();
        for (entity, mut object) in query.iter_mut(world) {
            let speed = difficulty::sample_speed(tier, &mut *rng.0);
            match collision::resolve_object(&mut object, speed, &catcher_box, SCREEN_HEIGHT) {
                ObjectOutcome::Caught => caught.push(entity),
                ObjectOutcome::Escaped => escaped.push(entity),
                ObjectOutcome::Falling => {}
            }
        }
    });

    for entity in escaped {
        world.despawn(entity);
    }

    let catches = u32::try_from(caught.len()).unwrap_or(u32::MAX);
    for entity in caught {
        world.despawn(entity);
    }

    if catches > 0 {
        let mut session = world.resource_mut::<Session>();
        session.score = session.score.saturating_add(catches);
        debug!("Caught {catches}, score is now {}", session.score);
    }

    catches
}

/// Advances the spawn timer and adds objects for each firing.
///
/// Firings outside of active play are dropped; the timer keeps its phase.
pub fn spawn_system(world: &mut World, delta_ms: u64, playing: bool) -> u32 {
    let fired = match world.get_resource_mut::<SpawnTimer>() {
        Some(mut timer) => timer.advance(delta_ms),
        None => return 0,
    };

    if fired == 0 {
        return 0;
    }
    if !playing || !world.contains_resource::<Session>() {
        trace!("Suppressed {fired} spawn(s) outside of play");
        return 0;
    }

    let assets = world.resource::<AssetCatalog>().clone();
    let new_objects: Vec<FallingObject> = {
        let mut rng = world.resource_mut::<GameRng>();
        (0..fired)
            .map(|_| spawner::spawn_object(&mut *rng.0, &assets))
            .collect()
    };

    for object in new_objects {
        world.spawn(object);
    }

    fired
}

/// One frame of gameplay
pub fn game_tick_system(world: &mut World, delta_ms: u64, playing: bool) {
    if playing {
        input_system(world);
        motion_system(world);
        collision_system(world);
    }
    spawn_system(world, delta_ms, playing);
}
