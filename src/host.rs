//! Host assembly.
//!
//! Builds the scenes from a [`HostConfig`], inserts the host resources into
//! an ECS [`World`], registers the observers and returns the per-frame
//! [`Schedule`]. The binary and the integration tests share these helpers.
//!
//! A frame is driven the same way as any other bevy_ecs loop:
//!
//! ```ignore
//! update_world_time(&mut world, delta);
//! schedule.run(&mut world);
//! world.clear_trackers();
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;

use crate::error::Result;
use crate::events::resize::resize_observer;
use crate::events::switchscene::switch_scene_observer;
use crate::resources::framestats::FrameStats;
use crate::resources::hostconfig::HostConfig;
use crate::resources::scenehost::SceneHost;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::scenes::SceneKind;
use crate::scenes::composition::{COMPOSITION_SCENE_NAME, CompositionScene, FixedAdvance};
use crate::scenes::deck::{DECK_SCENE_NAME, DeckScene};
use crate::scenes::fire::{FIRE_SCENE_NAME, FireScene};
use crate::systems::framestats::update_frame_stats;
use crate::systems::scenes::update_active_scene;

/// Display name of the scene behind a short configuration key.
pub fn scene_name_for_key(key: &str) -> Option<&'static str> {
    match key {
        "deck" => Some(DECK_SCENE_NAME),
        "fire" => Some(FIRE_SCENE_NAME),
        "composition" => Some(COMPOSITION_SCENE_NAME),
        _ => None,
    }
}

/// Build every scene in registration order: deck, fire, composition.
///
/// With a seed, the random scenes are reproducible; each one gets its own
/// stream derived from the seed.
pub fn build_scenes(config: &HostConfig, seed: Option<u64>) -> Result<Vec<SceneKind>> {
    let frames_per_ms = config.frames_per_ms();
    let rng_for = |stream: u64| match seed {
        Some(seed) => Rng::with_seed(seed.wrapping_add(stream)),
        None => Rng::new(),
    };

    let deck = DeckScene::new(config.deck.clone(), frames_per_ms)?;
    let fire = FireScene::with_rng(config.fire.clone(), frames_per_ms, rng_for(0))?;
    let composition = CompositionScene::with_parts(
        config.composition.clone(),
        frames_per_ms,
        Box::new(FixedAdvance::default()),
        rng_for(1),
    )?;
    info!(
        "Built scenes: {} cards, {} particles, composition every {} ms",
        config.deck.count, config.fire.count, config.composition.update_period_ms
    );

    Ok(vec![deck.into(), fire.into(), composition.into()])
}

/// Create the world with the host resources and observers.
///
/// Scenes are sized to the configured stage on registration. The scene
/// named by `config.scene` starts active when the key is known; otherwise
/// the first scene does.
pub fn build_world(config: HostConfig, scenes: Vec<SceneKind>) -> World {
    let mut world = World::new();
    let stage = ScreenSize {
        w: config.stage_width as f32,
        h: config.stage_height as f32,
    };

    let mut host = SceneHost::new();
    for scene in scenes {
        host.add_scene(scene, stage);
    }
    if let Some(name) = scene_name_for_key(&config.scene) {
        host.switch_to(name);
    }

    world.insert_resource(WorldTime::default().with_target_fps(config.target_fps));
    world.insert_resource(FrameStats::default());
    world.insert_resource(stage);
    world.insert_resource(host);
    world.insert_resource(config);

    world.spawn(Observer::new(resize_observer));
    world.spawn(Observer::new(switch_scene_observer));
    // Observers must be registered before anything triggers events.
    world.flush();

    world
}

/// Per-frame systems: frame statistics, then the active scene.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((update_frame_stats, update_active_scene).chain());
    update
}
