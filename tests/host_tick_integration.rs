//! Host tick integration tests: world assembly, the frame schedule, resize
//! propagation and scene switching.

use bevy_ecs::prelude::*;

use scenepool::components::stage::Stage;
use scenepool::events::resize::ResizeEvent;
use scenepool::events::switchscene::SwitchSceneEvent;
use scenepool::host::{build_scenes, build_schedule, build_world};
use scenepool::resources::framestats::FrameStats;
use scenepool::resources::hostconfig::HostConfig;
use scenepool::resources::scenehost::SceneHost;
use scenepool::resources::screensize::ScreenSize;
use scenepool::resources::worldtime::WorldTime;
use scenepool::scenes::composition::COMPOSITION_SCENE_NAME;
use scenepool::scenes::deck::DECK_SCENE_NAME;
use scenepool::scenes::fire::FIRE_SCENE_NAME;
use scenepool::scenes::{Scene, SceneKind};
use scenepool::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// One frame unit per millisecond keeps the arithmetic readable.
fn test_config() -> HostConfig {
    let mut config = HostConfig::new();
    config.target_fps = 1000;
    config.deck.count = 3;
    config.deck.move_duration_ms = 100.0;
    config.deck.wait_between_ms = 50.0;
    config.fire.emission_period_ms = 10.0;
    config
}

fn make_world(config: HostConfig) -> World {
    let scenes = build_scenes(&config, Some(1234)).unwrap();
    build_world(config, scenes)
}

fn tick(world: &mut World, schedule: &mut Schedule, frames: usize, delta: f32) {
    for _ in 0..frames {
        update_world_time(world, delta);
        schedule.run(world);
        world.clear_trackers();
    }
}

fn deck(world: &World) -> &scenepool::scenes::deck::DeckScene {
    match world.resource::<SceneHost>().get(DECK_SCENE_NAME) {
        Some(SceneKind::Deck(deck)) => deck,
        _ => panic!("deck scene missing"),
    }
}

fn fire(world: &World) -> &scenepool::scenes::fire::FireScene {
    match world.resource::<SceneHost>().get(FIRE_SCENE_NAME) {
        Some(SceneKind::Fire(fire)) => fire,
        _ => panic!("fire scene missing"),
    }
}

fn active_name(world: &World) -> Option<String> {
    world
        .resource::<SceneHost>()
        .active_name()
        .map(String::from)
}

#[test]
fn world_has_host_resources() {
    let world = make_world(test_config());
    assert!(world.contains_resource::<WorldTime>());
    assert!(world.contains_resource::<FrameStats>());
    assert!(world.contains_resource::<ScreenSize>());
    assert!(world.contains_resource::<HostConfig>());
    let host = world.resource::<SceneHost>();
    assert_eq!(host.len(), 3);
    assert_eq!(host.active_name(), Some(DECK_SCENE_NAME));
    assert!(approx_eq(world.resource::<WorldTime>().frames_per_ms, 1.0));
}

#[test]
fn only_active_scene_advances() {
    let mut world = make_world(test_config());
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 60, 1.0);

    assert_eq!(deck(&world).pool().counts().active, 1);
    let fire_counts = fire(&world).pool().counts();
    assert_eq!(fire_counts.active, 0);
    assert_eq!(fire_counts.settled, 10);
}

#[test]
fn time_and_stats_follow_frames() {
    let mut world = make_world(test_config());
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 5, 2.0);

    let time = world.resource::<WorldTime>();
    assert_eq!(time.frame_count, 5);
    assert!(approx_eq(time.elapsed, 10.0));
    let stats = world.resource::<FrameStats>();
    assert_eq!(stats.samples, 5);
    assert!(approx_eq(stats.fps, 500.0));
}

#[test]
fn resize_event_reaches_every_scene() {
    let mut world = make_world(test_config());
    world.trigger(ResizeEvent {
        width: 400.0,
        height: 300.0,
    });
    world.flush();

    assert_eq!(*world.resource::<ScreenSize>(), ScreenSize { w: 400.0, h: 300.0 });
    // Card 64 wide: source at a quarter, destination at three quarters.
    let layout = *deck(&world).layout();
    assert!(approx_eq(layout.source.x, 68.0));
    assert!(approx_eq(layout.destination.x, 268.0));
    // Sprite 64x64 centred.
    assert!(approx_eq(fire(&world).origin().x, 168.0));
    assert!(approx_eq(fire(&world).origin().y, 118.0));
}

#[test]
fn degenerate_resize_keeps_anchors() {
    let mut world = make_world(test_config());
    let before = *deck(&world).layout();
    world.trigger(ResizeEvent {
        width: 0.0,
        height: 0.0,
    });
    world.flush();
    assert_eq!(*deck(&world).layout(), before);
    for view in world.resource::<SceneHost>().active().unwrap().views() {
        assert!(view.transform.position.is_finite());
    }
}

#[test]
fn switch_scene_event_changes_active_scene() {
    let mut world = make_world(test_config());
    let mut schedule = build_schedule();
    world.trigger(SwitchSceneEvent::new(FIRE_SCENE_NAME));
    world.flush();
    assert_eq!(active_name(&world).as_deref(), Some(FIRE_SCENE_NAME));

    tick(&mut world, &mut schedule, 10, 1.0);
    assert_eq!(fire(&world).pool().counts().active, 1);
    assert_eq!(deck(&world).pool().counts().idle, 3);

    world.trigger(SwitchSceneEvent::new(COMPOSITION_SCENE_NAME));
    world.flush();
    assert_eq!(active_name(&world).as_deref(), Some(COMPOSITION_SCENE_NAME));
}

#[test]
fn unknown_scene_name_is_ignored() {
    let mut world = make_world(test_config());
    world.trigger(SwitchSceneEvent::new("Juggling"));
    world.flush();
    assert_eq!(active_name(&world).as_deref(), Some(DECK_SCENE_NAME));
}

#[test]
fn hidden_scene_resumes_where_it_stopped() {
    let mut world = make_world(test_config());
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 50, 1.0);
    let dealt = deck(&world).pool().active_ids().to_vec();
    assert_eq!(dealt, vec![2]);

    world.trigger(SwitchSceneEvent::new(FIRE_SCENE_NAME));
    world.flush();
    tick(&mut world, &mut schedule, 200, 1.0);

    let card = deck(&world).pool().get(2).unwrap();
    assert_eq!(card.stage(), Stage::Active);
    assert!(approx_eq(card.progress(), 0.0));

    world.trigger(SwitchSceneEvent::new(DECK_SCENE_NAME));
    world.flush();
    tick(&mut world, &mut schedule, 1, 1.0);
    assert!(approx_eq(deck(&world).pool().get(2).unwrap().progress(), 1.0));
}

#[test]
fn config_scene_key_selects_start_scene() {
    let mut config = test_config();
    config.scene = "composition".into();
    let world = make_world(config);
    assert_eq!(active_name(&world).as_deref(), Some(COMPOSITION_SCENE_NAME));
}
