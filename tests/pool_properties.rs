//! Behavioral properties of the scheduler, the pool and the scenes built on
//! them.

use fastrand::Rng;
use glam::Vec2;

use scenepool::animation::card::{DeckLayout, card_position};
use scenepool::components::card::CardPayload;
use scenepool::components::stage::Stage;
use scenepool::pool::scheduler::Scheduler;
use scenepool::scenes::Scene;
use scenepool::scenes::composition::{CompositionConfig, CompositionScene, FixedAdvance};
use scenepool::scenes::deck::{DeckConfig, DeckScene};
use scenepool::scenes::fire::{FireConfig, FireScene};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn deck(count: usize, move_ms: f32, wait_ms: f32) -> DeckScene {
    let config = DeckConfig {
        count,
        move_duration_ms: move_ms,
        wait_between_ms: wait_ms,
        ..Default::default()
    };
    DeckScene::new(config, 1.0).unwrap()
}

#[test]
fn scheduler_fire_count_does_not_depend_on_chunking() {
    let period = 7.0;
    let total = 1000.0_f32;
    let expected = (total / period).floor() as i64;
    for chunk in [0.5_f32, 1.0, 2.5, 4.0, 12.5] {
        let mut scheduler = Scheduler::new(period).unwrap();
        let steps = (total / chunk) as usize;
        let fired: u32 = (0..steps).map(|_| scheduler.advance(chunk)).sum();
        assert!(
            (fired as i64 - expected).abs() <= 1,
            "chunk {chunk}: fired {fired}, expected {expected}"
        );
    }
}

#[test]
fn deck_conserves_cards_until_all_settled() {
    let mut scene = deck(10, 100.0, 30.0);
    scene.resize(800.0, 600.0);
    let mut last_settled = 0;
    for _ in 0..400 {
        scene.update(7.0);
        let counts = scene.pool().counts();
        assert_eq!(counts.total(), 10);
        assert!(counts.settled >= last_settled);
        last_settled = counts.settled;
    }
    let counts = scene.pool().counts();
    assert_eq!(counts.settled, 10);
    assert_eq!(counts.idle, 0);
    assert_eq!(counts.active, 0);
    assert!(scene.pool().is_exhausted());
}

#[test]
fn progress_is_monotonic_clamped_and_settles_once() {
    let mut scene = deck(5, 40.0, 15.0);
    scene.resize(800.0, 600.0);
    let mut progress = vec![0.0_f32; 5];
    let mut settle_transitions = vec![0_u32; 5];
    let mut stages: Vec<Stage> = scene.pool().iter().map(|c| c.stage()).collect();

    for _ in 0..100 {
        scene.update(3.0);
        for card in scene.pool().iter() {
            let id = card.id();
            assert!(card.progress() <= card.target_duration());
            assert!(card.progress() >= progress[id]);
            progress[id] = card.progress();
            if stages[id] == Stage::Active && card.stage() == Stage::Settled {
                settle_transitions[id] += 1;
            }
            assert!(!(stages[id] == Stage::Settled && card.stage() != Stage::Settled));
            stages[id] = card.stage();
        }
    }
    assert!(settle_transitions.iter().all(|&n| n == 1));
    assert!(progress.iter().all(|&p| approx_eq(p, 40.0)));
}

#[test]
fn fire_reaches_steady_state() {
    let config = FireConfig {
        count: 10,
        emission_period_ms: 10.0,
        ..Default::default()
    };
    let mut scene = FireScene::with_rng(config, 1.0, Rng::with_seed(3)).unwrap();
    scene.resize(800.0, 600.0);
    for _ in 0..300 {
        scene.update(1.0);
    }
    for _ in 0..100 {
        scene.update(1.0);
        let counts = scene.pool().counts();
        assert_eq!(counts.total(), 10);
        assert!((9..=10).contains(&counts.active), "active {}", counts.active);
    }
}

#[test]
fn card_position_is_continuous_across_stages() {
    let layout = DeckLayout {
        source: Vec2::new(100.0, 300.0),
        destination: Vec2::new(500.0, 300.0),
    };
    let card = CardPayload {
        start_index: 7,
        end_index: 2,
    };
    let idle = card_position(&layout, &card, Stage::Idle, 0.0);
    let settled = card_position(&layout, &card, Stage::Settled, 1.0);
    assert_eq!(card_position(&layout, &card, Stage::Active, 0.0), idle);
    let end = card_position(&layout, &card, Stage::Active, 1.0);
    assert!(approx_eq(end.x, settled.x));
    assert!(approx_eq(end.y, settled.y));

    let mid = card_position(&layout, &card, Stage::Active, 0.5);
    assert_eq!(mid, card_position(&layout, &card, Stage::Active, 0.5));
    assert!(approx_eq(mid.x, 300.0));
}

#[test]
fn resize_is_idempotent() {
    let mut d = deck(6, 100.0, 30.0);
    let mut f = FireScene::with_rng(FireConfig::default(), 1.0, Rng::with_seed(5)).unwrap();
    let mut c = CompositionScene::with_parts(
        CompositionConfig::default(),
        1.0,
        Box::new(FixedAdvance::default()),
        Rng::with_seed(5),
    )
    .unwrap();
    for _ in 0..40 {
        d.update(5.0);
        f.update(5.0);
        c.update(5.0);
    }

    d.resize(1024.0, 768.0);
    f.resize(1024.0, 768.0);
    c.resize(1024.0, 768.0);
    let once = (d.views(), f.views(), c.views());
    d.resize(1024.0, 768.0);
    f.resize(1024.0, 768.0);
    c.resize(1024.0, 768.0);
    assert_eq!(once, (d.views(), f.views(), c.views()));
}

#[test]
fn deal_scenario_three_cards() {
    let mut scene = deck(3, 100.0, 50.0);
    scene.resize(800.0, 600.0);

    scene.update(50.0);
    let counts = scene.pool().counts();
    assert_eq!(counts.active, 1);
    assert_eq!(counts.idle, 2);
    let first = scene.pool().active_ids()[0];
    assert!(approx_eq(scene.pool().get(first).unwrap().progress(), 0.0));

    scene.update(150.0);
    assert_eq!(scene.pool().get(first).unwrap().stage(), Stage::Settled);
    let counts = scene.pool().counts();
    assert_eq!(counts.settled, 1);
    assert_eq!(counts.active, 1);
    assert_ne!(scene.pool().active_ids()[0], first);
}

#[test]
fn seeded_scenes_are_reproducible() {
    let run = |seed: u64| {
        let mut f = FireScene::with_rng(FireConfig::default(), 1.0, Rng::with_seed(seed)).unwrap();
        let mut c = CompositionScene::with_parts(
            CompositionConfig::default(),
            1.0,
            Box::new(FixedAdvance::default()),
            Rng::with_seed(seed),
        )
        .unwrap();
        f.resize(640.0, 480.0);
        c.resize(640.0, 480.0);
        for _ in 0..500 {
            f.update(1.5);
            c.update(1.5);
        }
        (f.views(), c.views())
    };
    assert_eq!(run(11), run(11));
}
