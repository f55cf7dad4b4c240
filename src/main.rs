//! Scenepool main entry point.
//!
//! Runs the animation host headless for a number of frames and reports what
//! happened. Rendering is out of scope: with `--dump` the final snapshot of
//! the active scene is printed as JSON for an external renderer or for
//! inspection.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and apply CLI overrides
//! 2. Build the deck, fire and composition scenes
//! 3. Create the ECS world, resources and observers
//! 4. Run the frame loop: advance time, update stats and the active scene
//! 5. Log a summary and optionally dump the active scene
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene fire --frames 300 --seed 42 --dump
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{error, info};

use scenepool::events::resize::ResizeEvent;
use scenepool::events::switchscene::SwitchSceneEvent;
use scenepool::host::{build_scenes, build_schedule, build_world, scene_name_for_key};
use scenepool::resources::framestats::FrameStats;
use scenepool::resources::hostconfig::HostConfig;
use scenepool::resources::scenehost::SceneHost;
use scenepool::resources::screensize::ScreenSize;
use scenepool::resources::worldtime::WorldTime;
use scenepool::scenes::Scene;
use scenepool::systems::time::update_world_time;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    Deck,
    Fire,
    Composition,
}

impl SceneChoice {
    fn key(self) -> &'static str {
        match self {
            SceneChoice::Deck => "deck",
            SceneChoice::Fire => "fire",
            SceneChoice::Composition => "composition",
        }
    }
}

/// Frame-ticked scene host with pooled entity animation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scene to run. Overrides the configuration file.
    #[arg(long, value_enum)]
    scene: Option<SceneChoice>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Frame delta in frame units (1.0 is one frame at the target rate).
    #[arg(long, default_value_t = 1.0)]
    delta: f32,

    /// Stage width in pixels, applied as a resize after startup.
    #[arg(long)]
    width: Option<u32>,

    /// Stage height in pixels, applied as a resize after startup.
    #[arg(long)]
    height: Option<u32>,

    /// Seed for reproducible fire and composition scenes.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the active scene's entities as JSON when done.
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = HostConfig::with_path(&cli.config);
    if config.config_path.exists() {
        if let Err(e) = config.load_from_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    } else {
        info!(
            "No config file at {}, using defaults",
            config.config_path.display()
        );
    }

    let scenes = match build_scenes(&config, cli.seed) {
        Ok(scenes) => scenes,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut world = build_world(config, scenes);

    if cli.width.is_some() || cli.height.is_some() {
        let current = *world.resource::<ScreenSize>();
        world.trigger(ResizeEvent {
            width: cli.width.map_or(current.w, |w| w as f32),
            height: cli.height.map_or(current.h, |h| h as f32),
        });
    }
    if let Some(choice) = cli.scene {
        if let Some(name) = scene_name_for_key(choice.key()) {
            world.trigger(SwitchSceneEvent::new(name));
        }
    }

    let mut update = build_schedule();
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {e}");
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    for _ in 0..cli.frames {
        update_world_time(&mut world, cli.delta);
        update.run(&mut world);
        world.clear_trackers();
    }

    let time = *world.resource::<WorldTime>();
    let stats = *world.resource::<FrameStats>();
    let host = world.resource::<SceneHost>();
    info!(
        "Ran {} frames ({:.1} frame units), ~{:.1} fps",
        time.frame_count, time.elapsed, stats.fps
    );

    let Some(active) = host.active() else {
        error!("No active scene");
        std::process::exit(1);
    };
    let counts = active.counts();
    info!(
        "{}: {} idle, {} active, {} settled",
        active.name(),
        counts.idle,
        counts.active,
        counts.settled
    );

    if cli.dump {
        match serde_json::to_string_pretty(&active.views()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing scene: {e}");
                std::process::exit(1);
            }
        }
    }
}
