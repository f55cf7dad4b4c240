//! Host configuration resource.
//!
//! Manages host and scene settings loaded from an INI configuration file.
//! Provides defaults for a safe start and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [host]
//! target_fps = 60
//! width = 800
//! height = 600
//! scene = deck
//!
//! [deck]
//! visual = card
//! count = 144
//! move_duration_ms = 2000
//! wait_between_ms = 1000
//! card_width = 64
//! card_height = 96
//!
//! [fire]
//! visual = flame
//! count = 10
//! emission_period_ms = 100
//! upward_acceleration = 0.05
//! start_velocity_scatter = 1.0
//! turbulence = 0.02
//! sprite_width = 64
//! sprite_height = 64
//!
//! [composition]
//! update_period_ms = 2000
//! words = fire, cards, pool
//! visuals = smile:64x64, star:32x32
//! font_size_min = 12
//! font_size_max = 48
//! color = ffffffff
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::tint::Tint;
use crate::error::{Result, SceneError};
use crate::scenes::composition::{CompositionConfig, VisualSpec};
use crate::scenes::deck::DeckConfig;
use crate::scenes::fire::FireConfig;

const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_STAGE_WIDTH: u32 = 800;
const DEFAULT_STAGE_HEIGHT: u32 = 600;
const DEFAULT_SCENE: &str = "deck";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Host configuration resource.
///
/// Stores the frame rate, the initial stage size, the starting scene and
/// the construction options of every scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct HostConfig {
    /// Target frames per second. Fixes the millisecond to frame conversion.
    pub target_fps: u32,
    pub stage_width: u32,
    pub stage_height: u32,
    /// Short key of the scene shown first: `deck`, `fire` or `composition`.
    pub scene: String,
    pub deck: DeckConfig,
    pub fire: FireConfig,
    pub composition: CompositionConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HostConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            stage_width: DEFAULT_STAGE_WIDTH,
            stage_height: DEFAULT_STAGE_HEIGHT,
            scene: DEFAULT_SCENE.to_string(),
            deck: DeckConfig::default(),
            fire: FireConfig::default(),
            composition: CompositionConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Conversion factor from milliseconds to frame units.
    pub fn frames_per_ms(&self) -> f32 {
        self.target_fps as f32 / 1000.0
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or a value is malformed.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SceneError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply(&config)?;

        info!(
            "Loaded config: {}x{} stage, fps={}, scene={}",
            self.stage_width, self.stage_height, self.target_fps, self.scene
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| SceneError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<()> {
        // [host] section
        if let Some(fps) = uint(config, "host", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(width) = uint(config, "host", "width")? {
            self.stage_width = width as u32;
        }
        if let Some(height) = uint(config, "host", "height")? {
            self.stage_height = height as u32;
        }
        if let Some(scene) = config.get("host", "scene") {
            self.scene = scene.trim().to_lowercase();
        }

        // [deck] section
        if let Some(visual) = config.get("deck", "visual") {
            self.deck.visual = visual;
        }
        if let Some(count) = uint(config, "deck", "count")? {
            self.deck.count = count as usize;
        }
        if let Some(ms) = float(config, "deck", "move_duration_ms")? {
            self.deck.move_duration_ms = ms;
        }
        if let Some(ms) = float(config, "deck", "wait_between_ms")? {
            self.deck.wait_between_ms = ms;
        }
        if let Some(w) = float(config, "deck", "card_width")? {
            self.deck.card_size.x = w;
        }
        if let Some(h) = float(config, "deck", "card_height")? {
            self.deck.card_size.y = h;
        }

        // [fire] section
        if let Some(visual) = config.get("fire", "visual") {
            self.fire.visual = visual;
        }
        if let Some(count) = uint(config, "fire", "count")? {
            self.fire.count = count as usize;
        }
        if let Some(ms) = float(config, "fire", "emission_period_ms")? {
            self.fire.emission_period_ms = ms;
        }
        if let Some(acc) = float(config, "fire", "upward_acceleration")? {
            self.fire.upward_acceleration = acc;
        }
        if let Some(scatter) = float(config, "fire", "start_velocity_scatter")? {
            self.fire.start_velocity_scatter = scatter;
        }
        if let Some(turbulence) = float(config, "fire", "turbulence")? {
            self.fire.turbulence = turbulence;
        }
        if let Some(w) = float(config, "fire", "sprite_width")? {
            self.fire.sprite_size.x = w;
        }
        if let Some(h) = float(config, "fire", "sprite_height")? {
            self.fire.sprite_size.y = h;
        }

        // [composition] section
        if let Some(ms) = float(config, "composition", "update_period_ms")? {
            self.composition.update_period_ms = ms;
        }
        if let Some(words) = config.get("composition", "words") {
            self.composition.words = parse_words(&words);
        }
        if let Some(visuals) = config.get("composition", "visuals") {
            self.composition.visuals = parse_visuals(&visuals)?;
        }
        if let Some(min) = float(config, "composition", "font_size_min")? {
            self.composition.font_size_range.min = min;
        }
        if let Some(max) = float(config, "composition", "font_size_max")? {
            self.composition.font_size_range.max = max;
        }
        if let Some(color) = config.get("composition", "color") {
            self.composition.color = Tint::from_hex(&color)
                .ok_or_else(|| SceneError::Config(format!("Invalid color '{}'", color)))?;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        let config = self.to_ini();
        config
            .write(&self.config_path)
            .map_err(|e| SceneError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [host] section
        config.set("host", "target_fps", Some(self.target_fps.to_string()));
        config.set("host", "width", Some(self.stage_width.to_string()));
        config.set("host", "height", Some(self.stage_height.to_string()));
        config.set("host", "scene", Some(self.scene.clone()));

        // [deck] section
        let deck = &self.deck;
        config.set("deck", "visual", Some(deck.visual.clone()));
        config.set("deck", "count", Some(deck.count.to_string()));
        config.set("deck", "move_duration_ms", Some(deck.move_duration_ms.to_string()));
        config.set("deck", "wait_between_ms", Some(deck.wait_between_ms.to_string()));
        config.set("deck", "card_width", Some(deck.card_size.x.to_string()));
        config.set("deck", "card_height", Some(deck.card_size.y.to_string()));

        // [fire] section
        let fire = &self.fire;
        config.set("fire", "visual", Some(fire.visual.clone()));
        config.set("fire", "count", Some(fire.count.to_string()));
        config.set("fire", "emission_period_ms", Some(fire.emission_period_ms.to_string()));
        config.set("fire", "upward_acceleration", Some(fire.upward_acceleration.to_string()));
        config.set(
            "fire",
            "start_velocity_scatter",
            Some(fire.start_velocity_scatter.to_string()),
        );
        config.set("fire", "turbulence", Some(fire.turbulence.to_string()));
        config.set("fire", "sprite_width", Some(fire.sprite_size.x.to_string()));
        config.set("fire", "sprite_height", Some(fire.sprite_size.y.to_string()));

        // [composition] section
        let comp = &self.composition;
        config.set(
            "composition",
            "update_period_ms",
            Some(comp.update_period_ms.to_string()),
        );
        config.set("composition", "words", Some(comp.words.join(", ")));
        let visuals: Vec<String> = comp
            .visuals
            .iter()
            .map(|v| format!("{}:{}x{}", v.key, v.size.x, v.size.y))
            .collect();
        config.set("composition", "visuals", Some(visuals.join(", ")));
        config.set(
            "composition",
            "font_size_min",
            Some(comp.font_size_range.min.to_string()),
        );
        config.set(
            "composition",
            "font_size_max",
            Some(comp.font_size_range.max.to_string()),
        );
        let c = comp.color;
        config.set(
            "composition",
            "color",
            Some(format!("{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)),
        );

        config
    }

    pub fn stage_size(&self) -> (u32, u32) {
        (self.stage_width, self.stage_height)
    }
}

fn uint(config: &Ini, section: &str, key: &str) -> Result<Option<u64>> {
    config
        .getuint(section, key)
        .map_err(|e| SceneError::Config(format!("[{}] {}: {}", section, key, e)))
}

fn float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>> {
    config
        .getfloat(section, key)
        .map(|v| v.map(|v| v as f32))
        .map_err(|e| SceneError::Config(format!("[{}] {}: {}", section, key, e)))
}

fn parse_words(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `key:WxH` entries separated by commas.
fn parse_visuals(list: &str) -> Result<Vec<VisualSpec>> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || SceneError::Config(format!("Invalid visual '{}'", entry));
            let (key, size) = entry.split_once(':').ok_or_else(invalid)?;
            let (w, h) = size.split_once(['x', 'X']).ok_or_else(invalid)?;
            let w: f32 = w.trim().parse().map_err(|_| invalid())?;
            let h: f32 = h.trim().parse().map_err(|_| invalid())?;
            Ok(VisualSpec::new(key.trim(), w, h))
        })
        .collect()
}
