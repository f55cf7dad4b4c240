//! Deck of cards scene.
//!
//! Deals every card of a source deck, top card first, onto a destination
//! deck. One card starts moving per `wait_between` period and each move
//! takes `move_duration`. Once the source deck is empty the scheduler keeps
//! firing with no effect.

use glam::Vec2;
use log::{debug, info};

use super::{EntityView, Scene, Visual, is_valid_delta, is_valid_stage};
use crate::animation::card::{CardAnimator, DeckLayout};
use crate::components::card::CardPayload;
use crate::error::{Result, SceneError, ensure_positive};
use crate::pool::Pool;
use crate::pool::scheduler::Scheduler;

pub const DECK_SCENE_NAME: &str = "Deck of Cards";

/// Construction options for [`DeckScene`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Asset key of the card sprite.
    pub visual: String,
    pub count: usize,
    /// How long one card takes to travel, in milliseconds.
    pub move_duration_ms: f32,
    /// Delay between two cards starting to move, in milliseconds.
    pub wait_between_ms: f32,
    /// Card sprite size, used to centre the decks.
    pub card_size: Vec2,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            visual: "card".into(),
            count: 144,
            move_duration_ms: 2000.0,
            wait_between_ms: 1000.0,
            card_size: Vec2::new(64.0, 96.0),
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(SceneError::InvalidConfiguration(
                "deck count must be positive".into(),
            ));
        }
        ensure_positive("move_duration_ms", self.move_duration_ms)?;
        ensure_positive("wait_between_ms", self.wait_between_ms)?;
        ensure_positive("card_width", self.card_size.x)?;
        ensure_positive("card_height", self.card_size.y)
    }
}

pub struct DeckScene {
    config: DeckConfig,
    scheduler: Scheduler,
    pool: Pool<CardPayload>,
    layout: DeckLayout,
    exhausted_logged: bool,
}

impl DeckScene {
    /// Build the deck with every card idle in the source deck.
    ///
    /// Durations are converted to frame units with `frames_per_ms`.
    pub fn new(config: DeckConfig, frames_per_ms: f32) -> Result<Self> {
        config.validate()?;
        ensure_positive("frames_per_ms", frames_per_ms)?;
        let scheduler = Scheduler::from_millis(config.wait_between_ms, frames_per_ms)?;
        let count = config.count;
        let pool = Pool::with_idle(
            (0..count).map(|i| CardPayload::dealt_from(i, count)),
            config.move_duration_ms * frames_per_ms,
        )?;
        let mut scene = DeckScene {
            config,
            scheduler,
            pool,
            layout: DeckLayout::default(),
            exhausted_logged: false,
        };
        scene.place_all();
        Ok(scene)
    }

    pub fn pool(&self) -> &Pool<CardPayload> {
        &self.pool
    }

    pub fn layout(&self) -> &DeckLayout {
        &self.layout
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn place_all(&mut self) {
        let animator = CardAnimator {
            layout: &self.layout,
            deck_size: self.config.count,
        };
        for card in self.pool.iter_mut() {
            animator.place(card);
        }
    }
}

impl Scene for DeckScene {
    fn name(&self) -> &str {
        DECK_SCENE_NAME
    }

    fn update(&mut self, delta: f32) {
        if !is_valid_delta(delta) {
            debug!("deck: ignoring delta {delta}");
            return;
        }
        let fired = self.scheduler.advance_once(delta);
        let mut animator = CardAnimator {
            layout: &self.layout,
            deck_size: self.config.count,
        };
        self.pool.advance_active(delta, &mut animator);

        // A card dealt this frame starts from zero progress.
        if fired {
            match self.pool.activate_next() {
                Some(card) => animator.place(card),
                None if !self.exhausted_logged => {
                    info!("deck: all {} cards dealt", self.config.count);
                    self.exhausted_logged = true;
                }
                None => {}
            }
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        if !is_valid_stage(width, height) {
            debug!("deck: ignoring stage size {width}x{height}");
            return;
        }
        let card = self.config.card_size;
        // Slots stack upwards one pixel per card; centre the full stack.
        let y = height / 2.0 - card.y / 2.0 + self.config.count as f32 / 2.0;
        self.layout = DeckLayout {
            source: Vec2::new(width * 0.25 - card.x / 2.0, y),
            destination: Vec2::new(width * 0.75 - card.x / 2.0, y),
        };
        self.place_all();
    }

    fn views(&self) -> Vec<EntityView> {
        self.pool
            .iter()
            .map(|card| EntityView {
                id: card.id(),
                stage: card.stage(),
                visual: Visual::Sprite {
                    key: self.config.visual.clone(),
                },
                transform: card.transform,
            })
            .collect()
    }
}
