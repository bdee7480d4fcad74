use serde::{Deserialize, Serialize};

use crate::game::geometry::Size;

/// Real-time length of one simulation tick.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Vertical distance every item falls per tick.
pub const FALL_STEP: f64 = 6.0;

/// Chance of spawning one item on a tick.
pub const SPAWN_PROBABILITY: f64 = 0.04;

/// Score gained per healthy item caught.
pub const GOOD_FOOD_SCORE: u32 = 10;

pub const MAX_LIVES: u32 = 3;

/// Countdown value shown first, decremented once per second.
pub const COUNTDOWN_START: u32 = 3;

pub const PLAYER_SIZE: Size = Size::new(120.0, 150.0);

pub const FOOD_SIZE: Size = Size::new(50.0, 50.0);

/// Gap between the player sprite and the bottom of the play area.
pub const PLAYER_BOTTOM_MARGIN: f64 = 100.0;

/// Hitboxes are shrunk relative to the sprites so near misses still feel fair.
pub const PLAYER_HITBOX_SCALE: f64 = 0.6;
pub const FOOD_HITBOX_SCALE: f64 = 0.7;

/// Five minutes of play at the default tick rate.
pub const BREAK_REMINDER_TICKS: u64 = 5 * 60 * 1000 / TICK_INTERVAL_MS;

/// Tunable mini-game parameters. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_interval_ms: u64,
    pub fall_step: f64,
    pub spawn_probability: f64,
    pub good_food_score: u32,
    pub max_lives: u32,
    pub countdown_start: u32,
    pub player_size: Size,
    pub food_size: Size,
    pub player_bottom_margin: f64,
    pub player_hitbox_scale: f64,
    pub food_hitbox_scale: f64,
    /// Ticks of active play before the game pauses for a break. 0 disables.
    pub break_reminder_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            fall_step: FALL_STEP,
            spawn_probability: SPAWN_PROBABILITY,
            good_food_score: GOOD_FOOD_SCORE,
            max_lives: MAX_LIVES,
            countdown_start: COUNTDOWN_START,
            player_size: PLAYER_SIZE,
            food_size: FOOD_SIZE,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_hitbox_scale: PLAYER_HITBOX_SCALE,
            food_hitbox_scale: FOOD_HITBOX_SCALE,
            break_reminder_ticks: BREAK_REMINDER_TICKS,
        }
    }
}
