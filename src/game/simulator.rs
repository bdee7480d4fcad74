use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::game::config::GameConfig;
use crate::game::geometry::{Point, Rect, Size};
use crate::game::state::{Character, FoodItem, FoodKind, GameState};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub spawned: bool,
    pub good_collected: u32,
    pub bad_hit: u32,
    /// Items that fell past the bottom without being caught.
    pub missed: u32,
    pub game_over: bool,
}

/// Everything the display layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub character: Option<Character>,
    pub lives: u32,
    pub score: u32,
    pub countdown_text: String,
    pub player_position: Point,
    pub items: Vec<FoodItem>,
}

/// Fixed-timestep falling-food game.
///
/// The host owns the timers: it calls [`GameSimulator::tick`] every
/// `tick_interval_ms` and [`GameSimulator::advance_countdown`] once per
/// second during the countdown. `pause`/`resume` only gate ticks; they
/// never change [`GameState`].
pub struct GameSimulator<R: Rng = StdRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    character: Option<Character>,
    items: Vec<FoodItem>,
    next_item_id: u64,
    lives: u32,
    score: u32,
    countdown: u32,
    player_position: Point,
    play_area: Option<Size>,
    running: bool,
    exit_pending: bool,
    break_due: bool,
    ticks_since_break: u64,
    total_ticks: u64,
}

impl GameSimulator<StdRng> {
    /// Deterministic simulator for replays and tests.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameSimulator<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            lives: config.max_lives,
            countdown: config.countdown_start,
            config,
            rng,
            state: GameState::CharacterSelection,
            character: None,
            items: Vec::new(),
            next_item_id: 0,
            score: 0,
            player_position: Point::default(),
            play_area: None,
            running: false,
            exit_pending: false,
            break_due: false,
            ticks_since_break: 0,
            total_ticks: 0,
        }
    }

    // ── State machine ───────────────────────────────────────────────────

    /// CharacterSelection -> Instructions.
    pub fn select_character(&mut self, character: Character) {
        if self.state != GameState::CharacterSelection {
            debug!(state = ?self.state, "character selection ignored");
            return;
        }
        self.character = Some(character);
        self.state = GameState::Instructions;
    }

    /// Instructions -> Countdown.
    pub fn start_countdown(&mut self) {
        if self.state != GameState::Instructions {
            debug!(state = ?self.state, "countdown start ignored");
            return;
        }
        self.countdown = self.config.countdown_start;
        self.state = GameState::Countdown;
    }

    /// One second of countdown. Starts play when it runs out.
    pub fn advance_countdown(&mut self) {
        if self.state != GameState::Countdown {
            return;
        }
        if self.countdown > 1 {
            self.countdown -= 1;
        } else {
            self.countdown = 0;
            self.start_game();
        }
    }

    pub fn countdown_text(&self) -> String {
        self.countdown.to_string()
    }

    fn start_game(&mut self) {
        info!(character = ?self.character.map(|c| c.id), "game started");
        self.state = GameState::Playing;
        self.running = true;
        self.ticks_since_break = 0;
    }

    /// Stop the tick driver (backgrounding, dialogs).
    pub fn pause(&mut self) {
        if self.running {
            debug!("game paused");
        }
        self.running = false;
    }

    /// Restart the tick driver if a game is in progress and no dialog is
    /// waiting for an answer.
    pub fn resume(&mut self) {
        if self.state == GameState::Playing
            && !self.running
            && !self.exit_pending
            && !self.break_due
        {
            debug!("game resumed");
            self.running = true;
        }
    }

    /// Full reset back to character selection.
    pub fn reset_game(&mut self) {
        self.lives = self.config.max_lives;
        self.score = 0;
        self.items.clear();
        self.countdown = self.config.countdown_start;
        self.running = false;
        self.exit_pending = false;
        self.break_due = false;
        self.ticks_since_break = 0;
        if let Some(area) = self.play_area {
            self.player_position = self.player_start(area);
        }
        self.state = GameState::CharacterSelection;
    }

    /// Pause and wait for the player to confirm leaving.
    pub fn request_exit(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.pause();
        self.exit_pending = true;
    }

    /// Keep playing after an exit request.
    pub fn cancel_exit(&mut self) {
        self.exit_pending = false;
        self.resume();
    }

    /// Leave the game; the current score is dropped.
    pub fn confirm_exit(&mut self) {
        self.reset_game();
    }

    /// Dismiss the break reminder and keep playing.
    pub fn acknowledge_break(&mut self) {
        self.break_due = false;
        self.ticks_since_break = 0;
        self.resume();
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Record the measured play area and re-center the player.
    ///
    /// Must be called before play starts; spawning and clamping use it.
    /// Sizes that are not finite and positive are ignored.
    pub fn set_play_area_size(&mut self, size: Size) {
        if !size.is_usable() {
            warn!(width = size.width, height = size.height, "ignoring unusable play area");
            return;
        }
        self.play_area = Some(size);
        self.player_position = self.player_start(size);
    }

    /// Follow a drag gesture horizontally, keeping the whole player inside
    /// the play area.
    pub fn move_player(&mut self, target_x: f64) {
        let Some(area) = self.play_area else {
            warn!("move_player called before the play area was measured");
            return;
        };
        let half = self.config.player_size.width / 2.0;
        let max_x = (area.width - half).max(half);
        self.player_position.x = target_x.clamp(half, max_x);
    }

    fn player_start(&self, area: Size) -> Point {
        Point::new(
            area.width / 2.0,
            area.height - self.config.player_size.height / 2.0 - self.config.player_bottom_margin,
        )
    }

    // ── Simulation ──────────────────────────────────────────────────────

    /// Advance one frame. Does nothing unless playing and not paused.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.state != GameState::Playing || !self.running {
            return events;
        }
        self.total_ticks += 1;

        for item in &mut self.items {
            item.position.y += self.config.fall_step;
        }

        if self.rng.gen_bool(self.config.spawn_probability.clamp(0.0, 1.0)) {
            events.spawned = self.spawn_food();
        }

        self.check_collisions(&mut events);

        if let Some(area) = self.play_area {
            let floor = area.height + self.config.food_size.height;
            let before = self.items.len();
            self.items.retain(|item| item.position.y <= floor);
            events.missed = (before - self.items.len()) as u32;
        }

        if self.lives == 0 {
            self.end_game();
            events.game_over = true;
            return events;
        }

        self.ticks_since_break += 1;
        if self.config.break_reminder_ticks > 0
            && self.ticks_since_break >= self.config.break_reminder_ticks
        {
            info!(ticks = self.ticks_since_break, "break reminder due");
            self.pause();
            self.break_due = true;
        }

        events
    }

    fn spawn_food(&mut self) -> bool {
        let Some(area) = self.play_area else {
            warn!("spawn skipped: play area not measured");
            return false;
        };

        let kind = if self.rng.gen_bool(0.5) {
            FoodKind::Good
        } else {
            FoodKind::Bad
        };
        let sprite = kind
            .sprites()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("brocoli_img");

        let half = self.config.food_size.width / 2.0;
        let x = if area.width > 2.0 * half {
            self.rng.gen_range(half..=area.width - half)
        } else {
            area.width / 2.0
        };

        let item = FoodItem {
            id: self.next_item_id,
            position: Point::new(x, -self.config.food_size.height),
            sprite,
            kind,
        };
        self.next_item_id += 1;
        debug!(id = item.id, sprite, x, "food spawned");
        self.items.push(item);
        true
    }

    fn check_collisions(&mut self, events: &mut TickEvents) {
        let player = Rect::centered(self.player_position, self.config.player_size)
            .scaled(self.config.player_hitbox_scale);
        let food_size = self.config.food_size;
        let food_scale = self.config.food_hitbox_scale;

        let (caught, falling): (Vec<FoodItem>, Vec<FoodItem>) =
            self.items.drain(..).partition(|item| {
                Rect::centered(item.position, food_size)
                    .scaled(food_scale)
                    .intersects(&player)
            });
        self.items = falling;

        for item in caught {
            match item.kind {
                FoodKind::Good => {
                    self.score += self.config.good_food_score;
                    self.lives = (self.lives + 1).min(self.config.max_lives);
                    events.good_collected += 1;
                }
                FoodKind::Bad => {
                    self.lives = self.lives.saturating_sub(1);
                    events.bad_hit += 1;
                }
            }
            debug!(id = item.id, sprite = item.sprite, lives = self.lives, score = self.score, "food caught");
        }
    }

    fn end_game(&mut self) {
        info!(score = self.score, ticks = self.total_ticks, "game over");
        self.running = false;
        self.state = GameState::GameOver;
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn character(&self) -> Option<Character> {
        self.character
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn player_position(&self) -> Point {
        self.player_position
    }

    pub fn play_area(&self) -> Option<Size> {
        self.play_area
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the tick driver is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_exit_pending(&self) -> bool {
        self.exit_pending
    }

    pub fn is_break_due(&self) -> bool {
        self.break_due
    }

    /// Ticks simulated since creation.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            character: self.character,
            lives: self.lives,
            score: self.score,
            countdown_text: self.countdown_text(),
            player_position: self.player_position,
            items: self.items.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::CHARACTERS;

    fn quiet_config() -> GameConfig {
        GameConfig {
            spawn_probability: 0.0,
            ..Default::default()
        }
    }

    fn playing(config: GameConfig) -> GameSimulator {
        let mut sim = GameSimulator::with_seed(config, 7);
        sim.set_play_area_size(Size::new(300.0, 600.0));
        sim.select_character(CHARACTERS[0]);
        sim.start_countdown();
        for _ in 0..3 {
            sim.advance_countdown();
        }
        assert_eq!(sim.state(), GameState::Playing);
        sim
    }

    fn drop_on_player(sim: &mut GameSimulator, kind: FoodKind) {
        let id = sim.next_item_id;
        sim.next_item_id += 1;
        sim.items.push(FoodItem {
            id,
            position: sim.player_position,
            sprite: kind.sprites()[0],
            kind,
        });
    }

    #[test]
    fn test_countdown_runs_three_seconds() {
        let mut sim = GameSimulator::with_seed(quiet_config(), 1);
        sim.set_play_area_size(Size::new(300.0, 600.0));
        sim.select_character(CHARACTERS[1]);
        sim.start_countdown();
        assert_eq!(sim.countdown_text(), "3");
        sim.advance_countdown();
        assert_eq!(sim.countdown_text(), "2");
        sim.advance_countdown();
        assert_eq!(sim.countdown_text(), "1");
        assert_eq!(sim.state(), GameState::Countdown);
        sim.advance_countdown();
        assert_eq!(sim.state(), GameState::Playing);
        assert!(sim.is_running());
    }

    #[test]
    fn test_last_life_lost_ends_game_same_tick() {
        let mut sim = playing(quiet_config());
        sim.lives = 1;
        drop_on_player(&mut sim, FoodKind::Bad);

        let events = sim.tick();
        assert_eq!(events.bad_hit, 1);
        assert!(events.game_over);
        assert_eq!(sim.lives(), 0);
        assert_eq!(sim.state(), GameState::GameOver);
        assert!(!sim.is_running());
        assert!(sim.items().is_empty());
    }

    #[test]
    fn test_good_food_caps_lives() {
        let mut sim = playing(quiet_config());
        sim.lives = 2;

        drop_on_player(&mut sim, FoodKind::Good);
        sim.tick();
        assert_eq!(sim.lives(), 3);
        assert_eq!(sim.score(), 10);

        drop_on_player(&mut sim, FoodKind::Good);
        sim.tick();
        assert_eq!(sim.lives(), 3);
        assert_eq!(sim.score(), 20);
    }

    #[test]
    fn test_items_fall_and_are_missed_past_bottom() {
        let mut sim = playing(quiet_config());
        sim.items.push(FoodItem {
            id: 99,
            position: Point::new(20.0, 640.0),
            sprite: "soda_img",
            kind: FoodKind::Bad,
        });

        let events = sim.tick();
        assert_eq!(events.missed, 0);
        assert_eq!(sim.items()[0].position.y, 646.0);

        let events = sim.tick();
        assert_eq!(events.missed, 1);
        assert!(sim.items().is_empty());
        assert_eq!(sim.lives(), 3);
    }

    #[test]
    fn test_spawned_items_start_above_area_within_bounds() {
        let config = GameConfig {
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut sim = playing(config);
        for _ in 0..20 {
            let events = sim.tick();
            assert!(events.spawned);
        }
        assert!(sim.items().iter().all(|i| i.position.x >= 25.0 && i.position.x <= 275.0));
        let newest = sim.items().last().unwrap();
        assert_eq!(newest.position.y, -50.0);
        assert!(newest.kind.sprites().contains(&newest.sprite));
    }

    #[test]
    fn test_paused_game_does_not_tick() {
        let mut sim = playing(quiet_config());
        drop_on_player(&mut sim, FoodKind::Bad);
        sim.pause();
        assert_eq!(sim.tick(), TickEvents::default());
        assert_eq!(sim.lives(), 3);
        assert_eq!(sim.state(), GameState::Playing);

        sim.resume();
        sim.tick();
        assert_eq!(sim.lives(), 2);
    }

    #[test]
    fn test_break_reminder_pauses_until_acknowledged() {
        let config = GameConfig {
            break_reminder_ticks: 5,
            ..quiet_config()
        };
        let mut sim = playing(config);
        for _ in 0..5 {
            sim.tick();
        }
        assert!(sim.is_break_due());
        assert!(!sim.is_running());

        sim.resume();
        assert!(!sim.is_running());

        sim.acknowledge_break();
        assert!(sim.is_running());
        assert!(!sim.is_break_due());
    }

    #[test]
    fn test_exit_flow() {
        let mut sim = playing(quiet_config());
        sim.request_exit();
        assert!(sim.is_exit_pending());
        assert!(!sim.is_running());

        sim.cancel_exit();
        assert!(sim.is_running());

        sim.score = 40;
        sim.request_exit();
        sim.confirm_exit();
        assert_eq!(sim.state(), GameState::CharacterSelection);
        assert_eq!(sim.score(), 0);
        assert!(!sim.is_exit_pending());
    }

    #[test]
    fn test_reset_recenters_player() {
        let mut sim = playing(quiet_config());
        sim.move_player(0.0);
        sim.lives = 0;
        sim.tick();
        assert_eq!(sim.state(), GameState::GameOver);

        sim.reset_game();
        assert_eq!(sim.state(), GameState::CharacterSelection);
        assert_eq!(sim.lives(), 3);
        assert_eq!(sim.player_position(), Point::new(150.0, 425.0));
    }

    #[test]
    fn test_unusable_play_area_is_ignored() {
        let mut sim = GameSimulator::with_seed(quiet_config(), 3);
        sim.set_play_area_size(Size::new(f64::INFINITY, 600.0));
        assert_eq!(sim.play_area(), None);

        let mut sim = playing(GameConfig {
            spawn_probability: 1.0,
            ..Default::default()
        });
        sim.set_play_area_size(Size::new(300.0, f64::NAN));
        sim.set_play_area_size(Size::new(-5.0, 600.0));
        assert_eq!(sim.play_area(), Some(Size::new(300.0, 600.0)));

        sim.tick();
        assert!(sim.items().iter().all(|item| item.position.x.is_finite()));
    }
}
