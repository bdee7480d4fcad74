use serde::Serialize;
use tracing::debug;

use crate::game::{GameConfig, GameSimulator, GameState, Size, CHARACTERS};
use crate::playtest::autopilot::choose_target_x;

/// Configuration for a batch of headless sessions.
pub struct PlaytestConfig {
    pub sessions: usize,
    pub seed: u64,
    /// Sessions still alive after this many ticks are cut off.
    pub max_ticks: u64,
    pub play_area: Size,
    pub game: GameConfig,
}

impl Default for PlaytestConfig {
    fn default() -> Self {
        Self {
            sessions: 100,
            seed: 123,
            // Ten minutes at 50 ms per tick
            max_ticks: 12_000,
            play_area: Size::new(390.0, 844.0),
            game: GameConfig::default(),
        }
    }
}

/// Outcome of one autopiloted session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResult {
    pub seed: u64,
    pub ticks: u64,
    pub score: u32,
    pub good_collected: u32,
    pub bad_hit: u32,
    pub missed: u32,
    pub game_over: bool,
}

/// Aggregates over a batch of sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaytestSummary {
    pub sessions: usize,
    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub avg_good_collected: f64,
    pub avg_bad_hit: f64,
    pub game_over_rate: f64,
}

/// Play one session to game over or `max_ticks`, whichever comes first.
///
/// Break reminders are acknowledged immediately so they never stall the run.
pub fn run_session(game: &GameConfig, play_area: Size, seed: u64, max_ticks: u64) -> SessionResult {
    let mut sim = GameSimulator::with_seed(game.clone(), seed);
    sim.set_play_area_size(play_area);
    sim.select_character(CHARACTERS[(seed % CHARACTERS.len() as u64) as usize]);
    sim.start_countdown();
    while sim.state() == GameState::Countdown {
        sim.advance_countdown();
    }

    let mut result = SessionResult {
        seed,
        ticks: 0,
        score: 0,
        good_collected: 0,
        bad_hit: 0,
        missed: 0,
        game_over: false,
    };

    while result.ticks < max_ticks {
        if let Some(x) = choose_target_x(&sim) {
            sim.move_player(x);
        }

        let events = sim.tick();
        result.ticks += 1;
        result.good_collected += events.good_collected;
        result.bad_hit += events.bad_hit;
        result.missed += events.missed;

        if events.game_over {
            result.game_over = true;
            break;
        }
        if sim.is_break_due() {
            sim.acknowledge_break();
        }
    }

    result.score = sim.score();
    debug!(seed, ticks = result.ticks, score = result.score, "session finished");
    result
}

/// Run `config.sessions` sessions with consecutive seeds.
pub fn run_playtest(config: &PlaytestConfig) -> Vec<SessionResult> {
    (0..config.sessions as u64)
        .map(|i| {
            run_session(
                &config.game,
                config.play_area,
                config.seed.wrapping_add(i),
                config.max_ticks,
            )
        })
        .collect()
}

pub fn summarize(results: &[SessionResult]) -> PlaytestSummary {
    let n = results.len().max(1) as f64;
    let mean = |f: fn(&SessionResult) -> f64| results.iter().map(f).sum::<f64>() / n;

    PlaytestSummary {
        sessions: results.len(),
        avg_score: mean(|r| r.score as f64),
        max_score: results.iter().map(|r| r.score).max().unwrap_or(0),
        avg_ticks: mean(|r| r.ticks as f64),
        avg_good_collected: mean(|r| r.good_collected as f64),
        avg_bad_hit: mean(|r| r.bad_hit as f64),
        game_over_rate: mean(|r| if r.game_over { 1.0 } else { 0.0 }),
    }
}
