//! Session configuration with clamping setters.
//!
//! Malformed values are clamped into range, never surfaced as errors:
//! the interactive surface (sliders, +/- buttons) has no useful way to
//! report a validation failure mid-game.

use std::time::Duration;

use memory_match_types::{
    BossId, Difficulty, GridSize, TimerSetting, MAX_SPEED, MAX_STRIKES, MIN_SPEED, MIN_STRIKES,
    RESOLUTION_DELAY_MS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub max_strikes: u8,
    pub timer: TimerSetting,
    pub speed: f32,
    pub difficulty: Difficulty,
    /// Carried across plain resets until the caller clears it.
    pub active_boss: Option<BossId>,
}

impl GameConfig {
    pub fn new() -> Self {
        let difficulty = Difficulty::default();
        let (grid, max_strikes) = difficulty.preset();
        Self {
            grid,
            max_strikes,
            timer: TimerSetting::default(),
            speed: 1.0,
            difficulty,
            active_boss: None,
        }
    }

    /// Clamp a strike budget into the supported range.
    pub fn clamp_strikes(n: u8) -> u8 {
        n.clamp(MIN_STRIKES, MAX_STRIKES)
    }

    /// Clamp a speed multiplier into the supported range.
    pub fn clamp_speed(speed: f32) -> f32 {
        if speed.is_nan() {
            return 1.0;
        }
        speed.clamp(MIN_SPEED, MAX_SPEED)
    }

    /// Apply a difficulty preset's grid size and strike budget.
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        let (grid, max_strikes) = difficulty.preset();
        self.difficulty = difficulty;
        self.grid = grid;
        self.max_strikes = max_strikes;
    }

    /// Delay between the second flip and pair resolution.
    ///
    /// Higher speed shortens the window.
    pub fn resolution_delay(&self) -> Duration {
        let ms = RESOLUTION_DELAY_MS as f64 / Self::clamp_speed(self.speed) as f64;
        Duration::from_millis(ms.round() as u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
