//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Card identifier: position index in the dealt sequence, unique per session.
pub type CardId = u16;

/// Character identifier shared by exactly two cards in a deck (one pair).
pub type CharacterId = u16;

/// Boss identifier for boss battle mode.
pub type BossId = u16;

/// Strike budget bounds
pub const MIN_STRIKES: u8 = 1;
pub const MAX_STRIKES: u8 = 50;

/// Countdown bounds (seconds)
pub const MIN_TIMER_SECS: u64 = 60;
pub const MAX_TIMER_SECS: u64 = 86_400;

/// Pair resolution delay at 1.0x speed (milliseconds)
pub const RESOLUTION_DELAY_MS: u64 = 750;

/// Speed multiplier bounds
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 4.0;

/// Maximum special pairs per session (before grid/pool limits)
pub const MAX_SPECIAL_PAIRS: usize = 4;

/// Points awarded for an ordinary match
pub const ORDINARY_MATCH_POINTS: u32 = 1;

/// Supported board side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    Four,
    Six,
    Eight,
    Ten,
}

impl GridSize {
    pub const ALL: [GridSize; 4] = [GridSize::Four, GridSize::Six, GridSize::Eight, GridSize::Ten];

    /// Board side length
    pub fn side(&self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
            GridSize::Eight => 8,
            GridSize::Ten => 10,
        }
    }

    /// Total cards on the board (side squared)
    pub fn cells(&self) -> usize {
        self.side() * self.side()
    }

    /// Pairs needed to clear the board
    pub fn pairs(&self) -> usize {
        self.cells() / 2
    }

    /// Parse a side length; only {4, 6, 8, 10} are playable
    pub fn from_side(side: usize) -> Option<Self> {
        match side {
            4 => Some(GridSize::Four),
            6 => Some(GridSize::Six),
            8 => Some(GridSize::Eight),
            10 => Some(GridSize::Ten),
            _ => None,
        }
    }

    /// Next larger size, wrapping back to the smallest
    pub fn cycle(&self) -> Self {
        match self {
            GridSize::Four => GridSize::Six,
            GridSize::Six => GridSize::Eight,
            GridSize::Eight => GridSize::Ten,
            GridSize::Ten => GridSize::Four,
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::Four
    }
}

/// Difficulty presets mapping to fixed (grid size, strike budget) tuples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Legendary,
    Boss,
}

impl Difficulty {
    /// The (grid size, max strikes) tuple this preset configures
    pub fn preset(&self) -> (GridSize, u8) {
        match self {
            Difficulty::Easy => (GridSize::Four, 5),
            Difficulty::Medium => (GridSize::Six, 4),
            Difficulty::Hard => (GridSize::Eight, 3),
            Difficulty::Expert => (GridSize::Eight, 2),
            Difficulty::Legendary => (GridSize::Ten, 1),
            Difficulty::Boss => (GridSize::Eight, 3),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Legendary => "Legendary",
            Difficulty::Boss => "Boss",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

/// Countdown configuration: a finite budget in seconds, or no limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSetting {
    Finite(u64),
    Infinite,
}

impl TimerSetting {
    /// Map a bounded slider position (0..=101) onto seconds.
    ///
    /// The scale is exponential from 60s at 0 to 24h at 100; positions at or
    /// past 100 mean "no limit". This matches the feel of a linear slider over
    /// a range spanning three orders of magnitude.
    pub fn from_slider(position: u8) -> Self {
        if position >= 100 {
            return TimerSetting::Infinite;
        }
        let min_log = (MIN_TIMER_SECS as f64).ln();
        let max_log = (MAX_TIMER_SECS as f64).ln();
        let scale = (max_log - min_log) / 100.0;
        let secs = (min_log + scale * position as f64).exp().round() as u64;
        TimerSetting::Finite(secs.clamp(MIN_TIMER_SECS, MAX_TIMER_SECS))
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, TimerSetting::Finite(_))
    }

    /// Render seconds as `m:ss`, `h:mm:ss`, or the infinity sign
    pub fn format_secs(secs: Option<u64>) -> String {
        match secs {
            None => "\u{221e}".to_string(),
            Some(s) => {
                let hours = s / 3600;
                let minutes = (s % 3600) / 60;
                let seconds = s % 60;
                if hours > 0 {
                    format!("{}:{:02}:{:02}", hours, minutes, seconds)
                } else {
                    format!("{}:{:02}", minutes, seconds)
                }
            }
        }
    }
}

impl Default for TimerSetting {
    fn default() -> Self {
        TimerSetting::Finite(300)
    }
}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Paused,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost are terminal until an explicit reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    pub fn is_over(&self) -> bool {
        self.is_terminal()
    }
}

/// Named sound cues emitted on session transitions.
///
/// Fire-and-forget: a sink that fails to play a cue must not affect the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    CardFlip,
    Match,
    NoMatch,
    Win,
    Lose,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::CardFlip => "cardFlip",
            SoundCue::Match => "match",
            SoundCue::NoMatch => "noMatch",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
        }
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Flip,
    Pause,
    Restart,
    AddLife,
    RemoveLife,
    SetDifficulty(Difficulty),
    CycleGridSize,
    CycleTimer,
    SpeedUp,
    SpeedDown,
    SaveScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_geometry() {
        assert_eq!(GridSize::Four.cells(), 16);
        assert_eq!(GridSize::Four.pairs(), 8);
        assert_eq!(GridSize::Ten.cells(), 100);
        assert_eq!(GridSize::Ten.pairs(), 50);
    }

    #[test]
    fn test_grid_size_from_side() {
        assert_eq!(GridSize::from_side(6), Some(GridSize::Six));
        assert_eq!(GridSize::from_side(5), None);
        assert_eq!(GridSize::from_side(0), None);
    }

    #[test]
    fn test_grid_size_cycle_wraps() {
        let mut size = GridSize::Four;
        for _ in 0..4 {
            size = size.cycle();
        }
        assert_eq!(size, GridSize::Four);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.preset(), (GridSize::Four, 5));
        assert_eq!(Difficulty::Medium.preset(), (GridSize::Six, 4));
        assert_eq!(Difficulty::Hard.preset(), (GridSize::Eight, 3));
        assert_eq!(Difficulty::Expert.preset(), (GridSize::Eight, 2));
        assert_eq!(Difficulty::Legendary.preset(), (GridSize::Ten, 1));
        assert_eq!(Difficulty::Boss.preset(), (GridSize::Eight, 3));
    }

    #[test]
    fn test_timer_slider_endpoints() {
        assert_eq!(TimerSetting::from_slider(0), TimerSetting::Finite(60));
        assert_eq!(TimerSetting::from_slider(100), TimerSetting::Infinite);
        assert_eq!(TimerSetting::from_slider(101), TimerSetting::Infinite);
    }

    #[test]
    fn test_timer_slider_monotonic() {
        let mut last = 0u64;
        for position in 0..100 {
            match TimerSetting::from_slider(position) {
                TimerSetting::Finite(secs) => {
                    assert!(secs >= last, "slider must be non-decreasing");
                    assert!((MIN_TIMER_SECS..=MAX_TIMER_SECS).contains(&secs));
                    last = secs;
                }
                TimerSetting::Infinite => panic!("finite expected below 100"),
            }
        }
    }

    #[test]
    fn test_timer_format() {
        assert_eq!(TimerSetting::format_secs(None), "\u{221e}");
        assert_eq!(TimerSetting::format_secs(Some(45)), "0:45");
        assert_eq!(TimerSetting::format_secs(Some(300)), "5:00");
        assert_eq!(TimerSetting::format_secs(Some(3_661)), "1:01:01");
    }

    #[test]
    fn test_phase_terminality() {
        assert!(Phase::Won.is_terminal());
        assert!(Phase::Lost.is_terminal());
        assert!(!Phase::Active.is_terminal());
        assert!(!Phase::Paused.is_terminal());
        assert!(!Phase::NotStarted.is_terminal());
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundCue::CardFlip.as_str(), "cardFlip");
        assert_eq!(SoundCue::NoMatch.as_str(), "noMatch");
    }
}
