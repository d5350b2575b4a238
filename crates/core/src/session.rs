//! Session state machine - flips, pairs, strikes, countdown, reconfiguration.
//!
//! The session owns all mutable game state and is the only writer of it.
//! External collaborators either read snapshots (renderer), receive cues
//! (audio sink), or copy derived records out (score persistence).
//!
//! Time handling: every time-dependent operation takes an explicit `now`.
//! The session stores absolute deadlines (countdown expiry, pair-resolution
//! due time) and derives remaining time from them on each tick, so there is
//! no accumulated interval drift. Reset clears the stored deadlines, which
//! makes a tick issued against a superseded session a structural no-op; the
//! `epoch` counter is exposed so external schedulers can also discard stale
//! callbacks.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use memory_match_types::{
    BossId, CardId, CharacterId, Difficulty, GridSize, Phase, SoundCue, TimerSetting,
};

use crate::audio::AudioSink;
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::deck::{build_for_grid, Card};

/// One matched pair in the append-only display log (side panel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedEntry {
    pub character_id: CharacterId,
    pub display_name: String,
    pub image_ref: String,
    pub special: bool,
    pub point_value: u32,
}

/// Persistence-ready summary of a session, captured at one instant.
///
/// The session stays clock-free; callers attach a wall timestamp when
/// they write the record out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: u32,
    pub grid_side: usize,
    pub max_strikes: u8,
    pub duration_ms: u64,
    pub won: bool,
}

/// A second flip awaiting comparison.
#[derive(Debug, Clone, Copy)]
struct PendingResolution {
    first: CardId,
    second: CardId,
    due: Instant,
}

/// Complete game session state
pub struct Session {
    config: GameConfig,
    catalog: Catalog,
    rng: SmallRng,
    deck: Vec<Card>,
    flipped: ArrayVec<CardId, 2>,
    matched: HashSet<CardId>,
    matched_log: Vec<MatchedEntry>,
    score: u32,
    strikes: u8,
    phase: Phase,
    pending: Option<PendingResolution>,
    /// Remaining resolution-delay time while paused.
    pending_hold: Option<Duration>,
    /// Armed countdown expiry. `None` when infinite, paused, or not Active.
    deadline: Option<Instant>,
    /// Last derived remaining seconds. `None` means no limit.
    remaining_secs: Option<u64>,
    /// Monotonic session generation (increments on every reset).
    epoch: u64,
    started_at: Instant,
    paused_since: Option<Instant>,
    paused_total: Duration,
    sink: Box<dyn AudioSink>,
}

impl Session {
    /// Create a session in `NotStarted`: the deck is dealt so a renderer has
    /// something to draw, but no timer is armed and no flips are accepted
    /// until [`start`](Self::start).
    pub fn new(config: GameConfig, seed: u64, sink: Box<dyn AudioSink>, now: Instant) -> Self {
        let catalog = Catalog::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let deck = build_for_grid(config.grid, &catalog, &mut rng);
        Self {
            config,
            catalog,
            rng,
            deck,
            flipped: ArrayVec::new(),
            matched: HashSet::new(),
            matched_log: Vec::new(),
            score: 0,
            strikes: 0,
            phase: Phase::NotStarted,
            pending: None,
            pending_hold: None,
            deadline: None,
            remaining_secs: None,
            epoch: 0,
            started_at: now,
            paused_since: None,
            paused_total: Duration::ZERO,
            sink,
        }
    }

    /// Start the first game. No-op once started; use [`reset`](Self::reset)
    /// afterwards.
    pub fn start(&mut self, now: Instant) {
        if self.phase == Phase::NotStarted {
            self.reset(now);
        }
    }

    /// Discard the whole session state and deal a fresh deck.
    ///
    /// Always safe to call from any phase; any pending resolution or armed
    /// countdown is cancelled with it.
    pub fn reset(&mut self, now: Instant) {
        self.epoch = self.epoch.wrapping_add(1);
        self.deck = build_for_grid(self.config.grid, &self.catalog, &mut self.rng);
        self.flipped.clear();
        self.matched.clear();
        self.matched_log.clear();
        self.score = 0;
        self.strikes = 0;
        self.pending = None;
        self.pending_hold = None;
        self.started_at = now;
        self.paused_since = None;
        self.paused_total = Duration::ZERO;
        self.phase = Phase::Active;
        match self.config.timer {
            TimerSetting::Finite(secs) => {
                self.remaining_secs = Some(secs);
                self.deadline = Some(now + Duration::from_secs(secs));
            }
            TimerSetting::Infinite => {
                self.remaining_secs = None;
                self.deadline = None;
            }
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn max_strikes(&self) -> u8 {
        self.config.max_strikes
    }

    pub fn pairs_needed(&self) -> usize {
        self.config.grid.pairs()
    }

    pub fn pairs_matched(&self) -> usize {
        self.matched.len() / 2
    }

    /// True while a resolved pair's outcome is being revealed; all flip
    /// input is rejected during this window.
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// Remaining countdown seconds; `None` means no limit.
    pub fn remaining_secs(&self) -> Option<u64> {
        self.remaining_secs
    }

    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id as usize)
    }

    pub fn flipped_ids(&self) -> &[CardId] {
        &self.flipped
    }

    pub fn is_flipped(&self, id: CardId) -> bool {
        self.flipped.contains(&id)
    }

    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    pub fn matched_log(&self) -> &[MatchedEntry] {
        &self.matched_log
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Wall time spent playing, excluding paused spans.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        let paused = match self.paused_since {
            Some(since) => self.paused_total + now.saturating_duration_since(since),
            None => self.paused_total,
        };
        now.saturating_duration_since(self.started_at)
            .saturating_sub(paused)
            .as_millis() as u64
    }

    /// Summarize the session for the score log.
    pub fn outcome(&self, now: Instant) -> GameOutcome {
        GameOutcome {
            score: self.score,
            grid_side: self.config.grid.side(),
            max_strikes: self.config.max_strikes,
            duration_ms: self.elapsed_ms(now),
            won: self.phase == Phase::Won,
        }
    }

    // --- player input ----------------------------------------------------

    /// Flip a face-down card. Silently ignored unless the session is Active,
    /// no resolution is in flight, and the card is neither flipped nor
    /// matched already.
    pub fn request_flip(&mut self, id: CardId, now: Instant) {
        if self.phase != Phase::Active
            || self.pending.is_some()
            || self.is_flipped(id)
            || self.is_matched(id)
        {
            return;
        }
        if self.card(id).is_none() {
            return;
        }

        self.sink.play(SoundCue::CardFlip);
        self.flipped.push(id);

        if self.flipped.len() == 2 {
            self.pending = Some(PendingResolution {
                first: self.flipped[0],
                second: self.flipped[1],
                due: now + self.config.resolution_delay(),
            });
        }
    }

    /// Advance time-driven state: a due pair resolution and the countdown.
    ///
    /// Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        let mut advanced = false;

        if let Some(pending) = self.pending {
            if now >= pending.due {
                self.resolve_pair(pending.first, pending.second);
                advanced = true;
            }
        }

        // Win/loss during resolution disarms the countdown.
        if self.phase != Phase::Active {
            return advanced;
        }

        if let Some(deadline) = self.deadline {
            let remaining = ceil_secs(deadline.saturating_duration_since(now));
            if self.remaining_secs != Some(remaining) {
                self.remaining_secs = Some(remaining);
                advanced = true;
            }
            if now >= deadline {
                self.remaining_secs = Some(0);
                self.deadline = None;
                self.pending = None;
                self.flipped.clear();
                self.phase = Phase::Lost;
                self.sink.play(SoundCue::Lose);
                advanced = true;
            }
        }

        advanced
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) {
        self.pending = None;
        self.flipped.clear();

        let (Some(a), Some(b)) = (self.card(first), self.card(second)) else {
            return;
        };

        if a.character_id == b.character_id {
            let entry = MatchedEntry {
                character_id: a.character_id,
                display_name: a.display_name.clone(),
                image_ref: a.image_ref.clone(),
                special: a.special,
                point_value: a.point_value,
            };
            let points = a.point_value;
            self.matched.insert(first);
            self.matched.insert(second);
            self.matched_log.push(entry);
            self.score = self.score.saturating_add(points);
            self.sink.play(SoundCue::Match);

            if self.pairs_matched() == self.pairs_needed() {
                self.phase = Phase::Won;
                self.deadline = None;
                self.sink.play(SoundCue::Win);
            }
        } else {
            self.strikes = self.strikes.saturating_add(1);
            if self.strikes >= self.config.max_strikes {
                self.phase = Phase::Lost;
                self.deadline = None;
                self.sink.play(SoundCue::Lose);
            } else {
                self.sink.play(SoundCue::NoMatch);
            }
        }
    }

    // --- pause / resume --------------------------------------------------

    /// Freeze the countdown and reject flips. State is otherwise untouched.
    pub fn pause(&mut self, now: Instant) {
        if self.phase != Phase::Active {
            return;
        }
        self.phase = Phase::Paused;
        self.paused_since = Some(now);
        if let Some(deadline) = self.deadline.take() {
            self.remaining_secs = Some(ceil_secs(deadline.saturating_duration_since(now)));
        }
        if let Some(pending) = self.pending {
            self.pending_hold = Some(pending.due.saturating_duration_since(now));
        }
    }

    /// Re-arm the countdown from the frozen remaining time.
    pub fn resume(&mut self, now: Instant) {
        if self.phase != Phase::Paused {
            return;
        }
        self.phase = Phase::Active;
        if let Some(since) = self.paused_since.take() {
            self.paused_total += now.saturating_duration_since(since);
        }
        if self.config.timer.is_finite() {
            if let Some(secs) = self.remaining_secs {
                self.deadline = Some(now + Duration::from_secs(secs));
            }
        }
        if let (Some(pending), Some(hold)) = (self.pending.as_mut(), self.pending_hold.take()) {
            pending.due = now + hold;
        }
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.phase {
            Phase::Active => self.pause(now),
            Phase::Paused => self.resume(now),
            _ => {}
        }
    }

    // --- reconfiguration -------------------------------------------------

    /// Change the board size and reset with the new deck.
    pub fn set_grid_size(&mut self, grid: GridSize, now: Instant) {
        self.config.grid = grid;
        self.reset(now);
    }

    /// Change the countdown setting and reset.
    pub fn set_timer(&mut self, timer: TimerSetting, now: Instant) {
        self.config.timer = timer;
        self.reset(now);
    }

    /// Apply a difficulty preset and reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, now: Instant) {
        self.config.apply_difficulty(difficulty);
        self.reset(now);
    }

    /// Enter boss battle mode against the given boss and reset.
    pub fn set_boss(&mut self, boss: BossId, now: Instant) {
        self.config.active_boss = Some(boss);
        self.config.apply_difficulty(Difficulty::Boss);
        self.reset(now);
    }

    /// Drop the boss selection. Does not reset; the next reset deals a
    /// plain deck under whatever difficulty is configured.
    pub fn clear_boss(&mut self) {
        self.config.active_boss = None;
    }

    /// Reclamp the strike budget into [1, 50] without discarding progress.
    ///
    /// Unlike grid/timer/difficulty changes this intentionally does NOT
    /// reset: nudging the life count should not forfeit a half-cleared
    /// board. If the new budget is already spent the session is lost on the
    /// spot.
    pub fn set_max_strikes(&mut self, max_strikes: u8, now: Instant) {
        let _ = now;
        let clamped = GameConfig::clamp_strikes(max_strikes);
        if clamped == self.config.max_strikes {
            return;
        }
        self.config.max_strikes = clamped;
        if self.strikes >= clamped && matches!(self.phase, Phase::Active | Phase::Paused) {
            self.phase = Phase::Lost;
            self.deadline = None;
            self.pending = None;
            self.flipped.clear();
            self.sink.play(SoundCue::Lose);
        }
    }

    /// Nudge the strike budget by a signed amount.
    pub fn adjust_max_strikes(&mut self, delta: i16, now: Instant) {
        let next = (self.config.max_strikes as i16 + delta).clamp(1, i16::from(u8::MAX)) as u8;
        self.set_max_strikes(next, now);
    }

    /// Change the speed multiplier. Scales the resolution delay of future
    /// comparisons; a pending comparison keeps its deadline.
    pub fn set_speed(&mut self, speed: f32) {
        self.config.speed = GameConfig::clamp_speed(speed);
    }
}

/// Whole seconds remaining, rounding any fraction up so a freshly armed
/// countdown reads its full value for the entire first second.
fn ceil_secs(d: Duration) -> u64 {
    let secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
