//! Read-only view of a session for rendering.
//!
//! Renderers never touch the session directly; they hold a
//! [`SessionSnapshot`] and refresh it with
//! [`Session::snapshot_into`], which reuses the snapshot's allocations
//! frame over frame.

use memory_match_types::{CardId, Difficulty, Phase};

use crate::session::{MatchedEntry, Session};

/// One card as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    /// Display name, only meaningful while `face_up`.
    pub label: String,
    pub image_ref: String,
    pub face_up: bool,
    pub special: bool,
    pub matched: bool,
    /// Whether a flip request on this card would be accepted right now.
    pub selectable: bool,
}

/// Everything a frame needs, with no references back into the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub grid_side: usize,
    pub cards: Vec<CardView>,
    pub score: u32,
    pub strikes: u8,
    pub max_strikes: u8,
    pub pairs_matched: usize,
    pub pairs_needed: usize,
    /// `None` means no time limit.
    pub remaining_secs: Option<u64>,
    pub processing: bool,
    pub speed: f32,
    pub difficulty: Difficulty,
    pub boss_name: Option<&'static str>,
    pub matched_log: Vec<MatchedEntry>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::NotStarted;
        self.grid_side = 0;
        self.cards.clear();
        self.score = 0;
        self.strikes = 0;
        self.max_strikes = 0;
        self.pairs_matched = 0;
        self.pairs_needed = 0;
        self.remaining_secs = None;
        self.processing = false;
        self.speed = 1.0;
        self.difficulty = Difficulty::default();
        self.boss_name = None;
        self.matched_log.clear();
    }

    /// Lives remaining before the session is lost.
    pub fn lives_left(&self) -> u8 {
        self.max_strikes.saturating_sub(self.strikes)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::NotStarted,
            grid_side: 0,
            cards: Vec::new(),
            score: 0,
            strikes: 0,
            max_strikes: 0,
            pairs_matched: 0,
            pairs_needed: 0,
            remaining_secs: None,
            processing: false,
            speed: 1.0,
            difficulty: Difficulty::default(),
            boss_name: None,
            matched_log: Vec::new(),
        }
    }
}

impl Session {
    /// Refresh `out` to mirror the current session state.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let config = self.config();
        out.phase = self.phase();
        out.grid_side = config.grid.side();
        out.score = self.score();
        out.strikes = self.strikes();
        out.max_strikes = config.max_strikes;
        out.pairs_matched = self.pairs_matched();
        out.pairs_needed = self.pairs_needed();
        out.remaining_secs = self.remaining_secs();
        out.processing = self.is_processing();
        out.speed = config.speed;
        out.difficulty = config.difficulty;
        out.boss_name = config
            .active_boss
            .and_then(|id| self.catalog().boss(id))
            .map(|b| b.name);

        let active = self.phase() == Phase::Active;
        out.cards.clear();
        out.cards.reserve(self.cards().len());
        for card in self.cards() {
            let flipped = self.is_flipped(card.id);
            let matched = self.is_matched(card.id);
            out.cards.push(CardView {
                id: card.id,
                label: card.display_name.clone(),
                image_ref: card.image_ref.clone(),
                face_up: flipped || matched,
                special: card.special,
                matched,
                selectable: active && !self.is_processing() && !flipped && !matched,
            });
        }

        out.matched_log.clear();
        out.matched_log.extend_from_slice(self.matched_log());
    }

    /// Allocate a fresh snapshot. Interactive callers should prefer
    /// [`snapshot_into`](Self::snapshot_into) with a reused buffer.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
