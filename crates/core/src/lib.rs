//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole memory-game rule set: deck construction,
//! turn resolution, strike and countdown bookkeeping, and reconfiguration.
//! It has **zero dependencies** on UI, audio devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical decks
//! - **Testable**: Time enters only through explicit `Instant` arguments
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: character roster, special-card tiers, and boss list
//! - [`deck`]: paired, uniformly shuffled deck construction
//! - [`config`]: session configuration with clamping setters
//! - [`session`]: the session state machine (flips, strikes, timers)
//! - [`snapshot`]: read-only view of a session for rendering
//! - [`audio`]: injected sound-cue capability
//!
//! # Game Rules
//!
//! - Cards come in pairs sharing a character; a few pairs are high-value
//!   "special" cards with tiered point values.
//! - Flipping two cards locks input for a resolution delay, then either
//!   matches them (score increases) or records a strike (cards flip back).
//! - Exhausting the strike budget or an armed countdown loses the game;
//!   matching every pair wins it.
//!
//! # Timing
//!
//! The session never reads the wall clock itself. Callers pass `Instant::now()`
//! into [`Session::tick`](session::Session::tick) and the other time-dependent
//! operations; the session stores absolute deadlines and re-derives remaining
//! time from them, so a paused or reset session can never be advanced by a
//! stale tick.

pub mod audio;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod session;
pub mod snapshot;

pub use audio::{AudioSink, NullSink, RecordingSink};
pub use catalog::{Boss, Catalog, Character, SpecialCharacter};
pub use config::GameConfig;
pub use deck::{build_deck, build_for_grid, Card, DeckError};
pub use session::{GameOutcome, MatchedEntry, Session};
pub use snapshot::{CardView, SessionSnapshot};
