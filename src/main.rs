//! Terminal memory game runner (default binary).
//!
//! Crossterm for input, a framebuffer-based renderer for output. The
//! session itself never reads the clock; this loop feeds it `Instant::now()`
//! on every tick.

use std::io::Write;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use memory_match::core::{AudioSink, GameConfig, Session, SessionSnapshot};
use memory_match::input::{handle_key_event, should_quit};
use memory_match::store::{ScoreLog, ScoreRecord};
use memory_match::term::{BoardView, TerminalRenderer, Viewport};
use memory_match::types::{CardId, Difficulty, GameAction, SoundCue, TimerSetting};

const TICK: Duration = Duration::from_millis(33);
const SCORE_FILE: &str = "memory_match_scores.json";
const INITIAL_TIMER_SLIDER: u8 = 40;

/// Rings the terminal bell on the louder cues. The session is happy with
/// any sink; this is all the audio a terminal has.
struct BellSink;

impl AudioSink for BellSink {
    fn play(&mut self, cue: SoundCue) {
        if matches!(cue, SoundCue::Match | SoundCue::Win | SoundCue::Lose) {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let now = Instant::now();
    let mut config = GameConfig::new();
    let mut timer_slider = INITIAL_TIMER_SLIDER;
    config.timer = TimerSetting::from_slider(timer_slider);

    let mut session = Session::new(config, entropy_seed(), Box::new(BellSink), now);
    session.start(now);

    let mut scores = ScoreLog::load(SCORE_FILE)?;
    let mut score_saved = false;

    let view = BoardView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = memory_match::term::FrameBuffer::new(0, 0);
    let mut cursor: usize = 0;
    let mut boss_cycle: usize = 0;
    let mut last_tick = Instant::now();

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, cursor, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(
                            action,
                            &mut session,
                            &mut cursor,
                            &mut timer_slider,
                            &mut boss_cycle,
                            &mut scores,
                            &mut score_saved,
                        )?;
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();
            session.tick(last_tick);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_action(
    action: GameAction,
    session: &mut Session,
    cursor: &mut usize,
    timer_slider: &mut u8,
    boss_cycle: &mut usize,
    scores: &mut ScoreLog,
    score_saved: &mut bool,
) -> Result<()> {
    let now = Instant::now();
    let side = session.config().grid.side();
    let cells = side * side;

    match action {
        GameAction::CursorLeft => *cursor = (*cursor + cells - 1) % cells,
        GameAction::CursorRight => *cursor = (*cursor + 1) % cells,
        GameAction::CursorUp => *cursor = (*cursor + cells - side) % cells,
        GameAction::CursorDown => *cursor = (*cursor + side) % cells,

        GameAction::Flip => session.request_flip(*cursor as CardId, now),
        GameAction::Pause => session.toggle_pause(now),
        GameAction::Restart => {
            session.reset(now);
            *score_saved = false;
        }

        GameAction::AddLife => session.adjust_max_strikes(1, now),
        GameAction::RemoveLife => session.adjust_max_strikes(-1, now),

        GameAction::SetDifficulty(Difficulty::Boss) => {
            let bosses = session.catalog().bosses();
            let boss = bosses[*boss_cycle % bosses.len()].id;
            *boss_cycle += 1;
            session.set_boss(boss, now);
            *score_saved = false;
        }
        GameAction::SetDifficulty(difficulty) => {
            session.clear_boss();
            session.set_difficulty(difficulty, now);
            *score_saved = false;
        }

        GameAction::CycleGridSize => {
            let next = session.config().grid.cycle();
            session.set_grid_size(next, now);
            *score_saved = false;
        }
        GameAction::CycleTimer => {
            *timer_slider = if *timer_slider >= 100 {
                0
            } else {
                (*timer_slider + 20).min(100)
            };
            session.set_timer(TimerSetting::from_slider(*timer_slider), now);
            *score_saved = false;
        }

        GameAction::SpeedUp => {
            let speed = session.config().speed;
            session.set_speed(speed + 0.5);
        }
        GameAction::SpeedDown => {
            let speed = session.config().speed;
            session.set_speed(speed - 0.5);
        }

        GameAction::SaveScore => {
            if session.phase().is_over() && !*score_saved {
                scores.append(finished_record(session, now))?;
                *score_saved = true;
            }
        }
    }

    // A reset may have shrunk the board under the cursor.
    let cells = session.config().grid.cells();
    if *cursor >= cells {
        *cursor = cells - 1;
    }
    Ok(())
}

fn finished_record(session: &Session, now: Instant) -> ScoreRecord {
    let outcome = session.outcome(now);
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    ScoreRecord::new(
        "Player",
        outcome.score,
        outcome.grid_side,
        outcome.max_strikes,
        timestamp_ms,
        outcome.duration_ms,
    )
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
