//! BoardView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, TimerSetting};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the card grid plus a status panel.
pub struct BoardView {
    /// Card tile width in terminal columns.
    card_w: u16,
    /// Card tile height in terminal rows.
    card_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 5x2 keeps a 10x10 board inside a standard 80-column terminal
        // while leaving room for the status panel.
        Self {
            card_w: 5,
            card_h: 2,
        }
    }
}

impl BoardView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    /// Render into an existing framebuffer.
    ///
    /// `cursor` is the index of the card under the keyboard cursor.
    /// Callers reuse one framebuffer across frames; it is resized only
    /// when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let side = snap.grid_side as u16;
        let grid_w = side * self.card_w;
        let grid_h = side * self.card_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = 1u16;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for card in &snap.cards {
            let gx = card.id as u16 % side;
            let gy = card.id as u16 / side;
            let under_cursor = card.id as usize == cursor;
            self.draw_card(fb, start_x, start_y, gx, gy, card, under_cursor);
        }

        self.draw_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Paused => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            Phase::Won => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN"),
            Phase::Lost => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, cursor: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        gx: u16,
        gy: u16,
        card: &CardView,
        under_cursor: bool,
    ) {
        let px = start_x + 1 + gx * self.card_w;
        let py = start_y + 1 + gy * self.card_h;

        let bg = if under_cursor {
            Rgb::new(60, 60, 110)
        } else {
            Rgb::new(30, 30, 40)
        };

        if !card.face_up {
            let back = CellStyle {
                fg: Rgb::new(90, 90, 120),
                bg,
                bold: false,
                dim: false,
            };
            fb.fill_rect(px, py, self.card_w, self.card_h, '▒', back);
            return;
        }

        let fg = if card.matched {
            Rgb::new(100, 200, 120)
        } else if card.special {
            Rgb::new(240, 200, 80)
        } else {
            Rgb::new(230, 230, 230)
        };
        let face = CellStyle {
            fg,
            bg,
            bold: card.special,
            dim: card.matched,
        };
        fb.fill_rect(px, py, self.card_w, self.card_h, ' ', face);

        let tag = card_tag(&card.label);
        let tx = px + (self.card_w.saturating_sub(tag.chars().count() as u16)) / 2;
        let ty = py + self.card_h / 2;
        fb.put_str(tx, ty, &tag, face);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let heart = CellStyle {
            fg: Rgb::new(220, 80, 100),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LIVES", label);
        y = y.saturating_add(1);
        let lives = snap.lives_left();
        let shown = lives.min(10) as u16;
        for i in 0..shown {
            fb.put_char(panel_x + i, y, '♥', heart);
        }
        if lives > 10 {
            fb.put_char(panel_x + shown, y, '+', value);
            fb.put_u32(panel_x + shown + 1, y, (lives - 10) as u32, value);
        }
        if lives == 0 {
            fb.put_char(panel_x, y, '-', value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &TimerSetting::format_secs(snap.remaining_secs),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pairs_matched as u32, value);
        fb.put_char(panel_x + 2, y, '/', value);
        fb.put_u32(panel_x + 3, y, snap.pairs_needed as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.difficulty.as_str(), value);
        if let Some(boss) = snap.boss_name {
            y = y.saturating_add(1);
            let bold = CellStyle { bold: true, ..value };
            fb.put_str(panel_x, y, boss, bold);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MATCHED", label);
        y = y.saturating_add(1);
        for entry in snap.matched_log.iter().rev().take(8) {
            if y >= viewport.height {
                break;
            }
            let style = if entry.special {
                CellStyle {
                    fg: Rgb::new(240, 200, 80),
                    ..value
                }
            } else {
                value
            };
            fb.put_str(panel_x, y, &entry.display_name, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Short tag for a face-up card: word initials, or a prefix for
/// single-word names.
fn card_tag(label: &str) -> String {
    let words: Vec<&str> = label.split_whitespace().collect();
    if words.len() >= 2 {
        words
            .iter()
            .take(3)
            .filter_map(|w| w.chars().next())
            .collect()
    } else {
        label.chars().take(3).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, NullSink, Session};
    use std::time::Instant;

    fn snapshot() -> SessionSnapshot {
        let now = Instant::now();
        let mut session = Session::new(GameConfig::new(), 9, Box::new(NullSink), now);
        session.start(now);
        session.snapshot()
    }

    #[test]
    fn test_card_tag() {
        assert_eq!(card_tag("Night Warden"), "NW");
        assert_eq!(card_tag("Star Cartographer"), "SC");
        assert_eq!(card_tag("Stormcaller"), "Sto");
    }

    #[test]
    fn test_render_face_down_board() {
        let view = BoardView::default();
        let fb = view.render(&snapshot(), 0, Viewport::new(80, 30));
        let backs = fb.cells().iter().filter(|c| c.ch == '▒').count();
        // 16 cards, 5x2 tiles each.
        assert_eq!(backs, 16 * 10);
    }

    #[test]
    fn test_render_fits_tiny_viewport_without_panic() {
        let view = BoardView::default();
        let _ = view.render(&snapshot(), 0, Viewport::new(10, 5));
    }

    #[test]
    fn test_panel_shows_score_label() {
        let view = BoardView::default();
        let fb = view.render(&snapshot(), 0, Viewport::new(100, 30));
        let mut found = false;
        for y in 0..fb.height() {
            let row: String = (0..fb.width()).filter_map(|x| fb.get(x, y)).map(|c| c.ch).collect();
            if row.contains("SCORE") {
                found = true;
                break;
            }
        }
        assert!(found);
    }
}
