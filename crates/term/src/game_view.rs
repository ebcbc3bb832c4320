//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::{board_view, get_spawn_shape, ShapeGrid};
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_WIDTH, VISIBLE_HEIGHT};

/// Number of queue entries previewed in the side panel
pub const PREVIEW_COUNT: usize = 3;

/// Digits shown for the score
const SCORE_DIGITS: usize = 10;

const HELP_LINES: [&str; 6] = [
    "a/d  move",
    "s    down",
    "w    drop",
    "j/k  rotate",
    "l    hold",
    "q    quit",
];

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
            show_help: true,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Outer size of the bordered playfield in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (VISIBLE_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // The snapshot board already carries the active piece.
        for (y, line) in snap.board.iter().enumerate() {
            for (x, &v) in line.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match PieceKind::from_color(v) {
                    Some(kind) => self.fill_cell_rect(fb, start_x, start_y, x, y, '█', piece_style(kind)),
                    None => {
                        let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
                        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', dot);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if !snap.started {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PRESS ENTER"]);
        } else if snap.game_over {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["GAME OVER", "PRESS ENTER"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32_padded(panel_x, y + 1, snap.score, SCORE_DIGITS, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        match snap.hold {
            Some(kind) => {
                let style = if snap.can_hold {
                    piece_style(kind)
                } else {
                    piece_style(kind).dim()
                };
                y = self.draw_mini(fb, panel_x, y, get_spawn_shape(kind), style);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
                y += 1;
            }
        }
        y += 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for kind in snap.next_queue.iter().take(PREVIEW_COUNT) {
            if y >= viewport.height {
                break;
            }
            y = self.draw_mini(fb, panel_x, y, get_spawn_shape(*kind), piece_style(*kind));
            y += 1;
        }

        if self.show_help {
            let help = value.dim();
            for line in HELP_LINES {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, help);
                y += 1;
            }
        }
    }

    /// Draw the non-empty rows of a shape as it appears on the board; returns
    /// the next free row
    fn draw_mini(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        mut y: u16,
        grid: &ShapeGrid,
        style: CellStyle,
    ) -> u16 {
        let view = board_view(grid);
        for line in view.iter().filter(|line| line.iter().any(|&v| v != 0)) {
            for (dx, &v) in line.iter().enumerate() {
                if v != 0 {
                    fb.fill_rect(x + dx as u16 * self.cell_w, y, self.cell_w, 1, '█', style);
                }
            }
            y += 1;
        }
        y
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

/// Centered lines in the middle of the playfield
fn draw_overlay(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[&str],
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let top = start_y + (frame_h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
    };
    CellStyle::new(fg, PLAYFIELD_BG).bold()
}
