//! GameView: maps a `core::FieldSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::FieldSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::EMPTY;

/// Field background (empty cells).
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Display color for a cell value. `0` (empty) and unknown ids have none and
/// render as [`BACKGROUND`].
pub fn palette(id: u8) -> Option<Rgb> {
    match id {
        1 => Some(Rgb::new(255, 13, 114)),
        2 => Some(Rgb::new(13, 194, 255)),
        3 => Some(Rgb::new(13, 255, 114)),
        4 => Some(Rgb::new(245, 56, 255)),
        5 => Some(Rgb::new(255, 142, 13)),
        6 => Some(Rgb::new(255, 225, 56)),
        7 => Some(Rgb::new(56, 119, 255)),
        _ => None,
    }
}

const CONTROLS: [(&str, &str); 5] = [
    ("←/→", "move"),
    ("↓", "drop"),
    ("q", "rotate ccw"),
    ("w", "rotate cw"),
    ("esc", "quit"),
];

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

/// Draws the field, the active piece and a controls panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Size of the bordered field in terminal cells.
    pub fn frame_size(&self, snap: &FieldSnapshot) -> (u16, u16) {
        let w = to_u16(snap.grid.width()).saturating_mul(self.cell_w);
        let h = to_u16(snap.grid.height()).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &FieldSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.grid.height() {
            for x in 0..snap.grid.width() {
                let value = snap.composited(x as i32, y as i32).unwrap_or(EMPTY);
                let glyph = match palette(value) {
                    Some(color) => Glyph::new('█', Style::new(color, BACKGROUND)),
                    None => Glyph::new(' ', Style::solid(BACKGROUND)),
                };
                let px = origin_x
                    .saturating_add(1)
                    .saturating_add(to_u16(x).saturating_mul(self.cell_w));
                let py = origin_y
                    .saturating_add(1)
                    .saturating_add(to_u16(y).saturating_mul(self.cell_h));
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
            }
        }

        self.draw_controls(fb, viewport, origin_x.saturating_add(frame_w).saturating_add(2), origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FieldSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, viewport: Viewport, x: u16, y: u16) {
        if x.saturating_add(14) > viewport.width {
            return;
        }

        let key = Style::default().bold();
        let label = Style::new(Rgb::new(160, 160, 160), BACKGROUND);
        for (i, (k, what)) in CONTROLS.iter().enumerate() {
            let row = y.saturating_add(i as u16);
            fb.put_str(x, row, k, key);
            fb.put_str(x.saturating_add(5), row, what, label);
        }
    }
}

/// Field coordinates past `u16::MAX` clamp; they are off screen either way.
fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), BACKGROUND);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    let glyph = |ch| Glyph::new(ch, style);

    fb.put(x, y, glyph('┌'));
    fb.put(right, y, glyph('┐'));
    fb.put(x, bottom, glyph('└'));
    fb.put(right, bottom, glyph('┘'));
    fb.fill_rect(x.saturating_add(1), y, w - 2, 1, glyph('─'));
    fb.fill_rect(x.saturating_add(1), bottom, w - 2, 1, glyph('─'));
    fb.fill_rect(x, y.saturating_add(1), 1, h - 2, glyph('│'));
    fb.fill_rect(right, y.saturating_add(1), 1, h - 2, glyph('│'));
}
