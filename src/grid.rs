//! Pad layout: 6 × 5 pads, the last one switches themes.

use crate::{
    fx::effect::Vec2,
    theme::{theme_count, Theme},
};

pub const COLUMNS: usize = 6;
pub const ROWS: usize = 5;
pub const PAD_COUNT: usize = COLUMNS * ROWS;
pub const MODE_PAD: usize = PAD_COUNT - 1;

/// Keys in pad order; only the first `MODE_PAD` entries reach a pad.
pub const KEY_ORDER: &str = "1234567890qwertyuiopasdfghjklzxcvbnm";
pub const MODE_KEY: char = 'm';

const ROW_LETTERS: [char; ROWS] = ['A', 'B', 'C', 'D', 'E'];

/// Pad triggered by a (case-insensitive) key, if any.
pub fn pad_for_key(key: char) -> Option<usize> {
    let key = key.to_ascii_lowercase();
    if key == MODE_KEY {
        return Some(MODE_PAD);
    }
    KEY_ORDER
        .chars()
        .position(|k| k == key)
        .filter(|&index| index < MODE_PAD)
}

pub fn is_mode_pad(index: usize) -> bool {
    index == MODE_PAD
}

/// Row and column of a pad, row-major from the top left.
pub fn cell(index: usize) -> (usize, usize) {
    (index / COLUMNS, index % COLUMNS)
}

/// Label printed on a regular pad: row letter then 1-based column.
pub fn pad_label(index: usize) -> String {
    let (row, col) = cell(index);
    format!("{}{}", ROW_LETTERS[row % ROWS], col + 1)
}

/// Mode pad label showing the 1-based current theme.
pub fn mode_pad_label(theme_index: usize) -> String {
    format!("MODE {}", theme_index + 1)
}

/// Label for any pad given the current theme.
pub fn label(index: usize, theme_index: usize) -> String {
    if is_mode_pad(index) {
        mode_pad_label(theme_index)
    } else {
        pad_label(index)
    }
}

/// Theme banner, e.g. `"Nocturne Glass 1/5"`.
pub fn mode_label(theme: &Theme, theme_index: usize) -> String {
    format!("{} {}/{}", theme.name, theme_index + 1, theme_count())
}

/// Tint of a pad under `theme`.
pub fn pad_tint(theme: &Theme, index: usize) -> &'static str {
    if is_mode_pad(index) {
        theme.accent
    } else {
        theme.palette_at(index)
    }
}

/// Center of pad `index` when the grid fills a `width` × `height` viewport.
pub fn pad_center(index: usize, width: f32, height: f32) -> Vec2 {
    let (row, col) = cell(index);
    Vec2::new(
        (col as f32 + 0.5) * width / COLUMNS as f32,
        (row as f32 + 0.5) * height / ROWS as f32,
    )
}

/// Pad under viewport point `at`, if the point lies inside the grid.
pub fn pad_at(at: Vec2, width: f32, height: f32) -> Option<usize> {
    if width <= 0.0 || height <= 0.0 || at.x < 0.0 || at.y < 0.0 {
        return None;
    }
    let col = (at.x / width * COLUMNS as f32) as usize;
    let row = (at.y / height * ROWS as f32) as usize;
    (col < COLUMNS && row < ROWS).then_some(row * COLUMNS + col)
}

/// Hold-and-sweep tracking for one pointer.
///
/// Pressing triggers the pad under the pointer. While held, entering a
/// different pad triggers it once; lingering on the same pad, or crossing
/// a gap and coming back to it, does not.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerSweep {
    held: bool,
    last: Option<usize>,
}

impl PointerSweep {
    /// Pointer went down over `pad`; returns the pad to trigger.
    pub fn press(&mut self, pad: Option<usize>) -> Option<usize> {
        let pad = pad?;
        self.held = true;
        self.last = Some(pad);
        Some(pad)
    }

    /// Pointer moved over `pad`; returns the pad to trigger, if any.
    pub fn move_to(&mut self, pad: Option<usize>) -> Option<usize> {
        if !self.held {
            return None;
        }
        let pad = pad?;
        if self.last == Some(pad) {
            return None;
        }
        self.last = Some(pad);
        Some(pad)
    }

    pub fn release(&mut self) {
        *self = Self::default();
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
