//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, presenters, headless runners).
//!
//! # Board
//!
//! The board is a square grid of `size x size` cells (8 by default).
//! Coordinates: `(x, y)` where `x` is the column and `y` the row, both in
//! `0..size`. The engine never assumes which way is "up"; presenters decide.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BASE_PER_LINE` | 10 | Points per cleared line before the multiplier |
//! | `DEFAULT_MULTIPLIERS` | 3, 6, 8, 10 | Multiplier for 1, 2, 3 and 4+ lines |
//!
//! With the defaults, clearing 1, 2, 3 or 4 lines at once is worth
//! 30, 120, 240 and 400 points.

use serde::{Deserialize, Serialize};

/// Default board edge length
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest supported board edge length
pub const MAX_BOARD_SIZE: usize = 256;

/// Points per cleared line before the multiplier is applied
pub const DEFAULT_BASE_PER_LINE: u32 = 10;

/// Multiplier by lines cleared in one placement; the last entry covers every larger count
pub const DEFAULT_MULTIPLIERS: [f64; 4] = [3.0, 6.0, 8.0, 10.0];

/// Number of pieces offered to the player at once
pub const TRAY_SIZE: usize = 3;

/// Number of sprite variants a piece can be tagged with
pub const DEFAULT_PALETTE_COUNT: u8 = 7;

/// Delay between neighbouring cells of a clear effect (in milliseconds),
/// per unit of Manhattan distance from the placed piece's centroid
pub const CLEAR_STAGGER_MS: u32 = 50;

/// Board coordinate. Signed so that piece offsets can push cells off the board.
pub type Coord = i32;

/// Visual variant a piece was drawn with. Opaque to the engine.
pub type PaletteIndex = u8;

/// Cell on the board (None = empty, Some = filled by a piece with that palette)
pub type Cell = Option<PaletteIndex>;

/// A board coordinate or a piece offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: Coord,
    pub y: Coord,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, saturating at the `Coord` range (always off-board there)
    pub const fn offset(self, dx: Coord, dy: Coord) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Manhattan distance to a fractional point
    pub fn manhattan_to(self, cx: f64, cy: f64) -> f64 {
        (self.x as f64 - cx).abs() + (self.y as f64 - cy).abs()
    }
}

impl From<(Coord, Coord)> for GridPos {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: GridPos) -> GridPos {
        self.offset(rhs.x, rhs.y)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Celebration tier shown for a clear, by number of lines removed at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Callout {
    Nice,
    Great,
    Amazing,
    Legendary,
}

impl Callout {
    /// Tier for a clear of `lines` lines (None when nothing cleared)
    pub fn for_lines(lines: usize) -> Option<Self> {
        match lines {
            0 => None,
            1 | 2 => Some(Callout::Nice),
            3 => Some(Callout::Great),
            4 => Some(Callout::Amazing),
            _ => Some(Callout::Legendary),
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Callout::Nice => "nice",
            Callout::Great => "great",
            Callout::Amazing => "amazing",
            Callout::Legendary => "legendary",
        }
    }
}

/// Whether play can continue with the pieces currently on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayStatus {
    /// At least one remaining piece fits somewhere
    Playable,
    /// Every offered piece was used; a fresh set must be drawn
    NeedsRespawn,
    /// Pieces remain, and none of them fits anywhere
    GameOver,
}

impl TrayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrayStatus::Playable => "playable",
            TrayStatus::NeedsRespawn => "needs_respawn",
            TrayStatus::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_tiers() {
        assert_eq!(Callout::for_lines(0), None);
        assert_eq!(Callout::for_lines(1), Some(Callout::Nice));
        assert_eq!(Callout::for_lines(2), Some(Callout::Nice));
        assert_eq!(Callout::for_lines(3), Some(Callout::Great));
        assert_eq!(Callout::for_lines(4), Some(Callout::Amazing));
        assert_eq!(Callout::for_lines(9), Some(Callout::Legendary));
    }

    #[test]
    fn test_grid_pos_math() {
        let p = GridPos::new(2, 3) + GridPos::new(-1, 4);
        assert_eq!(p, GridPos::new(1, 7));
        assert_eq!(GridPos::new(0, 0).manhattan_to(1.5, -2.0), 3.5);
    }

    #[test]
    fn test_grid_pos_add_saturates() {
        let p = GridPos::new(i32::MAX, i32::MIN) + GridPos::new(1, -1);
        assert_eq!(p, GridPos::new(i32::MAX, i32::MIN));
    }
}
