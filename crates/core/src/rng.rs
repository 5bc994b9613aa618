//! RNG module - deterministic piece supply
//!
//! Each draw picks a shape uniformly from the catalog and an independent
//! palette index, mirroring how the tray is refilled in play.
//!
//! Uses a simple LCG so that a seed fully determines a game (handy for
//! replays, tests and bots).

use crate::pieces::{Piece, Shape};
use crate::types::{PaletteIndex, TRAY_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current state (feed it back into `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Random piece source for the tray
#[derive(Debug, Clone)]
pub struct PieceSupplier {
    catalog: Vec<Shape>,
    palette_count: u8,
    rng: SimpleRng,
}

impl PieceSupplier {
    /// The catalog must be non-empty and `palette_count` positive;
    /// `EngineConfig::validate` checks both.
    pub fn new(catalog: Vec<Shape>, palette_count: u8, seed: u32) -> Self {
        assert!(!catalog.is_empty(), "piece catalog must not be empty");
        Self {
            catalog,
            palette_count: palette_count.max(1),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn catalog(&self) -> &[Shape] {
        &self.catalog
    }

    /// Start a new sequence from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.rng = SimpleRng::new(seed);
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> Piece {
        let shape_idx = self.rng.next_range(self.catalog.len() as u32) as usize;
        let palette = self.rng.next_range(self.palette_count as u32) as PaletteIndex;
        Piece::from_shape(self.catalog[shape_idx].clone(), palette)
    }

    /// Draw a full tray
    pub fn draw_tray(&mut self) -> [Piece; TRAY_SIZE] {
        std::array::from_fn(|_| self.draw())
    }
}
