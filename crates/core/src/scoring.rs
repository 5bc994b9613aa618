//! Scoring module - line-clear points and the running score
//!
//! A placement that clears `n` lines at once (rows and columns both count) is worth
//! `round(n * base_per_line * multiplier(n))`. The multiplier grows with `n`, so
//! clearing several lines in one drop pays far more than clearing them one by one.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_BASE_PER_LINE, DEFAULT_MULTIPLIERS};

/// Point values for line clears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub base_per_line: u32,
    /// Index `i` applies to `i + 1` lines; the last entry covers every larger count.
    pub multipliers: Vec<f64>,
}

impl ScoringRules {
    pub fn new(base_per_line: u32, multipliers: Vec<f64>) -> Self {
        Self {
            base_per_line,
            multipliers,
        }
    }

    /// Multiplier for a clear of `lines` lines (0.0 when nothing was cleared)
    pub fn multiplier(&self, lines: usize) -> f64 {
        if lines == 0 {
            return 0.0;
        }
        match self.multipliers.len() {
            0 => 1.0,
            len => self.multipliers[lines.min(len) - 1],
        }
    }

    /// Points for clearing `lines` lines in one placement
    pub fn score(&self, lines: usize) -> u32 {
        if lines == 0 {
            return 0;
        }
        let raw = lines as f64 * self.base_per_line as f64 * self.multiplier(lines);
        raw.round().clamp(0.0, u32::MAX as f64) as u32
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PER_LINE, DEFAULT_MULTIPLIERS.to_vec())
    }
}

/// Running total plus the best total seen.
///
/// Persisting `best` between runs is the caller's business; seed it with
/// [`ScoreBoard::with_best`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    total: u32,
    best: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { total: 0, best }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add points. Returns true when this raised the best score.
    pub fn add(&mut self, delta: u32) -> bool {
        self.total = self.total.saturating_add(delta);
        if self.total > self.best {
            self.best = self.total;
            return true;
        }
        false
    }

    /// Start a new game; the best score is kept
    pub fn reset(&mut self) {
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_score_table() {
        let rules = ScoringRules::default();
        assert_eq!(rules.score(0), 0);
        assert_eq!(rules.score(1), 30);
        assert_eq!(rules.score(2), 120);
        assert_eq!(rules.score(3), 240);
        assert_eq!(rules.score(4), 400);
        // 4+ shares the top multiplier.
        assert_eq!(rules.score(5), 500);
        assert_eq!(rules.score(6), 600);
    }

    #[test]
    fn test_custom_base_and_rounding() {
        let rules = ScoringRules::new(5, vec![1.25]);
        // 1 * 5 * 1.25 = 6.25 -> 6
        assert_eq!(rules.score(1), 6);
        // 2 * 5 * 1.25 = 12.5 -> 13
        assert_eq!(rules.score(2), 13);
    }

    #[test]
    fn test_multiplier_buckets() {
        let rules = ScoringRules::default();
        assert_eq!(rules.multiplier(0), 0.0);
        assert_eq!(rules.multiplier(1), 3.0);
        assert_eq!(rules.multiplier(3), 8.0);
        assert_eq!(rules.multiplier(12), 10.0);
    }

    #[test]
    fn test_score_board_tracks_best() {
        let mut board = ScoreBoard::with_best(100);
        assert!(!board.add(60));
        assert!(board.add(60));
        assert_eq!(board.total(), 120);
        assert_eq!(board.best(), 120);

        board.reset();
        assert_eq!(board.total(), 0);
        assert_eq!(board.best(), 120);
    }
}
