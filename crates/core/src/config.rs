//! Engine configuration
//!
//! Loaded from JSON (every field optional) and/or environment variables,
//! then validated once before a session is built.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pieces::{standard_catalog, Shape, ShapeError};
use crate::scoring::ScoringRules;
use crate::types::{
    Coord, DEFAULT_BASE_PER_LINE, DEFAULT_BOARD_SIZE, DEFAULT_MULTIPLIERS, DEFAULT_PALETTE_COUNT,
    MAX_BOARD_SIZE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size must be positive")]
    ZeroBoardSize,
    #[error("board size {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),
    #[error("multiplier table must have at least one entry")]
    EmptyMultipliers,
    #[error("multiplier {0} is negative or not finite")]
    BadMultiplier(f64),
    #[error("palette count must be positive")]
    ZeroPalette,
    #[error("piece catalog is empty")]
    EmptyCatalog,
    #[error("catalog shape {index} is invalid")]
    BadShape {
        index: usize,
        #[source]
        source: ShapeError,
    },
    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub board_size: usize,
    pub base_per_line: u32,
    /// Multiplier for 1, 2, 3, ... lines; the last entry covers larger counts
    pub multipliers: Vec<f64>,
    pub palette_count: u8,
    /// Custom piece shapes as offset lists; the standard catalog when absent
    pub catalog: Option<Vec<Vec<(Coord, Coord)>>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            base_per_line: DEFAULT_BASE_PER_LINE,
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            palette_count: DEFAULT_PALETTE_COUNT,
            catalog: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Defaults overridden by `BLOCK_BLAST_BOARD_SIZE`, `BLOCK_BLAST_BASE_PER_LINE`
    /// and `BLOCK_BLAST_PALETTE_COUNT`
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of `self`. Unparseable values are
    /// logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(size) = env_override("BLOCK_BLAST_BOARD_SIZE") {
            self.board_size = size;
        }
        if let Some(base) = env_override("BLOCK_BLAST_BASE_PER_LINE") {
            self.base_per_line = base;
        }
        if let Some(count) = env_override("BLOCK_BLAST_PALETTE_COUNT") {
            self.palette_count = count;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        if self.multipliers.is_empty() {
            return Err(ConfigError::EmptyMultipliers);
        }
        if let Some(&bad) = self
            .multipliers
            .iter()
            .find(|m| !m.is_finite() || **m < 0.0)
        {
            return Err(ConfigError::BadMultiplier(bad));
        }
        if self.palette_count == 0 {
            return Err(ConfigError::ZeroPalette);
        }
        self.shapes().map(|_| ())
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules::new(self.base_per_line, self.multipliers.clone())
    }

    /// Resolved piece catalog
    pub fn shapes(&self) -> Result<Vec<Shape>, ConfigError> {
        let Some(catalog) = &self.catalog else {
            return Ok(standard_catalog());
        };
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        catalog
            .iter()
            .enumerate()
            .map(|(index, offsets)| {
                Shape::new(offsets.iter().copied())
                    .map_err(|source| ConfigError::BadShape { index, source })
            })
            .collect()
    }
}

fn env_override<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}
