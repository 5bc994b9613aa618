//! Game session - ties the board, the tray of offered pieces and the score together
//!
//! The session owns the only mutable board. Input controllers ask it for
//! previews while dragging and call [`GameSession::place`] once per drop; the
//! returned [`TurnOutcome`] tells presenters and score keepers what happened.
//! Nothing here is global: best-score persistence and rendering stay with the caller.

use serde::Serialize;

use crate::clear::{ClearEngine, ClearResult};
use crate::core::{
    has_any_legal_placement, preview, Board, BoardSnapshot, ConfigError, EngineConfig, Piece,
    PieceSnapshot, PieceSupplier, Preview, Rejection, ScoreBoard,
};
use crate::game_over::evaluate;
use crate::types::{GridPos, TrayStatus, TRAY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotStarted,
    SessionOver,
    SlotOutOfRange(usize),
    EmptySlot(usize),
    Rejected(Rejection),
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotStarted => "not_started",
            PlaceError::SessionOver => "game_over",
            PlaceError::SlotOutOfRange(_) | PlaceError::EmptySlot(_) => "invalid_slot",
            PlaceError::Rejected(rejection) => rejection.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotStarted => "session has not been started",
            PlaceError::SessionOver => "no offered piece fits; the game is over",
            PlaceError::SlotOutOfRange(_) => "tray slot does not exist",
            PlaceError::EmptySlot(_) => "tray slot has already been used",
            PlaceError::Rejected(rejection) => rejection.message(),
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::Rejected(rejection) => write!(f, "{rejection}"),
            PlaceError::SlotOutOfRange(slot) | PlaceError::EmptySlot(slot) => {
                write!(f, "{} (slot {})", self.message(), slot)
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for PlaceError {}

impl From<Rejection> for PlaceError {
    fn from(value: Rejection) -> Self {
        PlaceError::Rejected(value)
    }
}

/// Result of one accepted drop
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub clear: ClearResult,
    /// The running total passed the previous best
    pub new_best: bool,
    /// The tray was used up and refilled after this drop
    pub respawned: bool,
    /// Status after the refill (never `NeedsRespawn`)
    pub status: TrayStatus,
}

impl TurnOutcome {
    pub fn game_over(&self) -> bool {
        self.status == TrayStatus::GameOver
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub tray: Vec<Option<PieceSnapshot>>,
    pub placeable: Vec<bool>,
    pub score: u32,
    pub best: u32,
    pub turns: u32,
    pub status: TrayStatus,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    engine: ClearEngine,
    supplier: PieceSupplier,
    tray: [Option<Piece>; TRAY_SIZE],
    score: ScoreBoard,
    status: TrayStatus,
    started: bool,
    turns: u32,
}

impl GameSession {
    /// Build a session from a validated config. Call [`start`](Self::start) to deal pieces.
    pub fn new(config: &EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size),
            engine: ClearEngine::new(config.scoring_rules()),
            supplier: PieceSupplier::new(config.shapes()?, config.palette_count, seed),
            tray: Default::default(),
            score: ScoreBoard::new(),
            status: TrayStatus::NeedsRespawn,
            started: false,
            turns: 0,
        })
    }

    /// Carry over a best score loaded by the caller
    pub fn with_best(mut self, best: u32) -> Self {
        self.score = ScoreBoard::with_best(best.max(self.score.best()));
        self
    }

    /// Deal the first tray. No-op once started.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.refill_tray();
    }

    /// New game on the same config: empty board, score reset (best kept), new pieces.
    pub fn restart(&mut self, seed: u32) {
        self.board.reset();
        self.score.reset();
        self.supplier.reseed(seed);
        self.tray = Default::default();
        self.turns = 0;
        self.started = true;
        self.refill_tray();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &[Option<Piece>] {
        &self.tray
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn status(&self) -> TrayStatus {
        self.status
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.status == TrayStatus::GameOver
    }

    /// Number of accepted drops this game
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Per slot: whether the piece there fits anywhere (false for used slots)
    pub fn placeable(&self) -> Vec<bool> {
        self.tray
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .is_some_and(|piece| has_any_legal_placement(&self.board, piece))
            })
            .collect()
    }

    fn piece_in(&self, slot: usize) -> Result<&Piece, PlaceError> {
        self.tray
            .get(slot)
            .ok_or(PlaceError::SlotOutOfRange(slot))?
            .as_ref()
            .ok_or(PlaceError::EmptySlot(slot))
    }

    /// Preview dropping the piece in `slot` at `origin`
    pub fn preview(&self, slot: usize, origin: GridPos) -> Result<Preview, PlaceError> {
        let piece = self.piece_in(slot)?;
        Ok(preview(&self.board, piece, origin))
    }

    /// Drop the piece in `slot` at `origin`.
    ///
    /// On success the slot is emptied, the score updated, the tray refilled if
    /// it ran out, and the game-over status recomputed. On error nothing changes.
    pub fn place(&mut self, slot: usize, origin: GridPos) -> Result<TurnOutcome, PlaceError> {
        if !self.started {
            return Err(PlaceError::NotStarted);
        }
        if self.game_over() {
            return Err(PlaceError::SessionOver);
        }
        let piece = self.piece_in(slot)?.clone();
        let clear = self.engine.attempt_place(&mut self.board, &piece, origin)?;

        self.tray[slot] = None;
        self.turns += 1;
        let new_best = self.score.add(clear.score_delta);

        self.status = evaluate(&self.board, &self.tray);
        let respawned = self.status == TrayStatus::NeedsRespawn;
        if respawned {
            self.refill_tray();
        }
        if self.game_over() {
            log::info!(
                "game over after {} turns with score {}",
                self.turns,
                self.score.total()
            );
        }

        Ok(TurnOutcome {
            clear,
            new_best,
            respawned,
            status: self.status,
        })
    }

    fn refill_tray(&mut self) {
        let pieces = self.supplier.draw_tray();
        log::debug!("dealt {} new pieces", pieces.len());
        for (slot, piece) in self.tray.iter_mut().zip(pieces) {
            *slot = Some(piece);
        }
        self.status = evaluate(&self.board, &self.tray);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: BoardSnapshot::from(&self.board),
            tray: self
                .tray
                .iter()
                .map(|slot| slot.as_ref().map(PieceSnapshot::from))
                .collect(),
            placeable: self.placeable(),
            score: self.score.total(),
            best: self.score.best(),
            turns: self.turns,
            status: self.status,
        }
    }
}
