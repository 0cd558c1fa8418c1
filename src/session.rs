//! Game session - turn controller and lifecycle state machine
//!
//! Owns the live board, validates human moves, delegates AI turns to the
//! configured strategy, and resolves turn skips and end-of-game. The session
//! is single-threaded and the sole owner of the board; the presentation
//! layer drives it one half-move at a time and decides all pacing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardError, Cell, Move, Player};
use crate::rules::{self, IllegalMove};
use crate::strategies::{strategy_for, Difficulty, Strategy};

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    AwaitingConfig,
    InProgress,
    Finished,
}

/// Who ended up with more discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Winner {
    One,
    Two,
    Tie,
}

/// Final score, computed from disc counts once both sides are blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub winner: Winner,
    pub score_one: usize,
    pub score_two: usize,
}

/// Read-only view of the session for the presentation layer. `outcome` is
/// populated only when the phase is `Finished`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub cells: Vec<Vec<Cell>>,
    pub mover: Player,
    pub round: u32,
    pub phase: GamePhase,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Error)]
pub enum SubmitMoveError {
    #[error("game is not in progress")]
    NotInProgress,
    #[error("it is not the human player's turn")]
    NotYourTurn,
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("{0}")]
    Illegal(#[from] IllegalMove),
}

#[derive(Debug, Error)]
pub enum AdvanceTurnError {
    #[error("game is not in progress")]
    NotInProgress,
    #[error("it is not the AI player's turn")]
    NotAiTurn,
    /// A misbehaving strategy returned a move that fails the capture rule.
    #[error("{0}")]
    Illegal(#[from] IllegalMove),
}

/// One game from configuration to finish.
///
/// Round counting follows the reference behavior: the counter starts at 1
/// and increments once per applied half-move by either side. A skipped turn
/// does not count.
pub struct GameSession {
    board: Board,
    mover: Player,
    round: u32,
    phase: GamePhase,
    difficulty: Difficulty,
    strategy: Box<dyn Strategy>,
    outcome: Option<Outcome>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("mover", &self.mover)
            .field("round", &self.round)
            .field("phase", &self.phase)
            .field("difficulty", &self.difficulty)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Start a new game. Player One moves first.
    pub fn new(size: usize, difficulty: Difficulty) -> Result<Self, BoardError> {
        Self::create(size, difficulty, None)
    }

    /// Start a new game with a seeded RNG, so Easy-tier games replay
    /// identically.
    pub fn with_seed(size: usize, difficulty: Difficulty, seed: u64) -> Result<Self, BoardError> {
        Self::create(size, difficulty, Some(seed))
    }

    fn create(size: usize, difficulty: Difficulty, seed: Option<u64>) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        tracing::info!(size, difficulty = difficulty.as_str(), "starting new game");

        Ok(Self {
            board,
            mover: Player::One,
            round: 1,
            phase: GamePhase::InProgress,
            difficulty,
            strategy: strategy_for(difficulty, seed),
            outcome: None,
        })
    }

    /// Apply the human player's chosen cell.
    ///
    /// On an illegal move the session is unchanged and it is still Player
    /// One's turn; the error is for the UI to display, not fatal.
    pub fn submit_human_move(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<BoardSnapshot, SubmitMoveError> {
        if self.phase != GamePhase::InProgress {
            return Err(SubmitMoveError::NotInProgress);
        }
        if self.mover != Player::One {
            return Err(SubmitMoveError::NotYourTurn);
        }

        // Distinguish a caller bug (bad coordinates) from a merely illegal
        // move on a real cell.
        self.board.get(row, col)?;

        let mv = Move::new(row, col);
        let flipped = rules::apply_move(&mut self.board, mv, Player::One)?;
        tracing::debug!(row, col, flipped, "human move applied");

        self.finish_half_move(Player::Two);
        Ok(self.snapshot())
    }

    /// Run the AI half-move with the configured strategy. The caller decides
    /// when; the engine has no opinion on wall-clock pacing.
    pub fn advance_ai_turn(&mut self) -> Result<BoardSnapshot, AdvanceTurnError> {
        if self.phase != GamePhase::InProgress {
            return Err(AdvanceTurnError::NotInProgress);
        }
        if self.mover != Player::Two {
            return Err(AdvanceTurnError::NotAiTurn);
        }

        // The skip resolution below guarantees Two has a legal move whenever
        // it holds the turn, satisfying the strategy contract.
        let mv = self.strategy.choose_move(&self.board, Player::Two);
        let flipped = rules::apply_move(&mut self.board, mv, Player::Two)?;
        tracing::debug!(row = mv.row, col = mv.col, flipped, "ai move applied");

        self.finish_half_move(Player::One);
        Ok(self.snapshot())
    }

    /// Current state; `outcome` appears once the game finishes.
    pub fn query_state(&self) -> BoardSnapshot {
        self.snapshot()
    }

    /// Drop back to the configuration phase. Moves are rejected until the
    /// next [`GameSession::start`].
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        self.phase = GamePhase::AwaitingConfig;
        self.outcome = None;
    }

    /// (Re)configure and begin a fresh game.
    pub fn start(&mut self, size: usize, difficulty: Difficulty) -> Result<(), BoardError> {
        *self = Self::new(size, difficulty)?;
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mover(&self) -> Player {
        self.mover
    }

    #[inline]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn finish_half_move(&mut self, next: Player) {
        self.round += 1;
        self.mover = next;
        self.resolve_turn();
    }

    /// Post-move transition: finish the game when both sides are blocked,
    /// otherwise skip a blocked mover's turn without consuming a round.
    fn resolve_turn(&mut self) {
        let one = rules::has_any_move(&self.board, Player::One);
        let two = rules::has_any_move(&self.board, Player::Two);

        if !one && !two {
            let (score_one, score_two) = self.board.counts();
            let winner = if score_one > score_two {
                Winner::One
            } else if score_two > score_one {
                Winner::Two
            } else {
                Winner::Tie
            };
            self.outcome = Some(Outcome {
                winner,
                score_one,
                score_two,
            });
            self.phase = GamePhase::Finished;
            tracing::info!(score_one, score_two, ?winner, "game finished");
            return;
        }

        let mover_blocked = match self.mover {
            Player::One => !one,
            Player::Two => !two,
        };
        if mover_blocked {
            tracing::debug!(mover = ?self.mover, "mover has no legal move, skipping turn");
            self.mover = self.mover.opponent();
        }
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.board.grid(),
            mover: self.mover,
            round: self.round,
            phase: self.phase,
            outcome: self.outcome,
        }
    }
}
