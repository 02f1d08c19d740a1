use rand::Rng;
use tracing::{debug, trace};

use super::board::{Board, COLS};
use super::player::Player;
use super::win::WinDetector;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Where the game is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Player),
    Inserting(Player),
    CheckingWin(Player),
    GameOver(GameOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    phase: Phase,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            phase: Phase::AwaitingMove(first),
            moves: Vec::new(),
        }
    }

    /// Create initial game state with a randomly chosen first player
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Player::pick_first(rng))
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(p) | Phase::Inserting(p) | Phase::CheckingWin(p) => Some(p),
            Phase::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Drop the current player's piece into `column` and advance the turn.
    ///
    /// A full or out-of-range column leaves the board and the player to move
    /// untouched.
    pub fn play(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        let player = match self.phase {
            Phase::AwaitingMove(p) => p,
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::Inserting(p) | Phase::CheckingWin(p) => p,
        };

        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }

        self.transition(Phase::Inserting(player));
        if let Err(err) = self.board.insert(column, player) {
            self.transition(Phase::AwaitingMove(player));
            return Err(MoveError::ColumnFull(err));
        }
        self.moves.push(column);

        self.transition(Phase::CheckingWin(player));
        let outcome = if WinDetector::check(&self.board, player) {
            GameOutcome::Win(player)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };

        if outcome.is_terminal() {
            debug!(?outcome, moves = self.moves.len(), "game over");
            self.transition(Phase::GameOver(outcome));
        } else {
            self.transition(Phase::AwaitingMove(player.other()));
        }
        Ok(outcome)
    }

    fn transition(&mut self, next: Phase) {
        trace!(from = ?self.phase, to = ?next, "phase");
        self.phase = next;
    }
}
