use tracing::{debug, info};

use super::board::{Board, BoardError, COLS};
use super::player::{Player, PlayerNames};
use super::win::{self, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Draw,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

/// Result of an accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed {
        row: usize,
        column: usize,
        next_player: Player,
    },
    Won {
        row: usize,
        column: usize,
        winner: Player,
    },
    Draw {
        row: usize,
        column: usize,
    },
}

impl MoveOutcome {
    /// (row, column) where the disc came to rest
    pub fn position(&self) -> (usize, usize) {
        match *self {
            MoveOutcome::Placed { row, column, .. }
            | MoveOutcome::Won { row, column, .. }
            | MoveOutcome::Draw { row, column } => (row, column),
        }
    }

    pub fn ends_game(&self) -> bool {
        !matches!(self, MoveOutcome::Placed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is not on the board")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// A disc that has been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Owned copy of everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub phase: Phase,
    pub names: PlayerNames,
    pub last_move: Option<Placement>,
    pub winning_line: Option<WinningLine>,
    pub move_count: usize,
}

impl GameSnapshot {
    pub fn name(&self, player: Player) -> &str {
        self.names.get(player)
    }
}

/// The Connect Four rules engine.
///
/// Owns the board exclusively; the only way to change it is [`drop_disc`]
/// or [`reset`]. Mutations take `&mut self`, so at most one drop can be in
/// flight at a time.
///
/// [`drop_disc`]: GameEngine::drop_disc
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    names: PlayerNames,
    last_move: Option<Placement>,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl GameEngine {
    /// Create an engine with the default player names, Player One to move
    pub fn new() -> Self {
        Self::with_names(PlayerNames::new())
    }

    pub fn with_names(names: PlayerNames) -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            phase: Phase::InProgress,
            names,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn player_name(&self, player: Player) -> &str {
        self.names.get(player)
    }

    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that currently accept a disc; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the current player's disc into `column`.
    ///
    /// Rejected drops leave the engine untouched. An accepted drop either
    /// ends the game (win before draw) or passes the turn.
    pub fn drop_disc(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let row = match self.landing_row(column) {
            Ok(row) => row,
            Err(err) => {
                debug!(column, player = ?self.current_player, %err, "drop rejected");
                return Err(err);
            }
        };

        let player = self.current_player;
        self.board.set(row, column, player.to_cell())?;
        self.last_move = Some(Placement { row, column, player });
        self.move_count += 1;
        debug!(row, column, ?player, moves = self.move_count, "disc placed");

        if let Some(line) = win::winning_line(&self.board, row, column, player) {
            self.phase = Phase::Won(player);
            self.winning_line = Some(line);
            info!(
                winner = self.names.get(player),
                moves = self.move_count,
                direction = ?line.direction,
                "game won"
            );
            return Ok(MoveOutcome::Won {
                row,
                column,
                winner: player,
            });
        }

        if self.board.empty_cells() == 0 {
            self.phase = Phase::Draw;
            info!(moves = self.move_count, "game drawn");
            return Ok(MoveOutcome::Draw { row, column });
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed {
            row,
            column,
            next_player: self.current_player,
        })
    }

    /// Validate a drop and find where the disc would land.
    fn landing_row(&self, column: usize) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column });
        }
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        self.board
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull { column })
    }

    /// Start a new game. Player names carry over.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::One;
        self.phase = Phase::InProgress;
        self.last_move = None;
        self.winning_line = None;
        self.move_count = 0;
        info!("new game started");
    }

    /// Rename a player slot; blank names fall back to the default label.
    pub fn set_player_name(&mut self, player: Player, name: &str) {
        self.names.set(player, name);
        debug!(?player, name = self.names.get(player), "player renamed");
    }

    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            phase: self.phase,
            names: self.names.clone(),
            last_move: self.last_move,
            winning_line: self.winning_line,
            move_count: self.move_count,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
