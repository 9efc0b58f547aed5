use tracing::{debug, info, instrument};

use super::{Board, Cell, Line, MoveError, Player, SizeError};

/// Terminal classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// What an accepted drop did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Placed,
    Won(Player),
    Draw,
}

/// Result of an accepted drop: where the piece landed and what it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub outcome: Outcome,
}

/// A single game of Connect Four.
///
/// The engine owns the grid and the turn order. The only way to mutate it
/// is [`GameEngine::drop_piece`]; once a drop ends the game every later drop
/// is rejected with [`MoveError::GameOver`] and the state is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    active: Player,
    status: GameStatus,
    winning_line: Option<Line>,
    moves: usize,
}

impl GameEngine {
    /// Create a game on the default 7x6 board, Player 1 to move
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game on a `width` x `height` board
    pub fn with_size(width: usize, height: usize) -> Result<Self, SizeError> {
        Ok(Self::from_board(Board::with_size(width, height)?))
    }

    /// A fresh game on a board of the same size, Player 1 to move
    pub fn rematch(&self) -> Self {
        Self::from_board(self.board.cleared())
    }

    fn from_board(board: Board) -> Self {
        GameEngine {
            board,
            active: Player::One,
            status: GameStatus::InProgress,
            winning_line: None,
            moves: 0,
        }
    }

    /// Player whose turn it is. Frozen once the game is over.
    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only cell lookup, `None` when out of bounds
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.cell(row, column)
    }

    /// The four cells that decided the game, if it was won
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Number of accepted drops so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Columns that would currently accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Rejections leave the game untouched:
    /// - [`MoveError::GameOver`] once the game has a result,
    /// - [`MoveError::InvalidColumn`] for a column outside the board,
    /// - [`MoveError::ColumnFull`] when the column has no empty cell.
    ///
    /// On success the win check runs first, then the draw check; only a move
    /// that ends neither passes the turn to the other player.
    #[instrument(level = "trace", skip(self), fields(player = %self.active))]
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            debug!(column, "drop rejected, game is over");
            return Err(MoveError::GameOver);
        }

        let player = self.active;
        let row = self.board.drop_piece(column, player).map_err(|err| {
            debug!(column, %err, "drop rejected");
            err
        })?;
        self.moves += 1;
        debug!(row, column, %player, moves = self.moves, "piece placed");

        let outcome = if let Some(line) = self.board.find_four(player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            info!(%player, moves = self.moves, ?line, "game won");
            Outcome::Won(player)
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.moves, "game drawn");
            Outcome::Draw
        } else {
            self.active = player.other();
            Outcome::Placed
        };

        Ok(Placement {
            row,
            column,
            player,
            outcome,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
