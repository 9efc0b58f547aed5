use std::fmt;

use super::Player;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of aligned pieces needed to win
pub const RUN_LENGTH: usize = 4;

/// Step vectors (row, col) of the four line orientations: horizontal,
/// vertical, diagonal down-right and diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Coordinates (row, col) of a winning run, in scan order.
pub type Line = [(usize, usize); RUN_LENGTH];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid board size {width}x{height}: both dimensions must be non-zero and the board must fit in memory")]
pub struct SizeError {
    pub width: usize,
    pub height: usize,
}

/// Row-major grid of cells. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the default 7x6 size
    pub fn new() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    /// Create a new empty board with the given dimensions.
    ///
    /// Fails on a zero dimension, or when `width * height` cells cannot be
    /// allocated.
    pub fn with_size(width: usize, height: usize) -> Result<Self, SizeError> {
        let err = SizeError { width, height };
        if width == 0 || height == 0 {
            return Err(err);
        }
        let len = width.checked_mul(height).ok_or(err)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| err)?;
        cells.resize(len, Cell::Empty);
        Ok(Board {
            width,
            height,
            cells,
        })
    }

    /// An empty board with the same dimensions
    pub fn cleared(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.width * self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, for loops already bounded by
    /// `width`/`height`. Callers outside the crate use [`Board::cell`].
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub(crate) fn get(&self, row: usize, col: usize) -> Cell {
        self.cell(row, col).unwrap_or_else(|| {
            panic!(
                "cell ({row}, {col}) is outside a {}x{} board",
                self.width, self.height
            )
        })
    }

    /// Get the cell at a specific position, or `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Lowest empty row in a column, scanning from the bottom up
    pub fn open_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col] == Cell::Empty)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.open_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = self.open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.width + col] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if the board is completely full.
    ///
    /// Pieces stack from the bottom, so the board is full exactly when the
    /// top row is.
    pub fn is_full(&self) -> bool {
        self.cells[..self.width].iter().all(|&c| c != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Scan the whole board for four aligned pieces owned by `player`.
    ///
    /// Every cell is tried as the start of a run in each direction; the first
    /// run found is returned.
    pub fn find_four(&self, player: Player) -> Option<Line> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &dir in &DIRECTIONS {
                    if let Some(line) = self.run_from(row, col, dir, player) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// The run of `RUN_LENGTH` cells starting at (row, col) along `dir`, if
    /// every cell is on the board and owned by `player`.
    fn run_from(&self, row: usize, col: usize, dir: (isize, isize), player: Player) -> Option<Line> {
        let mut line = [(0, 0); RUN_LENGTH];
        for (step, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dir.0 * step as isize)?;
            let c = col.checked_add_signed(dir.1 * step as isize)?;
            if self.cell(r, c)? != Cell::Occupied(player) {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// Column numbers (1-based, last digit only) on top, one character per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (1..=self.width).map(|c| format!("{:>2}", c % 10)).collect();
        writeln!(f, "{}", header.join(""))?;

        for row in 0..self.height {
            let mut line = String::with_capacity(self.width * 2);
            for col in 0..self.width {
                line.push(' ');
                line.push(match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(p) => p.symbol(),
                });
            }
            if row + 1 < self.height {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_with_size_rejects_zero() {
        assert_eq!(Board::with_size(0, 6), Err(SizeError { width: 0, height: 6 }));
        assert_eq!(Board::with_size(7, 0), Err(SizeError { width: 7, height: 0 }));
        assert!(Board::with_size(1, 1).is_ok());
    }

    #[test]
    fn test_with_size_rejects_overflowing_dimensions() {
        assert_eq!(
            Board::with_size(usize::MAX, 2),
            Err(SizeError { width: usize::MAX, height: 2 })
        );
        // Cell count fits in usize but not in an allocation
        assert_eq!(
            Board::with_size(usize::MAX, 1),
            Err(SizeError { width: usize::MAX, height: 1 })
        );
    }

    #[test]
    fn test_size_error_display() {
        assert_eq!(
            SizeError { width: 0, height: 6 }.to_string(),
            "invalid board size 0x6: both dimensions must be non-zero and the board must fit in memory"
        );
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.cell(6, 0), None);
        assert_eq!(board.cell(0, 7), None);
        assert_eq!(board.cell(5, 6), Some(Cell::Empty));
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5); // bottom
        assert_eq!(board.get(5, 3), Cell::Occupied(Player::One));

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4); // stacks on top
        assert_eq!(board.get(4, 3), Cell::Occupied(Player::Two));
        assert_eq!(board.open_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..6 {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.open_row(0), None);
        assert_eq!(board.drop_piece(0, Player::Two), Err(MoveError::ColumnFull(0)));
        assert_eq!(board.occupied(), 6);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::with_size(3, 2).unwrap();
        for col in 0..3 {
            assert!(!board.is_full());
            for _ in 0..2 {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 6);
    }

    #[test]
    fn test_horizontal_four() {
        let mut board = Board::new();
        for col in 2..6 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert_eq!(board.find_four(Player::One), Some([(5, 2), (5, 3), (5, 4), (5, 5)]));
        assert_eq!(board.find_four(Player::Two), None);
    }

    #[test]
    fn test_vertical_four() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(6, Player::Two).unwrap();
        }
        assert_eq!(board.find_four(Player::Two), Some([(2, 6), (3, 6), (4, 6), (5, 6)]));
    }

    #[test]
    fn test_diagonal_down_right_four() {
        // \ from (2, 0) to (5, 3)
        let mut board = Board::new();
        for (col, filler) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            for _ in 0..filler {
                board.drop_piece(col, Player::Two).unwrap();
            }
            board.drop_piece(col, Player::One).unwrap();
        }
        assert_eq!(board.find_four(Player::One), Some([(2, 0), (3, 1), (4, 2), (5, 3)]));
    }

    #[test]
    fn test_diagonal_down_left_four() {
        // / from (2, 6) down-left to (5, 3)
        let mut board = Board::new();
        for (col, filler) in [(6, 3), (5, 2), (4, 1), (3, 0)] {
            for _ in 0..filler {
                board.drop_piece(col, Player::Two).unwrap();
            }
            board.drop_piece(col, Player::One).unwrap();
        }
        assert_eq!(board.find_four(Player::One), Some([(2, 6), (3, 5), (4, 4), (5, 3)]));
    }

    #[test]
    fn test_no_four_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(board.find_four(Player::One), None);
    }

    #[test]
    fn test_runs_do_not_wrap_around_rows() {
        // (4, 4), (4, 5), (4, 6) and (5, 0) are adjacent in the row-major
        // cell vector but not on the board.
        let mut board = Board::new();
        for col in 4..7 {
            board.drop_piece(col, Player::Two).unwrap();
            board.drop_piece(col, Player::One).unwrap();
        }
        board.drop_piece(0, Player::One).unwrap();
        assert_eq!(board.find_four(Player::One), None);
    }

    #[test]
    fn test_find_four_on_wide_board() {
        let mut board = Board::with_size(10, 4).unwrap();
        for col in 6..10 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        assert_eq!(board.find_four(Player::Two), Some([(3, 6), (3, 7), (3, 8), (3, 9)]));
    }

    #[test]
    fn test_display() {
        let mut board = Board::with_size(3, 2).unwrap();
        board.drop_piece(0, Player::One).unwrap();
        board.drop_piece(0, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();
        assert_eq!(board.to_string(), " 1 2 3\n O . .\n X . X");
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::InvalidColumn { column: 9, width: 7 }.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }
}
