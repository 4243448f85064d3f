use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Single-character symbol used by the text renderings
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Errors from direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfRange { row: usize, column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        Self::check_range(row, column)?;
        Ok(self.cells[row][column])
    }

    /// Overwrite a single cell
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), BoardError> {
        Self::check_range(row, column)?;
        self.cells[row][column] = cell;
        Ok(())
    }

    /// Clipped lookup with signed coordinates; `None` outside the grid.
    pub fn cell_at(&self, row: isize, column: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.cells.get(row)?.get(column).copied()
    }

    /// Check if a column is full. Columns outside the board never accept a
    /// disc, so they report full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        !self.cells[0][column].is_empty()
    }

    /// Bottommost empty row of a column, where a dropped disc comes to rest
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// Number of cells still empty
    pub fn empty_cells(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }

    fn check_range(row: usize, column: usize) -> Result<(), BoardError> {
        if row >= ROWS || column >= COLS {
            return Err(BoardError::OutOfRange { row, column });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 1..=COLS {
            write!(f, " {column}")?;
        }
        writeln!(f)?;
        for row in self.rows() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "+{}+", "-".repeat(COLS * 2 + 1))
    }
}
