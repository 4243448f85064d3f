//! Incremental win detection.
//!
//! Only the four lines through the most recently placed disc can contain a
//! new run, so each check looks at a fixed window of seven cells per
//! direction instead of rescanning the board.

use super::{Board, Player};

/// Discs in a row needed to win
pub const CONNECT: usize = 4;

/// Cells examined on each side of the placed disc
const REACH: isize = CONNECT as isize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same column
    Vertical,
    /// Same row
    Horizontal,
    /// Top-left to bottom-right (`\`)
    Diagonal,
    /// Top-right to bottom-left (`/`)
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row, column) step between neighbouring cells on the line
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed run of four discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    /// (row, column) of each disc, in scan order
    pub cells: [(usize, usize); CONNECT],
}

impl WinningLine {
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.contains(&(row, column))
    }
}

/// Whether the disc at (row, column) completed four in a row for `player`.
pub fn has_winning_line_through(board: &Board, row: usize, column: usize, player: Player) -> bool {
    winning_line(board, row, column, player).is_some()
}

/// The first run of four through (row, column), checking vertical,
/// horizontal, then both diagonals.
pub fn winning_line(board: &Board, row: usize, column: usize, player: Player) -> Option<WinningLine> {
    Direction::ALL
        .iter()
        .find_map(|&direction| run_in_direction(board, row, column, player, direction))
}

/// Scan offsets -3..=3 along `direction`, counting consecutive discs of
/// `player`. Positions off the board break the run like any other cell.
fn run_in_direction(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
    direction: Direction,
) -> Option<WinningLine> {
    let (dr, dc) = direction.step();
    let (row, column) = (row as isize, column as isize);
    let target = player.to_cell();
    let at = |offset: isize| (row + offset * dr, column + offset * dc);

    let mut run = 0;
    for offset in -REACH..=REACH {
        let (r, c) = at(offset);
        if board.cell_at(r, c) != Some(target) {
            run = 0;
            continue;
        }

        run += 1;
        if run == CONNECT {
            let first = offset - REACH;
            let cells = std::array::from_fn(|i| {
                let (r, c) = at(first + i as isize);
                (r as usize, c as usize)
            });
            return Some(WinningLine { direction, cells });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    fn place(board: &mut Board, cells: &[(usize, usize)], cell: Cell) {
        for &(row, col) in cells {
            board.set(row, col, cell).unwrap();
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], Cell::PlayerOne);

        let line = winning_line(&board, 5, 2, Player::One).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        place(&mut board, &[(5, 3), (4, 3), (3, 3), (2, 3)], Cell::PlayerTwo);

        let line = winning_line(&board, 2, 3, Player::Two).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(2, 3), (3, 4), (4, 5), (5, 6)], Cell::PlayerOne);

        let line = winning_line(&board, 4, 5, Player::One).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
        assert!(line.contains(2, 3));
        assert!(line.contains(5, 6));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (4, 1), (3, 2), (2, 3)], Cell::PlayerOne);

        let line = winning_line(&board, 2, 3, Player::One).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.cells, [(2, 3), (3, 2), (4, 1), (5, 0)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (5, 1), (5, 2)], Cell::PlayerOne);
        assert!(!has_winning_line_through(&board, 5, 1, Player::One));
    }

    #[test]
    fn test_opponent_disc_breaks_run() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (5, 1), (5, 3), (5, 4)], Cell::PlayerOne);
        place(&mut board, &[(5, 2)], Cell::PlayerTwo);

        assert!(!has_winning_line_through(&board, 5, 1, Player::One));
        assert!(!has_winning_line_through(&board, 5, 3, Player::One));
    }

    #[test]
    fn test_line_belongs_to_the_given_player() {
        let mut board = Board::new();
        place(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], Cell::PlayerTwo);
        assert!(!has_winning_line_through(&board, 5, 0, Player::One));
        assert!(has_winning_line_through(&board, 5, 0, Player::Two));
    }

    #[test]
    fn test_run_longer_than_four_wins() {
        let mut board = Board::new();
        place(
            &mut board,
            &[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)],
            Cell::PlayerTwo,
        );
        assert!(has_winning_line_through(&board, 5, 5, Player::Two));
    }

    #[test]
    fn test_run_outside_window_is_ignored() {
        let mut board = Board::new();
        // Four in a row on the left; the checked disc is not part of it.
        place(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], Cell::PlayerOne);
        place(&mut board, &[(0, 6)], Cell::PlayerOne);
        assert!(!has_winning_line_through(&board, 0, 6, Player::One));
    }

    #[test]
    fn test_corners_clip_without_panicking() {
        let board = Board::new();
        for &(row, col) in &[(0, 0), (0, COLS - 1), (ROWS - 1, 0), (ROWS - 1, COLS - 1)] {
            assert!(!has_winning_line_through(&board, row, col, Player::One));
        }
    }
}
