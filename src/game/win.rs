//! Four-in-a-row detection over a fixed table of every window on the grid.

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Pieces in a row needed to win.
pub const WINDOW_LEN: usize = 4;

/// 24 horizontal + 21 vertical + 12 + 12 diagonal.
pub const WINDOW_COUNT: usize = 69;

/// Axis a window runs along, always read upwards or rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Scan order of the window table.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// (row, col) step
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::UpLeft => (1, -1),
        }
    }

    /// Human-readable axis name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "horizontal",
            Direction::Up => "vertical",
            Direction::UpRight => "diagonal",
            Direction::UpLeft => "anti-diagonal",
        }
    }
}

/// Four consecutive cells, as (row, col) pairs starting from the lowest/leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Axis of the run.
    pub direction: Direction,
    /// Cells in step order.
    pub cells: [(usize, usize); WINDOW_LEN],
}

/// Every window that fits on the board, grouped by direction then by start
/// row and column.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [Window {
        direction: Direction::Right,
        cells: [(0, 0); WINDOW_LEN],
    }; WINDOW_COUNT];
    let mut n = 0;

    let mut d = 0;
    while d < Direction::ALL.len() {
        let direction = Direction::ALL[d];
        let (dr, dc) = direction.step();
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                let last_row = row as isize + dr * (WINDOW_LEN as isize - 1);
                let last_col = col as isize + dc * (WINDOW_LEN as isize - 1);
                if last_row >= 0
                    && last_row < ROWS as isize
                    && last_col >= 0
                    && last_col < COLS as isize
                {
                    let mut cells = [(0, 0); WINDOW_LEN];
                    let mut k = 0;
                    while k < WINDOW_LEN {
                        cells[k] = (
                            (row as isize + dr * k as isize) as usize,
                            (col as isize + dc * k as isize) as usize,
                        );
                        k += 1;
                    }
                    windows[n] = Window { direction, cells };
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }

    assert!(n == WINDOW_COUNT, "window table size mismatch");
    windows
}

/// Stateless four-in-a-row check over [`WINDOWS`].
pub struct WinDetector;

impl WinDetector {
    /// True if `player` owns all four cells of any window.
    ///
    /// Only the player who just moved needs checking: under alternating play
    /// a win can only be completed by the latest piece.
    pub fn check(board: &Board, player: Player) -> bool {
        Self::winning_window(board, player).is_some()
    }

    /// The first window fully owned by `player`, if any.
    pub fn winning_window(board: &Board, player: Player) -> Option<&'static Window> {
        let cell = player.to_cell();
        WINDOWS.iter().find(|window| {
            window
                .cells
                .iter()
                .all(|&(row, col)| board.cell_at(row, col) == cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn count(direction: Direction) -> usize {
        WINDOWS.iter().filter(|w| w.direction == direction).count()
    }

    #[test]
    fn test_window_table() {
        assert_eq!(count(Direction::Right), 24);
        assert_eq!(count(Direction::Up), 21);
        assert_eq!(count(Direction::UpRight), 12);
        assert_eq!(count(Direction::UpLeft), 12);

        for window in WINDOWS.iter() {
            let (dr, dc) = window.direction.step();
            for pair in window.cells.windows(2) {
                let (r0, c0) = pair[0];
                let (r1, c1) = pair[1];
                assert!(r1 < ROWS && c1 < COLS);
                assert_eq!(r1 as isize - r0 as isize, dr);
                assert_eq!(c1 as isize - c0 as isize, dc);
            }
        }
    }

    #[test]
    fn test_windows_are_unique() {
        for (i, a) in WINDOWS.iter().enumerate() {
            for b in WINDOWS.iter().skip(i + 1) {
                assert_ne!(a.cells, b.cells);
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!WinDetector::check(&board, Player::Red));
        assert!(!WinDetector::check(&board, Player::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.insert(0, Player::Red).unwrap();
        }
        assert!(WinDetector::check(&board, Player::Red));
        assert!(!WinDetector::check(&board, Player::Yellow));
        let window = WinDetector::winning_window(&board, Player::Red).unwrap();
        assert_eq!(window.direction, Direction::Up);
        assert_eq!(window.direction.name(), "vertical");
        assert_eq!(window.cells, [(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 3..7 {
            board.insert(col, Player::Yellow).unwrap();
        }
        let window = WinDetector::winning_window(&board, Player::Yellow).unwrap();
        assert_eq!(window.direction, Direction::Right);
        assert_eq!(window.cells[0], (0, 3));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let mut board = Board::new();
        // Red on (0,0), (1,1), (2,2), (3,3) with Yellow support underneath
        board.insert(0, Player::Red).unwrap();

        board.insert(1, Player::Yellow).unwrap();
        board.insert(1, Player::Red).unwrap();

        board.insert(2, Player::Yellow).unwrap();
        board.insert(2, Player::Yellow).unwrap();
        board.insert(2, Player::Red).unwrap();

        board.insert(3, Player::Yellow).unwrap();
        board.insert(3, Player::Yellow).unwrap();
        board.insert(3, Player::Yellow).unwrap();
        assert!(!WinDetector::check(&board, Player::Red));
        board.insert(3, Player::Red).unwrap();

        let window = WinDetector::winning_window(&board, Player::Red).unwrap();
        assert_eq!(window.direction, Direction::UpRight);
        assert_eq!(window.cells, [(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_diagonal_up_left_win() {
        let mut board = Board::new();
        board.insert(6, Player::Red).unwrap();

        board.insert(5, Player::Yellow).unwrap();
        board.insert(5, Player::Red).unwrap();

        board.insert(4, Player::Yellow).unwrap();
        board.insert(4, Player::Yellow).unwrap();
        board.insert(4, Player::Red).unwrap();

        board.insert(3, Player::Yellow).unwrap();
        board.insert(3, Player::Yellow).unwrap();
        board.insert(3, Player::Yellow).unwrap();
        board.insert(3, Player::Red).unwrap();

        let window = WinDetector::winning_window(&board, Player::Red).unwrap();
        assert_eq!(window.direction, Direction::UpLeft);
        assert_eq!(window.direction.name(), "anti-diagonal");
        assert_eq!(window.cells, [(0, 6), (1, 5), (2, 4), (3, 3)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.insert(col, Player::Red).unwrap();
        }
        assert!(!WinDetector::check(&board, Player::Red));
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let mut board = Board::new();
        board.insert(0, Player::Red).unwrap();
        board.insert(1, Player::Red).unwrap();
        board.insert(2, Player::Yellow).unwrap();
        board.insert(3, Player::Red).unwrap();
        board.insert(4, Player::Red).unwrap();
        assert!(!WinDetector::check(&board, Player::Red));
        assert!(!WinDetector::check(&board, Player::Yellow));
    }

    #[test]
    fn test_full_board_without_lines_is_a_draw() {
        // Colour by (row / 2 + col) parity: runs never exceed two in any direction
        let mut board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let player = if (row / 2 + col) % 2 == 0 { Player::Red } else { Player::Yellow };
                board.insert(col, player).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!WinDetector::check(&board, Player::Red));
        assert!(!WinDetector::check(&board, Player::Yellow));
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut board = Board::new();
        for col in 1..5 {
            board.insert(col, Player::Yellow).unwrap();
        }
        let snapshot = board;
        for _ in 0..5 {
            assert!(WinDetector::check(&board, Player::Yellow));
            assert!(!WinDetector::check(&board, Player::Red));
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_every_window_wins_on_its_own() {
        for window in WINDOWS.iter() {
            // Fill columns up to each cell so the window is reachable by gravity
            let mut board = Board::new();
            for &(row, col) in &window.cells {
                while board.column_height(col) < row {
                    board.insert(col, Player::Yellow).unwrap();
                }
                if board.cell_at(row, col) == Cell::Empty {
                    board.insert(col, Player::Red).unwrap();
                }
            }
            assert!(WinDetector::check(&board, Player::Red), "window {window:?}");
        }
    }
}
