use std::fmt;

use tracing::debug;

use super::cell::{Cell, GlyphSet};
use super::player::Player;
use crate::error::ColumnFullError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Separator placed between cells of a rendered row.
pub const DEFAULT_SEPARATOR: &str = "|";

/// A 6x7 grid. Row 0 is the bottom row, so pieces settle towards lower rows.
///
/// Cells can only be written through [`Board::insert`], which keeps every
/// column filled bottom-up with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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
    /// Row 0 is the bottom, row 5 is the top
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cells[ROWS - 1][col].is_empty()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .take_while(|&row| !self.cells[row][col].is_empty())
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a column of the board. Input must be range
    /// checked before it gets here (see [`crate::ui::prompt::parse_column`]).
    pub fn insert(&mut self, col: usize, player: Player) -> Result<usize, ColumnFullError> {
        assert!(col < COLS, "column {col} is outside the board (0..{COLS})");

        // Find the lowest empty row in this column
        for row in 0..ROWS {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = player.to_cell();
                debug!(col, row, %player, "piece inserted");
                return Ok(row);
            }
        }

        Err(ColumnFullError { column: col, player })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn move_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Rows top to bottom, emoji glyphs joined by `|`.
    pub fn render(&self) -> Vec<String> {
        self.render_with(GlyphSet::Emoji, DEFAULT_SEPARATOR)
    }

    /// Rows top to bottom, so the bottom row is printed last.
    pub fn render_with(&self, glyphs: GlyphSet, separator: &str) -> Vec<String> {
        self.cells
            .iter()
            .rev()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.glyph(glyphs))
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}
