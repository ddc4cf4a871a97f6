//! A single 3x3 micro board.

use crate::position::Position;
use crate::rules;
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// 3x3 micro board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MicroBoard {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl MicroBoard {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Sets the mark at the given position.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Returns the empty positions.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats one row (0-2) of the board, e.g. `○·×`.
    pub fn display_row(&self, row: usize) -> String {
        self.cells[row * 3..row * 3 + 3]
            .iter()
            .map(|mark| match mark {
                Mark::Empty => '·',
                Mark::Occupied(player) => player.symbol(),
            })
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        (0..3)
            .map(|row| {
                self.display_row(row)
                    .chars()
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl From<[Option<Player>; 9]> for MicroBoard {
    fn from(cells: [Option<Player>; 9]) -> Self {
        Self {
            cells: cells.map(|cell| cell.map_or(Mark::Empty, Mark::Occupied)),
        }
    }
}
