//! Draw detection for nine-cell grids.

use super::GridCell;
use tracing::instrument;

/// Checks if every cell is taken.
///
/// A full micro board with no line is drawn. At macro level, "full" means
/// every micro board is decided.
#[instrument(skip(cells))]
pub fn is_full<C: GridCell>(cells: &[C; 9]) -> bool {
    cells.iter().all(|cell| !cell.is_vacant())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::{Mark, Outcome, Player};

    fn is_draw(board: &[Mark; 9]) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[Mark::Empty; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = [Mark::Empty; 9];
        board[4] = Mark::Occupied(Player::First);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // ○ × ○ / ○ × × / × ○ ○
        let f = Mark::Occupied(Player::First);
        let s = Mark::Occupied(Player::Second);
        let board = [f, s, f, f, s, s, s, f, f];
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let f = Mark::Occupied(Player::First);
        let s = Mark::Occupied(Player::Second);
        let board = [f, f, f, s, s, f, s, f, s];
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_macro_full_when_all_decided() {
        let mut outcomes = [Outcome::Drawn; 9];
        outcomes[3] = Outcome::WonBy(Player::Second);
        assert!(is_full(&outcomes));
        outcomes[7] = Outcome::Undecided;
        assert!(!is_full(&outcomes));
    }
}
