//! Win detection over the 8 canonical lines.

use super::GridCell;
use crate::position::{LINES, WinLine};
use crate::types::Player;
use tracing::instrument;

/// Returns the first line fully owned by `player`, if any.
#[instrument(skip(cells))]
pub fn winning_line<C: GridCell>(cells: &[C; 9], player: Player) -> Option<WinLine> {
    LINES.iter().copied().find(|line| {
        line.iter()
            .all(|pos| cells[pos.to_index()].owner() == Some(player))
    })
}

/// Checks if any player owns a full line.
///
/// Returns the first winner found along with its line. Lines are scanned in
/// row, column, diagonal order.
#[instrument(skip(cells))]
pub fn check_winner<C: GridCell>(cells: &[C; 9]) -> Option<(Player, WinLine)> {
    for line in LINES {
        let [a, b, c] = line.map(|pos| cells[pos.to_index()].owner());
        if let Some(player) = a
            && b == Some(player)
            && c == Some(player)
        {
            return Some((player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Outcome};

    fn marks(cells: [Option<Player>; 9]) -> [Mark; 9] {
        cells.map(|cell| cell.map_or(Mark::Empty, Mark::Occupied))
    }

    const F: Option<Player> = Some(Player::First);
    const S: Option<Player> = Some(Player::Second);
    const E: Option<Player> = None;

    #[test]
    fn test_no_winner_empty_board() {
        let board = [Mark::Empty; 9];
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Player::First), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = marks([F, F, F, S, S, E, E, E, E]);
        assert_eq!(
            check_winner(&board),
            Some((
                Player::First,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            ))
        );
        assert_eq!(winning_line(&board, Player::Second), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = marks([F, F, S, E, S, E, S, E, F]);
        assert_eq!(
            winning_line(&board, Player::Second),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = marks([F, F, E, E, E, E, E, E, E]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_macro_line_ignores_drawn_boards() {
        let mut outcomes = [Outcome::Undecided; 9];
        outcomes[0] = Outcome::WonBy(Player::First);
        outcomes[4] = Outcome::Drawn;
        outcomes[8] = Outcome::WonBy(Player::First);
        assert_eq!(check_winner(&outcomes), None);

        outcomes[2] = Outcome::WonBy(Player::First);
        outcomes[6] = Outcome::WonBy(Player::First);
        outcomes[4] = Outcome::WonBy(Player::First);
        assert_eq!(
            winning_line(&outcomes, Player::First),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
    }
}
