//! Presentation adapters over the game engine: a ratatui terminal UI and a
//! line-oriented console front end. Neither makes game decisions; both turn
//! [`Placement`](crate::game::Placement)s and rejections into text.

mod app;
pub mod console;
mod game_view;

pub use app::App;

use crate::game::{GameStatus, MoveError, Outcome};

/// End-of-game announcement, `None` while the game is still running
pub fn announcement(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("{player} won!")),
        GameStatus::Draw => Some("Tie game!".to_string()),
    }
}

/// Same as [`announcement`], keyed on a drop's outcome
pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Placed => None,
        Outcome::Won(player) => announcement(GameStatus::Won(player)),
        Outcome::Draw => announcement(GameStatus::Draw),
    }
}

/// User-facing text for a rejected drop. Columns are shown 1-based.
pub fn rejection_message(err: &MoveError) -> String {
    match err {
        MoveError::ColumnFull(col) => format!("Column {} is full, pick another", col + 1),
        MoveError::InvalidColumn { width, .. } => {
            format!("Pick a column between 1 and {width}")
        }
        MoveError::GameOver => "Game over!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_announcement() {
        assert_eq!(announcement(GameStatus::InProgress), None);
        assert_eq!(
            announcement(GameStatus::Won(Player::Two)).as_deref(),
            Some("Player 2 won!")
        );
        assert_eq!(announcement(GameStatus::Draw).as_deref(), Some("Tie game!"));
    }

    #[test]
    fn test_outcome_message_matches_announcement() {
        assert_eq!(outcome_message(Outcome::Placed), None);
        assert_eq!(
            outcome_message(Outcome::Won(Player::One)),
            announcement(GameStatus::Won(Player::One))
        );
    }

    #[test]
    fn test_rejection_message_is_one_based() {
        assert_eq!(
            rejection_message(&MoveError::ColumnFull(0)),
            "Column 1 is full, pick another"
        );
        assert_eq!(
            rejection_message(&MoveError::InvalidColumn { column: 9, width: 7 }),
            "Pick a column between 1 and 7"
        );
    }
}
