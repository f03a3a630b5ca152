//! Algebraic square notation.
//!
//! Files are letters starting at `a` for `x = 0`. Ranks count up from the
//! bottom row, so row `y` on a board of side `n` is rank `n - y`: on an
//! 8x8 board `(0, 0)` is `a8` and `(0, 7)` is `a1`.

use thiserror::Error;

use crate::geom::{Board, Square};

/// Widest board whose files fit in `a..=z`.
pub const MAX_LETTERED_FILES: i32 = 26;

/// Errors from converting between squares and algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("square {square} is not on a {board} board")]
    OffBoard { square: Square, board: Board },
    #[error("a {0} board has more files than letters a-z")]
    TooManyFiles(Board),
    #[error("malformed square {0:?}, expected a file letter followed by a rank number")]
    Malformed(String),
}

/// Render `sq` in algebraic notation for `board`.
pub fn to_algebraic(board: Board, sq: Square) -> Result<String, NotationError> {
    if board.size() > MAX_LETTERED_FILES {
        return Err(NotationError::TooManyFiles(board));
    }
    if !board.contains(sq) {
        return Err(NotationError::OffBoard { square: sq, board });
    }
    let file = char::from(b'a' + sq.x as u8);
    Ok(format!("{file}{}", board.size() - sq.y))
}

/// Parse algebraic notation such as `b6` into a square on `board`.
///
/// The file letter is case-insensitive. Leading and trailing whitespace is
/// ignored.
pub fn parse_algebraic(board: Board, s: &str) -> Result<Square, NotationError> {
    if board.size() > MAX_LETTERED_FILES {
        return Err(NotationError::TooManyFiles(board));
    }
    let trimmed = s.trim();
    let malformed = || NotationError::Malformed(s.to_string());

    let mut chars = trimmed.chars();
    let file = chars.next().ok_or_else(malformed)?.to_ascii_lowercase();
    if !file.is_ascii_lowercase() {
        return Err(malformed());
    }
    let rank_str = chars.as_str();
    if rank_str.is_empty() || !rank_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let rank: i32 = rank_str.parse().map_err(|_| malformed())?;

    let sq = Square::new(file as i32 - 'a' as i32, board.size() - rank);
    if !board.contains(sq) {
        return Err(NotationError::OffBoard { square: sq, board });
    }
    Ok(sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_on_standard_board() {
        let b = Board::new(8);
        assert_eq!(to_algebraic(b, Square::new(0, 0)).unwrap(), "a8");
        assert_eq!(to_algebraic(b, Square::new(0, 7)).unwrap(), "a1");
        assert_eq!(to_algebraic(b, Square::new(7, 7)).unwrap(), "h1");
        assert_eq!(to_algebraic(b, Square::new(1, 2)).unwrap(), "b6");
    }

    #[test]
    fn two_digit_ranks() {
        let b = Board::new(16);
        assert_eq!(to_algebraic(b, Square::new(15, 0)).unwrap(), "p16");
        assert_eq!(parse_algebraic(b, "p16").unwrap(), Square::new(15, 0));
        assert_eq!(parse_algebraic(b, "c10").unwrap(), Square::new(2, 6));
    }

    #[test]
    fn every_square_round_trips() {
        for size in 1..=MAX_LETTERED_FILES {
            let b = Board::new(size);
            for sq in b {
                let s = to_algebraic(b, sq).unwrap();
                assert_eq!(parse_algebraic(b, &s).unwrap(), sq, "{s} on {b}");
            }
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_whitespace() {
        let b = Board::new(8);
        assert_eq!(parse_algebraic(b, " B6 ").unwrap(), Square::new(1, 2));
    }

    #[test]
    fn parse_rejects_off_board() {
        let b = Board::new(6);
        assert!(matches!(
            parse_algebraic(b, "g1"),
            Err(NotationError::OffBoard { .. })
        ));
        assert!(matches!(
            parse_algebraic(b, "a7"),
            Err(NotationError::OffBoard { .. })
        ));
        assert!(matches!(
            parse_algebraic(b, "a0"),
            Err(NotationError::OffBoard { .. })
        ));
    }

    #[test]
    fn parse_rejects_malformed() {
        let b = Board::new(8);
        for s in ["", "a", "6b", "a-1", "a1x", "?3"] {
            assert!(
                matches!(parse_algebraic(b, s), Err(NotationError::Malformed(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn wide_boards_have_no_notation() {
        let b = Board::new(27);
        assert_eq!(
            to_algebraic(b, Square::ZERO),
            Err(NotationError::TooManyFiles(b))
        );
        assert!(parse_algebraic(b, "a1").is_err());
    }

    #[test]
    fn off_board_square_has_no_notation() {
        let b = Board::new(8);
        assert!(matches!(
            to_algebraic(b, Square::new(8, 0)),
            Err(NotationError::OffBoard { .. })
        ));
    }
}
