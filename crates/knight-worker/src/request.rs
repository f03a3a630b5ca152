use knight_core::{Board, Square, parse_algebraic};

use crate::error::RequestError;
use crate::policy::BoardPolicy;

/// Everything needed to run one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub board_size: i32,
    pub max_moves: usize,
    pub start: Square,
    pub end: Square,
}

impl SearchRequest {
    pub fn new(board_size: i32, max_moves: usize, start: Square, end: Square) -> Self {
        Self {
            board_size,
            max_moves,
            start,
            end,
        }
    }

    /// Build a request from squares written in algebraic notation, e.g.
    /// `"a8"` and `"b6"`.
    pub fn from_algebraic(
        board_size: i32,
        max_moves: usize,
        start: &str,
        end: &str,
    ) -> Result<Self, RequestError> {
        let board = Board::new(board_size);
        Ok(Self::new(
            board_size,
            max_moves,
            parse_algebraic(board, start)?,
            parse_algebraic(board, end)?,
        ))
    }

    #[inline]
    pub fn board(&self) -> Board {
        Board::new(self.board_size)
    }

    /// Check the request against `policy` and the board bounds.
    ///
    /// The move budget is not checked here; see
    /// [`BoardPolicy::check_budget`].
    pub fn validate(&self, policy: &BoardPolicy) -> Result<(), RequestError> {
        policy.check_board_size(self.board_size)?;
        let board = self.board();
        for square in [self.start, self.end] {
            if !square.on(board) {
                return Err(RequestError::OffBoard {
                    square,
                    size: self.board_size,
                });
            }
        }
        Ok(())
    }
}
