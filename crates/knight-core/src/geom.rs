//! Geometry primitives: [`Square`] and [`Board`].

use std::fmt;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board square. `x` is the file (grows right), `y` is the row (grows
/// down, row 0 is the top row as drawn).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new square.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `d`, or `None` if either coordinate overflows `i32`.
    #[inline]
    pub const fn checked_add(self, d: Square) -> Option<Self> {
        match (self.x.checked_add(d.x), self.y.checked_add(d.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Whether the square lies on `board`.
    #[inline]
    pub fn on(self, board: Board) -> bool {
        board.contains(self)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A square board covering `[0, size) × [0, size)`.
///
/// Any `i32` is accepted as a size; boards with `size < 1` contain no squares
/// and report `false` from [`is_valid`](Self::is_valid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Create a board with the given side length.
    #[inline]
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    /// Side length.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Whether the board has at least one square.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.size >= 1
    }

    /// Whether `sq` lies on the board.
    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        sq.x >= 0 && sq.x < self.size && sq.y >= 0 && sq.y < self.size
    }

    /// Whether the board has no squares.
    #[inline]
    pub fn is_empty(self) -> bool {
        !self.is_valid()
    }

    /// Row-major iterator over every square.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            cur: Square::ZERO,
        }
    }
}

impl IntoIterator for Board {
    type Item = Square;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the squares of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    cur: Square,
}

impl Iterator for BoardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.board.is_empty() || self.cur.y >= self.board.size {
            return None;
        }
        let sq = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.board.size {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.board.is_empty() || self.cur.y >= self.board.size {
            return (0, Some(0));
        }
        let w = self.board.size as usize;
        let remaining_in_row = (self.board.size - self.cur.x) as usize;
        let remaining_rows = (self.board.size - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoardIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn square_round_trip() {
        let sq = Square::new(3, 7);
        let json = serde_json::to_string(&sq).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(sq, back);
    }

    #[test]
    fn board_round_trip() {
        let b = Board::new(12);
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
