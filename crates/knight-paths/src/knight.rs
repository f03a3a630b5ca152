use knight_core::{Board, Square};

use crate::traits::Mover;

/// The eight knight displacements, in search order.
///
/// Paths are discovered in the order these offsets are tried, so this order
/// is part of the observable output.
pub const KNIGHT_JUMPS: [Square; 8] = [
    Square::new(1, 2),
    Square::new(2, 1),
    Square::new(2, -1),
    Square::new(1, -2),
    Square::new(-1, -2),
    Square::new(-2, -1),
    Square::new(-2, 1),
    Square::new(-1, 2),
];

/// A chess knight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Knight;

impl Mover for Knight {
    fn moves(&self, board: Board, from: Square, buf: &mut Vec<Square>) {
        for d in KNIGHT_JUMPS {
            // Near i32::MAX an offset can overflow; such a square is off any board.
            let Some(n) = from.checked_add(d) else {
                continue;
            };
            if n.on(board) {
                buf.push(n);
            }
        }
    }
}

/// Whether `a` and `b` are exactly one knight jump apart.
#[inline]
pub fn is_knight_jump(a: Square, b: Square) -> bool {
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).abs();
    matches!((dx, dy), (1, 2) | (2, 1))
}
