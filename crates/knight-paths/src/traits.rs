use knight_core::{Board, Square};

/// Move-generation interface used by the path search.
pub trait Mover {
    /// Append the on-board successors of `from` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    ///
    /// The order is observable: it decides the discovery order of paths.
    fn moves(&self, board: Board, from: Square, buf: &mut Vec<Square>);
}
