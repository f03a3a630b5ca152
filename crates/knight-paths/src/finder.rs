use knight_core::{Board, Context, Square};

use crate::error::SearchError;
use crate::knight::Knight;
use crate::limits::{FinderConfig, SearchLimits, Tracker};
use crate::traits::Mover;

/// An ordered sequence of squares from a start square to an end square.
pub type Path = Vec<Square>;

/// The outcome of a successful [`PathFinder::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Every path found, in discovery order.
    pub paths: Vec<Path>,
    /// Number of search nodes expanded, the start square included.
    pub nodes: u64,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Enumerates every move sequence between two squares within a move budget.
///
/// The search is an exhaustive depth-first walk. A node equal to the end
/// square is recorded and never extended, and a node at the move budget is
/// abandoned. Squares may repeat within one path; nothing is pruned beyond
/// the budget. The work is `O(8^max_moves)` in the worst case.
///
/// A `PathFinder` holds only its parameters. Every search allocates its own
/// path stack, so one finder can serve concurrent searches through `&self`.
#[derive(Debug, Clone)]
pub struct PathFinder<M: Mover = Knight> {
    board: Board,
    max_moves: usize,
    limits: SearchLimits,
    mover: M,
}

impl PathFinder<Knight> {
    /// Create a knight path finder for a `board_size`×`board_size` board.
    pub fn new(board_size: i32, max_moves: usize) -> Result<Self, SearchError> {
        Self::with_mover(Board::new(board_size), max_moves, Knight)
    }

    /// Create a knight path finder from a [`FinderConfig`], limits included.
    pub fn from_config(config: &FinderConfig) -> Result<Self, SearchError> {
        Ok(Self::new(config.board_size, config.max_moves)?.with_limits(config.limits))
    }
}

impl<M: Mover> PathFinder<M> {
    /// Create a path finder that moves pieces with `mover`.
    pub fn with_mover(board: Board, max_moves: usize, mover: M) -> Result<Self, SearchError> {
        if !board.is_valid() {
            return Err(SearchError::InvalidBoardSize { size: board.size() });
        }
        Ok(Self {
            board,
            max_moves,
            limits: SearchLimits::UNBOUNDED,
            mover,
        })
    }

    /// Replace the resource limits applied to every search.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Find every path from `start` to `end`, in discovery order.
    ///
    /// An empty result means no path exists within the move budget. Errors
    /// are limited to off-board input and the configured limits.
    pub fn find_all_paths(&self, start: Square, end: Square) -> Result<Vec<Path>, SearchError> {
        self.search(start, end, &Context::new()).map(|report| report.paths)
    }

    /// Like [`find_all_paths`](Self::find_all_paths), but checks `ctx` at
    /// every node and reports how much work was done.
    pub fn search(
        &self,
        start: Square,
        end: Square,
        ctx: &Context,
    ) -> Result<SearchReport, SearchError> {
        self.check_on_board(start)?;
        self.check_on_board(end)?;

        log::debug!(
            "searching {} -> {} on {} within {} moves",
            start,
            end,
            self.board,
            self.max_moves
        );

        let mut walk = Walk {
            finder: self,
            end,
            ctx,
            tracker: Tracker::new(self.limits),
            path: Vec::with_capacity(self.max_moves.min(64) + 1),
            paths: Vec::new(),
            levels: Vec::new(),
        };
        walk.path.push(start);

        match walk.descend(start, 0) {
            Ok(()) => {
                log::debug!(
                    "found {} paths {} -> {} ({} nodes)",
                    walk.paths.len(),
                    start,
                    end,
                    walk.tracker.nodes()
                );
                Ok(SearchReport {
                    nodes: walk.tracker.nodes(),
                    paths: walk.paths,
                })
            }
            Err(e) => {
                log::debug!("search {} -> {} aborted: {}", start, end, e);
                Err(e)
            }
        }
    }

    /// Whether `path` is a result this finder could return for `start` and
    /// `end`.
    ///
    /// Checks that the path starts and ends at the given squares, stays on
    /// the board, advances one mover step at a time, fits in the move budget,
    /// and touches `end` only at its last square.
    pub fn is_valid_path(&self, path: &[Square], start: Square, end: Square) -> bool {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return false;
        };
        if first != start || last != end {
            return false;
        }
        if path.len() > self.max_moves.saturating_add(1) {
            return false;
        }
        if !path.iter().all(|&sq| sq.on(self.board)) {
            return false;
        }
        if path[..path.len() - 1].contains(&end) {
            return false;
        }
        let mut buf = Vec::with_capacity(8);
        path.windows(2).all(|w| {
            buf.clear();
            self.mover.moves(self.board, w[0], &mut buf);
            buf.contains(&w[1])
        })
    }

    fn check_on_board(&self, sq: Square) -> Result<(), SearchError> {
        if sq.on(self.board) {
            Ok(())
        } else {
            Err(SearchError::OffBoard {
                square: sq,
                size: self.board.size(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Walk: the per-call search state
// ---------------------------------------------------------------------------

struct Walk<'a, M: Mover> {
    finder: &'a PathFinder<M>,
    end: Square,
    ctx: &'a Context,
    tracker: Tracker,
    // Shared backtracking stack: pushed before descending, popped after.
    path: Vec<Square>,
    paths: Vec<Path>,
    // Successor buffers, one per depth, reused across siblings.
    levels: Vec<Vec<Square>>,
}

impl<M: Mover> Walk<'_, M> {
    fn descend(&mut self, current: Square, depth: usize) -> Result<(), SearchError> {
        if self.ctx.is_done() {
            return Err(SearchError::Cancelled);
        }
        self.tracker.bump_nodes()?;

        if current == self.end {
            self.tracker.bump_paths()?;
            self.paths.push(self.path.clone());
            return Ok(());
        }
        if depth >= self.finder.max_moves {
            return Ok(());
        }

        if depth == self.levels.len() {
            self.levels.push(Vec::with_capacity(8));
        }
        let mut buf = std::mem::take(&mut self.levels[depth]);
        buf.clear();
        self.finder
            .mover
            .moves(self.finder.board, current, &mut buf);

        let mut result = Ok(());
        for &next in buf.iter() {
            self.path.push(next);
            result = self.descend(next, depth + 1);
            self.path.pop();
            if result.is_err() {
                break;
            }
        }

        self.levels[depth] = buf;
        result
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let pf = PathFinder::new(8, 3).unwrap();
        let report = pf
            .search(Square::new(0, 0), Square::new(1, 2), &Context::new())
            .unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
