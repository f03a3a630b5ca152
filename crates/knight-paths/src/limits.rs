use crate::error::SearchError;

/// Resource budgets for a single search.
///
/// Enumeration cost grows as `8^max_moves`, so callers that accept arbitrary
/// budgets can cap the work here. Exceeding a cap aborts the search with
/// [`SearchError::LimitExceeded`]; results are never truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum number of search nodes expanded (the start square counts).
    pub max_nodes: Option<u64>,
    /// Maximum number of paths collected.
    pub max_paths: Option<usize>,
}

impl SearchLimits {
    /// No caps at all.
    pub const UNBOUNDED: Self = Self {
        max_nodes: None,
        max_paths: None,
    };
}

/// Configuration for building a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinderConfig {
    pub board_size: i32,
    pub max_moves: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: SearchLimits,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            max_moves: 3,
            limits: SearchLimits::UNBOUNDED,
        }
    }
}

/// Counts work done during one search against its [`SearchLimits`].
#[derive(Debug, Clone)]
pub(crate) struct Tracker {
    limits: SearchLimits,
    nodes: u64,
    paths: u64,
}

impl Tracker {
    pub(crate) fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            nodes: 0,
            paths: 0,
        }
    }

    #[inline]
    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub(crate) fn bump_nodes(&mut self) -> Result<(), SearchError> {
        self.nodes = self.nodes.saturating_add(1);
        check("nodes", self.nodes, self.limits.max_nodes)
    }

    #[inline]
    pub(crate) fn bump_paths(&mut self) -> Result<(), SearchError> {
        self.paths = self.paths.saturating_add(1);
        check("paths", self.paths, self.limits.max_paths.map(|p| p as u64))
    }
}

#[inline]
fn check(metric: &'static str, observed: u64, limit: Option<u64>) -> Result<(), SearchError> {
    match limit {
        Some(limit) if observed > limit => Err(SearchError::LimitExceeded {
            metric,
            limit,
            observed,
        }),
        _ => Ok(()),
    }
}
