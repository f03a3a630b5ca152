//! Caller-side limits on what the user may ask for.
//!
//! None of these reach the search itself: the core accepts any board of at
//! least one square and any move budget.

use crate::error::RequestError;

/// Board-size range and move-budget warning threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardPolicy {
    pub min_size: i32,
    pub max_size: i32,
    /// Budgets above this need explicit confirmation.
    pub move_warning_threshold: usize,
}

impl Default for BoardPolicy {
    fn default() -> Self {
        Self {
            min_size: 6,
            max_size: 16,
            move_warning_threshold: 8,
        }
    }
}

/// Verdict on a move budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Accepted,
    /// The budget is above `threshold` and the search may run for a long
    /// time; ask before starting it.
    NeedsConfirmation { threshold: usize },
}

impl BoardPolicy {
    pub fn check_board_size(&self, size: i32) -> Result<(), RequestError> {
        if (self.min_size..=self.max_size).contains(&size) {
            Ok(())
        } else {
            Err(RequestError::BoardSizeOutOfRange {
                size,
                min: self.min_size,
                max: self.max_size,
            })
        }
    }

    pub fn check_budget(&self, max_moves: usize) -> Budget {
        if max_moves > self.move_warning_threshold {
            Budget::NeedsConfirmation {
                threshold: self.move_warning_threshold,
            }
        } else {
            Budget::Accepted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_range() {
        let p = BoardPolicy::default();
        assert!(p.check_board_size(6).is_ok());
        assert!(p.check_board_size(16).is_ok());
        assert_eq!(
            p.check_board_size(5),
            Err(RequestError::BoardSizeOutOfRange {
                size: 5,
                min: 6,
                max: 16
            })
        );
        assert!(p.check_board_size(17).is_err());
    }

    #[test]
    fn budget_threshold() {
        let p = BoardPolicy::default();
        assert_eq!(p.check_budget(0), Budget::Accepted);
        assert_eq!(p.check_budget(8), Budget::Accepted);
        assert_eq!(
            p.check_budget(9),
            Budget::NeedsConfirmation { threshold: 8 }
        );
    }

    #[test]
    fn custom_policy() {
        let p = BoardPolicy {
            min_size: 1,
            max_size: 26,
            move_warning_threshold: 3,
        };
        assert!(p.check_board_size(1).is_ok());
        assert!(p.check_board_size(0).is_err());
        assert_eq!(p.check_budget(4), Budget::NeedsConfirmation { threshold: 3 });
    }
}
