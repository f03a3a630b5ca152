//! Text rendering of search results in algebraic notation.

use knight_core::{Board, NotationError, Square, to_algebraic};

use crate::worker::SearchOutcome;

/// Join the squares of `path` with `" -> "`, e.g. `a8 -> b6 -> c8`.
pub fn format_path(board: Board, path: &[Square]) -> Result<String, NotationError> {
    let squares = path
        .iter()
        .map(|&sq| to_algebraic(board, sq))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(squares.join(" -> "))
}

/// One-line summary of an outcome.
pub fn status_line(outcome: &SearchOutcome) -> Result<String, NotationError> {
    let n = outcome.paths.len();
    if n == 0 {
        let req = &outcome.request;
        let board = req.board();
        return Ok(format!(
            "No paths from {} to {} within {} {}",
            to_algebraic(board, req.start)?,
            to_algebraic(board, req.end)?,
            req.max_moves,
            if req.max_moves == 1 { "move" } else { "moves" }
        ));
    }
    Ok(if n == 1 {
        "1 path found".to_string()
    } else {
        format!("{n} paths found")
    })
}

/// Every path of `outcome`, shortest first, one formatted line each.
pub fn format_outcome(outcome: &SearchOutcome) -> Result<Vec<String>, NotationError> {
    let board = outcome.request.board();
    outcome
        .sorted_by_length()
        .iter()
        .map(|p| format_path(board, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SearchRequest;
    use std::time::Duration;

    fn outcome(max_moves: usize, paths: Vec<Vec<Square>>) -> SearchOutcome {
        SearchOutcome {
            request: SearchRequest::new(8, max_moves, Square::new(0, 0), Square::new(1, 2)),
            paths,
            nodes: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn path_in_algebraic() {
        let b = Board::new(8);
        let p = [Square::new(0, 0), Square::new(1, 2), Square::new(2, 0)];
        assert_eq!(format_path(b, &p).unwrap(), "a8 -> b6 -> c8");
        assert_eq!(format_path(b, &p[..1]).unwrap(), "a8");
    }

    #[test]
    fn off_board_path_fails() {
        let b = Board::new(6);
        assert!(format_path(b, &[Square::new(7, 0)]).is_err());
    }

    #[test]
    fn status_lines() {
        assert_eq!(
            status_line(&outcome(1, vec![])).unwrap(),
            "No paths from a8 to b6 within 1 move"
        );
        assert_eq!(
            status_line(&outcome(2, vec![])).unwrap(),
            "No paths from a8 to b6 within 2 moves"
        );
        let one = vec![Square::new(0, 0), Square::new(1, 2)];
        assert_eq!(status_line(&outcome(1, vec![one.clone()])).unwrap(), "1 path found");
        assert_eq!(
            status_line(&outcome(3, vec![one.clone(), one])).unwrap(),
            "2 paths found"
        );
    }

    #[test]
    fn outcome_lines_are_shortest_first() {
        let long = vec![
            Square::new(0, 0),
            Square::new(2, 1),
            Square::new(0, 0),
            Square::new(1, 2),
        ];
        let short = vec![Square::new(0, 0), Square::new(1, 2)];
        let lines = format_outcome(&outcome(3, vec![long, short])).unwrap();
        assert_eq!(lines, vec!["a8 -> b6", "a8 -> c7 -> a8 -> b6"]);
    }
}
