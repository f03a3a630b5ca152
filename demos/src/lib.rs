//! Command-line front end shared by the `knight-paths` binary and its tests.
//!
//! Parses the request, applies the default [`BoardPolicy`], runs the search
//! on a worker thread and prints the result as text or JSON.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use knight_paths::SearchLimits;
use knight_worker::{
    BoardPolicy, Budget, SearchOutcome, SearchRequest, format_outcome, spawn_search, status_line,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List every knight path between two squares within a move budget"
)]
pub struct Cli {
    /// Board side length
    #[arg(long, short = 's', default_value_t = 8)]
    pub size: i32,

    /// Maximum number of knight moves per path
    #[arg(long, short = 'm', default_value_t = 3)]
    pub max_moves: usize,

    /// Start square in algebraic notation, e.g. a8
    #[arg(long)]
    pub from: String,

    /// End square in algebraic notation, e.g. b6
    #[arg(long)]
    pub to: String,

    /// Run budgets above the warning threshold
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Abort once this many search nodes have been expanded
    #[arg(long)]
    pub max_nodes: Option<u64>,

    /// Abort once more than this many paths have been found
    #[arg(long)]
    pub max_paths: Option<usize>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: String,
    /// Shortest first, in algebraic notation.
    paths: Vec<String>,
    outcome: &'a SearchOutcome,
}

/// Execute one invocation, writing the result to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let policy = BoardPolicy::default();
    policy.check_board_size(cli.size)?;

    let request = SearchRequest::from_algebraic(cli.size, cli.max_moves, &cli.from, &cli.to)
        .context("invalid square")?;
    request.validate(&policy)?;

    if let Budget::NeedsConfirmation { threshold } = policy.check_budget(cli.max_moves) {
        if !cli.yes {
            bail!(
                "{} moves is above the warning threshold of {threshold} and may take a very \
                 long time; pass --yes to run it anyway",
                cli.max_moves
            );
        }
        log::warn!(
            "running {} moves, above the warning threshold of {threshold}",
            cli.max_moves
        );
    }

    let limits = SearchLimits {
        max_nodes: cli.max_nodes,
        max_paths: cli.max_paths,
    };
    let outcome = spawn_search(request, limits)?
        .wait()
        .context("search failed")?;

    let status = status_line(&outcome)?;
    let lines = format_outcome(&outcome)?;

    if cli.json {
        let report = JsonReport {
            status,
            paths: lines,
            outcome: &outcome,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{status}")?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("knight-paths").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_status_then_paths() {
        let out = run_args(&["--from", "a8", "--to", "b6", "-m", "1"]).unwrap();
        assert_eq!(out, "1 path found\na8 -> b6\n");
    }

    #[test]
    fn prints_no_solution_status() {
        let out = run_args(&["-s", "6", "--from", "a6", "--to", "a5", "-m", "1"]).unwrap();
        assert_eq!(out, "No paths from a6 to a5 within 1 move\n");
    }

    #[test]
    fn shortest_paths_come_first() {
        let out = run_args(&["--from", "a8", "--to", "b6", "-m", "3"]).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "a8 -> b6");
        assert!(lines[2..].iter().all(|l| l.split(" -> ").count() == 4));
    }

    #[test]
    fn json_output() {
        let out = run_args(&["--from", "a8", "--to", "d5", "-m", "2", "--json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["status"], "2 paths found");
        assert_eq!(v["paths"][0], "a8 -> b6 -> d5");
        assert_eq!(v["paths"][1], "a8 -> c7 -> d5");
        assert_eq!(v["outcome"]["request"]["max_moves"], 2);
    }

    #[test]
    fn refuses_large_budget_without_yes() {
        let err = run_args(&["--from", "a8", "--to", "h1", "-m", "9"]).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }

    #[test]
    fn rejects_board_outside_policy() {
        assert!(run_args(&["-s", "5", "--from", "a5", "--to", "b3"]).is_err());
        assert!(run_args(&["-s", "17", "--from", "a1", "--to", "b3"]).is_err());
    }

    #[test]
    fn rejects_bad_square() {
        let err = run_args(&["--from", "z9", "--to", "b6"]).unwrap_err();
        assert!(format!("{err:#}").contains("invalid square"));
    }

    #[test]
    fn limits_surface_as_errors() {
        let err = run_args(&["--from", "a8", "--to", "h1", "-m", "6", "--max-nodes", "50"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("limit exceeded"));
    }
}
