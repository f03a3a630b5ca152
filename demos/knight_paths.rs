//! List every knight path between two squares.
//!
//! Run: cargo run --bin knight-paths -- --from a8 --to b6 --max-moves 3

use clap::Parser;
use knight_demos::{Cli, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
