//! Terminal pathfinding visualizer using crossterm.
//!
//! Run: cargo run --bin pathfinder [ROWS]
//!
//! Left click places the start, then the end, then barriers; right click
//! erases. `Space` runs A*, `d` runs Dijkstra, `r` resets the path, `c`
//! clears the grid, `q` quits. `Esc` cancels a running search.

use gridpath_demos::run;
use gridpath_session::SessionConfig;

fn main() {
    let mut config = SessionConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<usize>() {
            Ok(rows) if rows >= 2 => config.rows = rows,
            _ => {
                eprintln!("Error: ROWS must be an integer of at least 2, got {arg:?}");
                std::process::exit(2);
            }
        }
    }

    if let Err(e) = run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
