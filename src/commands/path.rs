//! `wayfind path`: cheapest route across a cost grid

use serde_json::json;
use wayfind_core::config::{Algorithm, WayfindConfig};
use wayfind_core::coordinate::Coordinate;
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::input::CostGrid;
use wayfind_core::search::{AStarPathfinder, DijkstraPathfinder, Path, SearchStats};

use crate::cli::{Cli, OutputFormat, PathArgs};
use crate::commands::dispatch::read_input;

pub fn execute(cli: &Cli, config: &WayfindConfig, args: &PathArgs) -> Result<()> {
    let content = read_input(&args.grid, "grid file")?;
    let grid = CostGrid::parse(&content)?;

    let from = args.from.unwrap_or_else(|| grid.top_left());
    let to = args.to.unwrap_or_else(|| grid.bottom_right());
    for (context, cell) in [("start cell", from), ("target cell", to)] {
        if !grid.is_open(&cell) {
            return Err(WayfindError::invalid_value(context, cell));
        }
    }

    let algorithm = args.algorithm.unwrap_or(config.search.algorithm);
    let (path, stats) = search(&grid, algorithm, from, to);
    tracing::debug!(
        %algorithm,
        expanded = stats.expanded,
        skipped = stats.skipped,
        "grid_search"
    );

    match cli.format {
        OutputFormat::Json => {
            let cells: Option<Vec<String>> = path
                .as_ref()
                .map(|p| p.states().iter().map(ToString::to_string).collect());
            let output = json!({
                "algorithm": algorithm.to_string(),
                "from": from.to_string(),
                "to": to.to_string(),
                "found": path.is_some(),
                "cost": path.as_ref().map(Path::overall_cost),
                "steps": path.as_ref().map(steps),
                "expanded": stats.expanded,
                "path": cells,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &path {
            Some(path) => {
                println!("cost: {}", path.overall_cost());
                println!("steps: {}", steps(path));
                if !cli.quiet {
                    let cells: Vec<String> = path.states().iter().map(ToString::to_string).collect();
                    println!("path: {}", cells.join(" -> "));
                }
            }
            None => println!("no path from {from} to {to}"),
        },
    }

    Ok(())
}

/// Moves taken, one less than the cells visited
fn steps(path: &Path<Coordinate, i64>) -> usize {
    path.len().saturating_sub(1)
}

fn search(
    grid: &CostGrid,
    algorithm: Algorithm,
    from: Coordinate,
    to: Coordinate,
) -> (Option<Path<Coordinate, i64>>, SearchStats) {
    let moves = |at: &Coordinate| grid.moves(at);
    match algorithm {
        Algorithm::Dijkstra => DijkstraPathfinder::new(moves).search(from, |at| *at == to),
        Algorithm::Astar => {
            // Scaled by the cheapest cell so zero-cost cells keep it admissible
            let floor = grid.min_cost();
            let heuristic = move |at: &Coordinate| at.manhattan_distance(&to) * floor;
            AStarPathfinder::new(moves).search(from, |at| *at == to, heuristic)
        }
    }
}
