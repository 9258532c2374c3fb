//! Text formats accepted by the drivers
//!
//! - cost grids: one row per line, each digit is the cost of entering that
//!   cell, `.` costs 1 and `#` is a wall
//! - edge lists: `a: b c d` joins `a` to each listed vertex

use crate::coordinate::{Coordinate, Direction};
use crate::error::{Result, WayfindError};
use crate::graph::{EdgeKind, Graph};
use crate::search::StateCost;
use std::collections::HashMap;

/// Rectangular grid of entry costs with optional walls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: HashMap<Coordinate, i64>,
    width: i64,
    height: i64,
}

impl CostGrid {
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = HashMap::new();
        let mut width = 0;
        let mut height = 0;

        for (row, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let mut row_width = 0;
            for (column, ch) in line.chars().enumerate() {
                row_width = column as i64 + 1;
                let cost = match ch {
                    '#' => continue,
                    '.' => 1,
                    _ => match ch.to_digit(10) {
                        Some(digit) => i64::from(digit),
                        None => crate::bail_parse!(
                            "grid",
                            row + 1,
                            format!("unexpected character '{ch}'")
                        ),
                    },
                };
                cells.insert(Coordinate::from_row_column(height, column as i64), cost);
            }

            if height > 0 && row_width != width {
                crate::bail_parse!(
                    "grid",
                    row + 1,
                    format!("expected {width} columns, found {row_width}")
                );
            }
            width = row_width;
            height += 1;
        }

        if height == 0 {
            return Err(WayfindError::invalid_value("grid", "no rows"));
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::ZERO
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.width - 1, self.height - 1)
    }

    /// Entry cost of `at`, `None` for a wall or a cell off the grid
    pub fn cost(&self, at: &Coordinate) -> Option<i64> {
        self.cells.get(at).copied()
    }

    /// Cheapest open cell, 0 for a grid made only of walls
    pub fn min_cost(&self) -> i64 {
        self.cells.values().copied().min().unwrap_or(0)
    }

    pub fn is_open(&self, at: &Coordinate) -> bool {
        self.cells.contains_key(at)
    }

    /// Cardinal moves into open cells, each costing the cell entered
    pub fn moves(&self, from: &Coordinate) -> Vec<StateCost<Coordinate, i64>> {
        from.neighbors(&Direction::CARDINAL)
            .into_iter()
            .filter_map(|next| self.cost(&next).map(|cost| StateCost::new(next, cost)))
            .collect()
    }
}

/// Parse `a: b c d` lines into an undirected graph.
///
/// Blank lines are skipped. An edge listed from both ends is added twice.
/// Names may not contain `-`, which joins labels of contracted vertices.
pub fn parse_edge_list(input: &str) -> Result<Graph<String>> {
    let mut graph = Graph::new();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((name, neighbours)) = line.split_once(':') else {
            crate::bail_parse!("edge list", index + 1, "expected 'vertex: neighbours'");
        };
        let name = name.trim();
        if !is_vertex_name(name) {
            crate::bail_parse!(
                "edge list",
                index + 1,
                format!("invalid vertex name '{name}'")
            );
        }

        let source = graph.vertex_for(name.to_string());
        for neighbour in neighbours.split_whitespace() {
            if !is_vertex_name(neighbour) {
                crate::bail_parse!(
                    "edge list",
                    index + 1,
                    format!("invalid vertex name '{neighbour}'")
                );
            }
            let destination = graph.vertex_for(neighbour.to_string());
            graph.add_edge(EdgeKind::Undirected, &source, &destination, None);
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge_list_parsed"
    );
    Ok(graph)
}

fn is_vertex_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c: char| c.is_whitespace() || c == '-')
}
