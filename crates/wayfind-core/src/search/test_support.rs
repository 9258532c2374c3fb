//! Grid fixtures shared by the engine tests

use crate::coordinate::{Coordinate, Direction};
use crate::input::CostGrid;
use crate::search::StateCost;

pub const OPEN_GRID: &str = "\
....
....
....
....";

pub const WEIGHTED_GRID: &str = "\
1222
1222
1222
1111";

pub const STRONGLY_WEIGHTED_GRID: &str = "\
19111
19191
19191
11191";

pub const CRUCIBLE_GRID: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

pub fn cost_grid(input: &str) -> CostGrid {
    CostGrid::parse(input).unwrap()
}

/// Crucible state: position, heading and run length in that heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crucible {
    pub at: Coordinate,
    pub heading: Option<Direction>,
    pub run: u8,
}

impl Crucible {
    pub fn start() -> Self {
        Self {
            at: Coordinate::ZERO,
            heading: None,
            run: 0,
        }
    }
}

/// At most three moves in a row in one direction, never reversing
pub fn crucible_moves(grid: &CostGrid, state: &Crucible) -> Vec<StateCost<Crucible, i64>> {
    Direction::CARDINAL
        .into_iter()
        .filter(|d| Some(d.inverse()) != state.heading)
        .filter_map(|direction| {
            let run = if Some(direction) == state.heading {
                state.run + 1
            } else {
                1
            };
            if run > 3 {
                return None;
            }
            let at = state.at.neighbor(direction);
            let cost = grid.cost(&at)?;
            Some(StateCost::new(
                Crucible {
                    at,
                    heading: Some(direction),
                    run,
                },
                cost,
            ))
        })
        .collect()
}
