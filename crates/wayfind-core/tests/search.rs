//! Grid searches driven through the public API

use wayfind_core::coordinate::Coordinate;
use wayfind_core::input::CostGrid;
use wayfind_core::search::{AStarPathfinder, DijkstraPathfinder, ManhattanHeuristic};

const CAVERN: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581";

#[test]
fn test_cavern_lowest_risk_dijkstra() {
    let grid = CostGrid::parse(CAVERN).unwrap();
    let goal = grid.bottom_right();

    let pathfinder = DijkstraPathfinder::new(|at: &Coordinate| grid.moves(at));
    let path = pathfinder
        .shortest_path(grid.top_left(), |at| *at == goal)
        .unwrap();

    assert_eq!(path.overall_cost(), 40);
    assert_eq!(path.start(), Some(&Coordinate::ZERO));
    assert_eq!(path.goal(), Some(&goal));
    assert!(path.is_consistent());
}

#[test]
fn test_cavern_lowest_risk_astar() {
    let grid = CostGrid::parse(CAVERN).unwrap();
    let goal = grid.bottom_right();

    let pathfinder = AStarPathfinder::new(|at: &Coordinate| grid.moves(at));
    let explicit = pathfinder
        .shortest_cost(grid.top_left(), |at| *at == goal, ManhattanHeuristic::single(goal))
        .unwrap();
    let preset = pathfinder
        .shortest_manhattan_path(grid.top_left(), &[goal])
        .unwrap();

    assert_eq!(explicit, 40);
    assert_eq!(preset.overall_cost(), 40);
}

#[test]
fn test_walls_force_detour() {
    let grid = CostGrid::parse("1#1\n1#1\n111").unwrap();
    let target = Coordinate::new(2, 0);

    let pathfinder = DijkstraPathfinder::new(|at: &Coordinate| grid.moves(at));
    let path = pathfinder
        .shortest_path_to_any(grid.top_left(), &[target])
        .unwrap();

    assert_eq!(path.overall_cost(), 6);
    assert_eq!(path.len(), 7);
    assert!(!path.contains(&Coordinate::new(1, 0)));
    assert!(!path.contains(&Coordinate::new(1, 1)));
}

#[test]
fn test_sealed_wall_has_no_path() {
    let grid = CostGrid::parse("1#1\n1#1\n1#1").unwrap();
    let target = Coordinate::new(2, 0);

    let dijkstra = DijkstraPathfinder::new(|at: &Coordinate| grid.moves(at));
    assert!(dijkstra.shortest_path_to_any(grid.top_left(), &[target]).is_none());

    let astar = AStarPathfinder::new(|at: &Coordinate| grid.moves(at));
    assert!(astar
        .shortest_manhattan_path(grid.top_left(), &[target])
        .is_none());
}
