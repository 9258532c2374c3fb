use crate::coordinate::Coordinate;
use crate::search::successors::Heuristic;

/// Manhattan distance to the nearest of a set of target coordinates.
///
/// With no targets the estimate is zero, which degrades A* to Dijkstra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManhattanHeuristic {
    targets: Vec<Coordinate>,
}

impl ManhattanHeuristic {
    pub fn new(targets: Vec<Coordinate>) -> Self {
        Self { targets }
    }

    pub fn single(target: Coordinate) -> Self {
        Self {
            targets: vec![target],
        }
    }

    pub fn targets(&self) -> &[Coordinate] {
        &self.targets
    }
}

impl Heuristic<Coordinate, i64> for ManhattanHeuristic {
    fn estimate(&self, state: &Coordinate) -> i64 {
        self.targets
            .iter()
            .map(|target| state.manhattan_distance(target))
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_target_wins() {
        let heuristic = ManhattanHeuristic::new(vec![Coordinate::new(10, 10), Coordinate::new(1, 2)]);
        assert_eq!(heuristic.estimate(&Coordinate::ZERO), 3);
        assert_eq!(heuristic.estimate(&Coordinate::new(9, 10)), 1);
    }

    #[test]
    fn test_no_targets_is_zero() {
        let heuristic = ManhattanHeuristic::new(Vec::new());
        assert_eq!(heuristic.estimate(&Coordinate::new(4, 4)), 0);
    }

    #[test]
    fn test_target_estimate_is_zero() {
        let target = Coordinate::new(3, 3);
        let heuristic = ManhattanHeuristic::single(target);
        assert_eq!(heuristic.estimate(&target), 0);
        assert_eq!(heuristic.targets(), &[target]);
    }
}
