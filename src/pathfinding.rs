// Breadth-first search from the snake's head to the nearest food
//
// Routes are not copied into every frontier node. Each discovered cell stores
// the direction that reached it and the route is rebuilt by walking those
// directions back from the food cell.

use log::debug;
use std::collections::VecDeque;

use crate::grid::{CellState, Grid, LocationStatus};
use crate::types::{Coord, Direction};

/// A frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub coord: Coord,
    pub status: LocationStatus,
    /// Number of steps from the start
    pub depth: usize,
}

/// Outcome of a single search together with some bookkeeping for logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Directions from the head to the food, `None` when no food is reachable
    pub path: Option<Vec<Direction>>,
    /// Food cell the path ends on
    pub target: Option<Coord>,
    /// Nodes taken off the frontier
    pub expanded: usize,
    /// Largest frontier length observed
    pub peak_frontier: usize,
}

impl SearchOutcome {
    pub fn first_step(&self) -> Option<Direction> {
        self.path.as_ref().and_then(|p| p.first().copied())
    }
}

/// Shortest-path search over a turn's grid
///
/// The search marks cells `Visited` on the grid it owns, so a finder is
/// consumed by a single run.
pub struct PathFinder {
    grid: Grid,
    came_from: Vec<Option<Direction>>,
}

impl PathFinder {
    pub fn new(grid: Grid) -> Self {
        let came_from = vec![None; grid.cell_count()];
        PathFinder { grid, came_from }
    }

    /// Runs the search from `start` and returns the route to the closest food.
    ///
    /// Neighbours are expanded in `Direction::all()` order, so among equally
    /// short routes the one whose earliest differing step comes first in
    /// `up, right, down, left` wins.
    pub fn find_nearest_food(mut self, start: Coord) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            path: None,
            target: None,
            expanded: 0,
            peak_frontier: 0,
        };

        // The head is never re-entered by the search
        self.grid.set(start, CellState::Visited);

        let mut frontier = VecDeque::with_capacity(self.grid.cell_count());
        frontier.push_back(SearchNode {
            coord: start,
            status: LocationStatus::Start,
            depth: 0,
        });
        outcome.peak_frontier = 1;

        while let Some(current) = frontier.pop_front() {
            outcome.expanded += 1;

            for dir in Direction::all() {
                let next = self.explore(&current, dir);

                match next.status {
                    LocationStatus::Food => {
                        outcome.path = Some(self.reconstruct(start, current.coord, dir));
                        outcome.target = Some(next.coord);
                        debug!(
                            "Food at ({}, {}) reached in {} steps, {} nodes expanded",
                            next.coord.x, next.coord.y, next.depth, outcome.expanded
                        );
                        return outcome;
                    }
                    LocationStatus::Valid => {
                        frontier.push_back(next);
                        outcome.peak_frontier = outcome.peak_frontier.max(frontier.len());
                    }
                    LocationStatus::Blocked | LocationStatus::Invalid | LocationStatus::Start => {}
                }
            }
        }

        debug!("No reachable food, {} nodes expanded", outcome.expanded);
        outcome
    }

    /// Steps from `current` in `dir` and classifies the result. Valid cells are
    /// marked visited at discovery so they enter the frontier only once.
    fn explore(&mut self, current: &SearchNode, dir: Direction) -> SearchNode {
        let coord = dir.apply(&current.coord);
        let status = self.grid.classify(coord);

        if status == LocationStatus::Valid {
            self.grid.set(coord, CellState::Visited);
            if let Some(i) = self.grid.index_of(coord) {
                self.came_from[i] = Some(dir);
            }
        }

        SearchNode {
            coord,
            status,
            depth: current.depth + 1,
        }
    }

    fn reconstruct(&self, start: Coord, parent: Coord, last: Direction) -> Vec<Direction> {
        let mut path = vec![last];
        let mut cursor = parent;

        while cursor != start {
            match self.grid.index_of(cursor).and_then(|i| self.came_from[i]) {
                Some(dir) => {
                    path.push(dir);
                    cursor = dir.opposite().apply(&cursor);
                }
                None => break,
            }
        }

        path.reverse();
        path
    }
}

/// Convenience wrapper: search a grid from `start`
pub fn find_shortest_path(grid: Grid, start: Coord) -> SearchOutcome {
    PathFinder::new(grid).find_nearest_food(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn grid(size: i32, food: &[Coord], obstacles: &[Coord]) -> Grid {
        Grid::populate(size, food, obstacles).unwrap()
    }

    #[test]
    fn test_straight_line() {
        let outcome = find_shortest_path(grid(5, &[Coord::new(2, 0)], &[]), Coord::new(2, 2));
        assert_eq!(outcome.path, Some(vec![Up, Up]));
        assert_eq!(outcome.target, Some(Coord::new(2, 0)));
        assert_eq!(outcome.first_step(), Some(Up));
    }

    #[test]
    fn test_adjacent_food() {
        let outcome = find_shortest_path(grid(5, &[Coord::new(1, 2)], &[]), Coord::new(2, 2));
        assert_eq!(outcome.path, Some(vec![Left]));
        assert_eq!(outcome.expanded, 1);
    }

    #[test]
    fn test_detour_around_obstacle() {
        let outcome = find_shortest_path(
            grid(3, &[Coord::new(2, 0)], &[Coord::new(1, 0)]),
            Coord::new(0, 0),
        );
        assert_eq!(outcome.path, Some(vec![Down, Right, Right, Up]));
    }

    #[test]
    fn test_tie_break_prefers_up_then_right() {
        // Food diagonally up-right: both "up, right" and "right, up" are two steps
        let outcome = find_shortest_path(grid(5, &[Coord::new(3, 1)], &[]), Coord::new(2, 2));
        assert_eq!(outcome.path, Some(vec![Up, Right]));

        // Food diagonally down-left: "down, left" beats "left, down"
        let outcome = find_shortest_path(grid(5, &[Coord::new(1, 3)], &[]), Coord::new(2, 2));
        assert_eq!(outcome.path, Some(vec![Down, Left]));
    }

    #[test]
    fn test_nearest_of_several_foods() {
        let food = [Coord::new(0, 0), Coord::new(4, 2)];
        let outcome = find_shortest_path(grid(5, &food, &[]), Coord::new(3, 2));
        assert_eq!(outcome.path, Some(vec![Right]));
    }

    #[test]
    fn test_no_food_is_not_found() {
        let outcome = find_shortest_path(grid(4, &[], &[]), Coord::new(1, 1));
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.first_step(), None);
        // Every cell is dequeued exactly once
        assert_eq!(outcome.expanded, 16);
    }

    #[test]
    fn test_enclosed_food_is_not_found() {
        let food = [Coord::new(2, 2)];
        let walls = [
            Coord::new(2, 1),
            Coord::new(1, 2),
            Coord::new(3, 2),
            Coord::new(2, 3),
        ];
        let outcome = find_shortest_path(grid(5, &food, &walls), Coord::new(0, 0));
        assert_eq!(outcome.path, None);
    }

    #[test]
    fn test_frontier_bounded_by_cells() {
        let size = 11;
        let outcome = find_shortest_path(grid(size, &[], &[]), Coord::new(5, 5));
        assert!(outcome.peak_frontier <= (size * size) as usize);
        assert_eq!(outcome.expanded, (size * size) as usize);
    }

    #[test]
    fn test_path_replays_to_target() {
        let food = [Coord::new(6, 0)];
        let walls: Vec<Coord> = (0..6).map(|y| Coord::new(3, y)).collect();
        let start = Coord::new(0, 0);
        let outcome = find_shortest_path(grid(7, &food, &walls), start);

        let path = outcome.path.unwrap();
        let end = path.iter().fold(start, |p, d| d.apply(&p));
        assert_eq!(end, Coord::new(6, 0));
        assert!(path.iter().scan(start, |p, d| {
            *p = d.apply(p);
            Some(*p)
        }).all(|p| !walls.contains(&p)));
        // Through the gap in the bottom row
        assert_eq!(path.len(), 18);
    }
}
