// Occupancy grid rebuilt from the game state on every turn
//
// The grid is square with side `board_size`. Coordinates outside of it are
// never stored and always classify as `Invalid`.

use std::fmt;

use crate::error::BoardError;
use crate::types::Coord;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Food,
    Obstacle,
    /// Set by the path finder while a search runs
    Visited,
}

/// Result of classifying a coordinate against the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    Start,
    Valid,
    Blocked,
    Invalid,
    Food,
}

/// Largest board side accepted from a request. Standard engine boards stop
/// at 25.
pub const MAX_BOARD_SIZE: i32 = 255;

/// Square occupancy grid for one turn
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell `Empty`
    ///
    /// # Errors
    /// * `BoardError::InvalidBoard` when `board_size` is not positive
    /// * `BoardError::BoardTooLarge` when `board_size` exceeds `MAX_BOARD_SIZE`
    pub fn new(board_size: i32) -> Result<Grid, BoardError> {
        if board_size <= 0 {
            return Err(BoardError::InvalidBoard { size: board_size });
        }
        if board_size > MAX_BOARD_SIZE {
            return Err(BoardError::BoardTooLarge {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }

        let side = board_size as usize;
        Ok(Grid {
            size: board_size,
            cells: vec![CellState::Empty; side * side],
        })
    }

    /// Builds the grid for a turn: food first, then every body segment, so a
    /// cell reported as both ends up blocked.
    pub fn populate<'a, F, O>(board_size: i32, food: F, obstacles: O) -> Result<Grid, BoardError>
    where
        F: IntoIterator<Item = &'a Coord>,
        O: IntoIterator<Item = &'a Coord>,
    {
        let mut grid = Grid::new(board_size)?;
        grid.mark(food, CellState::Food);
        grid.mark(obstacles, CellState::Obstacle);
        Ok(grid)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of stored cells, always `size * size`
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn has(&self, p: Coord) -> bool {
        0 <= p.x && p.x < self.size && 0 <= p.y && p.y < self.size
    }

    /// Row-major index of `p`, `None` when off the board
    pub fn index_of(&self, p: Coord) -> Option<usize> {
        if self.has(p) {
            Some(p.y as usize * self.size as usize + p.x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, p: Coord) -> Option<CellState> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Overwrites the state of `p`; off-board coordinates are ignored.
    /// Returns whether the cell was written.
    pub fn set(&mut self, p: Coord, state: CellState) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Projects a set of coordinates onto the grid with the given state.
    /// Returns how many coordinates were inside the board.
    pub fn mark<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord>, state: CellState) -> usize {
        coords
            .into_iter()
            .filter(|&&p| self.set(p, state))
            .count()
    }

    /// Classifies `p` for the path finder
    pub fn classify(&self, p: Coord) -> LocationStatus {
        match self.get(p) {
            None => LocationStatus::Invalid,
            Some(CellState::Food) => LocationStatus::Food,
            Some(CellState::Obstacle) | Some(CellState::Visited) => LocationStatus::Blocked,
            Some(CellState::Empty) => LocationStatus::Valid,
        }
    }

    /// Iterates over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Coord::new(i as i32 % size, i as i32 / size), c))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for y in 0..self.size {
            write!(f, "  ")?;
            for x in 0..self.size {
                let symbol = match self.get(Coord::new(x, y)) {
                    Some(CellState::Empty) => "__",
                    Some(CellState::Food) => "()",
                    Some(CellState::Obstacle) => "[]",
                    Some(CellState::Visited) => "..",
                    None => "??",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
