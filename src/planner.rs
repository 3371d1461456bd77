// Typed input for a single turn's search
//
// Converts the wire representation into the coordinates the grid and path
// finder work with, then runs grid building, obstacle mapping and the search.

use log::warn;

use crate::error::{BoardError, InputError};
use crate::grid::Grid;
use crate::pathfinding::{self, SearchOutcome};
use crate::types::{Battlesnake, Board, Coord};

/// Everything the search needs for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInput {
    pub board_size: i32,
    pub head: Coord,
    pub food: Vec<Coord>,
    /// Every body segment of every snake, ours included
    pub obstacles: Vec<Coord>,
}

impl TurnInput {
    /// Extracts search input from a move request.
    ///
    /// The board is treated as square with side `board.width`. Our own body is
    /// added even when `you` is missing from `board.snakes`.
    pub fn from_request(board: &Board, you: &Battlesnake) -> Result<TurnInput, InputError> {
        let head = you.head_position().ok_or_else(|| InputError::MissingHead {
            id: you.id.clone(),
        })?;

        if board.width != board.height {
            warn!(
                "Board is {}x{}, searching a square of side {}",
                board.width, board.height, board.width
            );
        }

        let mut obstacles: Vec<Coord> = board
            .snakes
            .iter()
            .flat_map(|s| s.body.iter().copied())
            .collect();
        if !board.snakes.iter().any(|s| s.id == you.id) {
            obstacles.extend(you.body.iter().copied());
        }

        Ok(TurnInput {
            board_size: board.width,
            head,
            food: board.food.clone(),
            obstacles,
        })
    }

    /// Builds a fresh grid for this turn and searches it for the nearest food
    pub fn plan(&self) -> Result<SearchOutcome, BoardError> {
        let grid = Grid::populate(self.board_size, &self.food, &self.obstacles)?;
        Ok(pathfinding::find_shortest_path(grid, self.head))
    }
}
