// Turns a search result into the single move sent back to the engine

use log::info;
use rand::Rng;

use crate::types::Direction;

/// Where the chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// First step of the path to the nearest food
    Path,
    /// No usable path, picked uniformly at random
    Fallback,
}

impl MoveSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveSource::Path => "path",
            MoveSource::Fallback => "fallback",
        }
    }
}

/// Picks the move for this turn. Never fails: without a path one of the four
/// directions is chosen uniformly at random.
pub fn select_move<R: Rng + ?Sized>(
    path: Option<&[Direction]>,
    turn: i32,
    rng: &mut R,
) -> (Direction, MoveSource) {
    if let Some(&first) = path.and_then(|p| p.first()) {
        return (first, MoveSource::Path);
    }

    let choice = random_direction(rng);
    info!("Turn {}: no path to food, falling back to {}", turn, choice.as_str());
    (choice, MoveSource::Fallback)
}

pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    let all = Direction::all();
    all[rng.random_range(0..all.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uses_first_step_of_path() {
        let mut rng = StdRng::seed_from_u64(7);
        let path = [Direction::Left, Direction::Up];
        assert_eq!(
            select_move(Some(&path[..]), 1, &mut rng),
            (Direction::Left, MoveSource::Path)
        );
    }

    #[test]
    fn test_empty_path_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [Direction; 0] = [];
        let (_, source) = select_move(Some(&empty[..]), 1, &mut rng);
        assert_eq!(source, MoveSource::Fallback);
    }

    #[test]
    fn test_fallback_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];

        for turn in 0..400 {
            let (dir, source) = select_move(None, turn, &mut rng);
            assert_eq!(source, MoveSource::Fallback);
            let i = Direction::all().iter().position(|&d| d == dir).unwrap();
            seen[i] = true;
        }

        assert!(seen.iter().all(|&s| s), "fallback never produced some direction");
    }
}
