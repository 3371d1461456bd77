// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Each turn the sandworm rebuilds the board, searches for the closest food and
// takes the first step towards it. Without a reachable food it moves randomly.

use log::{debug, error, info, warn};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::debug_logger::{DebugLogger, DecisionLogEntry};
use crate::move_selector::{self, MoveSource};
use crate::pathfinding::SearchOutcome;
use crate::planner::TurnInput;
use crate::types::{Battlesnake, Board, Direction, Game};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": appearance.version,
        })
    }

    /// Called when a game starts, answers with the snake's looks
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        info!(
            "GAME START {} ({}x{}, snake {})",
            game.id, board.width, board.height, you.id
        );

        let appearance = &self.config.appearance;
        json!({
            "color": appearance.color,
            "headType": appearance.head,
            "tailType": appearance.tail,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) {
        info!(
            "GAME OVER {} after {} turns (snake {}, health {})",
            game.id, turn, you.id, you.health
        );
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// The search runs on tokio's blocking pool and is bounded by the turn's
    /// time budget. Invalid input, an invalid board, a failed or late search
    /// all end in the random fallback move, so a move is always returned.
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub async fn get_move(
        &self,
        game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let start_time = Instant::now();
        let turn = *turn;

        info!("Turn {}: Computing move", turn);

        let budget = Duration::from_millis(self.config.timing.budget_for_timeout_ms(game.timeout));
        let outcome = match TurnInput::from_request(board, you) {
            Ok(input) => Self::search_within(input, budget, turn).await,
            Err(e) => {
                warn!("Turn {}: Malformed move request: {}", turn, e);
                None
            }
        };
        let path = outcome.and_then(|o| o.path);

        let (chosen_move, source) = {
            let mut rng = rand::rng();
            move_selector::select_move(path.as_deref(), turn, &mut rng)
        };

        info!(
            "Turn {}: Chose {} (source: {}, path length: {}, time: {}ms)",
            turn,
            chosen_move.as_str(),
            source.as_str(),
            path.as_ref().map_or(0, |p| p.len()),
            start_time.elapsed().as_millis()
        );

        self.record(game, turn, board, you, chosen_move, source, path);

        json!({ "move": chosen_move.as_str() })
    }

    /// Runs the search on the blocking pool, giving up once `budget` elapses.
    /// A search that misses the deadline is not cancelled; it keeps running on
    /// the pool until it finishes and its result is dropped.
    async fn search_within(input: TurnInput, budget: Duration, turn: i32) -> Option<SearchOutcome> {
        let search = tokio::task::spawn_blocking(move || input.plan());

        match tokio::time::timeout(budget, search).await {
            Ok(Ok(Ok(outcome))) => {
                debug!(
                    "Turn {}: Search expanded {} nodes (peak frontier {})",
                    turn, outcome.expanded, outcome.peak_frontier
                );
                Some(outcome)
            }
            Ok(Ok(Err(e))) => {
                warn!("Turn {}: Cannot search board: {}", turn, e);
                None
            }
            Ok(Err(e)) => {
                error!("Turn {}: Search task failed: {}", turn, e);
                None
            }
            Err(_) => {
                warn!("Turn {}: Search exceeded {}ms budget", turn, budget.as_millis());
                None
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &self,
        game: &Game,
        turn: i32,
        board: &Board,
        you: &Battlesnake,
        chosen_move: Direction,
        source: MoveSource,
        path: Option<Vec<Direction>>,
    ) {
        if !self.debug_logger.is_enabled() {
            return;
        }

        self.debug_logger.log_move(DecisionLogEntry {
            game_id: game.id.clone(),
            turn,
            chosen_move,
            path: if source == MoveSource::Path { path } else { None },
            board: board.clone(),
            you: you.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
    }
}
