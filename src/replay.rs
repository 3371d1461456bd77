// Replay module for checking logged decisions against the current search
//
// This module provides functionality to:
// 1. Parse JSONL decision logs
// 2. Rebuild each logged turn and rerun the path finder
// 3. Check the logged move agrees with the replayed path
// 4. Generate a summary report

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::debug_logger::DecisionLogEntry;
use crate::planner::TurnInput;
use crate::types::Direction;

/// Result of replaying a single turn
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayResult {
    pub turn: i32,
    pub logged_move: Direction,
    /// First step of the replayed path, `None` when the replay found no food
    pub replayed_move: Option<Direction>,
    pub path_length: Option<usize>,
    /// The logged move is what the replayed search would play. Any move is
    /// consistent with a turn that has no path.
    pub consistent: bool,
    pub computation_time_us: u128,
}

impl ReplayResult {
    pub fn is_fallback(&self) -> bool {
        self.replayed_move.is_none()
    }
}

/// Statistics for a complete replay session
#[derive(Debug, Default, PartialEq)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub consistent: usize,
    pub inconsistent: usize,
    pub fallbacks: usize,
    pub average_path_length: f64,
}

/// Replay engine for analyzing decision logs
pub struct ReplayEngine {
    verbose: bool,
}

impl ReplayEngine {
    pub fn new(verbose: bool) -> Self {
        ReplayEngine { verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DecisionLogEntry>, String> {
        let file = File::open(log_path.as_ref())
            .map_err(|e| format!("Failed to open log file: {}", e))?;

        self.parse_log(BufReader::new(file))
    }

    /// Parses JSONL entries, skipping blank lines
    pub fn parse_log<R: BufRead>(&self, reader: R) -> Result<Vec<DecisionLogEntry>, String> {
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &DecisionLogEntry) -> Result<ReplayResult, String> {
        let start_time = Instant::now();

        let input = TurnInput::from_request(&entry.board, &entry.you).map_err(|e| e.to_string())?;
        let outcome = input.plan().map_err(|e| e.to_string())?;

        let replayed_move = outcome.first_step();
        let consistent = replayed_move.map_or(true, |m| m == entry.chosen_move);

        let result = ReplayResult {
            turn: entry.turn,
            logged_move: entry.chosen_move,
            replayed_move,
            path_length: outcome.path.as_ref().map(|p| p.len()),
            consistent,
            computation_time_us: start_time.elapsed().as_micros(),
        };

        if self.verbose {
            match (consistent, replayed_move) {
                (true, Some(m)) => info!("Turn {}: ✓ {} follows the path", entry.turn, m.as_str()),
                (true, None) => info!(
                    "Turn {}: ✓ {} was a fallback move",
                    entry.turn,
                    entry.chosen_move.as_str()
                ),
                (false, m) => warn!(
                    "Turn {}: ✗ logged {}, path starts with {}",
                    entry.turn,
                    entry.chosen_move.as_str(),
                    m.map_or("-", |m| m.as_str())
                ),
            }
        }

        Ok(result)
    }

    /// Replays all entries
    pub fn replay_all(&self, entries: &[DecisionLogEntry]) -> Vec<ReplayResult> {
        entries
            .iter()
            .filter_map(|entry| match self.replay_entry(entry) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", entry.turn, e);
                    None
                }
            })
            .collect()
    }

    /// Replays specific turns
    pub fn replay_turns(
        &self,
        entries: &[DecisionLogEntry],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn_num)
                .ok_or_else(|| format!("Turn {} not found in log file", turn_num))?;

            match self.replay_entry(entry) {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!("Failed to replay turn {}: {}", turn_num, e);
                }
            }
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let consistent = results.iter().filter(|r| r.consistent).count();
        let fallbacks = results.iter().filter(|r| r.is_fallback()).count();

        let lengths: Vec<usize> = results.iter().filter_map(|r| r.path_length).collect();
        let average_path_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        };

        ReplayStats {
            total_turns,
            consistent,
            inconsistent: total_turns - consistent,
            fallbacks,
            average_path_length,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:          {}", stats.total_turns);
        println!("Consistent:           {}", stats.consistent);
        println!("Inconsistent:         {}", stats.inconsistent);
        println!("Fallback Turns:       {}", stats.fallbacks);
        println!("Average Path Length:  {:.1}", stats.average_path_length);
        println!("═══════════════════════════════════════════════════════════\n");

        let inconsistent: Vec<_> = results.iter().filter(|r| !r.consistent).collect();
        if !inconsistent.is_empty() {
            println!("                  INCONSISTENT TURNS");
            println!("═══════════════════════════════════════════════════════════");

            for result in inconsistent {
                println!(
                    "Turn {}: logged {}, replayed {} (path length {})",
                    result.turn,
                    result.logged_move.as_str(),
                    result.replayed_move.map_or("-", |m| m.as_str()),
                    result.path_length.unwrap_or(0)
                );
            }
            println!();
        }
    }
}
