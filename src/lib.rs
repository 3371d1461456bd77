// Library exports for the sandworm Battlesnake
// This allows the replay tool and the integration tests to use the core bot logic

#[macro_use]
extern crate rocket;

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod grid;
pub mod handler;
pub mod move_selector;
pub mod pathfinding;
pub mod planner;
pub mod replay;
pub mod server;
pub mod types;
