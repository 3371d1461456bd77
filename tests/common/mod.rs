// Shared builders for integration tests

#![allow(dead_code)]

use sandworm_snake::types::{Battlesnake, Board, Coord, Game};
use std::collections::HashMap;

pub fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        timeout: 500,
    }
}

pub fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = body.iter().map(|&(x, y)| Coord::new(x, y)).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 80,
        head: body.first().copied(),
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

pub fn board(size: i32, food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
    Board {
        height: size,
        width: size,
        food: food.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        snakes,
        hazards: vec![],
    }
}
