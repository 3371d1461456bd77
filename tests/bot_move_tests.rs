// Integration tests for the move decision
//
// The bot must follow the shortest path to food when one exists and must
// still answer with a legal direction name whenever it does not.

mod common;

use common::{board, game, snake};
use sandworm_snake::bot::Bot;
use sandworm_snake::config::Config;

const DIRECTIONS: [&str; 4] = ["up", "right", "down", "left"];

fn bot() -> Bot {
    Bot::new(Config::default_hardcoded())
}

/// Food straight above the head is two steps away
#[tokio::test]
async fn test_moves_towards_food() {
    let you = snake("me", &[(2, 2), (2, 3), (2, 4)]);
    let board = board(5, &[(2, 0)], vec![you.clone()]);

    let response = bot().get_move(&game(), &1, &board, &you).await;

    assert_eq!(response["move"], "up");
}

/// Our own neck sits between the head and the food, so the route goes around
#[tokio::test]
async fn test_routes_around_own_body() {
    let you = snake("me", &[(0, 0), (1, 0)]);
    let board = board(3, &[(2, 0)], vec![you.clone()]);

    let response = bot().get_move(&game(), &2, &board, &you).await;

    assert_eq!(response["move"], "down");
}

/// Opponent bodies are obstacles just like ours
#[tokio::test]
async fn test_routes_around_opponent() {
    let you = snake("me", &[(0, 1), (0, 0)]);
    let wall = snake("them", &[(1, 1), (1, 0), (2, 0)]);
    let board = board(4, &[(2, 1)], vec![you.clone(), wall]);

    let response = bot().get_move(&game(), &3, &board, &you).await;

    // Without the opponent the two-step route would start with "right"
    assert_eq!(response["move"], "down");
}

/// Food under a snake body is not edible, the next closest food wins
#[tokio::test]
async fn test_ignores_food_under_body() {
    let you = snake("me", &[(2, 2), (2, 3)]);
    let other = snake("them", &[(3, 2), (4, 2)]);
    let board = board(5, &[(3, 2), (0, 2)], vec![you.clone(), other]);

    let response = bot().get_move(&game(), &4, &board, &you).await;

    assert_eq!(response["move"], "left");
}

#[tokio::test]
async fn test_no_food_still_returns_a_move() {
    let you = snake("me", &[(5, 5), (5, 6), (5, 7)]);
    let board = board(11, &[], vec![you.clone()]);

    for turn in 0..20 {
        let response = bot().get_move(&game(), &turn, &board, &you).await;
        let chosen = response["move"].as_str().unwrap();
        assert!(DIRECTIONS.contains(&chosen), "unexpected move {}", chosen);
    }
}

#[tokio::test]
async fn test_unreachable_food_still_returns_a_move() {
    let you = snake("me", &[(0, 0), (0, 1)]);
    let fence = snake("them", &[(3, 4), (4, 3)]);
    let board = board(5, &[(4, 4)], vec![you.clone(), fence]);

    let response = bot().get_move(&game(), &5, &board, &you).await;
    let chosen = response["move"].as_str().unwrap();

    assert!(DIRECTIONS.contains(&chosen));
}

#[tokio::test]
async fn test_invalid_board_falls_back() {
    let you = snake("me", &[(0, 0)]);
    let board = board(0, &[(0, 0)], vec![you.clone()]);

    let response = bot().get_move(&game(), &6, &board, &you).await;
    let chosen = response["move"].as_str().unwrap();

    assert!(DIRECTIONS.contains(&chosen));
}

/// A request claiming an enormous board must not try to allocate it
#[tokio::test]
async fn test_huge_board_falls_back() {
    let you = snake("me", &[(0, 0)]);
    let board = board(i32::MAX, &[(1, 1)], vec![you.clone()]);

    let response = bot().get_move(&game(), &8, &board, &you).await;
    let chosen = response["move"].as_str().unwrap();

    assert!(DIRECTIONS.contains(&chosen));
}

#[tokio::test]
async fn test_headless_snake_falls_back() {
    let you = snake("me", &[]);
    let board = board(5, &[(1, 1)], vec![]);

    let response = bot().get_move(&game(), &7, &board, &you).await;
    let chosen = response["move"].as_str().unwrap();

    assert!(DIRECTIONS.contains(&chosen));
}

#[test]
fn test_start_reports_appearance() {
    let you = snake("me", &[(1, 1)]);
    let board = board(11, &[], vec![you.clone()]);

    let response = bot().start(&game(), &0, &board, &you);

    assert_eq!(response["color"], "#FFB366");
    assert_eq!(response["headType"], "sand-worm");
    assert_eq!(response["tailType"], "round-bum");
}

#[test]
fn test_info_reports_metadata() {
    let info = bot().info();

    assert_eq!(info["apiversion"], "1");
    assert_eq!(info["head"], "sand-worm");
    assert_eq!(info["tail"], "round-bum");
}
