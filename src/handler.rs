// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use log::warn;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::Request;
use serde_json::{json, Value};

use crate::bot::Bot;
use crate::types::GameState;

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /start endpoint
/// Called when a game starts, answers with the snake's appearance
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameState>) -> Json<Value> {
    Json(bot.start(
        &start_req.game,
        &start_req.turn,
        &start_req.board,
        &start_req.you,
    ))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub async fn get_move(bot: &rocket::State<Bot>, move_req: Json<GameState>) -> Json<Value> {
    let response = bot
        .get_move(
            &move_req.game,
            &move_req.turn,
            &move_req.board,
            &move_req.you,
        )
        .await;

    Json(response)
}

/// POST /end endpoint
/// Called when a game ends, nothing to clean up
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<GameState>) -> Json<Value> {
    bot.end(&end_req.game, &end_req.turn, &end_req.board, &end_req.you);

    Json(json!({ "message": "ok" }))
}

/// POST /ping endpoint
/// Liveness check used by the game engine
#[post("/ping")]
pub fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<Value> {
    warn!("No route for {} {}", req.method(), req.uri());
    Json(json!({
        "message": "not found",
        "path": req.uri().path().to_string(),
    }))
}

/// Payloads that fail to deserialize into a `GameState`
#[catch(422)]
pub fn unprocessable(req: &Request<'_>) -> Json<Value> {
    warn!("Malformed payload for {} {}", req.method(), req.uri());
    Json(json!({ "error": "malformed game state" }))
}

#[catch(default)]
pub fn default_catcher(status: Status, req: &Request<'_>) -> (Status, Json<Value>) {
    warn!("{} on {} {}", status, req.method(), req.uri());
    (
        status,
        Json(json!({
            "error": status.reason().unwrap_or("unknown error"),
            "code": status.code,
        })),
    )
}
