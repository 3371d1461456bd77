// Assembles the Rocket instance: managed bot, routes, catchers and headers

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

use crate::bot::Bot;
use crate::config::Config;
use crate::handler;

/// Builds the server for the given configuration.
/// The listening port comes from `config.server.port`.
pub fn build(config: Config) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", config.server.port));
    let bot = Bot::new(config);

    rocket::custom(figment)
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/sandworm-snake");
                res.set_raw_header("X-Powered-By", "Battlesnake");
            })
        }))
        .mount(
            "/",
            routes![
                handler::index,
                handler::start,
                handler::get_move,
                handler::end,
                handler::ping
            ],
        )
        .register(
            "/",
            catchers![
                handler::not_found,
                handler::unprocessable,
                handler::default_catcher
            ],
        )
}
