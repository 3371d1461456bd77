use log::{info, warn};
use std::env;

use sandworm_snake::config::Config;
use sandworm_snake::server;

#[rocket::launch]
fn rocket() -> _ {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Battlesnake Server...");

    // Load configuration once at startup
    let mut config = Config::load_or_default();

    // Lots of web hosting services expect you to bind to the port specified by the `PORT`
    // environment variable.
    if let Ok(port) = env::var("PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(e) => warn!("Ignoring PORT={}: {}", port, e),
        }
    }

    info!("Listening on port {}", config.server.port);
    server::build(config)
}
