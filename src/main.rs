use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use globetrotter_api::config::AppConfig;
use globetrotter_api::db::mongo::create_mongo_client;
use globetrotter_api::routes;
use globetrotter_api::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    let host = config.host.clone();
    let port = config.port;

    let client = create_mongo_client(&config.mongodb_uri)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let state = web::Data::new(AppState::new(config));
    let client = web::Data::new(client);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .app_data(client.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
