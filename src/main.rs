#[macro_use]
extern crate diesel;

pub mod app;
pub mod database;
pub mod schema;

mod routes;

use std::sync::Arc;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use app::{config::Config, AppState};
use database::{
    db_utils::{create_tables, psql_connect_to_db},
    store::PgStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        log::error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let postgres_pool = psql_connect_to_db(&config.database_url, config.pool_size)
        .map_err(|err| {
            log::error!("could not connect to the database: {}", err);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, err.to_string())
        })?;

    if config.create_tables {
        let conn = postgres_pool
            .get()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
        create_tables(&conn)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
        log::info!("database tables ready");
    }

    let app_state = AppState::new(Arc::new(PgStore::new(postgres_pool)));

    log::info!("Server running on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(app_state.clone()))
            .configure(routes::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
