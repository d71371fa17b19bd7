mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use std::sync::Arc;

use crate::config::CONFIG;
use crate::middleware::{AcceptJson, RedirectSlashes};
use crate::repositories::{BookRepository, SqlBookRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to the database
    info!("Connecting to {}...", CONFIG.database_url);
    let pool = db::connect(&CONFIG).await.map_err(|e| {
        error!("Failed to connect to the database: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    db::ensure_schema(&pool).await.map_err(|e| {
        error!("Failed to prepare the books table: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    info!("Connected to the database successfully!");

    // Initialize the repository
    let sql_repository = Arc::new(SqlBookRepository::new(pool, CONFIG.db_query_timeout));
    let repository: Arc<dyn BookRepository> = sql_repository.clone();
    let repository = web::Data::from(repository);

    // Start HTTP server
    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(repository.clone())
            .wrap(RedirectSlashes)
            .wrap(AcceptJson)
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .client_request_timeout(CONFIG.request_timeout)
    .bind(&server_addr)?
    .run()
    .await;

    // The server has drained its workers; release the pool.
    info!("Closing database pool");
    sql_repository.close().await;
    info!("Server stopped");
    result
}
