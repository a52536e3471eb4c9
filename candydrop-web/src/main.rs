#![warn(clippy::dbg_macro)]

use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use candydrop_web::catalog::Catalog;
use candydrop_web::config;
use candydrop_web::error::{IoErrorContext, Result};
use tracing_subscriber::EnvFilter;

async fn inner_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load()?;

    let catalog = Catalog::new(&config.database_path);
    catalog.initialize(&config.seed)?;
    tracing::info!("using database {}", catalog.path().display());

    let (host, port) = config.bind_address();
    let workers = config.workers;
    let config_data = web::Data::new(config);
    let catalog_data = web::Data::new(catalog);

    tracing::info!("listening on {host}:{port}");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config_data.clone())
            .app_data(catalog_data.clone())
            .configure(candydrop_web::routes)
    })
    // default is 5 seconds, which is too small when doing mass requests on slow machines
    .client_request_timeout(Duration::from_secs(30))
    .workers(workers)
    .bind((host, port))
    .io_context("Failed to bind server")?
    .run()
    .await
    .io_context("Failed to start server")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    inner_main().await.map_err(std::io::Error::other)
}
