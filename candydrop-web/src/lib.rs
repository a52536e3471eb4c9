//! HTTP front end for the candy-drop catalog.
//!
//! Serves the home page views and the add form as JSON on top of
//! `candydrop-store-db`.

use actix_web::web;

mod add;
pub mod catalog;
pub mod config;
pub mod error;
mod health;
pub mod home;

pub use add::FormChoices;
pub use catalog::Catalog;
pub use config::{Config, ViewsConfig};
pub use home::HomeViews;

/// Register every route. Expects `web::Data<Config>` and
/// `web::Data<Catalog>` as app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::get))
        .route("/add", web::get().to(add::get))
        .route("/add", web::post().to(add::post))
        .route("/health", web::get().to(health::get));
}
