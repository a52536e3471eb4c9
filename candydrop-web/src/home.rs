use actix_web::{HttpResponse, http, web};
use candydrop_store_db::{CandyDrop, CatalogDb};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{Config, ViewsConfig};
use crate::error::Result;

/// The pre-defined views shown on the home page.
#[derive(Debug, Serialize)]
pub struct HomeViews {
    pub all: Vec<CandyDrop>,
    pub highlighted: Vec<CandyDrop>,
    pub highlighted_or_second: Vec<CandyDrop>,
    pub not_highlighted: Vec<CandyDrop>,
    pub name_prefixed: Vec<CandyDrop>,
    pub name_containing: Vec<CandyDrop>,
    pub light: Vec<CandyDrop>,
    pub weight_range: Vec<CandyDrop>,
    pub heaviest: Vec<CandyDrop>,
    pub random: Option<CandyDrop>,
}

impl HomeViews {
    /// Run every view against one read snapshot of the catalog.
    pub fn query(db: &CatalogDb, views: &ViewsConfig) -> candydrop_store_db::Result<Self> {
        db.snapshot(|db| {
            Ok(Self {
                all: db.all_candy_drops()?,
                highlighted: db.candy_drops_by_color(&views.highlight_color)?,
                highlighted_or_second: db
                    .candy_drops_by_any_color([&views.highlight_color, &views.second_color])?,
                not_highlighted: db.candy_drops_excluding_color(&views.highlight_color)?,
                name_prefixed: db.candy_drops_name_starts_with(&views.name_prefix)?,
                name_containing: db.candy_drops_name_contains(&views.name_fragment)?,
                light: db.candy_drops_lighter_than(views.light_below)?,
                weight_range: db.candy_drops_weight_between(views.weight_low, views.weight_high)?,
                heaviest: db.heaviest_candy_drops(views.heaviest)?,
                random: db.random_candy_drop()?,
            })
        })
    }
}

pub(crate) async fn get(
    config: web::Data<Config>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse> {
    let views = config.views.clone();
    let home = catalog
        .read(move |db| HomeViews::query(db, &views))
        .await?;

    Ok(HttpResponse::Ok()
        .insert_header(http::header::CacheControl(vec![
            http::header::CacheDirective::NoStore,
        ]))
        .json(home))
}
