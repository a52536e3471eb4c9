use actix_web::{HttpResponse, http, web};
use candydrop_store_db::{CandyDropForm, Lookup, LookupKind};
use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;

/// Choices for the four select fields of the add form.
#[derive(Debug, Serialize)]
pub struct FormChoices {
    pub colors: Vec<Lookup>,
    pub sournesses: Vec<Lookup>,
    pub strengths: Vec<Lookup>,
    pub types: Vec<Lookup>,
}

pub(crate) async fn get(catalog: web::Data<Catalog>) -> Result<HttpResponse> {
    let choices = catalog
        .read(|db| {
            Ok(FormChoices {
                colors: db.lookups(LookupKind::Color)?,
                sournesses: db.lookups(LookupKind::Sourness)?,
                strengths: db.lookups(LookupKind::Strength)?,
                types: db.lookups(LookupKind::Type)?,
            })
        })
        .await?;

    Ok(HttpResponse::Ok().json(choices))
}

pub(crate) async fn post(
    catalog: web::Data<Catalog>,
    form: web::Form<CandyDropForm>,
) -> Result<HttpResponse> {
    let new = form.validate()?;
    let created = catalog
        .write(move |db| db.create_candy_drop(&new))
        .await?;
    info!("Added candy drop {} ({})", created.id, created.name);

    Ok(HttpResponse::SeeOther()
        .insert_header((http::header::LOCATION, "/add"))
        .finish())
}
