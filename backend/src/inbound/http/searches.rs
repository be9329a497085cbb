//! Search history API handlers.
//!
//! ```text
//! GET  /api/searches
//! POST /api/searches {"query":"LAX to JFK","from":"LAX","to":"JFK",
//!                     "distance_km":3974,"co2_per_pax_kg":437.2}
//! ```
//!
//! Both handlers resolve the history store before anything else, so an
//! unconfigured store reports its configuration failure even for requests
//! that would not survive validation.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::HistoryStoreError;
use crate::domain::{ApiResult, Error, NewSearch, SearchValidationError};
use crate::inbound::http::state::HttpState;

/// Insert request body for `POST /api/searches`.
///
/// Only `query` is required. The numeric fields accept JSON numbers or
/// numeric strings; anything unusable is stored as null.
#[derive(Debug, Default, Deserialize)]
pub struct RecordSearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub distance_km: Option<Value>,
    #[serde(default)]
    pub co2_per_pax_kg: Option<Value>,
}

/// List the most recent searches, newest first, as a plain array.
pub async fn list_searches(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let store = state.history_store()?;
    let records = store
        .recent()
        .await
        .map_err(|err| store_failure("Failed to fetch searches", &err))?;
    Ok(HttpResponse::Ok().json(records))
}

/// Record one search and return the stored row with status 201.
pub async fn record_search(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let store = state.history_store()?;
    let request: RecordSearchRequest = serde_json::from_slice(&body).unwrap_or_default();

    let search = NewSearch::from_parts(
        &request.query,
        request.from,
        request.to,
        request.distance_km.as_ref(),
        request.co2_per_pax_kg.as_ref(),
    )
    .map_err(map_validation_error)?;

    let record = store
        .insert(&search)
        .await
        .map_err(|err| store_failure("Failed to insert search", &err))?;
    Ok(HttpResponse::Created().json(record))
}

fn map_validation_error(err: SearchValidationError) -> Error {
    match err {
        SearchValidationError::EmptyQuery => Error::invalid_request("Missing query"),
    }
}

fn store_failure(context: &str, err: &HistoryStoreError) -> Error {
    Error::internal(context).with_details(Value::String(err.to_string()))
}
