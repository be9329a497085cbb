//! Score API handler.
//!
//! ```text
//! POST /api/score {"query":"LAX to JFK"}
//! ```
//!
//! Parses a free-text route, resolves both codes against the airport
//! catalogue and returns distance and CO2 figures. The request body is
//! read leniently: anything that is not a JSON object with a string
//! `query` degrades to an empty query, which then fails route parsing
//! with the usual hint instead of a serialisation error.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::{ApiResult, Error, geo, route};
use crate::inbound::http::state::HttpState;

/// Version tag reported in every success payload.
const SERVER_VERSION: &str = concat!("score-api/", env!("CARGO_PKG_VERSION"));

/// Attribution for where the numbers come from.
const SOURCE_ATTRIBUTION: &str = "OurAirports airports.csv coordinates, haversine distance";

/// Hint returned when no route can be extracted from the query.
const ROUTE_FORMAT_HINT: &str = "Enter a route like LAX to JFK or LAX-JFK";

/// Score request body for `POST /api/score`.
///
/// Example JSON: `{"query":"LAX to JFK"}`
#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    /// Free-text route query.
    #[serde(default)]
    pub query: String,
}

/// Success payload for `POST /api/score`.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub server_version: &'static str,
    /// The submitted query, trimmed.
    pub query: String,
    pub from: String,
    pub to: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub dep_lat: f64,
    pub dep_lon: f64,
    pub arr_lat: f64,
    pub arr_lon: f64,
    /// Great-circle distance rounded to the nearest kilometre.
    pub distance_km: i64,
    /// Emissions estimate computed from the unrounded distance, then
    /// rounded to one decimal.
    pub co2_per_pax_kg: f64,
    pub emissions_factor_kg_per_pax_km: f64,
    pub source: &'static str,
}

/// Compute distance and emissions for a free-text route query.
pub async fn score(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request: ScoreRequest = serde_json::from_slice(&body).unwrap_or_default();

    let route = route::parse_route(&request.query)
        .ok_or_else(|| Error::invalid_request(ROUTE_FORMAT_HINT))?;

    let airports = state.airports.get().await.map_err(|err| {
        Error::internal("Server error").with_details(Value::String(err.to_string()))
    })?;

    let (Some(departure), Some(arrival)) = (airports.get(&route.from), airports.get(&route.to))
    else {
        return Err(Error::not_found("Airport not found")
            .with_details(json!({ "from": route.from, "to": route.to })));
    };

    let distance = geo::haversine_km(
        departure.latitude,
        departure.longitude,
        arrival.latitude,
        arrival.longitude,
    );

    Ok(HttpResponse::Ok().json(ScoreResponse {
        server_version: SERVER_VERSION,
        query: request.query.trim().to_owned(),
        from: departure.iata.clone(),
        to: arrival.iata.clone(),
        departure_airport: departure.name.clone(),
        arrival_airport: arrival.name.clone(),
        dep_lat: departure.latitude,
        dep_lon: departure.longitude,
        arr_lat: arrival.latitude,
        arr_lon: arrival.longitude,
        distance_km: geo::round_km(distance),
        co2_per_pax_kg: geo::co2_per_pax_kg(distance),
        emissions_factor_kg_per_pax_km: geo::EMISSIONS_FACTOR_KG_PER_PAX_KM,
        source: SOURCE_ATTRIBUTION,
    }))
}

#[cfg(test)]
mod tests {
    //! Unit tests driving the handler directly, without a full app.

    use std::sync::Arc;

    use actix_web::body::to_bytes;
    use actix_web::web;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::score;
    use crate::domain::ports::{DatasetError, HistoryStoreError, MockAirportDataSource};
    use crate::domain::{AirportCatalogue, Error, ErrorCode};
    use crate::inbound::http::state::HttpState;

    const DATASET: &str = "\
id,name,latitude_deg,longitude_deg,iata_code
1,Los Angeles International Airport,33.9425,-118.408,LAX
2,John F Kennedy International Airport,40.6398,-73.7789,JFK
";

    fn state_for(source: MockAirportDataSource) -> web::Data<HttpState> {
        let catalogue = Arc::new(AirportCatalogue::new(Arc::new(source)));
        web::Data::new(HttpState::new(
            catalogue,
            Err(HistoryStoreError::not_configured("Supabase not configured")),
        ))
    }

    fn state_with_dataset() -> web::Data<HttpState> {
        let mut source = MockAirportDataSource::new();
        source
            .expect_fetch_csv()
            .times(1)
            .returning(|| Ok(DATASET.to_owned()));
        state_for(source)
    }

    async fn call(state: &web::Data<HttpState>, body: &'static str) -> Result<Value, Error> {
        let response = score(state.clone(), web::Bytes::from_static(body.as_bytes())).await?;
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        Ok(serde_json::from_slice(&bytes).expect("score payload is JSON"))
    }

    #[rstest]
    #[case::prose(r#"{"query":"hello world"}"#)]
    #[case::empty_object("{}")]
    #[case::not_json("route please")]
    #[case::wrong_type(r#"{"query":42}"#)]
    #[case::identical_pair(r#"{"query":"LAX to LAX"}"#)]
    #[actix_web::test]
    async fn unparseable_queries_get_the_format_hint(#[case] body: &'static str) {
        // No fetch expectation: a parse failure must never touch the loader.
        let state = state_for(MockAirportDataSource::new());

        let err = call(&state, body).await.expect_err("parse fails");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Enter a route like LAX to JFK or LAX-JFK");
        assert_eq!(err.details(), None);
    }

    #[actix_web::test]
    async fn dataset_failures_surface_as_server_error() {
        let mut source = MockAirportDataSource::new();
        source
            .expect_fetch_csv()
            .times(1)
            .returning(|| Err(DatasetError::fetch("upstream status 503")));
        let state = state_for(source);

        let err = call(&state, r#"{"query":"LAX to JFK"}"#)
            .await
            .expect_err("load fails");
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Server error");
        assert_eq!(
            err.details(),
            Some(&Value::String(
                "failed to load airports dataset: upstream status 503".into()
            )),
        );
    }

    #[actix_web::test]
    async fn unknown_codes_report_both_requested_codes() {
        let state = state_with_dataset();

        let err = call(&state, r#"{"query":"LAX to XXX"}"#)
            .await
            .expect_err("lookup fails");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "Airport not found");
        assert_eq!(err.details(), Some(&json!({ "from": "LAX", "to": "XXX" })));
    }

    #[actix_web::test]
    async fn success_payload_is_exact_and_deterministic() {
        let state = state_with_dataset();

        let expected = json!({
            "server_version": concat!("score-api/", env!("CARGO_PKG_VERSION")),
            "query": "LAX to JFK",
            "from": "LAX",
            "to": "JFK",
            "departure_airport": "Los Angeles International Airport",
            "arrival_airport": "John F Kennedy International Airport",
            "dep_lat": 33.9425,
            "dep_lon": -118.408,
            "arr_lat": 40.6398,
            "arr_lon": -73.7789,
            "distance_km": 3974,
            "co2_per_pax_kg": 437.2,
            "emissions_factor_kg_per_pax_km": 0.11,
            "source": "OurAirports airports.csv coordinates, haversine distance",
        });

        // Whitespace around the query is trimmed in the echo. The mock's
        // single fetch expectation doubles as the shared-cache assertion:
        // two requests, one upstream load.
        let first = call(&state, r#"{"query":"  LAX to JFK  "}"#)
            .await
            .expect("first call succeeds");
        assert_eq!(first, expected);

        let second = call(&state, r#"{"query":"  LAX to JFK  "}"#)
            .await
            .expect("second call succeeds");
        assert_eq!(second, expected);
    }

    #[actix_web::test]
    async fn hyphen_and_reversed_routes_resolve() {
        let state = state_with_dataset();

        let body = call(&state, r#"{"query":"jfk-lax"}"#)
            .await
            .expect("hyphen route succeeds");
        assert_eq!(body.get("from"), Some(&json!("JFK")));
        assert_eq!(body.get("to"), Some(&json!("LAX")));
        // Same pair, both directions, same distance.
        assert_eq!(body.get("distance_km"), Some(&json!(3974)));
    }
}
