//! Server construction and wiring.

mod config;

pub use config::AppSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;
use url::Url;

use crate::domain::AirportCatalogue;
use crate::domain::ports::SearchHistoryStore;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::score::score;
use crate::inbound::http::searches::{list_searches, record_search};
use crate::inbound::http::{HttpState, method_not_allowed};
use crate::outbound::ourairports::OurAirportsHttpSource;
use crate::outbound::supabase::SupabaseSearchStore;

/// Assemble the application with all routes and shared state.
///
/// Unmatched methods on the API paths answer 405 through the catch-all
/// routes rather than actix's default 404.
pub fn build_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(health)
        .service(
            web::scope("/api")
                .service(
                    web::resource("/score")
                        .route(web::post().to(score))
                        .route(web::route().to(method_not_allowed)),
                )
                .service(
                    web::resource("/searches")
                        .route(web::get().to(list_searches))
                        .route(web::post().to(record_search))
                        .route(web::route().to(method_not_allowed)),
                ),
        )
        .service(ready)
        .service(live)
}

/// Build the shared HTTP state from configuration.
///
/// The history store degrades to its configuration error instead of
/// failing startup; the score endpoint works regardless.
///
/// # Errors
/// Returns [`std::io::Error`] when the dataset URL is invalid or the HTTP
/// client cannot be constructed.
pub fn build_http_state(settings: &AppSettings) -> std::io::Result<web::Data<HttpState>> {
    let dataset_url = Url::parse(settings.dataset_url())
        .map_err(|err| std::io::Error::other(format!("invalid dataset URL: {err}")))?;
    let source = OurAirportsHttpSource::new(dataset_url)
        .map_err(|err| std::io::Error::other(format!("dataset client failed: {err}")))?;
    let airports = Arc::new(AirportCatalogue::new(Arc::new(source)));

    let history =
        SupabaseSearchStore::from_parts(settings.supabase_url(), settings.supabase_anon_key())
            .map(|store| Arc::new(store) as Arc<dyn SearchHistoryStore>)
            .inspect_err(|err| warn!(error = %err, "history store disabled"));

    Ok(web::Data::new(HttpState::new(airports, history)))
}

/// Construct an Actix HTTP server for the given configuration.
///
/// Readiness is signalled once the listener is bound; the returned server
/// still needs to be awaited to serve traffic.
///
/// # Errors
/// Propagates [`std::io::Error`] when state construction or binding the
/// socket fails.
pub fn create_server(
    health: web::Data<HealthState>,
    settings: &AppSettings,
) -> std::io::Result<Server> {
    let state = build_http_state(settings)?;
    let server_health = health.clone();
    let server = HttpServer::new(move || build_app(state.clone(), server_health.clone()))
        .bind((settings.bind_addr(), settings.bind_port()))?
        .run();

    health.mark_ready();
    Ok(server)
}
