//! Domain logic for the flight score service.
//!
//! Purpose: the computational core (dataset parsing, route extraction,
//! great-circle maths) plus the ports through which adapters reach the
//! outside world. Everything here is transport agnostic; the HTTP layer
//! maps these types onto the wire.
//!
//! Public surface:
//! - `Airport` / `AirportMap`: dataset records and the code lookup.
//! - `AirportCatalogue`: single-flight, process-lifetime dataset cache.
//! - `RouteQuery` and `route::parse_route`: free-text route extraction.
//! - `geo`: haversine distance and the CO2 estimate.
//! - `NewSearch` / `SearchRecord`: history store boundary types.
//! - `Error` / `ErrorCode`: API error payload and status category.
//! - `ports`: driven ports implemented by outbound adapters.

pub mod airport;
pub mod catalogue;
pub mod csv;
pub mod error;
pub mod geo;
pub mod ports;
pub mod route;
pub mod search;

pub use self::airport::{Airport, AirportMap};
pub use self::catalogue::AirportCatalogue;
pub use self::error::{Error, ErrorCode};
pub use self::route::RouteQuery;
pub use self::search::{NewSearch, SearchRecord, SearchValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use flightscore::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::method_not_allowed())
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
