//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{HistoryStoreError, SearchHistoryStore};
use crate::domain::{AirportCatalogue, Error};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Lazily loaded airport catalogue shared across workers.
    pub airports: Arc<AirportCatalogue>,
    /// History store, or the configuration failure explaining its absence.
    pub history: Result<Arc<dyn SearchHistoryStore>, HistoryStoreError>,
}

impl HttpState {
    /// Construct state from the airport catalogue and history store outcome.
    pub fn new(
        airports: Arc<AirportCatalogue>,
        history: Result<Arc<dyn SearchHistoryStore>, HistoryStoreError>,
    ) -> Self {
        Self { airports, history }
    }

    /// Resolve the history store, surfacing the configuration failure as a
    /// domain error.
    ///
    /// An unconfigured store fails every history request with the stored
    /// message before any request validation runs.
    pub fn history_store(&self) -> Result<&Arc<dyn SearchHistoryStore>, Error> {
        self.history
            .as_ref()
            .map_err(|err| Error::internal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for history store resolution.

    use std::sync::Arc;

    use super::HttpState;
    use crate::domain::AirportCatalogue;
    use crate::domain::ports::{
        HistoryStoreError, MockAirportDataSource, MockSearchHistoryStore, SearchHistoryStore,
    };
    use crate::domain::{Error, ErrorCode};

    fn catalogue() -> Arc<AirportCatalogue> {
        Arc::new(AirportCatalogue::new(Arc::new(MockAirportDataSource::new())))
    }

    #[test]
    fn unconfigured_history_resolves_to_internal_error() {
        let state = HttpState::new(
            catalogue(),
            Err(HistoryStoreError::not_configured("Supabase not configured")),
        );

        let err = state.history_store().expect_err("store is unconfigured");
        assert_eq!(
            err,
            Error::internal("Supabase not configured"),
            "the configuration failure text reaches clients verbatim",
        );
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn configured_history_resolves_to_the_store() {
        let store: Arc<dyn SearchHistoryStore> = Arc::new(MockSearchHistoryStore::new());
        let state = HttpState::new(catalogue(), Ok(store));

        assert!(state.history_store().is_ok());
    }
}
