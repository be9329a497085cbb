//! Process-lifetime cached airport catalogue.
//!
//! Loading the dataset is the one expensive operation in this service, so
//! it happens at most once per process: the first caller triggers the fetch
//! and parse, concurrent callers share that in-flight load, and every later
//! caller gets the cached outcome. The catalogue is plain state handed to
//! the HTTP adapter rather than a global.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use super::airport::{self, AirportMap};
use super::ports::{AirportDataSource, DatasetError};

/// Lazily loaded, process-lifetime airport lookup.
pub struct AirportCatalogue {
    source: Arc<dyn AirportDataSource>,
    cache: OnceCell<Result<Arc<AirportMap>, DatasetError>>,
}

impl AirportCatalogue {
    /// Create a catalogue over the given dataset source. Nothing is fetched
    /// until the first [`AirportCatalogue::get`] call.
    pub fn new(source: Arc<dyn AirportDataSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Resolve the airport map, loading the dataset on first use.
    ///
    /// Single-flight: concurrent first callers share one upstream fetch and
    /// observe the same outcome. Success and failure are both cached for
    /// the process lifetime, so a failed first load stays failed until the
    /// process restarts.
    ///
    /// # Errors
    /// Returns the cached [`DatasetError`] when the one-time load failed.
    pub async fn get(&self) -> Result<Arc<AirportMap>, DatasetError> {
        self.cache.get_or_init(|| self.load()).await.clone()
    }

    async fn load(&self) -> Result<Arc<AirportMap>, DatasetError> {
        let outcome = match self.source.fetch_csv().await {
            Ok(text) => airport::parse_airport_map(&text).map(Arc::new),
            Err(err) => Err(err),
        };
        match &outcome {
            Ok(map) => info!(airports = map.len(), "airports dataset loaded"),
            Err(err) => error!(error = %err, "airports dataset load failed"),
        }
        outcome
    }
}
