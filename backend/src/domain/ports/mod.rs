//! Domain ports and supporting types for the hexagonal boundary.

mod airport_data_source;
mod search_history_store;

#[cfg(test)]
pub use airport_data_source::MockAirportDataSource;
pub use airport_data_source::{AirportDataSource, DatasetError};
#[cfg(test)]
pub use search_history_store::MockSearchHistoryStore;
pub use search_history_store::{HistoryStoreError, SearchHistoryStore};
