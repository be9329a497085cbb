//! Driven port for the search history row store.

use async_trait::async_trait;

use crate::domain::search::{NewSearch, SearchRecord};

/// Errors raised by the history store boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryStoreError {
    /// The store is not usable because its settings are missing or
    /// malformed. Raised at construction time, before any network client
    /// exists.
    #[error("{message}")]
    NotConfigured {
        /// User-facing configuration failure text.
        message: String,
    },
    /// The store was reached but the call failed; the message carries the
    /// backend's own description verbatim.
    #[error("{message}")]
    Backend {
        /// Backend failure text.
        message: String,
    },
}

impl HistoryStoreError {
    /// Construct a [`HistoryStoreError::NotConfigured`].
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    /// Construct a [`HistoryStoreError::Backend`].
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Port for reading and appending search history rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchHistoryStore: Send + Sync {
    /// Fetch the most recent records, newest first, capped by the store's
    /// history window.
    async fn recent(&self) -> Result<Vec<SearchRecord>, HistoryStoreError>;

    /// Insert one record and return it as stored (id and timestamp
    /// assigned by the backend).
    async fn insert(&self, search: &NewSearch) -> Result<SearchRecord, HistoryStoreError>;
}

#[cfg(test)]
impl std::fmt::Debug for dyn SearchHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn SearchHistoryStore")
    }
}
