//! Driven port for fetching the raw airports dataset.
//!
//! The domain owns the error contract so the catalogue can cache and
//! surface load failures without knowing which transport produced them.

use async_trait::async_trait;

/// Errors raised while loading or interpreting the airports dataset.
///
/// `Clone` matters here: the catalogue caches the load outcome, including
/// failures, for the process lifetime and hands copies to every caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The dataset could not be retrieved (transport failure or non-success
    /// HTTP status).
    #[error("failed to load airports dataset: {message}")]
    Fetch {
        /// Transport or status description.
        message: String,
    },
    /// The dataset was retrieved but does not look like the expected CSV.
    #[error("unexpected airports dataset format: {message}")]
    Format {
        /// What was missing or malformed.
        message: String,
    },
}

impl DatasetError {
    /// Construct a [`DatasetError::Fetch`].
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Construct a [`DatasetError::Format`].
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

/// Port for retrieving the raw dataset body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AirportDataSource: Send + Sync {
    /// Fetch the dataset as CSV text.
    ///
    /// Implementations map transport failures and non-success statuses to
    /// [`DatasetError::Fetch`]; they do not interpret the body.
    async fn fetch_csv(&self) -> Result<String, DatasetError>;
}
