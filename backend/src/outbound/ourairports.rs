//! Reqwest-backed OurAirports dataset adapter.
//!
//! This adapter owns transport details only: the GET request, HTTP error
//! mapping and handing the raw CSV text to the domain loader. No request
//! timeout is configured; the dataset is fetched once per process and any
//! failure is cached for the process lifetime.

use async_trait::async_trait;
use reqwest::{Client, Url, header};

use super::body_preview;
use crate::domain::ports::{AirportDataSource, DatasetError};

/// Canonical location of the OurAirports dataset.
pub const OURAIRPORTS_CSV_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";

const USER_AGENT: &str = concat!("flightscore-backend/", env!("CARGO_PKG_VERSION"));

/// Dataset source that performs one HTTP GET against a CSV endpoint.
pub struct OurAirportsHttpSource {
    client: Client,
    endpoint: Url,
}

impl OurAirportsHttpSource {
    /// Build an adapter for the given dataset endpoint.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AirportDataSource for OurAirportsHttpSource {
    async fn fetch_csv(&self) -> Result<String, DatasetError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "text/csv")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status.as_u16(), body.as_ref()));
        }

        Ok(String::from_utf8_lossy(body.as_ref()).into_owned())
    }
}

fn map_transport_error(error: reqwest::Error) -> DatasetError {
    DatasetError::fetch(error.to_string())
}

fn map_status_error(status: u16, body: &[u8]) -> DatasetError {
    let preview = body_preview(body);
    if preview.is_empty() {
        DatasetError::fetch(format!("status {status}"))
    } else {
        DatasetError::fetch(format!("status {status}: {preview}"))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error mapping; no network involved.

    use reqwest::Url;

    use super::{OURAIRPORTS_CSV_URL, OurAirportsHttpSource, map_status_error};
    use crate::domain::ports::DatasetError;

    #[test]
    fn default_dataset_url_parses_and_builds_a_source() {
        let url = Url::parse(OURAIRPORTS_CSV_URL).expect("canonical URL is valid");
        OurAirportsHttpSource::new(url).expect("client builds");
    }

    #[test]
    fn status_errors_include_a_body_preview() {
        assert_eq!(
            map_status_error(503, b"<html>  maintenance \n page</html>"),
            DatasetError::fetch("status 503: <html> maintenance page</html>"),
        );
        assert_eq!(map_status_error(404, b""), DatasetError::fetch("status 404"));
    }
}
