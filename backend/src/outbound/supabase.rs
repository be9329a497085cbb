//! PostgREST-backed Supabase adapter for the search history store.
//!
//! Speaks to the project's `/rest/v1` endpoint with the anonymous key sent
//! both as the `apikey` header and as the bearer token, which is how
//! Supabase grants anon-role access. Configuration is gated up front: a
//! missing or implausible URL or key yields a store that was never
//! constructed, so no request can ever be attempted against it.

use async_trait::async_trait;
use postgrest::Postgrest;

use super::body_preview;
use crate::domain::ports::{HistoryStoreError, SearchHistoryStore};
use crate::domain::{NewSearch, SearchRecord};

const SEARCHES_TABLE: &str = "searches";
const SEARCH_COLUMNS: &str = "id,query,from_iata,to_iata,distance_km,co2_per_pax_kg,created_at";

/// Maximum rows returned by the history listing.
const HISTORY_LIMIT: usize = 10;

/// Anon keys are long JWTs; anything at or below 20 bytes is a placeholder.
const MIN_ANON_KEY_LENGTH: usize = 21;

const NOT_CONFIGURED: &str = "Supabase not configured";

/// Search history store backed by a Supabase PostgREST endpoint.
pub struct SupabaseSearchStore {
    client: Postgrest,
    anon_key: String,
}

impl SupabaseSearchStore {
    /// Gate and build the store from optional configuration values.
    ///
    /// # Errors
    /// Returns [`HistoryStoreError::NotConfigured`] when either value is
    /// missing or implausible; no client exists in that case.
    pub fn from_parts(url: Option<&str>, key: Option<&str>) -> Result<Self, HistoryStoreError> {
        let (Some(url), Some(key)) = (url, key) else {
            return Err(HistoryStoreError::not_configured(NOT_CONFIGURED));
        };
        if !url.starts_with("http") || key.len() < MIN_ANON_KEY_LENGTH {
            return Err(HistoryStoreError::not_configured(NOT_CONFIGURED));
        }
        let client = Postgrest::new(rest_endpoint(url)).insert_header("apikey", key);
        Ok(Self {
            client,
            anon_key: key.to_owned(),
        })
    }
}

#[async_trait]
impl SearchHistoryStore for SupabaseSearchStore {
    async fn recent(&self) -> Result<Vec<SearchRecord>, HistoryStoreError> {
        let response = self
            .client
            .from(SEARCHES_TABLE)
            .auth(&self.anon_key)
            .select(SEARCH_COLUMNS)
            .order("created_at.desc")
            .limit(HISTORY_LIMIT)
            .execute()
            .await
            .map_err(|err| HistoryStoreError::backend(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| HistoryStoreError::backend(err.to_string()))?;
        if !status.is_success() {
            return Err(status_failure(status.as_u16(), &body));
        }

        parse_rows(&body)
    }

    async fn insert(&self, search: &NewSearch) -> Result<SearchRecord, HistoryStoreError> {
        let row = serde_json::to_string(search)
            .map_err(|err| HistoryStoreError::backend(format!("row serialisation failed: {err}")))?;

        // PostgREST echoes the inserted row back (Prefer: return=representation),
        // so no follow-up select is needed.
        let response = self
            .client
            .from(SEARCHES_TABLE)
            .auth(&self.anon_key)
            .insert(row)
            .execute()
            .await
            .map_err(|err| HistoryStoreError::backend(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| HistoryStoreError::backend(err.to_string()))?;
        if !status.is_success() {
            return Err(status_failure(status.as_u16(), &body));
        }

        parse_rows(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| HistoryStoreError::backend("insert returned no rows"))
    }
}

fn rest_endpoint(project_url: &str) -> String {
    format!("{}/rest/v1", project_url.trim_end_matches('/'))
}

fn status_failure(status: u16, body: &str) -> HistoryStoreError {
    let preview = body_preview(body.as_bytes());
    if preview.is_empty() {
        HistoryStoreError::backend(format!("status {status}"))
    } else {
        HistoryStoreError::backend(format!("status {status}: {preview}"))
    }
}

fn parse_rows(body: &str) -> Result<Vec<SearchRecord>, HistoryStoreError> {
    serde_json::from_str(body)
        .map_err(|err| HistoryStoreError::backend(format!("unexpected response shape: {err}")))
}
