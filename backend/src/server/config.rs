//! Service configuration loaded via OrthoConfig.
//!
//! Every value can come from the environment (`SCORE_` prefix), a config
//! file or the command line; everything has a workable default except the
//! Supabase pair, whose absence simply leaves the history endpoint
//! unconfigured.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::ourairports::OURAIRPORTS_CSV_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 8080;

/// Configuration values for the score service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCORE")]
pub struct AppSettings {
    /// Address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Port the HTTP server binds to.
    pub bind_port: Option<u16>,
    /// Override for the airports dataset URL.
    pub dataset_url: Option<String>,
    /// Supabase project URL backing the history endpoint.
    pub supabase_url: Option<String>,
    /// Supabase anonymous key backing the history endpoint.
    pub supabase_anon_key: Option<String>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to all interfaces.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured bind port, falling back to 8080.
    pub fn bind_port(&self) -> u16 {
        self.bind_port.unwrap_or(DEFAULT_BIND_PORT)
    }

    /// Return the dataset URL, falling back to the OurAirports original.
    pub fn dataset_url(&self) -> &str {
        self.dataset_url.as_deref().unwrap_or(OURAIRPORTS_CSV_URL)
    }

    /// Return the Supabase project URL, when configured.
    pub fn supabase_url(&self) -> Option<&str> {
        self.supabase_url.as_deref()
    }

    /// Return the Supabase anonymous key, when configured.
    pub fn supabase_anon_key(&self) -> Option<&str> {
        self.supabase_anon_key.as_deref()
    }
}
