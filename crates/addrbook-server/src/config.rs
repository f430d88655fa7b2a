//! Server configuration from command-line flags and environment variables.
//!
//! Every flag falls back to an `ADDRBOOK_*` environment variable. The distance
//! API key has no default and must be supplied by the operator.

use std::time::Duration;

use clap::Parser;

use crate::distance::DistanceConfig;

/// Default endpoint of the distance matrix collaborator.
pub const DEFAULT_DISTANCE_API_URL: &str =
    "https://api.distancematrix.ai/maps/api/distancematrix/json";

/// Runtime configuration for the address book server.
#[derive(Clone, Parser)]
#[command(name = "addrbook", about = "Address book HTTP service")]
pub struct ServerConfig {
    /// SQLite database file path.
    #[arg(long, env = "ADDRBOOK_DB_PATH", default_value = "address_book.db")]
    pub db_path: String,

    /// Interface to listen on.
    #[arg(long, env = "ADDRBOOK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "ADDRBOOK_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Distance matrix endpoint queried by the range search.
    #[arg(long, env = "ADDRBOOK_DISTANCE_API_URL", default_value = DEFAULT_DISTANCE_API_URL)]
    pub distance_api_url: String,

    /// API key sent to the distance matrix endpoint.
    #[arg(long, env = "ADDRBOOK_DISTANCE_API_KEY", hide_env_values = true)]
    pub distance_api_key: String,

    /// Per-request timeout for distance lookups, in seconds. Unset means no timeout.
    #[arg(long, env = "ADDRBOOK_DISTANCE_TIMEOUT_SECS")]
    pub distance_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// `host:port` string for the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the distance collaborator client.
    pub fn distance(&self) -> DistanceConfig {
        DistanceConfig {
            base_url: self.distance_api_url.clone(),
            api_key: self.distance_api_key.clone(),
            timeout: self.distance_timeout_secs.map(Duration::from_secs),
        }
    }
}
