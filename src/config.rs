use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::page::PageSettings;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Unix socket to serve on instead of `listen`
    pub socket: Option<PathBuf>,

    /// JSON file holding the contributor list
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,

    /// Pagination, search and stats link settings shipped to the page
    #[serde(default)]
    pub page: PageSettings,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/contributors.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP HTTP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `CONTRIBUTORS_`; nested keys are
    /// separated by a double underscore:
    /// - CONTRIBUTORS_LISTEN
    /// - CONTRIBUTORS_SOCKET
    /// - CONTRIBUTORS_DATA_PATH
    /// - CONTRIBUTORS_OTEL__ENDPOINT
    /// - CONTRIBUTORS_OTEL__ENVIRONMENT
    /// - CONTRIBUTORS_PAGE__INITIAL_VISIBLE
    /// - CONTRIBUTORS_PAGE__PAGE_SIZE
    /// - CONTRIBUTORS_PAGE__REVEAL_DELAY_MS
    /// - CONTRIBUTORS_PAGE__SEARCH_SCOPE (`loaded` or `all`)
    /// - CONTRIBUTORS_PAGE__STATS_REPO
    ///
    /// # Errors
    ///
    /// Fails when a variable cannot be converted to its field type.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("CONTRIBUTORS_").split("__"))
            .extract()
    }

    /// # Errors
    ///
    /// Returns [`AppError::Listen`] when `listen` is not a socket address.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        self.listen
            .parse()
            .map_err(|_| AppError::Listen(self.listen.clone()))
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    data_path: PathBuf,
    otel: OtelConfig,
    page: PageSettings,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            data_path: default_data_path(),
            otel: OtelConfig::default(),
            page: PageSettings::default(),
        }
    }
}
