//! Configuration management.
//!
//! Settings come from built-in defaults, overridden by environment variables
//! with the `PUBMED_PAPERS_` prefix and `__` as the section separator:
//!
//! ```bash
//! export PUBMED_PAPERS_ENDPOINTS__ESEARCH_URL="http://localhost:8080/esearch.fcgi"
//! export PUBMED_PAPERS_ENDPOINTS__ESUMMARY_URL="http://localhost:8080/esummary.fcgi"
//! export PUBMED_PAPERS_HTTP__TIMEOUT_SECS=30
//! ```

use serde::{Deserialize, Serialize};

/// Default E-utilities search endpoint
pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// Default E-utilities summary endpoint
pub const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "PUBMED_PAPERS";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,

    #[serde(default)]
    pub http: HttpSettings,
}

/// Upstream endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_esearch_url")]
    pub esearch_url: String,

    #[serde(default = "default_esummary_url")]
    pub esummary_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            esearch_url: default_esearch_url(),
            esummary_url: default_esummary_url(),
        }
    }
}

impl Endpoints {
    /// Endpoints rooted at `base`, using the E-utilities script names.
    ///
    /// Mostly useful for pointing the client at a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            esearch_url: format!("{}/esearch.fcgi", base),
            esummary_url: format!("{}/esummary.fcgi", base),
        }
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        for (name, value) in [
            ("endpoints.esearch_url", &self.esearch_url),
            ("endpoints.esummary_url", &self.esummary_url),
        ] {
            url::Url::parse(value).map_err(|e| {
                config::ConfigError::Message(format!("{} is not a valid URL ({}): {}", name, value, e))
            })?;
        }
        Ok(())
    }
}

fn default_esearch_url() -> String {
    ESEARCH_URL.to_string()
}

fn default_esummary_url() -> String {
    ESUMMARY_URL.to_string()
}

/// HTTP client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds; `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Overrides the default `pubmed-papers/<version>` user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Load configuration from the process environment
pub fn load_config() -> Result<Config, config::ConfigError> {
    load_config_from(environment())
}

/// Load configuration from an explicit environment source
pub fn load_config_from(env: config::Environment) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder().add_source(env).build()?;
    let config: Config = settings.try_deserialize()?;
    config.endpoints.validate()?;
    Ok(config)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
