#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// HTTP(S) URL or filesystem path of the tournament JSON file.
    pub data_source: String,
    pub geocoder_url: String,
    /// Comma-separated ISO 3166-1 country codes passed as `countrycodes`.
    pub geocoder_country_codes: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
