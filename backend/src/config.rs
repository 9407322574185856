use std::env;

/// Default upstream API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Origin allowed to read responses when `ALLOWED_ORIGINS` is unset
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://avanish-portfolio-site.netlify.app";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Token sent to the upstream API on every request
    pub github_token: String,
    /// The single account whose data the relay serves
    pub github_username: String,
    /// Upstream API base URL, without trailing slash
    pub github_api_url: String,
    /// Upstream request timeout in seconds (default: 30)
    pub github_timeout_secs: u64,
    /// Browser origins allowed to read responses
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_token = var("GITHUB_TOKEN").ok_or(ConfigError::MissingEnvVar("GITHUB_TOKEN"))?;

        let github_username =
            var("GITHUB_USERNAME").ok_or(ConfigError::MissingEnvVar("GITHUB_USERNAME"))?;

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = var("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_api_url = var("GITHUB_API_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let github_timeout_secs = var("GITHUB_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("GITHUB_TIMEOUT_SECS"))?;

        let allowed_origins: Vec<String> = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let is_http_origin = |o: &String| o.starts_with("http://") || o.starts_with("https://");
        if allowed_origins.is_empty() || !allowed_origins.iter().all(is_http_origin) {
            return Err(ConfigError::InvalidValue("ALLOWED_ORIGINS"));
        }

        Ok(Self {
            host,
            port,
            github_token,
            github_username,
            github_api_url,
            github_timeout_secs,
            allowed_origins,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
