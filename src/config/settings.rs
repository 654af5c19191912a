//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default location of the dental clinic directory.
pub const DEFAULT_DENTAL_CLINICS_URL: &str =
    "https://storage.googleapis.com/scratchpay-code-challenge/dental-clinics.json";

/// Default location of the veterinary clinic directory.
pub const DEFAULT_VET_CLINICS_URL: &str =
    "https://storage.googleapis.com/scratchpay-code-challenge/vet-clinics.json";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Upstream clinic directories
    pub directory: DirectorySettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Upstream directory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    /// URL of the dental clinic JSON list
    pub dental_url: String,

    /// URL of the veterinary clinic JSON list
    pub vet_url: String,

    /// Total request timeout in seconds, unbounded when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins, any origin when empty
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a directory URL is not a valid absolute URL.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            .set_default("directory.dental_url", DEFAULT_DENTAL_CLINICS_URL)?
            .set_default("directory.vet_url", DEFAULT_VET_CLINICS_URL)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=4000 -> server.port = 4000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option(
                "directory.dental_url",
                std::env::var("DENTAL_CLINICS_URL").ok(),
            )?
            .set_override_option("directory.vet_url", std::env::var("VET_CLINICS_URL").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.directory.validate()?;
                Ok(settings)
            })
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<std::net::SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid server address: {}", e)))
    }
}

impl DirectorySettings {
    /// Reject directory URLs that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("dental_url", &self.dental_url), ("vet_url", &self.vet_url)] {
            let url = url::Url::parse(value).map_err(|e| {
                ConfigError::Message(format!("directory.{} is not a valid URL: {}", key, e))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::Message(format!(
                    "directory.{} must use http or https, got {}",
                    key,
                    url.scheme()
                )));
            }
        }
        Ok(())
    }

    /// Request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        self.request_timeout_secs.map(std::time::Duration::from_secs)
    }
}
