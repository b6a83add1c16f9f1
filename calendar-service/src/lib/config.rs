use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use thiserror::Error;

/// Startup configuration failures. Any of these aborts the process.
#[derive(Debug, Error)]
pub enum ConfigurationFault {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("JWT signing secret is not set (JWT_SECRET or JWT__SECRET)")]
    MissingSigningSecret,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL URL. Without one, users are kept in memory.
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Clone, Default, Deserialize)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. `JWT_SECRET` for the signing secret
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    ///
    /// # Errors
    /// * `Load` - A source could not be read or deserialized
    /// * `MissingSigningSecret` - No non-empty signing secret was provided
    pub fn load() -> Result<Self, ConfigurationFault> {
        Self::load_from(Environment::default(), env::var("JWT_SECRET").ok())
    }

    fn load_from(
        environment: Environment,
        jwt_secret: Option<String>,
    ) -> Result<Self, ConfigurationFault> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8080)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Unprefixed variables, `__` between levels: DATABASE__URL overrides database.url
            .add_source(environment.separator("__"))
            .set_override_option("jwt.secret", jwt_secret)?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// # Errors
    /// * `MissingSigningSecret` - Signing secret is empty
    pub fn validate(&self) -> Result<(), ConfigurationFault> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigurationFault::MissingSigningSecret);
        }

        Ok(())
    }
}
