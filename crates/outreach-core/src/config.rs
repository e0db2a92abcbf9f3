use anyhow::Result;
use config::{Config, Environment, Map};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Durability level requested for every write.
///
/// Maps onto the `PostgreSQL` `synchronous_commit` session setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynchronousCommit {
    On,
    Off,
    Local,
    RemoteWrite,
    RemoteApply,
}

impl SynchronousCommit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Local => "local",
            Self::RemoteWrite => "remote_write",
            Self::RemoteApply => "remote_apply",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    pub synchronous_commit: SynchronousCommit,
    pub statement_timeout_ms: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Keys containing an underscore. The `_` separator would split them into
/// nested tables, so their variables are mapped by name.
const UNDERSCORED_KEYS: [(&str, &str); 3] = [
    ("DATABASE_MAX_CONNECTIONS", "database.max_connections"),
    ("DATABASE_SYNCHRONOUS_COMMIT", "database.synchronous_commit"),
    ("DATABASE_STATEMENT_TIMEOUT_MS", "database.statement_timeout_ms"),
];

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` and the process environment.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::from_env(std::env::vars())
    }

    /// ## Summary
    /// Loads configuration with `vars` standing in for the process environment.
    ///
    /// `DATABASE_URL` sets `database.url`, `SERVER_PORT` sets `server.port`,
    /// `DATABASE_STATEMENT_TIMEOUT_MS` sets `database.statement_timeout_ms`.
    /// Empty values are ignored.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn from_env<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Map<String, String> = vars
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.max_connections", 4)?
            .set_default("database.synchronous_commit", "on")?
            .set_default("database.statement_timeout_ms", 1000)?
            .set_default("logging.level", "debug")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                Environment::default()
                    .source(Some(vars.clone()))
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            );

        for (var, key) in UNDERSCORED_KEYS {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        Ok(builder.build()?.try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
