//! Server configuration read from the process environment (and `.env`).

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable '{0}' not set")]
    Missing(&'static str),
    #[error("Environment variable '{name}' has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Max connections held by the pool
    pub pool_size: u32,
    /// Create missing tables on startup
    pub create_tables: bool,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid { name: "DB_POOL_SIZE", value }),
            },
            None => DEFAULT_POOL_SIZE,
        };

        let create_tables = match lookup("CREATE_TABLES").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "CREATE_TABLES",
                    value: other.to_string(),
                })
            }
        };

        Ok(Config {
            database_url,
            host,
            port,
            pool_size,
            create_tables,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
