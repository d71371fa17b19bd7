use std::env;
use std::time::Duration;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_max_lifetime: Duration,
    pub db_acquire_timeout: Duration,
    pub db_query_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source, falling back to
    /// defaults for anything the source does not provide.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let secs = |key: &str, default: &str| {
            Duration::from_secs(
                var(key, default)
                    .parse()
                    .unwrap_or_else(|_| panic!("{} must be a whole number of seconds", key)),
            )
        };

        Self {
            server_host: var("SERVER_HOST", "127.0.0.1"),
            server_port: var("SERVER_PORT", "3000")
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            database_url: var("DATABASE_URL", "sqlite://bookstore.db?mode=rwc"),
            db_max_connections: var("DB_MAX_CONNECTIONS", "5")
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid number"),
            db_min_connections: var("DB_MIN_CONNECTIONS", "1")
                .parse()
                .expect("DB_MIN_CONNECTIONS must be a valid number"),
            db_max_lifetime: secs("DB_MAX_LIFETIME_SECS", "180"),
            db_acquire_timeout: secs("DB_ACQUIRE_TIMEOUT_SECS", "3"),
            db_query_timeout: secs("DB_QUERY_TIMEOUT_SECS", "3"),
            request_timeout: secs("REQUEST_TIMEOUT_SECS", "3"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
