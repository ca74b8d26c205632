use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_PUBLIC_RPS: u32 = 100;

/// Process-wide settings, loaded once at start-up and shared by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub database_max_connections: u32,
    pub public_rps: u32,
    pub seed_reference_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            token_ttl_hours: get_env_parse_or("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?,
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            public_rps: get_env_parse_or("PUBLIC_RPS", DEFAULT_PUBLIC_RPS)?,
            seed_reference_data: get_env_parse_or("SEED_REFERENCE_DATA", true)?,
        };

        if config.jwt_secret.trim().is_empty() {
            return Err(Error::Config("JWT_SECRET must not be empty".to_string()));
        }
        if config.token_ttl_hours <= 0 {
            return Err(Error::Config(
                "TOKEN_TTL_HOURS must be a positive number of hours".to_string(),
            ));
        }

        Ok(config)
    }

    /// Settings for tests and tooling that never touch the environment.
    pub fn for_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            server_address: "127.0.0.1:0".to_string(),
            database_url: String::new(),
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            public_rps: DEFAULT_PUBLIC_RPS,
            seed_reference_data: false,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
