use dotenv::dotenv;
use log::warn;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5775;
const DEFAULT_CORS_MAX_AGE: usize = 3600;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    /// Raw comma-separated allow-list, expanded later by `OriginAllowlist`.
    pub allowed_origins: Option<String>,
    pub cors_max_age: usize,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();

        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let service_port = parse_or_default(&lookup, "SERVICE_PORT", DEFAULT_PORT);

        let allowed_origins = lookup("ALLOWED_ORIGINS");

        let cors_max_age = parse_or_default(&lookup, "CORS_MAX_AGE", DEFAULT_CORS_MAX_AGE);

        Config {
            service_host,
            service_port,
            allowed_origins,
            cors_max_age,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("⚠️ {}={:?} is invalid, using default: {}", key, raw, default);
            default
        }),
        None => default,
    }
}
