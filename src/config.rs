use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use axum::http::HeaderValue;
use tracing::{info, warn};

pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub questions_path: PathBuf,
    pub rate_limit_per_minute: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "8000"),
            environment: try_load("ENV", "development"),
            questions_path: try_load("QUESTIONS_PATH", "data/questions_unique.json"),
            rate_limit_per_minute: try_load("RATE_LIMIT_PER_MINUTE", "50"),
        }
    }

    /// Origins the browser may call us from. The deployed frontend in
    /// production, the local Vite dev-server ports otherwise.
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        match self.environment {
            Environment::Production => {
                vec![HeaderValue::from_static(
                    "https://poker-trivia-frontend.onrender.com",
                )]
            }
            Environment::Development => vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://localhost:5176"),
                HeaderValue::from_static("http://localhost:5177"),
            ],
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
