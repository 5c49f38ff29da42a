//! Bind address and CORS origins.

use crate::config::{env_lookup, parse_var};
use crate::error::AppError;

/// Vite dev and preview servers.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:4173"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("BACKEND_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "BACKEND_PORT")?.unwrap_or(3001);

        let mut cors_origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().trim_end_matches('/').to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if cors_origins.is_empty() {
            cors_origins = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect();
        }
        if let Some(frontend) = lookup("FRONTEND_URL") {
            let frontend = frontend.trim().trim_end_matches('/').to_string();
            if !frontend.is_empty() && !cors_origins.contains(&frontend) {
                cors_origins.push(frontend);
            }
        }

        Ok(Self {
            host,
            port,
            cors_origins,
        })
    }
}
