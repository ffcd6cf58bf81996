use std::env;
use anyhow::{Context, Result};

/// Default upstream URL, matching the labels the proxy handler puts in front
/// of its response bodies.
pub const DEFAULT_HTTPBIN_HEADERS_URL: &str = "https://httpbin.org/headers";

#[derive(Debug, Clone)]
pub struct Config {
    pub httpbin_headers_url: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let httpbin_headers_url = env::var("HTTPBIN_HEADERS_URL")
            .unwrap_or_else(|_| DEFAULT_HTTPBIN_HEADERS_URL.to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            httpbin_headers_url,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Upstream headers URL: {}", self.httpbin_headers_url);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
