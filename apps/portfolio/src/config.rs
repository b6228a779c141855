use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::relay::DEFAULT_EMAILJS_ENDPOINT;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rust_log: String,
    /// Replaces the built-in career data set when set.
    pub career_data_path: Option<PathBuf>,
    pub emailjs_endpoint: String,
    pub emailjs_service_id: String,
    pub emailjs_notification_template_id: String,
    pub emailjs_autoreply_template_id: String,
    pub emailjs_public_key: String,
    pub contact_to_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            career_data_path: std::env::var("CAREER_DATA_PATH").ok().map(PathBuf::from),
            emailjs_endpoint: std::env::var("EMAILJS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            emailjs_service_id: require_env("EMAILJS_SERVICE_ID")?,
            emailjs_notification_template_id: require_env("EMAILJS_NOTIFICATION_TEMPLATE_ID")?,
            emailjs_autoreply_template_id: require_env("EMAILJS_AUTOREPLY_TEMPLATE_ID")?,
            emailjs_public_key: require_env("EMAILJS_PUBLIC_KEY")?,
            contact_to_email: require_env("CONTACT_TO_EMAIL")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
