//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Required Variables
//!
//! None — with no environment at all the service runs in fixture mode on
//! the default port.
//!
//! ## Optional Variables
//!
//! - `GENERATION_MODE` - `live` or `fixture` (default: `fixture`)
//! - `GOOGLE_API_KEY` - Model API key; live mode without it will fail
//!   every generation upstream and reports degraded health
//! - `GENERATION_BASE_URL` - Model endpoint base
//!   (default: `https://generativelanguage.googleapis.com`)
//! - `PRIMARY_MODEL` - Primary model name (default: `gemini-3-flash-preview`)
//! - `FALLBACK_MODEL` - Fallback model name (default: `gemini-flash-latest`)
//! - `STRIPE_SECRET_KEY` - Enables card checkout when set
//! - `PUBLIC_BASE_URL` - Fallback origin for checkout redirect URLs
//!   (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Where generated responses come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Real model calls through the pipeline.
    Live,
    /// The canned response, no network.
    Fixture,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fixture => "fixture",
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub generation_mode: GenerationMode,
    pub google_api_key: Option<String>,
    pub generation_base_url: String,
    pub primary_model: String,
    pub fallback_model: String,
    pub stripe_secret_key: Option<String>,
    pub public_base_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GENERATION_MODE` is not a known mode.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let generation_mode = match env::var("GENERATION_MODE")
            .unwrap_or_else(|_| "fixture".to_string())
            .as_str()
        {
            "live" => GenerationMode::Live,
            "fixture" => GenerationMode::Fixture,
            other => anyhow::bail!("GENERATION_MODE must be 'live' or 'fixture', got '{other}'"),
        };

        let google_api_key = env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty());

        let generation_base_url = env::var("GENERATION_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        let primary_model =
            env::var("PRIMARY_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".to_string());
        let fallback_model =
            env::var("FALLBACK_MODEL").unwrap_or_else(|_| "gemini-flash-latest".to_string());

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").ok().filter(|k| !k.is_empty());

        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            generation_mode,
            google_api_key,
            generation_base_url,
            primary_model,
            fallback_model,
            stripe_secret_key,
            public_base_url,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a base URL is not http(s)
    /// - a model name is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, url) in [
            ("GENERATION_BASE_URL", &self.generation_base_url),
            ("PUBLIC_BASE_URL", &self.public_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, url);
            }
        }

        if self.primary_model.is_empty() || self.fallback_model.is_empty() {
            anyhow::bail!("PRIMARY_MODEL and FALLBACK_MODEL must not be empty");
        }

        Ok(())
    }

    /// Returns whether card checkout is configured.
    pub fn is_checkout_enabled(&self) -> bool {
        self.stripe_secret_key.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Generation mode: {}", self.generation_mode.as_str());
        tracing::info!(
            "  Models: {} (fallback: {})",
            self.primary_model,
            self.fallback_model
        );

        match &self.google_api_key {
            Some(key) => tracing::info!("  Model API key: {}", mask_secret(key)),
            None => tracing::info!("  Model API key: not set"),
        }

        if self.stripe_secret_key.is_some() {
            tracing::info!("  Checkout: enabled (Stripe)");
        } else {
            tracing::info!("  Checkout: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping a short identifying prefix.
fn mask_secret(secret: &str) -> String {
    if secret.len() > 6 {
        format!("{}***", &secret[..6])
    } else {
        "***".to_string()
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable has an invalid value.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
