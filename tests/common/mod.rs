#![allow(dead_code)]

use offerforge::config::{Config, GenerationMode};
use offerforge::server::build_state;
use offerforge::state::AppState;

/// Builds a fixture-mode state over a freshly seeded in-memory store.
///
/// No model key and no payment gateway: generation serves the canned
/// response and checkout is disabled.
pub fn create_test_state() -> AppState {
    build_state(&test_config(GenerationMode::Fixture, None))
}

/// Builds a state with an explicit mode and optional model API key.
pub fn create_test_state_with(mode: GenerationMode, api_key: Option<&str>) -> AppState {
    build_state(&test_config(mode, api_key))
}

fn test_config(mode: GenerationMode, api_key: Option<&str>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        generation_mode: mode,
        google_api_key: api_key.map(String::from),
        generation_base_url: "https://generativelanguage.googleapis.com".to_string(),
        primary_model: "gemini-3-flash-preview".to_string(),
        fallback_model: "gemini-flash-latest".to_string(),
        stripe_secret_key: None,
        public_base_url: "http://localhost:3000".to_string(),
    }
}
