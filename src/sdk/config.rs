use std::env;

/// Environment variable holding the Directions API key.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Which routing strategy to run, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Live { api_key: String },
    /// No key configured: fabricate demo routes.
    Synthetic,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_api_key(env::var(API_KEY_VAR).ok())
    }

    pub fn from_api_key(api_key: Option<String>) -> Self {
        match api_key.map(|k| k.trim().to_string()) {
            Some(api_key) if !api_key.is_empty() => ProviderConfig::Live { api_key },
            _ => ProviderConfig::Synthetic,
        }
    }
}
