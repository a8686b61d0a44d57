use crate::error::ConfigError;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub port: u16
}

impl Config {

    pub fn from_env() -> Result<Self, ConfigError> {

        Self::from_lookup(|key| std::env::var(key).ok())

    }

    // the key is not validated, upstream rejects a bad or empty one
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {

        let api_key = lookup("GEMINI_API_KEY").unwrap_or_default();

        let api_base = lookup("GEMINI_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model = lookup("GEMINI_MODEL")
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT
        };

        Ok(Config { api_key, api_base, model, port })

    }

}

#[cfg(test)]
mod tests {

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {

        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()

    }

    #[test]
    fn test_defaults() {

        let config = Config::from_lookup(lookup_from(&[])).expect("defaults should load");

        assert_eq!(config.api_key, "");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, "gemini-1.5-flash-latest");
        assert_eq!(config.port, 3000);

    }

    #[test]
    fn test_overrides() {

        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9000"),
            ("GEMINI_MODEL", "gemini-test"),
            ("PORT", "8080")
        ])).expect("overrides should load");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.port, 8080);

    }

    #[test]
    fn test_invalid_port() {

        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(ConfigError::InvalidPort(raw)) if raw == "eighty"));

    }

}
