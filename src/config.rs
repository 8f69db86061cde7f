//! Connector configuration.

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Default API base URL.
pub const API_BASE: &str = "https://api.openai.com/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

const DEFAULT_TEMPERATURE: f32 = 0.0;
const DEFAULT_TOP_P: f32 = 1.0;
const DEFAULT_MAX_TOKENS: u32 = 512;

/// Immutable settings for a [`Connector`](crate::Connector).
///
/// Values are taken at face value; nothing is range-checked locally. An
/// out-of-range sampling parameter or a nonsensical token limit is only
/// rejected by the API once a request is made.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    /// Explicit API key. When `None`, [`API_KEY_ENV_VAR`] is consulted at
    /// connector construction.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Nucleus sampling parameter.
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ConnectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL, e.g. to target a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConnectorConfig::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.top_p, 1.0);
        assert_eq!(config.max_tokens, 512);
    }

    #[test]
    fn builders_override_fields() {
        let config = ConnectorConfig::new()
            .with_api_key("k")
            .with_model("gpt-4.1")
            .with_temperature(0.7)
            .with_top_p(0.9)
            .with_max_tokens(64);
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_p, 0.9);
        assert_eq!(config.max_tokens, 64);
    }
}
