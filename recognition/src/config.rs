//! Recognition configuration: API credential, endpoint, and model selection.
//!
//! The credential is read once from the process environment and carried as an
//! explicit value through the call chain. A missing credential is fatal for
//! the invocation; the CLI turns [`ConfigError::MissingApiKey`] into a setup
//! instruction and a non-zero exit.

/// Environment variable holding the Gemini API credential.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Default Gemini API endpoint. Overridable for tests against a mock server.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default vision-capable model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The credential environment variable is absent or empty.
    #[error("{API_KEY_VAR} environment variable not set")]
    MissingApiKey,
}

/// Configuration for the recognition client.
#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    /// Base URL of the Gemini API (no trailing slash).
    pub api_base_url: String,
    /// API credential sent via the `x-goog-api-key` header.
    pub api_key: String,
    /// Model name, e.g. "gemini-1.5-flash".
    pub model: String,
}

impl RecognitionConfig {
    /// Creates a config with the given credential and default endpoint/model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Reads the credential from [`API_KEY_VAR`].
    ///
    /// An unset or empty variable is [`ConfigError::MissingApiKey`]; no
    /// interactive prompting, no retries.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Overrides the API base URL (used by tests with a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Overrides the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// One-line instruction shown to the user when the credential is missing.
    pub fn setup_hint() -> String {
        format!("Set it with: export {API_KEY_VAR}='your-api-key'")
    }
}
