pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const MODEL_ENV: &str = "STUDBUD_MODEL";
pub const BASE_URL_ENV: &str = "STUDBUD_API_BASE_URL";

/// Settings for the hosted generation API. Built once at startup and
/// handed to the generator; never mutated afterwards.
#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl GenerationConfig {
    pub fn new(api_key: Option<String>, model: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: normalize_model(model),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `GOOGLE_API_KEY`, `STUDBUD_MODEL` and `STUDBUD_API_BASE_URL`,
    /// falling back to the defaults for the latter two.
    pub fn from_env() -> Self {
        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(std::env::var(API_KEY_ENV).ok(), &model, &base_url)
    }

    /// `POST` target for a single generateContent call.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_MODEL, DEFAULT_BASE_URL)
    }
}

// Redacts the API key.
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Accept both `gemini-2.0-flash` and the resource form `models/gemini-2.0-flash`.
fn normalize_model(model: &str) -> String {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_models_prefix() {
        let cfg = GenerationConfig::new(None, "models/gemini-2.0-flash", DEFAULT_BASE_URL);
        assert_eq!(cfg.model, "gemini-2.0-flash");
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        let cfg = GenerationConfig::new(Some("   ".into()), DEFAULT_MODEL, DEFAULT_BASE_URL);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn generate_url_joins_base_and_model() {
        let cfg = GenerationConfig::new(Some("k".into()), "gemini-x", "http://127.0.0.1:9/v1beta/");
        assert_eq!(
            cfg.generate_url(),
            "http://127.0.0.1:9/v1beta/models/gemini-x:generateContent"
        );
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = GenerationConfig::new(Some("secret-key".into()), DEFAULT_MODEL, DEFAULT_BASE_URL);
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("secret-key"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn default_uses_constants() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.api_key.is_none());
    }
}
