//! Endpoint configuration. The document-store credentials and the generation
//! base URL are baked in at compile time via `option_env!`, the web-client
//! equivalent of the usual env-file setup. Tests construct configs directly.

/// jsonbin.io v3 bins endpoint.
pub const DEFAULT_STORE_BASE: &str = "https://api.jsonbin.io/v3/b";

/// Production generation API. Always HTTPS; the dev-proxy indirection of the
/// old client is gone.
pub const DEFAULT_GENERATE_BASE: &str = "https://pptx.techrealm.online";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the document-store API (no trailing slash).
    pub store_base: String,
    /// Bin identifier holding the `{ "users": [...] }` document.
    pub bin_id: String,
    /// Static access key sent as the `X-Access-Key` header.
    pub access_key: String,
    /// Base URL of the generation API (no trailing slash).
    pub generate_base: String,
}

impl AppConfig {
    /// Config from compile-time environment, falling back to the production
    /// endpoints. A missing bin id or access key leaves the store
    /// unconfigured; reads and writes then fail with
    /// [`crate::StoreError::Unconfigured`] at call time.
    pub fn from_env() -> Self {
        Self {
            store_base: DEFAULT_STORE_BASE.to_string(),
            bin_id: option_env!("SLIDEAI_JSONBIN_BIN_ID").unwrap_or("").to_string(),
            access_key: option_env!("SLIDEAI_JSONBIN_ACCESS_KEY")
                .unwrap_or("")
                .to_string(),
            generate_base: option_env!("SLIDEAI_API_BASE")
                .unwrap_or(DEFAULT_GENERATE_BASE)
                .to_string(),
        }
    }

    /// Whether the document store has credentials to work with.
    pub fn store_configured(&self) -> bool {
        !self.bin_id.is_empty() && !self.access_key.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production() {
        let config = AppConfig::from_env();
        assert_eq!(config.store_base, DEFAULT_STORE_BASE);
        assert!(config.generate_base.starts_with("https://"));
    }

    #[test]
    fn test_unconfigured_store_detected() {
        let config = AppConfig {
            store_base: DEFAULT_STORE_BASE.to_string(),
            bin_id: String::new(),
            access_key: "key".to_string(),
            generate_base: DEFAULT_GENERATE_BASE.to_string(),
        };
        assert!(!config.store_configured());
    }
}
