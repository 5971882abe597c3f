//! API configuration.
//!
//! The base address is an explicit value handed to [`crate::ApiClient::new`];
//! nothing reads the environment behind the caller's back.

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the base address from an externally supplied value.
    ///
    /// Missing or blank values fall back to [`DEFAULT_BASE_URL`]. A trailing
    /// `/` is stripped so paths can be appended directly.
    pub fn resolve(supplied: Option<&str>) -> Self {
        let base = supplied
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default() {
        assert_eq!(ApiConfig::resolve(None).base_url, "http://127.0.0.1:8000");
        assert_eq!(ApiConfig::resolve(Some("")).base_url, "http://127.0.0.1:8000");
        assert_eq!(ApiConfig::resolve(Some("  ")).base_url, "http://127.0.0.1:8000");
        assert_eq!(ApiConfig::default(), ApiConfig::resolve(None));
    }

    #[test]
    fn test_resolve_supplied() {
        assert_eq!(
            ApiConfig::resolve(Some("https://games.local/api/")).base_url,
            "https://games.local/api"
        );
        assert_eq!(
            ApiConfig::resolve(Some("http://10.0.0.5:9000")).base_url,
            "http://10.0.0.5:9000"
        );
    }
}
