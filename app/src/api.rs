//! Shared backend client for the component tree.
//!
//! One [`ApiClient`] is built at the root and handed out through context so
//! views never repeat the base address.

use dioxus::prelude::*;
use salsi_core::{ApiClient, ApiConfig};

/// Build-time override for the backend address.
const API_BASE_ENV: Option<&str> = option_env!("SALSI_API_BASE");

/// Initialize the API client provider at app root.
pub fn use_api_provider() -> ApiClient {
    use_context_provider(|| {
        let config = ApiConfig::resolve(API_BASE_ENV);
        tracing::info!(base_url = %config.base_url, "Using library backend");
        ApiClient::new(&config)
    })
}

/// Get the shared API client from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
