//! Runtime configuration for the generator panel.
//!
//! Launchers build a [`PanelConfig`] once and hand it to the component tree
//! through context (`use_context_provider`). Views read it with
//! `use_context::<PanelConfig>()`.

use super::platform;

/// Default bind address of the image service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7674";

/// Environment variable consulted by native launchers.
pub const ENDPOINT_ENV: &str = "STATS_CARDS_ENDPOINT";

pub const DEFAULT_INPUT_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_TOAST_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Scheme + host (+ port) the `/v1/...` image paths are resolved against.
    pub endpoint_base: String,
    /// Quiet period before a text field writes to the form store.
    pub input_debounce_ms: u64,
    /// How long a confirmation / error toast stays up.
    pub toast_ttl_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint_base: DEFAULT_ENDPOINT.to_string(),
            input_debounce_ms: DEFAULT_INPUT_DEBOUNCE_MS,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl PanelConfig {
    /// Config for a browser build: images are served by the page's own origin.
    pub fn for_page() -> Self {
        match platform::page_origin() {
            Some(origin) => Self::default().with_endpoint(&origin),
            None => Self::default(),
        }
    }

    /// Config for a native build: `STATS_CARDS_ENDPOINT` overrides the default endpoint.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::default().with_endpoint(&value),
            _ => Self::default(),
        }
    }

    pub fn with_endpoint(mut self, base: &str) -> Self {
        self.endpoint_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a preview path such as `/v1/pin/github?username=...`.
    pub fn endpoint_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.endpoint_base)
        } else {
            format!("{}/{path}", self.endpoint_base)
        }
    }
}
