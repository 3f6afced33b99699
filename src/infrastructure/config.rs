use serde::Deserialize;

use crate::domain::logging::LogComponent;
use crate::log_warn;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "backend-config";

/// Base URLs of the three chart backends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendConfig {
    /// Serves `/api/stocks/{symbol}/candlestick`
    pub candlestick_url: String,
    /// Serves `/api/stocks/{symbol}/volume`
    pub volume_url: String,
    /// Serves `/stock/graph`
    pub graph_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            candlestick_url: "http://127.0.0.1:5002".to_string(),
            volume_url: "http://127.0.0.1:5003".to_string(),
            graph_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Per-field overrides; absent fields keep the current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendOverrides {
    pub candlestick_url: Option<String>,
    pub volume_url: Option<String>,
    pub graph_url: Option<String>,
}

impl BackendConfig {
    /// Defaults, then build-time env, then the page's JSON block.
    pub fn load() -> Self {
        let config = Self::default().with_overrides(Self::build_env_overrides());
        match read_page_overrides() {
            Some(overrides) => config.with_overrides(overrides),
            None => config,
        }
    }

    fn build_env_overrides() -> BackendOverrides {
        BackendOverrides {
            candlestick_url: option_env!("STOCK_GRAPH_CANDLESTICK_URL").map(str::to_string),
            volume_url: option_env!("STOCK_GRAPH_VOLUME_URL").map(str::to_string),
            graph_url: option_env!("STOCK_GRAPH_GRAPH_URL").map(str::to_string),
        }
    }

    pub fn with_overrides(self, overrides: BackendOverrides) -> Self {
        Self {
            candlestick_url: normalize(overrides.candlestick_url.unwrap_or(self.candlestick_url)),
            volume_url: normalize(overrides.volume_url.unwrap_or(self.volume_url)),
            graph_url: normalize(overrides.graph_url.unwrap_or(self.graph_url)),
        }
    }

    /// Parse an override document, e.g. the contents of the page's config block.
    pub fn parse_overrides(json: &str) -> Result<BackendOverrides, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn normalize(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn read_page_overrides() -> Option<BackendOverrides> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    let text = web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()?;

    match BackendConfig::parse_overrides(&text) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            log_warn!(
                LogComponent::Infrastructure("Config"),
                "Ignoring malformed #{CONFIG_ELEMENT_ID} block: {e}"
            );
            None
        }
    }
}
