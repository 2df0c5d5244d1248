use serde::{Deserialize, Serialize};

fn default_proxy_base_url() -> String {
    "/api".to_string()
}

fn default_direct_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// REST API connection settings.
///
/// `use_proxy` selects between a relative base served by the dev/proxy server
/// and the API's direct address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub use_proxy: bool,
    #[serde(default = "default_proxy_base_url")]
    pub proxy_base_url: String,
    #[serde(default = "default_direct_base_url")]
    pub direct_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            use_proxy: false,
            proxy_base_url: default_proxy_base_url(),
            direct_base_url: default_direct_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        let base = if self.use_proxy {
            &self.proxy_base_url
        } else {
            &self.direct_base_url
        };
        base.trim_end_matches('/')
    }

    /// Base URL that requests can actually be sent to.
    ///
    /// A relative proxy base (`/api`) is joined onto `origin`, the page origin
    /// in a browser. With no origin to resolve against, the direct base is
    /// used instead.
    pub fn absolute_base_url(&self, origin: Option<&str>) -> String {
        let base = self.base_url();
        if !base.starts_with('/') {
            return base.to_string();
        }
        match origin.map(|o| o.trim_end_matches('/')).filter(|o| !o.is_empty()) {
            Some(origin) => format!("{origin}{base}"),
            None => {
                tracing::warn!(
                    proxy_base_url = base,
                    "relative proxy base without a page origin, using direct base url"
                );
                self.direct_base_url.trim_end_matches('/').to_string()
            }
        }
    }
}

/// Join an endpoint path onto a base URL.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Parse a boolean flag the way environment variables are usually written.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
