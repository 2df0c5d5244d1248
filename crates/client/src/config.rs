use shared_types::{parse_flag, ApiConfig, AppConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[api] use_proxy`.
pub const USE_PROXY_ENV: &str = "EXPERTLINK_USE_PROXY";

/// Parse config file contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Apply a `EXPERTLINK_USE_PROXY` value on top of the file config.
/// Unparseable values are ignored.
pub fn apply_proxy_override(config: &mut AppConfig, value: Option<&str>) {
    if let Some(raw) = value {
        match parse_flag(raw) {
            Some(flag) => config.api.use_proxy = flag,
            None => tracing::warn!(value = raw, "ignoring invalid {USE_PROXY_ENV}"),
        }
    }
}

/// Read `config.toml` and the environment once and cache the result.
/// Safe to call multiple times; only the first call has effect.
///
/// A missing or unparseable file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
                AppConfig::default()
            }
        };
        let env_value = std::env::var(USE_PROXY_ENV).ok();
        apply_proxy_override(&mut config, env_value.as_deref());
        tracing::info!(
            use_proxy = config.api.use_proxy,
            base_url = config.api.base_url(),
            "api config loaded"
        );
        config
    })
}

/// API settings for builds without filesystem access (web). The proxy flag is
/// taken from `EXPERTLINK_USE_PROXY` at compile time.
pub fn build_time_api_config() -> ApiConfig {
    let mut config = AppConfig::default();
    apply_proxy_override(&mut config, option_env!("EXPERTLINK_USE_PROXY"));
    config.api
}
