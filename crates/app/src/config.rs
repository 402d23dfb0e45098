use std::sync::OnceLock;

use shared_types::AppConfig;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Settings embedded from `config.toml` at build time. A malformed file is
/// logged and replaced by defaults.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    })
}
