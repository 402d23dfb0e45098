use serde::{Deserialize, Serialize};

/// Session persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSettings {
    /// Local storage key holding the JSON user record.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Artificial latency applied before a login resolves.
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_delay_ms: default_login_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSettings {
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    #[serde(default = "default_search_delay")]
    pub delay_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_search_delay(),
        }
    }
}

fn default_storage_key() -> String {
    "user".to_string()
}

fn default_login_delay() -> u64 {
    1000
}

fn default_submit_delay() -> u64 {
    2000
}

fn default_search_delay() -> u64 {
    500
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field is defaulted so a missing or partial file still
/// yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub forms: FormSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Parse TOML, returning the parse error message on failure.
    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }

    /// Parse TOML, falling back to defaults when the text is malformed.
    pub fn from_toml_or_default(raw: &str) -> Self {
        Self::from_toml_str(raw).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.session.login_delay_ms, 1000);
        assert_eq!(config.forms.submit_delay_ms, 2000);
        assert_eq!(config.search.delay_ms, 500);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [session]
            login_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.session.login_delay_ms, 0);
        assert_eq!(config.session.storage_key, "user");
        assert_eq!(config.forms, FormSettings::default());
    }

    #[test]
    fn full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [session]
            storage_key = "auction_user"
            login_delay_ms = 250

            [forms]
            submit_delay_ms = 10

            [search]
            delay_ms = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.session.storage_key, "auction_user");
        assert_eq!(config.session.login_delay_ms, 250);
        assert_eq!(config.forms.submit_delay_ms, 10);
        assert_eq!(config.search.delay_ms, 20);
    }

    #[test]
    fn malformed_toml_falls_back() {
        assert!(AppConfig::from_toml_str("[session\nstorage_key =").is_err());
        assert_eq!(
            AppConfig::from_toml_or_default("[session]\nlogin_delay_ms = \"soon\""),
            AppConfig::default()
        );
    }

    #[test]
    fn workspace_config_file_parses() {
        let config = AppConfig::from_toml_str(include_str!("../../../config.toml")).unwrap();
        assert_eq!(config.session.storage_key, "user");
    }
}
