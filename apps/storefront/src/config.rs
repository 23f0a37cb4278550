//! # Storefront Configuration
//!
//! Where the storefront finds its services and how it presents the catalog.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_API_URL=https://api.escuelajs.co/api/v1                  │
//! │     SHOPFRONT_PAGE_SIZE=24                                             │
//! │     SHOPFRONT_THEME=dark                                               │
//! │     SHOPFRONT_HTTP_TIMEOUT_SECS=10                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHOPFRONT_CONFIG, or                                              │
//! │     ~/.config/shopfront/storefront.toml (Linux)                        │
//! │     ~/Library/Application Support/com.shopfront.storefront/... (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [api]
//! base_url = "https://api.escuelajs.co/api/v1"
//! timeout_secs = 15
//!
//! [catalog]
//! page_size = 12
//! default_sort = "asc"   # asc | desc | none (none keeps fetch order)
//!
//! [theme]
//! mode = "light"         # light | dark
//!
//! [registration]
//! close_delay_secs = 6
//! ```

use serde::{Deserialize, Serialize};
use shopfront_core::{SortDirection, ThemeMode, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHOPFRONT_CONFIG";

// =============================================================================
// API Settings
// =============================================================================

/// Remote service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL shared by the catalog, upload and user endpoints.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.escuelajs.co/api/v1".to_string()
}

fn default_timeout() -> u64 {
    15
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// How the product list is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Price order applied after the first fetch. `None` keeps fetch order.
    #[serde(default = "default_sort", with = "sort_setting")]
    pub default_sort: Option<SortDirection>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> Option<SortDirection> {
    Some(SortDirection::Asc)
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            page_size: default_page_size(),
            default_sort: default_sort(),
        }
    }
}

/// `default_sort` as written in TOML: `"asc"`, `"desc"` or `"none"`.
mod sort_setting {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use shopfront_core::SortDirection;

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(
        value: &Option<SortDirection>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(direction) => direction.serialize(serializer),
            None => serializer.serialize_str(NONE),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<SortDirection>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().eq_ignore_ascii_case(NONE) {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Theme + Registration Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSettings {
    /// How long the success dialog stays open (seconds).
    #[serde(default = "default_close_delay")]
    pub close_delay_secs: u64,
}

fn default_close_delay() -> u64 {
    6
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        RegistrationSettings {
            close_delay_secs: default_close_delay(),
        }
    }
}

impl RegistrationSettings {
    pub fn close_delay(&self) -> Duration {
        Duration::from_secs(self.close_delay_secs)
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub registration: RegistrationSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$SHOPFRONT_CONFIG`, or the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing sections take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.api.base_url.as_str();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API base URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.catalog.page_size == 0 {
            return Err(ConfigError::Invalid(
                "page_size must be greater than 0".into(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`; unparsable values are logged and skipped.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SHOPFRONT_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(size) = lookup("SHOPFRONT_PAGE_SIZE") {
            match size.parse::<u32>() {
                Ok(n) => self.catalog.page_size = n,
                Err(_) => warn!(value = %size, "Ignoring non-numeric SHOPFRONT_PAGE_SIZE"),
            }
        }

        if let Some(mode) = lookup("SHOPFRONT_THEME") {
            match mode.parse::<ThemeMode>() {
                Ok(parsed) => {
                    debug!(mode = %parsed, "Overriding theme from environment");
                    self.theme.mode = parsed;
                }
                Err(e) => warn!(error = %e, "Unknown theme in environment"),
            }
        }

        if let Some(secs) = lookup("SHOPFRONT_HTTP_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(n) => self.api.timeout_secs = n,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric SHOPFRONT_HTTP_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://api.escuelajs.co/api/v1");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.default_sort, Some(SortDirection::Asc));
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.registration.close_delay(), Duration::from_secs(6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [catalog]
            default_sort = "desc"

            [theme]
            mode = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.default_sort, Some(SortDirection::Desc));
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.api, ApiSettings::default());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = AppConfig::from_toml("[catalog]\npage_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.api.base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "http://localhost:3000".to_string();
        assert!(config.validate().is_ok());

        config.catalog.page_size = 0;
        assert!(config.validate().is_err());

        config.catalog.page_size = 8;
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup(&[
            ("SHOPFRONT_API_URL", "http://localhost:3000/api/"),
            ("SHOPFRONT_PAGE_SIZE", "24"),
            ("SHOPFRONT_THEME", "Dark"),
            ("SHOPFRONT_HTTP_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.catalog.page_size, 24);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.api.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_overrides_are_skipped() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup(&[
            ("SHOPFRONT_PAGE_SIZE", "twelve"),
            ("SHOPFRONT_THEME", "sepia"),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_default_sort_opt_out() {
        let config = AppConfig::from_toml(
            r#"
            [catalog]
            default_sort = "none"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.default_sort, None);

        let omitted = AppConfig::from_toml("[catalog]\npage_size = 6\n").unwrap();
        assert_eq!(omitted.catalog.default_sort, Some(SortDirection::Asc));

        assert!(AppConfig::from_toml("[catalog]\ndefault_sort = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.catalog.default_sort = None;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains(r#"default_sort = "none""#));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
