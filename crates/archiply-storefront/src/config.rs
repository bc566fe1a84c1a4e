//! Storefront configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use archiply_commerce::cart::CART_STORAGE_KEY;
use archiply_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Storefront configuration file.
///
/// Every field has a default, so an empty file (or no file) reproduces the
/// stock page behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Number of testimonial slides on the page.
    #[serde(default = "default_testimonial_count")]
    pub testimonial_count: usize,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Widget delays and intervals.
    #[serde(default)]
    pub timings: TimingConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file, choosing the format by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            testimonial_count: default_testimonial_count(),
            storage: StorageConfig::default(),
            timings: TimingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_testimonial_count() -> usize {
    3
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the cart is stored under.
    #[serde(default = "default_storage_key")]
    pub key: String,

    /// Directory for the file-backed store.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".archiply")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            dir: default_storage_dir(),
        }
    }
}

/// Widget timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long a notification stays up before dismissing itself.
    pub notification_ms: u64,
    /// Delay before a new element starts its enter transition.
    pub enter_ms: u64,
    /// Length of exit transitions (notification fade, modal close).
    pub exit_ms: u64,
    /// Testimonial auto-advance interval.
    pub carousel_interval_ms: u64,
    /// Simulated order processing time.
    pub checkout_delay_ms: u64,
    /// Simulated newsletter signup round trip.
    pub newsletter_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_ms: 3000,
            enter_ms: 10,
            exit_ms: 300,
            carousel_interval_ms: 5000,
            checkout_delay_ms: 2000,
            newsletter_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archiply_observability::{LogFormat, LogLevel};

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.storage.key, "archiply_cart");
        assert_eq!(config.timings.notification(), Duration::from_secs(3));
        assert_eq!(config.timings.carousel_interval(), Duration::from_secs(5));
        assert_eq!(config.testimonial_count, 3);
    }

    #[test]
    fn test_empty_toml_uses_serde_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(
            &path,
            r#"
testimonial_count = 5

[storage]
key = "demo_cart"

[timings]
checkout_delay_ms = 50

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.testimonial_count, 5);
        assert_eq!(config.storage.key, "demo_cart");
        assert_eq!(config.storage.dir, PathBuf::from(".archiply"));
        assert_eq!(config.timings.checkout_delay(), Duration::from_millis(50));
        assert_eq!(config.timings.notification_ms, 3000);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");

        let mut config = StorefrontConfig::default();
        config.testimonial_count = 2;
        config.timings.exit_ms = 0;
        config.save(&path).unwrap();

        assert_eq!(StorefrontConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_path() {
        let err = StorefrontConfig::load("/definitely/missing.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/missing.toml"));
    }

    #[test]
    fn test_load_rejects_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "timings = 3").unwrap();

        let err = StorefrontConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }
}
