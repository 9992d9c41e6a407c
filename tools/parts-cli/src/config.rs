//! CLI configuration.

use anyhow::{Context, Result};
use parts_commerce::catalog::DEFAULT_LOW_STOCK_THRESHOLD;
use parts_commerce::search::FilterCriteria;
use parts_commerce::session::SessionSettings;
use parts_commerce::{Bound, Currency, Money};
use parts_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upward.
pub const CONFIG_FILE_NAMES: &[&str] = &["parts.toml", ".parts.toml", "parts.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source and display settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Default filter bounds.
    #[serde(default)]
    pub filters: FilterConfig,

    /// Cart behaviour.
    #[serde(default)]
    pub cart: CartConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Session settings for a catalog priced in `currency`.
    pub fn session_settings(&self, currency: Currency) -> SessionSettings {
        let default_criteria = FilterCriteria::new(currency).with_price_range(
            Money::bound_from_decimal(self.filters.price_min, Bound::Lower, currency),
            Money::bound_from_decimal(self.filters.price_max, Bound::Upper, currency),
        );
        SessionSettings {
            default_criteria,
            enforce_stock: self.cart.enforce_stock,
            low_stock_threshold: self.catalog.low_stock_threshold,
        }
    }

    /// Problems that make the storefront useless, and ones that are merely odd.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !self.filters.price_min.is_finite() || !self.filters.price_max.is_finite() {
            errors.push("filters.price_min and filters.price_max must be finite".to_string());
        } else if self.filters.price_min > self.filters.price_max {
            warnings.push(format!(
                "filters.price_min ({}) is above filters.price_max ({}); no parts will be shown",
                self.filters.price_min, self.filters.price_max
            ));
        }

        if self.catalog.low_stock_threshold == 0 {
            warnings.push("catalog.low_stock_threshold is 0; nothing will show as low stock".to_string());
        }

        if let Some(path) = &self.catalog.path {
            if !path.ends_with(".json") {
                warnings.push(format!("catalog.path '{}' is not a .json file", path));
            }
        }

        (errors, warnings)
    }
}

/// Catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Stock quantity below which parts show as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Default price bounds, in currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub price_min: f64,

    #[serde(default = "default_price_max")]
    pub price_max: f64,
}

fn default_price_max() -> f64 {
    1000.0
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: default_price_max(),
        }
    }
}

/// Cart behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Refuse to add out-of-stock parts.
    #[serde(default = "default_true")]
    pub enforce_stock: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            enforce_stock: true,
        }
    }
}

/// Generate a default parts.toml config file.
pub fn generate_default_config() -> String {
    r#"# Parts counter configuration

[catalog]
# path = "catalog.json"
low_stock_threshold = 10

[filters]
price_min = 0.0
price_max = 1000.0

[cart]
enforce_stock = true

[logging]
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_observability::{LogFormat, LogLevel};

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.catalog.low_stock_threshold, 10);
        assert_eq!(config.filters.price_max, 1000.0);
        assert!(config.cart.enforce_stock);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        let settings = config.session_settings(Currency::USD);
        assert_eq!(settings.default_criteria, FilterCriteria::new(Currency::USD));
        assert!(settings.enforce_stock);
    }

    #[test]
    fn test_price_bounds_flow_into_criteria() {
        let config: CliConfig =
            toml::from_str("[filters]\nprice_min = 20.5\nprice_max = 99.99").unwrap();
        let criteria = config.session_settings(Currency::USD).default_criteria;
        assert_eq!(criteria.price_min.amount_cents, 2050);
        assert_eq!(criteria.price_max.amount_cents, 9999);
    }

    #[test]
    fn test_sub_cent_bounds_round_inward() {
        let config: CliConfig =
            toml::from_str("[filters]\nprice_min = 0.004\nprice_max = 89.985").unwrap();
        let criteria = config.session_settings(Currency::USD).default_criteria;
        assert_eq!(criteria.price_min.amount_cents, 1);
        assert_eq!(criteria.price_max.amount_cents, 8998);
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_check_flags_inverted_bounds() {
        let mut config = CliConfig::default();
        assert_eq!(config.check(), (vec![], vec![]));

        config.filters.price_min = 500.0;
        config.filters.price_max = 100.0;
        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);

        config.filters.price_max = f64::NAN;
        assert_eq!(config.check().0.len(), 1);
    }
}
