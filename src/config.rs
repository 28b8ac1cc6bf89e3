//! Configuration loaded from a TOML file

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::VehicleCategory;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
///
/// Every section falls back to its defaults when absent, so a partial
/// file (or none at all) still yields a runnable service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub lot: LotConfig,
    pub pricing: PricingConfig,
    pub billing: BillingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// Number of slots, ids `1..=slots`
    pub slots: u32,
    /// ISO 4217 currency code reported alongside monetary values
    pub currency: String,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            slots: 50,
            currency: "PHP".to_string(),
        }
    }
}

/// Seed hourly rates, one per vehicle category.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub motorcycle: Decimal,
    pub car: Decimal,
    pub suv: Decimal,
    pub truck: Decimal,
}

impl PricingConfig {
    /// Rates in category display order, for seeding the pricing table.
    pub fn seed_rates(&self) -> [(VehicleCategory, Decimal); 4] {
        [
            (VehicleCategory::Motorcycle, self.motorcycle),
            (VehicleCategory::Car, self.car),
            (VehicleCategory::Suv, self.suv),
            (VehicleCategory::Truck, self.truck),
        ]
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            motorcycle: Decimal::from(20),
            car: Decimal::from(50),
            suv: Decimal::from(70),
            truck: Decimal::from(100),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Decimal places to round billed costs to; unset keeps exact products
    pub rounding_decimals: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default config path: `~/.config/parking-service/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parking-service")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_lot() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.lot.slots, 50);
        assert_eq!(cfg.lot.currency, "PHP");
        assert_eq!(cfg.pricing.car, Decimal::from(50));
        assert_eq!(cfg.pricing.truck, Decimal::from(100));
        assert_eq!(cfg.billing.rounding_decimals, None);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [pricing]
            car = 65

            [billing]
            rounding_decimals = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.pricing.car, Decimal::from(65));
        assert_eq!(cfg.pricing.suv, Decimal::from(70));
        assert_eq!(cfg.billing.rounding_decimals, Some(2));
        assert_eq!(cfg.lot.slots, 50);
    }

    #[test]
    fn seed_rates_cover_every_category() {
        let rates = PricingConfig::default().seed_rates();
        let categories: Vec<_> = rates.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, VehicleCategory::ALL.to_vec());
    }
}
