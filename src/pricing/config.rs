use crate::pricing::types::MarketInputs;
use anyhow::{anyhow, Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Upper bound on `DisplayConfig::decimals`; an f64 carries ~16 significant digits.
pub const MAX_DECIMALS: usize = 16;

/// How prices are rendered in the printed report.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Digits after the decimal point, at most [`MAX_DECIMALS`]
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(anyhow!(
                "DisplayConfig validation: decimals ({}) must be <= {}",
                self.decimals,
                MAX_DECIMALS
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
        }
    }
}

/// Top-level configuration for a pricing run.
///
/// Every field falls back to its default, so an empty TOML document describes
/// the reference example.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PricerConfig {
    #[serde(default)]
    pub inputs: MarketInputs,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl PricerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PricerConfig =
            toml::from_str(contents).context("failed to parse pricer config")?;
        config.display.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        info!("loaded pricer config from {}", path.display());
        Ok(config)
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}
