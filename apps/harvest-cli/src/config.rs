//! # CLI Configuration
//!
//! Seller details and invoice layout preferences.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HARVEST_SELLER_NAME="Green Valley Produce"                         │
//! │     HARVEST_INVOICE_WIDTH=64                                           │
//! │                                                                         │
//! │  2. TOML Config File (--config, or the platform config dir)            │
//! │     ~/.config/harvest/harvest.toml (Linux)                             │
//! │     ~/Library/Application Support/com.harvest.harvest/harvest.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [seller]
//! name = "Green Valley Produce"
//! address = ["12 Market Road", "Pune 411001"]
//! gstin = "27AAPFU0939F1ZV"
//!
//! [invoice]
//! width = 48
//! grouping = "legacy"        # legacy | indian
//! line_total = "prefer_stored"  # prefer_stored | recompute
//! ```

use harvest_core::printed::{PrintOptions, Seller};
use harvest_core::validation::{validate_gstin, validate_invoice_width, validate_seller_name};
use harvest_core::{LineTotalSource, ScaleGrouping, ValidationError, DEFAULT_INVOICE_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// The business printed at the top of every invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerConfig {
    #[serde(default = "default_seller_name")]
    pub name: String,

    /// Address lines, printed in order.
    #[serde(default)]
    pub address: Vec<String>,

    #[serde(default)]
    pub gstin: Option<String>,
}

fn default_seller_name() -> String {
    "Harvest Produce".to_string()
}

impl Default for SellerConfig {
    fn default() -> Self {
        SellerConfig {
            name: default_seller_name(),
            address: Vec::new(),
            gstin: None,
        }
    }
}

/// Invoice layout and calculation choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default)]
    pub grouping: ScaleGrouping,

    #[serde(default)]
    pub line_total: LineTotalSource,
}

fn default_width() -> usize {
    DEFAULT_INVOICE_WIDTH
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        InvoiceSettings {
            width: default_width(),
            grouping: ScaleGrouping::default(),
            line_total: LineTotalSource::default(),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// Complete configuration for the `harvest` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub seller: SellerConfig,

    #[serde(default)]
    pub invoice: InvoiceSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. `HARVEST_*` environment variables
    ///
    /// A `config_path` given explicitly must exist. The platform default
    /// path is optional.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();
        let explicit = config_path.is_some();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if explicit || path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Checks seller details and layout.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_seller_name(&self.seller.name)?;
        if let Some(gstin) = &self.seller.gstin {
            validate_gstin(gstin)?;
        }
        validate_invoice_width(self.invoice.width)?;
        Ok(())
    }

    /// Applies `HARVEST_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("HARVEST_SELLER_NAME") {
            debug!(name = %name, "Overriding seller name from environment");
            self.seller.name = name;
        }

        // Address lines are separated by ';'
        if let Some(address) = lookup("HARVEST_SELLER_ADDRESS") {
            self.seller.address = address
                .split(';')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(gstin) = lookup("HARVEST_SELLER_GSTIN") {
            self.seller.gstin = Some(gstin).filter(|g| !g.trim().is_empty());
        }

        if let Some(width) = lookup("HARVEST_INVOICE_WIDTH") {
            match width.trim().parse::<usize>() {
                Ok(w) => self.invoice.width = w,
                Err(_) => warn!(width = %width, "Ignoring invalid HARVEST_INVOICE_WIDTH"),
            }
        }

        if let Some(grouping) = lookup("HARVEST_WORDS_GROUPING") {
            match grouping.parse() {
                Ok(parsed) => self.invoice.grouping = parsed,
                Err(e) => warn!(error = %e, "Ignoring invalid HARVEST_WORDS_GROUPING"),
            }
        }

        if let Some(source) = lookup("HARVEST_LINE_TOTAL") {
            match source.parse() {
                Ok(parsed) => self.invoice.line_total = parsed,
                Err(e) => warn!(error = %e, "Ignoring invalid HARVEST_LINE_TOTAL"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "harvest", "harvest")
            .map(|dirs| dirs.config_dir().join("harvest.toml"))
    }

    pub fn seller(&self) -> Seller {
        Seller {
            name: self.seller.name.clone(),
            address: self.seller.address.clone(),
            gstin: self.seller.gstin.clone(),
        }
    }

    pub fn print_options(&self) -> PrintOptions {
        PrintOptions {
            width: self.invoice.width,
            grouping: self.invoice.grouping,
            line_total: self.invoice.line_total,
        }
    }
}
