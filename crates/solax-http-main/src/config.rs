// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SolaX HTTP Bridge.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const MIN_SCAN_INTERVAL_SECS: u64 = 5;

fn default_scan_interval() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The charger to poll
    pub device: DeviceConfig,

    /// System configuration
    #[serde(default)]
    pub system: SystemConfig,
}

/// Connection settings for a single charger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Hostname or IP of the charger on the local network
    pub host: String,

    /// Charger serial number; doubles as the API password
    pub serial_number: String,

    /// Poll interval in seconds
    #[serde(default = "default_scan_interval")]
    pub scan_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml, falling back to environment
    /// variables for development.
    pub fn load() -> Result<Self> {
        if std::path::Path::new("config.toml").exists() {
            return Self::load_from(std::path::Path::new("config.toml"));
        }

        warn!("No configuration file found, using environment variables");
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig =
            toml::from_str(&config_str).with_context(|| format!("Failed to parse {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables (development/testing)
    fn from_env() -> Result<Self> {
        let host = std::env::var("SOLAX_HOST")
            .context("SOLAX_HOST environment variable not set and no config.toml found")?;
        let serial_number = std::env::var("SOLAX_SERIAL_NUMBER")
            .context("SOLAX_SERIAL_NUMBER environment variable not set")?;
        let scan_interval_secs = std::env::var("SOLAX_SCAN_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_scan_interval);

        Ok(Self {
            device: DeviceConfig {
                host,
                serial_number,
                scan_interval_secs,
            },
            system: SystemConfig::default(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.device.host.is_empty() {
            anyhow::bail!("device.host cannot be empty");
        }
        if self.device.serial_number.is_empty() {
            anyhow::bail!("device.serial_number cannot be empty");
        }
        if self.device.scan_interval_secs < MIN_SCAN_INTERVAL_SECS {
            anyhow::bail!(
                "device.scan_interval_secs must be at least {MIN_SCAN_INTERVAL_SECS}, got {}",
                self.device.scan_interval_secs
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> AppConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse(
            r#"
            [device]
            host = "192.168.1.50"
            serial_number = "C10701234"
            "#,
        );
        assert_eq!(config.device.host, "192.168.1.50");
        assert_eq!(config.device.scan_interval_secs, 15);
        assert_eq!(config.system.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
            [device]
            host = "charger.local"
            serial_number = "5023B1234"
            scan_interval_secs = 30

            [system]
            log_level = "debug"
            "#,
        );
        assert_eq!(config.device.scan_interval_secs, 30);
        assert_eq!(config.system.log_level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_scan_interval() {
        let config = parse(
            r#"
            [device]
            host = "charger.local"
            serial_number = "C10701234"
            scan_interval_secs = 1
            "#,
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("at least 5"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[device]\nhost = \"192.168.1.50\"\nserial_number = \"C10701234\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.device.serial_number, "C10701234");

        let err = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_validate_rejects_empty_serial() {
        let config = parse(
            r#"
            [device]
            host = "charger.local"
            serial_number = ""
            "#,
        );
        assert!(config.validate().is_err());
    }
}
