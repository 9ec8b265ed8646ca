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

//! Frozen identity of a classified charger.

use crate::classifier::classify;
use crate::masks::entity_matches;
use crate::plugin::{ChargerPlugin, plugin_for};

/// Identity derived once from the serial number on the first successful
/// poll, then frozen for the lifetime of the coordinator.
#[derive(Debug, Clone)]
pub struct HardwareProfile {
    serial_number: String,
    inverter_type: u16,
    plugin: &'static dyn ChargerPlugin,
}

impl HardwareProfile {
    /// Classifies a serial number. `None` keeps the caller unclassified;
    /// classification is retried on every poll until it first succeeds.
    #[must_use]
    pub fn classify(serial_number: &str) -> Option<Self> {
        let inverter_type = classify(serial_number)?;
        let plugin = plugin_for(inverter_type)?;
        Some(Self {
            serial_number: serial_number.to_owned(),
            inverter_type,
            plugin,
        })
    }

    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// The classified hardware bitmask.
    #[must_use]
    pub fn inverter_type(&self) -> u16 {
        self.inverter_type
    }

    #[must_use]
    pub fn plugin(&self) -> &'static dyn ChargerPlugin {
        self.plugin
    }

    #[must_use]
    pub fn hw_version(&self) -> &'static str {
        self.plugin.hw_version()
    }

    /// Model designation, e.g. `X1-EVC-7kW`.
    #[must_use]
    pub fn model(&self) -> String {
        self.plugin.model(self.inverter_type)
    }

    /// Whether an entity applies to this charger.
    #[must_use]
    pub fn supports(&self, entity_mask: u16, blacklist: &[&str]) -> bool {
        entity_matches(self.inverter_type, entity_mask, blacklist, &self.serial_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::{G1, G2, POW7, V10, X1};

    #[test]
    fn test_profile_from_g1_serial() {
        let profile = HardwareProfile::classify("C10701234").unwrap();
        assert_eq!(profile.inverter_type(), V10 | X1 | POW7);
        assert_eq!(profile.hw_version(), "G1");
        assert_eq!(profile.model(), "X1-EVC-7kW");
        assert!(profile.supports(G1, &[]));
        assert!(!profile.supports(G2, &[]));
    }

    #[test]
    fn test_profile_from_g2_serial() {
        let profile = HardwareProfile::classify("5023B1234").unwrap();
        assert_eq!(profile.hw_version(), "G2");
        assert_eq!(profile.model(), "X1-HAC-11kW");
    }

    #[test]
    fn test_unknown_serial_stays_unclassified() {
        assert!(HardwareProfile::classify("XYZ123456").is_none());
    }
}
