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

//! Immutable result of one poll cycle.

use serde_json::Value;

/// Index of the serial number inside the Information block.
pub const INFO_SERIAL_INDEX: usize = 2;

/// The three positional blocks returned by one poll cycle.
///
/// A snapshot is never mutated after construction; the coordinator replaces
/// it wholesale every cycle. Absent indexes read as `None`, never as an
/// error, so catalogue/table drift on firmware updates degrades gracefully.
#[derive(Debug, Clone, Default)]
pub struct PolledSnapshot {
    data: Vec<u16>,
    set: Vec<u16>,
    info: Vec<Value>,
}

impl PolledSnapshot {
    #[must_use]
    pub fn new(data: Vec<u16>, set: Vec<u16>, info: Vec<Value>) -> Self {
        Self { data, set, info }
    }

    /// Word at `index` of the realtime Data block.
    #[must_use]
    pub fn data_word(&self, index: usize) -> Option<u16> {
        self.data.get(index).copied()
    }

    /// Word at `index` of the settings block.
    #[must_use]
    pub fn set_word(&self, index: usize) -> Option<u16> {
        self.set.get(index).copied()
    }

    /// String at `index` of the Information block.
    ///
    /// The block mixes strings and numbers; numbers are rendered as their
    /// JSON text so callers always see a string.
    #[must_use]
    pub fn info_text(&self, index: usize) -> Option<String> {
        self.info.get(index).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// The charger serial number as reported by the device.
    #[must_use]
    pub fn serial_number(&self) -> Option<String> {
        self.info_text(INFO_SERIAL_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_index_reads_as_none() {
        let snap = PolledSnapshot::new(vec![1, 2], vec![], vec![]);
        assert_eq!(snap.data_word(1), Some(2));
        assert_eq!(snap.data_word(2), None);
        assert_eq!(snap.set_word(0), None);
        assert_eq!(snap.info_text(0), None);
    }

    #[test]
    fn test_serial_number_from_information_block() {
        let snap = PolledSnapshot::new(
            vec![],
            vec![],
            vec![json!(7.0), json!(1), json!("C10701234")],
        );
        assert_eq!(snap.serial_number().as_deref(), Some("C10701234"));
    }

    #[test]
    fn test_numeric_information_renders_as_text() {
        let snap = PolledSnapshot::new(vec![], vec![], vec![json!(113)]);
        assert_eq!(snap.info_text(0).as_deref(), Some("113"));
    }
}
