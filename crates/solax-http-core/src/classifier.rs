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

//! Serial-number hardware classifier.
//!
//! The charger reports its serial number in the Information block of the
//! realtime read. The prefix and a handful of positional characters encode
//! generation, phase count and power rating. Decoding them yields the
//! hardware profile bitmask used to filter the entity catalogue.

use tracing::info;

use crate::masks::{POW7, POW11, POW22, V10, V11, V20, X1, X3};

/// Classifies a charger serial number into a hardware bitmask.
///
/// Returns `None` for serial numbers of an unknown scheme (including
/// strings too short to carry the positional markers). Callers keep the
/// profile unclassified and retry on the next poll.
#[must_use]
pub fn classify(serial_number: &str) -> Option<u16> {
    let chars: Vec<char> = serial_number.chars().collect();

    if serial_number.starts_with('C') {
        // First generation EVC. Layout: C<phase><power:2><version>...
        if chars.len() < 5 {
            return None;
        }
        let mut mask = 0_u16;
        match chars[4] {
            '0' => mask |= V10,
            '1' => mask |= V11,
            _ => {}
        }
        match chars[1] {
            '1' => mask |= X1,
            '3' => mask |= X3,
            _ => {}
        }
        match (chars[2], chars[3]) {
            ('0', '7') => mask |= POW7,
            ('1', '1') => mask |= POW11,
            ('2', '2') => mask |= POW22,
            _ => {}
        }
        info!(serial_number, mask, "classified as first generation EVC");
        return Some(mask);
    }

    if serial_number.starts_with("50") {
        // Second generation HEC. Layout: 50<phase>.<power>...
        if chars.len() < 5 {
            return None;
        }
        let mut mask = V20;
        match chars[2] {
            '3' => mask |= X3,
            '2' => mask |= X1,
            _ => {}
        }
        match chars[4] {
            'B' => mask |= POW11,
            'M' => mask |= POW22,
            '7' => mask |= POW7,
            _ => {}
        }
        info!(serial_number, mask, "classified as second generation HEC");
        return Some(mask);
    }

    None
}
