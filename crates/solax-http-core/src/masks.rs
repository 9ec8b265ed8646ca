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

//! Hardware applicability bitmasks.
//!
//! Every entity declaration carries a mask describing which charger variants
//! it applies to. Bits are partitioned into three disjoint groups: power
//! rating, phase count and hardware version. Within a group the bits of an
//! entity mask are interpreted as OR; across groups an AND condition applies.
//! A group with no bits set in the entity mask matches any hardware.
//!
//! Example: `POW7 | POW22 | X1` means "any (7 kW or 22 kW) single-phase
//! unit, of any hardware version".

/// 7 kW power rating.
pub const POW7: u16 = 0x0001;
/// 11 kW power rating.
pub const POW11: u16 = 0x0002;
/// 22 kW power rating.
pub const POW22: u16 = 0x0004;
pub const ALL_POW_GROUP: u16 = POW7 | POW11 | POW22;

/// Single phase.
pub const X1: u16 = 0x0100;
/// Three phase.
pub const X3: u16 = 0x0200;
pub const ALL_X_GROUP: u16 = X1 | X3;

pub const V10: u16 = 0x0010;
pub const V11: u16 = 0x0020;
pub const V20: u16 = 0x0040;
pub const ALL_VER_GROUP: u16 = V10 | V11 | V20;

/// First generation EVC chargers (hardware versions 1.0 and 1.1).
pub const G1: u16 = V10 | V11;
/// Second generation HEC chargers.
pub const G2: u16 = V20;

/// Matches any hardware in every group.
pub const ALLDEFAULT: u16 = 0;

const GROUPS: [u16; 3] = [ALL_POW_GROUP, ALL_X_GROUP, ALL_VER_GROUP];

/// Group-wise mask match, without the blacklist check.
///
/// Returns `false` while the profile is unclassified (`profile_mask == 0`).
#[must_use]
pub fn mask_matches(profile_mask: u16, entity_mask: u16) -> bool {
    if profile_mask == 0 {
        return false;
    }
    GROUPS
        .iter()
        .all(|group| (profile_mask & entity_mask & group) != 0 || (entity_mask & group) == 0)
}

/// Full entity applicability check: group-wise mask match, then the
/// serial-number blacklist as an exclusion on top of a positive match.
#[must_use]
pub fn entity_matches(
    profile_mask: u16,
    entity_mask: u16,
    blacklist: &[&str],
    serial_number: &str,
) -> bool {
    let blacklisted = blacklist
        .iter()
        .any(|prefix| serial_number.starts_with(prefix));
    mask_matches(profile_mask, entity_mask) && !blacklisted
}
