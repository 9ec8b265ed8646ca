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

//! Entity descriptors.
//!
//! One descriptor type covers every kind of telemetry and control point;
//! the behavioural differences live in [`EntityKind`]. Descriptors are
//! declared as `static` tables in [`crate::catalogue`] and never mutated.

use chrono::{DateTime, Local, NaiveTime};

/// How many raw words an entity occupies and how they are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawUnit {
    /// Single unsigned word.
    U16,
    /// Single word, two's complement.
    S16,
    /// Two words assembled high-first.
    U32,
}

/// Named device-specific scalar transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Raw `113` reads as `"1.13"`.
    FirmwareVersion,
}

/// How a raw register value maps to an entity value and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleRule {
    /// Multiply by `factor`, round to `decimals` places.
    Multiplier { factor: f64, decimals: i32 },
    /// Raw value is a key into a display-string table.
    Lookup(&'static [(u16, &'static str)]),
    /// Device-specific transform, read-only.
    Custom(Transform),
}

/// Identity scale: factor 1, one decimal place.
pub const IDENT: ScaleRule = ScaleRule::Multiplier {
    factor: 1.0,
    decimals: 1,
};

/// The entity's role, with the per-kind parameters inline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Sensor,
    Select,
    Number { min: f64, max: f64, step: f64 },
    Button,
    Time,
}

/// A decoded entity value.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityValue {
    Number(f64),
    Text(String),
    Time(NaiveTime),
    Timestamp(DateTime<Local>),
}

impl EntityValue {
    /// Numeric payload, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) | Self::Time(_) | Self::Timestamp(_) => None,
        }
    }

    /// Textual payload, if this is a display string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Number(_) | Self::Time(_) | Self::Timestamp(_) => None,
        }
    }
}

impl std::fmt::Display for EntityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Time(v) => write!(f, "{}", v.format("%H:%M")),
            Self::Timestamp(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One telemetry or control point.
///
/// `register` is an opaque lookup key into the per-generation read/write
/// tables, not a wire address. `allowed_types` is the applicability
/// bitmask checked by [`crate::masks::entity_matches`].
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: EntityKind,
    pub register: u16,
    pub allowed_types: u16,
    pub scale: ScaleRule,
    pub unit: RawUnit,
    pub unit_of_measurement: Option<&'static str>,
    pub enabled_default: bool,
    pub diagnostic: bool,
    pub blacklist: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(EntityValue::Number(6.0).as_number(), Some(6.0));
        assert_eq!(EntityValue::Text("ECO".into()).as_number(), None);
        assert_eq!(EntityValue::Text("ECO".into()).as_text(), Some("ECO"));
    }

    #[test]
    fn test_value_display() {
        let t = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
        assert_eq!(EntityValue::Time(t).to_string(), "08:05");
        assert_eq!(EntityValue::Number(22.5).to_string(), "22.5");
    }
}
