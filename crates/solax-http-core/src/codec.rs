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

//! Raw-word codec.
//!
//! [`decode`] turns the raw words of a snapshot into typed entity values,
//! [`encode`] turns a typed value into the wire write payload. The two
//! directions go through different register tables on purpose; a register
//! without a write entry is read-only and encoding it is an error, never
//! a silent no-op.

use chrono::{Local, NaiveTime, TimeZone};
use thiserror::Error;

use crate::descriptor::{EntityDescriptor, EntityValue, RawUnit, ScaleRule, Transform};
use crate::plugin::{ChargerPlugin, ReadMapping, ReadSource, RegisterWrite};
use crate::snapshot::PolledSnapshot;

/// Why a value could not be encoded for the device.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The register has no write mapping on this hardware generation.
    #[error("register 0x{register:X} is read-only on this hardware")]
    UnsupportedRegister { register: u16 },
    /// The value does not fit the entity's scale rule.
    #[error("value {value:?} is not valid for entity {key:?}")]
    InvalidValue { key: &'static str, value: String },
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn word(snapshot: &PolledSnapshot, source: ReadSource, index: usize) -> Option<u16> {
    match source {
        ReadSource::Data => snapshot.data_word(index),
        ReadSource::Set => snapshot.set_word(index),
    }
}

fn packed_time(raw: u16) -> Option<NaiveTime> {
    let hour = u32::from(raw >> 8);
    let minute = u32::from(raw & 0x00FF);
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn scale_raw(descriptor: &EntityDescriptor, raw: i64) -> EntityValue {
    match descriptor.scale {
        ScaleRule::Multiplier { factor, decimals } => {
            #[allow(clippy::cast_precision_loss)]
            let scaled = round_to(raw as f64 * factor, decimals);
            EntityValue::Number(scaled)
        }
        ScaleRule::Lookup(table) => {
            let text = u16::try_from(raw)
                .ok()
                .and_then(|key| table.iter().find(|(k, _)| *k == key))
                .map_or("Unknown", |(_, v)| *v);
            EntityValue::Text(text.to_owned())
        }
        ScaleRule::Custom(Transform::FirmwareVersion) => {
            // Raw 113 reads as "1.13"
            let digits = raw.to_string();
            let text = if digits.len() > 1 {
                format!("{}.{}", &digits[..1], &digits[1..])
            } else {
                digits
            };
            EntityValue::Text(text)
        }
    }
}

/// Decodes one entity from the latest snapshot.
///
/// Any missing index yields `None`; scale and sign correction only apply
/// to scalar word mappings, composite mappings carry their own shape.
#[must_use]
pub fn decode(
    descriptor: &EntityDescriptor,
    mapping: ReadMapping,
    snapshot: &PolledSnapshot,
) -> Option<EntityValue> {
    let raw: i64 = match mapping {
        ReadMapping::Word(source, index) => i64::from(word(snapshot, source, index)?),
        ReadMapping::DoubleWord {
            source,
            hi,
            lo,
            offset,
        } => {
            let hi = i64::from(word(snapshot, source, hi)?);
            let lo = i64::from(word(snapshot, source, lo)?);
            hi * 65536 + lo + i64::from(offset)
        }
        ReadMapping::PackedTime(source, index) => {
            return packed_time(word(snapshot, source, index)?).map(EntityValue::Time);
        }
        ReadMapping::Timestamp { ym, dh, ms } => {
            let ym = snapshot.data_word(ym)?;
            let dh = snapshot.data_word(dh)?;
            let ms = snapshot.data_word(ms)?;
            let month = u32::from(ym & 0x00FF);
            if month == 0 {
                return None;
            }
            return Local
                .with_ymd_and_hms(
                    2000 + i32::from(ym >> 8),
                    month,
                    u32::from(dh >> 8),
                    u32::from(dh & 0x00FF),
                    u32::from(ms >> 8),
                    u32::from(ms & 0x00FF),
                )
                .single()
                .map(EntityValue::Timestamp);
        }
        ReadMapping::InfoText(index) => {
            return snapshot.info_text(index).map(EntityValue::Text);
        }
    };

    // Two's complement correction happens after word assembly, before scale
    let raw = if descriptor.unit == RawUnit::S16 && raw >= 32768 {
        raw - 65536
    } else {
        raw
    };

    Some(scale_raw(descriptor, raw))
}

/// [`decode`] with the mapping looked up from the generation tables.
#[must_use]
pub fn decode_with(
    plugin: &dyn ChargerPlugin,
    descriptor: &EntityDescriptor,
    snapshot: &PolledSnapshot,
) -> Option<EntityValue> {
    let mapping = plugin.read_mapping(descriptor.register)?;
    decode(descriptor, mapping, snapshot)
}

fn reverse_scale(
    descriptor: &EntityDescriptor,
    value: &EntityValue,
) -> Result<i64, EncodeError> {
    let invalid = || EncodeError::InvalidValue {
        key: descriptor.key,
        value: value.to_string(),
    };

    match (value, descriptor.scale) {
        (EntityValue::Time(time), _) => {
            use chrono::Timelike;
            Ok((i64::from(time.hour()) << 8) + i64::from(time.minute()))
        }
        (EntityValue::Text(text), ScaleRule::Lookup(table)) => table
            .iter()
            .find(|(_, v)| v == text)
            .map(|(k, _)| i64::from(*k))
            .ok_or_else(invalid),
        (EntityValue::Number(number), ScaleRule::Multiplier { factor, .. }) => {
            #[allow(clippy::cast_possible_truncation)]
            let raw = (number / factor).round() as i64;
            Ok(raw)
        }
        (
            EntityValue::Number(_) | EntityValue::Text(_) | EntityValue::Timestamp(_),
            ScaleRule::Multiplier { .. } | ScaleRule::Lookup(_) | ScaleRule::Custom(_),
        ) => Err(invalid()),
    }
}

/// Encodes a write for the device.
///
/// The register id maps to a wire register number through the generation's
/// write table; registers absent from it surface as
/// [`EncodeError::UnsupportedRegister`].
pub fn encode(
    plugin: &dyn ChargerPlugin,
    descriptor: &EntityDescriptor,
    value: &EntityValue,
) -> Result<Vec<RegisterWrite>, EncodeError> {
    let reg = plugin
        .write_register(descriptor.register)
        .ok_or(EncodeError::UnsupportedRegister {
            register: descriptor.register,
        })?;
    let payload = reverse_scale(descriptor, value)?;
    Ok(vec![RegisterWrite {
        reg,
        val: payload.to_string(),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EntityKind, IDENT};
    use crate::plugin::plugin_for;
    use crate::masks::{POW7, V10, V20, X1};

    const fn sensor(register: u16, scale: ScaleRule, unit: RawUnit) -> EntityDescriptor {
        EntityDescriptor {
            key: "test",
            name: "Test",
            kind: EntityKind::Sensor,
            register,
            allowed_types: 0,
            scale,
            unit,
            unit_of_measurement: None,
            enabled_default: true,
            diagnostic: false,
            blacklist: &[],
        }
    }

    fn data_snapshot(data: Vec<u16>) -> PolledSnapshot {
        PolledSnapshot::new(data, vec![], vec![])
    }

    #[test]
    fn test_sign_correction_before_scale() {
        let descr = sensor(
            0x0,
            ScaleRule::Multiplier {
                factor: 0.01,
                decimals: 2,
            },
            RawUnit::S16,
        );
        let snap = data_snapshot(vec![65535]);
        let value = decode(&descr, ReadMapping::Word(ReadSource::Data, 0), &snap);
        assert_eq!(value, Some(EntityValue::Number(-0.01)));
    }

    #[test]
    fn test_unsigned_word_is_not_corrected() {
        let descr = sensor(0x0, IDENT, RawUnit::U16);
        let snap = data_snapshot(vec![65535]);
        let value = decode(&descr, ReadMapping::Word(ReadSource::Data, 0), &snap);
        assert_eq!(value, Some(EntityValue::Number(65535.0)));
    }

    #[test]
    fn test_double_word_assembly_with_offset() {
        let descr = sensor(
            0x2B,
            ScaleRule::Multiplier {
                factor: 1.0,
                decimals: 0,
            },
            RawUnit::U32,
        );
        let snap = data_snapshot(vec![7, 2]);
        let mapping = ReadMapping::DoubleWord {
            source: ReadSource::Data,
            hi: 1,
            lo: 0,
            offset: 1,
        };
        let value = decode(&descr, mapping, &snap);
        assert_eq!(value, Some(EntityValue::Number(2.0 * 65536.0 + 8.0)));
    }

    #[test]
    fn test_multiplier_rounding() {
        let descr = sensor(
            0x0,
            ScaleRule::Multiplier {
                factor: 0.1,
                decimals: 1,
            },
            RawUnit::U16,
        );
        let snap = data_snapshot(vec![123]);
        let value = decode(&descr, ReadMapping::Word(ReadSource::Data, 0), &snap);
        assert_eq!(value, Some(EntityValue::Number(12.3)));
    }

    #[test]
    fn test_lookup_with_unknown_sentinel() {
        const MODES: &[(u16, &str)] = &[(0, "Stop"), (1, "Fast")];
        let descr = sensor(0x60D, ScaleRule::Lookup(MODES), RawUnit::U16);
        let known = data_snapshot(vec![1]);
        let unknown = data_snapshot(vec![9]);
        assert_eq!(
            decode(&descr, ReadMapping::Word(ReadSource::Data, 0), &known),
            Some(EntityValue::Text("Fast".to_owned()))
        );
        assert_eq!(
            decode(&descr, ReadMapping::Word(ReadSource::Data, 0), &unknown),
            Some(EntityValue::Text("Unknown".to_owned()))
        );
    }

    #[test]
    fn test_firmware_version_transform() {
        let descr = sensor(
            0x25,
            ScaleRule::Custom(Transform::FirmwareVersion),
            RawUnit::U16,
        );
        let snap = PolledSnapshot::new(vec![], vec![113], vec![]);
        let value = decode(&descr, ReadMapping::Word(ReadSource::Set, 0), &snap);
        assert_eq!(value, Some(EntityValue::Text("1.13".to_owned())));
    }

    #[test]
    fn test_packed_time_range_validation() {
        let descr = sensor(0x634, IDENT, RawUnit::U16);
        let valid = PolledSnapshot::new(vec![], vec![(8 << 8) + 30], vec![]);
        let bad_hour = PolledSnapshot::new(vec![], vec![(24 << 8) + 30], vec![]);
        let bad_minute = PolledSnapshot::new(vec![], vec![(8 << 8) + 61], vec![]);
        let mapping = ReadMapping::PackedTime(ReadSource::Set, 0);
        assert_eq!(
            decode(&descr, mapping, &valid),
            Some(EntityValue::Time(NaiveTime::from_hms_opt(8, 30, 0).unwrap()))
        );
        assert_eq!(decode(&descr, mapping, &bad_hour), None);
        assert_eq!(decode(&descr, mapping, &bad_minute), None);
    }

    #[test]
    fn test_timestamp_zero_month_is_none() {
        let descr = sensor(0xF001, IDENT, RawUnit::U16);
        let mapping = ReadMapping::Timestamp { ym: 2, dh: 1, ms: 0 };
        let idle = data_snapshot(vec![0, 0, 24 << 8]);
        assert_eq!(decode(&descr, mapping, &idle), None);

        let running = data_snapshot(vec![
            (30 << 8) + 15,          // 30 min 15 s
            (14 << 8) + 9,           // day 14, 09 h
            (24 << 8) + 6,           // year 2024, June
        ]);
        let value = decode(&descr, mapping, &running);
        match value {
            Some(EntityValue::Timestamp(ts)) => {
                assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-06-14 09:30:15");
            }
            other => panic!("expected timestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_index_decodes_as_none() {
        let descr = sensor(0x0, IDENT, RawUnit::U16);
        let snap = data_snapshot(vec![]);
        assert_eq!(decode(&descr, ReadMapping::Word(ReadSource::Data, 5), &snap), None);
    }

    #[test]
    fn test_encode_lookup_reverses_display_string() {
        const MODES: &[(u16, &str)] = &[(0, "Stop"), (1, "Fast"), (2, "ECO")];
        let mut descr = sensor(0x60D, ScaleRule::Lookup(MODES), RawUnit::U16);
        descr.kind = EntityKind::Select;
        let plugin = plugin_for(V10 | X1 | POW7).unwrap();
        let writes = encode(plugin, &descr, &EntityValue::Text("ECO".to_owned())).unwrap();
        assert_eq!(
            writes,
            vec![RegisterWrite {
                reg: 2,
                val: "2".to_owned()
            }]
        );
    }

    #[test]
    fn test_encode_unknown_option_is_invalid() {
        const MODES: &[(u16, &str)] = &[(0, "Stop")];
        let descr = sensor(0x60D, ScaleRule::Lookup(MODES), RawUnit::U16);
        let plugin = plugin_for(V10 | X1 | POW7).unwrap();
        let err = encode(plugin, &descr, &EntityValue::Text("Turbo".to_owned())).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidValue { .. }));
    }

    #[test]
    fn test_encode_read_only_register_is_an_error() {
        let descr = sensor(0x1D, IDENT, RawUnit::U16);
        let plugin = plugin_for(V20 | X1 | POW7).unwrap();
        let err = encode(plugin, &descr, &EntityValue::Number(1.0)).unwrap_err();
        assert_eq!(err, EncodeError::UnsupportedRegister { register: 0x1D });
    }

    #[test]
    fn test_encode_packed_time() {
        let descr = sensor(0x634, IDENT, RawUnit::U16);
        let plugin = plugin_for(V10 | X1 | POW7).unwrap();
        let time = EntityValue::Time(NaiveTime::from_hms_opt(8, 5, 0).unwrap());
        let writes = encode(plugin, &descr, &time).unwrap();
        assert_eq!(
            writes,
            vec![RegisterWrite {
                reg: 12,
                val: ((8 << 8) + 5).to_string()
            }]
        );
    }

    #[test]
    fn test_encode_number_reverses_multiplier() {
        let descr = sensor(
            0x63A,
            ScaleRule::Multiplier {
                factor: 0.1,
                decimals: 1,
            },
            RawUnit::U16,
        );
        let plugin = plugin_for(V10 | X1 | POW7).unwrap();
        let writes = encode(plugin, &descr, &EntityValue::Number(12.3)).unwrap();
        assert_eq!(writes[0].val, "123");
    }

    #[test]
    fn test_decode_with_uses_generation_table() {
        let descr = sensor(0x1D, IDENT, RawUnit::U16);
        let plugin_g1 = plugin_for(V10 | X1 | POW7).unwrap();
        let plugin_g2 = plugin_for(V20 | X1 | POW7).unwrap();
        let snap = data_snapshot(vec![2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7]);
        // G1 reads run mode at Data[26], G2 at Data[0]
        assert_eq!(
            decode_with(plugin_g1, &descr, &snap),
            Some(EntityValue::Number(7.0))
        );
        assert_eq!(
            decode_with(plugin_g2, &descr, &snap),
            Some(EntityValue::Number(2.0))
        );
    }
}
