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

//! The entity catalogue.
//!
//! Immutable, compile-time tables of every telemetry and control point
//! across all supported hardware variants. A key may appear more than once
//! with disjoint applicability masks when the parameters differ per
//! variant (the eco-mode current levels, the max-charge-current bounds);
//! the matcher guarantees at most one of them survives filtering for any
//! classified charger.

use crate::descriptor::{
    EntityDescriptor, EntityKind, IDENT, RawUnit, ScaleRule, Transform,
};
use crate::masks::{ALLDEFAULT, G1, G2, POW7, POW11, POW22, X1, X3};

const fn multiplier(factor: f64, decimals: i32) -> ScaleRule {
    ScaleRule::Multiplier { factor, decimals }
}

pub const METER_SETTINGS: &[(u16, &str)] =
    &[(0, "External CT"), (1, "External Meter"), (2, "Inverter")];

pub const USE_MODES: &[(u16, &str)] = &[(0, "Stop"), (1, "Fast"), (2, "ECO"), (3, "Green")];

pub const GREEN_MODE_LEVELS: &[(u16, &str)] = &[(3, "3A"), (6, "6A")];

pub const ECO_MODE_LEVELS: &[(u16, &str)] =
    &[(6, "6A"), (10, "10A"), (16, "16A"), (20, "20A"), (25, "25A")];

pub const ECO_MODE_LEVELS_11KW: &[(u16, &str)] = &[(6, "6A"), (10, "10A")];

pub const START_CHARGE_MODES: &[(u16, &str)] = &[(0, "Plug & Charge"), (1, "RFID to Charge")];

pub const BOOST_MODES: &[(u16, &str)] = &[(0, "Normal"), (1, "Timer Boost"), (2, "Smart Boost")];

pub const CHARGE_PHASES: &[(u16, &str)] = &[
    (0, "Three Phase"),
    (1, "L1 Phase"),
    (2, "L2 Phase"),
    (3, "L3 Phase"),
];

pub const RUN_MODES: &[(u16, &str)] = &[
    (0, "Available"),
    (1, "Preparing"),
    (2, "Charging"),
    (3, "Finishing"),
    (4, "Fault Mode"),
    (5, "Unavailable"),
    (6, "Reserved"),
    (7, "Suspended EV"),
    (8, "Suspended EVSE"),
    (9, "Update"),
    (10, "RFID Activation"),
];

const BASE: EntityDescriptor = EntityDescriptor {
    key: "",
    name: "",
    kind: EntityKind::Sensor,
    register: 0,
    allowed_types: ALLDEFAULT,
    scale: IDENT,
    unit: RawUnit::U16,
    unit_of_measurement: None,
    enabled_default: true,
    diagnostic: false,
    blacklist: &[],
};

pub static BUTTON_TYPES: &[EntityDescriptor] = &[EntityDescriptor {
    key: "reset",
    name: "Reset",
    kind: EntityKind::Button,
    register: 0x618,
    allowed_types: G1,
    ..BASE
}];

pub static TIME_TYPES: &[EntityDescriptor] = &[
    EntityDescriptor {
        key: "timed_boost_start",
        name: "Timed boost start",
        kind: EntityKind::Time,
        register: 0x634,
        allowed_types: G1,
        ..BASE
    },
    EntityDescriptor {
        key: "timed_boost_end",
        name: "Timed boost end",
        kind: EntityKind::Time,
        register: 0x636,
        allowed_types: G1,
        ..BASE
    },
    EntityDescriptor {
        key: "smart_boost_end",
        name: "Smart boost end",
        kind: EntityKind::Time,
        register: 0x638,
        allowed_types: G1,
        ..BASE
    },
];

pub static NUMBER_TYPES: &[EntityDescriptor] = &[
    // The 11 kW wallbox caps at 16 A, the others at 32 A
    EntityDescriptor {
        key: "max_charge_current_setting",
        name: "Max Charge Current Setting",
        kind: EntityKind::Number {
            min: 6.0,
            max: 16.0,
            step: 1.0,
        },
        register: 0x628,
        allowed_types: POW11 | G1,
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "max_charge_current_setting",
        name: "Max Charge Current Setting",
        kind: EntityKind::Number {
            min: 6.0,
            max: 32.0,
            step: 1.0,
        },
        register: 0x628,
        allowed_types: POW7 | POW22 | G1,
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "smart_boost_energy",
        name: "Smart boost energy",
        kind: EntityKind::Number {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        },
        register: 0x63A,
        allowed_types: G1,
        unit_of_measurement: Some("kWh"),
        ..BASE
    },
];

pub static SELECT_TYPES: &[EntityDescriptor] = &[
    EntityDescriptor {
        key: "meter_setting",
        name: "Meter Setting",
        kind: EntityKind::Select,
        register: 0x60C,
        allowed_types: G1,
        scale: ScaleRule::Lookup(METER_SETTINGS),
        enabled_default: false,
        diagnostic: true,
        ..BASE
    },
    EntityDescriptor {
        key: "charger_use_mode",
        name: "Charger Use Mode",
        kind: EntityKind::Select,
        register: 0x60D,
        allowed_types: G1,
        scale: ScaleRule::Lookup(USE_MODES),
        ..BASE
    },
    EntityDescriptor {
        key: "charger_green_mode",
        name: "Charger Green Mode Level",
        kind: EntityKind::Select,
        register: 0x60F,
        allowed_types: G1,
        scale: ScaleRule::Lookup(GREEN_MODE_LEVELS),
        ..BASE
    },
    EntityDescriptor {
        key: "charger_eco_mode",
        name: "Charger Eco Mode Level",
        kind: EntityKind::Select,
        register: 0x60E,
        allowed_types: POW7 | POW22 | G1,
        scale: ScaleRule::Lookup(ECO_MODE_LEVELS),
        ..BASE
    },
    EntityDescriptor {
        key: "charger_eco_mode",
        name: "Charger Eco Mode Level",
        kind: EntityKind::Select,
        register: 0x60E,
        allowed_types: POW11 | G1,
        scale: ScaleRule::Lookup(ECO_MODE_LEVELS_11KW),
        ..BASE
    },
    EntityDescriptor {
        key: "start_charge_mode",
        name: "Start Charge Mode",
        kind: EntityKind::Select,
        register: 0x610,
        allowed_types: G1,
        scale: ScaleRule::Lookup(START_CHARGE_MODES),
        ..BASE
    },
    EntityDescriptor {
        key: "boost_mode",
        name: "Boost Mode",
        kind: EntityKind::Select,
        register: 0x613,
        allowed_types: G1,
        scale: ScaleRule::Lookup(BOOST_MODES),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_phase",
        name: "Charge Phase",
        kind: EntityKind::Select,
        register: 0x625,
        allowed_types: G1,
        scale: ScaleRule::Lookup(CHARGE_PHASES),
        ..BASE
    },
];

pub static SENSOR_TYPES: &[EntityDescriptor] = &[
    EntityDescriptor {
        key: "charge_start_time",
        name: "Charge start time",
        register: 0xF001,
        allowed_types: G1,
        ..BASE
    },
    EntityDescriptor {
        key: "ct_meter_setting",
        name: "CT Meter Setting",
        register: 0x60C,
        allowed_types: G1,
        scale: ScaleRule::Lookup(METER_SETTINGS),
        enabled_default: false,
        diagnostic: true,
        ..BASE
    },
    EntityDescriptor {
        key: "charger_use_mode",
        name: "Charger Use Mode",
        register: 0x60D,
        allowed_types: G1 | G2,
        scale: ScaleRule::Lookup(USE_MODES),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "start_charge_mode",
        name: "Start Charge Mode",
        register: 0x610,
        allowed_types: G1,
        scale: ScaleRule::Lookup(START_CHARGE_MODES),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "boost_mode",
        name: "Boost Mode",
        register: 0x613,
        allowed_types: G1,
        scale: ScaleRule::Lookup(BOOST_MODES),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "max_charge_current",
        name: "Max Charge Current",
        register: 0x628,
        allowed_types: G1 | G2,
        scale: multiplier(1.0, 0),
        unit_of_measurement: Some("A"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_voltage",
        name: "Charge Voltage",
        register: 0x0,
        allowed_types: X1 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("V"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_voltage_l1",
        name: "Charge Voltage L1",
        register: 0x0,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("V"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_voltage_l2",
        name: "Charge Voltage L2",
        register: 0x1,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("V"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_voltage_l3",
        name: "Charge Voltage L3",
        register: 0x2,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("V"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_current",
        name: "Charge Current",
        register: 0x4,
        allowed_types: X1 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_current_l1",
        name: "Charge Current L1",
        register: 0x4,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_current_l2",
        name: "Charge Current L2",
        register: 0x5,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_current_l3",
        name: "Charge Current L3",
        register: 0x6,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_power",
        name: "Charge Power",
        register: 0x8,
        allowed_types: X1 | G1 | G2,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_power_l1",
        name: "Charge Power L1",
        register: 0x8,
        allowed_types: X3 | G1 | G2,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_power_l2",
        name: "Charge Power L2",
        register: 0x9,
        allowed_types: X3 | G1 | G2,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_power_l3",
        name: "Charge Power L3",
        register: 0xA,
        allowed_types: X3 | G1 | G2,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_power_total",
        name: "Charge Power Total",
        register: 0xB,
        allowed_types: G1 | G2,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_time",
        name: "Charge Time",
        register: 0x2B,
        allowed_types: G1,
        unit: RawUnit::U32,
        scale: multiplier(1.0, 0),
        unit_of_measurement: Some("s"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_frequency",
        name: "Charge Frequency",
        register: 0xC,
        allowed_types: X1 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("Hz"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_frequency_l1",
        name: "Charge Frequency L1",
        register: 0xC,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("Hz"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_frequency_l2",
        name: "Charge Frequency L2",
        register: 0xD,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("Hz"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_frequency_l3",
        name: "Charge Frequency L3",
        register: 0xE,
        allowed_types: X3 | G1 | G2,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("Hz"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "charge_added",
        name: "Charge Added",
        register: 0xF,
        allowed_types: G1,
        scale: multiplier(0.1, 1),
        unit_of_measurement: Some("kWh"),
        ..BASE
    },
    EntityDescriptor {
        key: "charge_added_total",
        name: "Charge Added Total",
        register: 0x10,
        allowed_types: G1 | G2,
        unit: RawUnit::U32,
        scale: multiplier(0.1, 1),
        unit_of_measurement: Some("kWh"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_current",
        name: "Grid Current",
        register: 0x12,
        allowed_types: X1 | G1,
        unit: RawUnit::S16,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_current_l1",
        name: "Grid Current L1",
        register: 0x12,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_current_l2",
        name: "Grid Current L2",
        register: 0x13,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_current_l3",
        name: "Grid Current L3",
        register: 0x14,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        scale: multiplier(0.01, 1),
        unit_of_measurement: Some("A"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_power",
        name: "Grid Power",
        register: 0x15,
        allowed_types: X1 | G1,
        unit: RawUnit::S16,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_power_l1",
        name: "Grid Power L1",
        register: 0x15,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_power_l2",
        name: "Grid Power L2",
        register: 0x16,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "grid_power_l3",
        name: "Grid Power L3",
        register: 0x17,
        allowed_types: X3 | G1,
        unit: RawUnit::S16,
        unit_of_measurement: Some("W"),
        enabled_default: false,
        ..BASE
    },
    EntityDescriptor {
        key: "available_pv_power",
        name: "Available PV Power",
        register: 0x18,
        allowed_types: G1,
        unit: RawUnit::S16,
        unit_of_measurement: Some("W"),
        ..BASE
    },
    EntityDescriptor {
        key: "charger_temperature",
        name: "Charger Temperature",
        register: 0x1C,
        allowed_types: G1,
        unit_of_measurement: Some("°C"),
        diagnostic: true,
        ..BASE
    },
    EntityDescriptor {
        key: "run_mode",
        name: "Run Mode",
        register: 0x1D,
        allowed_types: G1 | G2,
        scale: ScaleRule::Lookup(RUN_MODES),
        ..BASE
    },
    EntityDescriptor {
        key: "firmwareversion",
        name: "Firmware Version",
        register: 0x25,
        allowed_types: G1,
        scale: ScaleRule::Custom(Transform::FirmwareVersion),
        diagnostic: true,
        ..BASE
    },
];

/// All catalogue tables chained.
pub fn all() -> impl Iterator<Item = &'static EntityDescriptor> {
    BUTTON_TYPES
        .iter()
        .chain(TIME_TYPES)
        .chain(NUMBER_TYPES)
        .chain(SELECT_TYPES)
        .chain(SENSOR_TYPES)
}
