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

//! Register tables of the first generation (EVC) chargers.

use crate::plugin::{ChargerPlugin, ReadMapping, ReadSource, model_fragments};

use ReadMapping::{DoubleWord, InfoText, PackedTime, Timestamp, Word};
use ReadSource::{Data, Set};

#[derive(Debug)]
pub(crate) struct G1Plugin;

impl ChargerPlugin for G1Plugin {
    fn read_mapping(&self, register: u16) -> Option<ReadMapping> {
        let mapping = match register {
            // Last charge start, packed Y-M-D H:m:S
            0xF001 => Timestamp {
                ym: 84,
                dh: 83,
                ms: 82,
            },
            0x600 => InfoText(2),
            0x60C => Word(Set, 0),
            0x60D => Word(Set, 1),
            0x60E => Word(Set, 2),
            0x60F => Word(Set, 3),
            0x610 => Word(Set, 4),
            0x613 => Word(Set, 11),
            0x625 => Word(Data, 65),
            0x668 => Word(Set, 76),
            0x634 => PackedTime(Set, 12),
            0x636 => PackedTime(Set, 13),
            0x638 => PackedTime(Set, 15),
            0x63A => Word(Set, 14),
            0x0 => Word(Data, 2),
            0x1 => Word(Data, 3),
            0x2 => Word(Data, 4),
            0x4 => Word(Data, 5),
            0x5 => Word(Data, 6),
            0x6 => Word(Data, 7),
            0x8 => Word(Data, 8),
            0x9 => Word(Data, 9),
            0xA => Word(Data, 10),
            0xB => Word(Data, 11),
            0xC => Word(Data, 33),
            0xD => Word(Data, 34),
            0xE => Word(Data, 35),
            0xF => Word(Data, 12),
            0x10 => DoubleWord {
                source: Data,
                hi: 15,
                lo: 14,
                offset: 0,
            },
            0x12 => Word(Data, 16),
            0x13 => Word(Data, 17),
            0x14 => Word(Data, 18),
            0x15 => Word(Data, 19),
            0x16 => Word(Data, 20),
            0x17 => Word(Data, 21),
            0x18 => Word(Data, 22),
            0x1C => Word(Data, 24),
            0x1D => Word(Data, 26),
            0x106 => Word(Data, 0),
            // Firmware version; the string reformat lives in the scale rule
            0x25 => Word(Set, 19),
            // Charge-time counter reads one second short on the wire
            0x2B => DoubleWord {
                source: Data,
                hi: 81,
                lo: 80,
                offset: 1,
            },
            _ => return None,
        };
        Some(mapping)
    }

    fn write_register(&self, register: u16) -> Option<u16> {
        match register {
            0x60C => Some(1),
            0x60D => Some(2),
            0x60E => Some(3),
            0x60F => Some(4),
            0x610 => Some(5),
            0x613 => Some(11),
            0x618 => Some(22),
            0x625 => Some(70),
            0x634 => Some(12),
            0x636 => Some(13),
            0x638 => Some(15),
            0x63A => Some(14),
            0x668 => Some(82),
            _ => None,
        }
    }

    fn hw_version(&self) -> &'static str {
        "G1"
    }

    fn model(&self, mask: u16) -> String {
        let (phase, power) = model_fragments(mask);
        format!("{phase}-EVC-{power}")
    }
}
