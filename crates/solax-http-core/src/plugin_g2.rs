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

//! Register tables of the second generation (HAC) chargers.
//!
//! The second generation exposes a much smaller settings map than the
//! first and shifts the realtime telemetry block by one position.

use crate::plugin::{ChargerPlugin, ReadMapping, ReadSource, model_fragments};

use ReadMapping::{DoubleWord, Word};
use ReadSource::{Data, Set};

#[derive(Debug)]
pub(crate) struct G2Plugin;

impl ChargerPlugin for G2Plugin {
    fn read_mapping(&self, register: u16) -> Option<ReadMapping> {
        let mapping = match register {
            0x60D => Word(Set, 1),
            0x60E => Word(Set, 11),
            0x60F => Word(Set, 12),
            0x668 => Word(Set, 3),
            0x669 => Word(Set, 81),
            0x0 => Word(Data, 3),
            0x1 => Word(Data, 4),
            0x2 => Word(Data, 5),
            0x4 => Word(Data, 6),
            0x5 => Word(Data, 7),
            0x6 => Word(Data, 8),
            0x8 => Word(Data, 9),
            0x9 => Word(Data, 10),
            0xA => Word(Data, 11),
            0xB => Word(Data, 12),
            0xC => Word(Data, 33),
            0xD => Word(Data, 34),
            0xE => Word(Data, 35),
            0xF => Word(Data, 13),
            0x10 => DoubleWord {
                source: Data,
                hi: 16,
                lo: 15,
                offset: 0,
            },
            0x1D => Word(Data, 0),
            0x2B => DoubleWord {
                source: Data,
                hi: 50,
                lo: 49,
                offset: 1,
            },
            _ => return None,
        };
        Some(mapping)
    }

    fn write_register(&self, register: u16) -> Option<u16> {
        match register {
            0x60D => Some(52),
            0x60E => Some(62),
            0x60F => Some(63),
            0x668 => Some(54),
            0x669 => Some(132),
            _ => None,
        }
    }

    fn hw_version(&self) -> &'static str {
        "G2"
    }

    fn model(&self, mask: u16) -> String {
        let (phase, power) = model_fragments(mask);
        format!("{phase}-HAC-{power}")
    }
}
