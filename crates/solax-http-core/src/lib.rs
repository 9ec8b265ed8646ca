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

//! Register mapping core for SolaX EV chargers speaking the local HTTP protocol.
//!
//! Everything in this crate is pure and I/O-free: the entity catalogue,
//! the serial-number classifier, the applicability-mask matcher and the
//! raw-word codec. The HTTP transport and the polling coordinator live in
//! `solax-http-client`.

pub mod catalogue;
pub mod classifier;
pub mod codec;
pub mod descriptor;
pub mod masks;
pub mod plugin;
pub mod profile;
pub mod snapshot;

mod plugin_g1;
mod plugin_g2;

pub use classifier::classify;
pub use codec::{EncodeError, decode, decode_with, encode};
pub use descriptor::{EntityDescriptor, EntityKind, EntityValue, RawUnit, ScaleRule, Transform};
pub use masks::{entity_matches, mask_matches};
pub use plugin::{ChargerPlugin, ReadMapping, ReadSource, RegisterWrite, plugin_for};
pub use profile::HardwareProfile;
pub use snapshot::PolledSnapshot;
