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

//! HTTP transport and polling coordinator for SolaX EV chargers.
//!
//! The charger exposes a minimal local HTTP API: every call is a POST to
//! the device root with a form-style body, authenticated by the serial
//! number. This crate owns the transport ([`SolaxHttpClient`]) and the
//! snapshot/write lifecycle ([`Coordinator`]); the register semantics
//! live in `solax-http-core`.

pub mod client;
pub mod coordinator;
pub mod errors;
pub mod types;

pub use client::{ChargerApi, SolaxHttpClient};
pub use coordinator::{Coordinator, LiveEntity};
pub use errors::{SolaxError, SolaxResult};
pub use types::RealtimeResponse;
