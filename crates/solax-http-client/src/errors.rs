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

//! Error types for the charger HTTP client.

use solax_http_core::EncodeError;
use thiserror::Error;

/// Failures of the transport or the write path. None of these are fatal
/// to the poll loop; a failed cycle keeps the previous snapshot.
#[derive(Debug, Error)]
pub enum SolaxError {
    #[error("config error: {0}")]
    Config(String),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected http status {status}")]
    Status { status: u16 },

    #[error("device refused the request: {0}")]
    DeviceRefused(String),

    #[error("malformed device response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("charger is not classified yet")]
    Unclassified,

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("no entity named {0:?} for this charger")]
    UnknownEntity(String),
}

pub type SolaxResult<T> = std::result::Result<T, SolaxError>;
