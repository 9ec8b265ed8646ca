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

//! Polling coordinator.
//!
//! Owns the snapshot lifecycle: one poll cycle produces one immutable
//! snapshot that is swapped in atomically, so readers always observe a
//! consistent poll. The hardware profile is classified on the first
//! successful cycle and frozen afterwards.

use std::sync::Arc;

use parking_lot::RwLock;
use solax_http_core::{
    EntityDescriptor, EntityValue, HardwareProfile, PolledSnapshot, catalogue, codec,
    plugin::ReadMapping,
};
use tracing::{debug, info, warn};

use crate::client::ChargerApi;
use crate::errors::{SolaxError, SolaxResult};
use crate::types::RealtimeResponse;

/// A catalogue entry bound to the classified hardware, with its read and
/// write mappings resolved once at setup.
#[derive(Debug, Clone)]
pub struct LiveEntity {
    pub descriptor: &'static EntityDescriptor,
    pub mapping: Option<ReadMapping>,
    pub write_register: Option<u16>,
}

/// Coordinates polling, decoding and writes for one charger.
pub struct Coordinator<C: ChargerApi> {
    api: C,
    snapshot: RwLock<Arc<PolledSnapshot>>,
    profile: RwLock<Option<HardwareProfile>>,
}

impl<C: ChargerApi> Coordinator<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            snapshot: RwLock::new(Arc::new(PolledSnapshot::default())),
            profile: RwLock::new(None),
        }
    }

    /// Runs one poll cycle and swaps in the new snapshot.
    ///
    /// The two reads are independent: one failing does not discard the
    /// other. Only when both fail does the cycle error out and the
    /// previous snapshot stay in place.
    pub async fn refresh(&self) -> SolaxResult<()> {
        let realtime = self.api.read_realtime().await;
        let settings = self.api.read_settings().await;

        let (realtime, settings) = match (realtime, settings) {
            (Err(e), Err(other)) => {
                warn!("Both reads failed, keeping previous snapshot: {other}");
                return Err(e);
            }
            (realtime, settings) => (
                realtime.unwrap_or_else(|e| {
                    warn!("Realtime read failed: {e}");
                    RealtimeResponse {
                        data: Vec::new(),
                        information: Vec::new(),
                    }
                }),
                settings.unwrap_or_else(|e| {
                    warn!("Settings read failed: {e}");
                    Vec::new()
                }),
            ),
        };

        let snapshot = Arc::new(PolledSnapshot::new(
            realtime.data,
            settings,
            realtime.information,
        ));

        self.classify_once(&snapshot);
        *self.snapshot.write() = snapshot;
        Ok(())
    }

    /// Classification runs on every cycle until it first succeeds, then
    /// the profile is frozen.
    fn classify_once(&self, snapshot: &PolledSnapshot) {
        let mut profile = self.profile.write();
        if profile.is_some() {
            return;
        }
        let Some(serial) = snapshot.serial_number() else {
            return;
        };
        match HardwareProfile::classify(&serial) {
            Some(p) => {
                info!(
                    serial_number = %serial,
                    model = %p.model(),
                    hw_version = p.hw_version(),
                    "charger classified"
                );
                *profile = Some(p);
            }
            None => warn!(serial_number = %serial, "could not classify charger"),
        }
    }

    /// The latest snapshot. Never blocks on a running poll.
    #[must_use]
    pub fn snapshot(&self) -> Arc<PolledSnapshot> {
        Arc::clone(&self.snapshot.read())
    }

    #[must_use]
    pub fn profile(&self) -> Option<HardwareProfile> {
        self.profile.read().clone()
    }

    /// The catalogue filtered for the classified hardware, with mappings
    /// resolved. Empty while unclassified.
    #[must_use]
    pub fn entities(&self) -> Vec<LiveEntity> {
        let guard = self.profile.read();
        let Some(profile) = guard.as_ref() else {
            return Vec::new();
        };
        let plugin = profile.plugin();
        catalogue::all()
            .filter(|d| profile.supports(d.allowed_types, d.blacklist))
            .map(|descriptor| LiveEntity {
                descriptor,
                mapping: plugin.read_mapping(descriptor.register),
                write_register: plugin.write_register(descriptor.register),
            })
            .collect()
    }

    /// Finds a live entity by its catalogue key.
    #[must_use]
    pub fn entity(&self, key: &str) -> Option<LiveEntity> {
        self.entities().into_iter().find(|e| e.descriptor.key == key)
    }

    /// Decodes an entity against the latest snapshot.
    #[must_use]
    pub fn value(&self, entity: &LiveEntity) -> Option<EntityValue> {
        let mapping = entity.mapping?;
        codec::decode(entity.descriptor, mapping, &self.snapshot())
    }

    /// Writes an entity value to the charger.
    ///
    /// Unless `force` is set, the current device value is re-read first
    /// and an unchanged value skips the write entirely. After a write the
    /// snapshot is refreshed so dependents observe the new state.
    pub async fn write(
        &self,
        entity: &LiveEntity,
        value: &EntityValue,
        force: bool,
    ) -> SolaxResult<()> {
        let plugin = {
            let guard = self.profile.read();
            guard.as_ref().ok_or(SolaxError::Unclassified)?.plugin()
        };

        let writes = codec::encode(plugin, entity.descriptor, value)?;

        if !force {
            self.refresh().await?;
            if self.value(entity).as_ref() == Some(value) {
                debug!(key = entity.descriptor.key, "value unchanged, skipping write");
                return Ok(());
            }
        }

        self.api.write_registers(&writes).await?;

        if !force {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Presses a button entity. Buttons carry no readable state, so the
    /// write is always sent.
    pub async fn press(&self, entity: &LiveEntity) -> SolaxResult<()> {
        self.write(entity, &EntityValue::Number(1.0), true).await
    }
}
