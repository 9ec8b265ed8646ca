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

mod config;

use std::time::Duration;

use anyhow::Result;
use solax_http_client::{Coordinator, SolaxHttpClient};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Handle command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("SolaX HTTP Bridge - local EV charger polling daemon");
                println!("Version: {VERSION}");
                println!();
                println!("Usage: solax-http-bridge [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help    Print this help message");
                println!("  -v, --version Print version");
                return Ok(());
            }
            "--version" | "-v" => {
                println!("{VERSION}");
                return Ok(());
            }
            _ => {}
        }
    }

    let config = config::AppConfig::load()?;

    // Initialize tracing with env filter support
    // Respects RUST_LOG environment variable
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.system.log_level.clone())
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SolaX HTTP Bridge v{VERSION}");
    info!("   Charger host: {}", config.device.host);
    info!("   Poll interval: {}s", config.device.scan_interval_secs);

    let client = SolaxHttpClient::new(
        config.device.host.clone(),
        config.device.serial_number.clone(),
    )?;
    let coordinator = Coordinator::new(client);

    let mut interval = tokio::time::interval(Duration::from_secs(config.device.scan_interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut announced = false;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = coordinator.refresh().await {
                    warn!("Poll cycle failed: {e}");
                    continue;
                }
                if !announced {
                    if let Some(profile) = coordinator.profile() {
                        info!(
                            "Connected to {} ({}, S/N {})",
                            profile.model(),
                            profile.hw_version(),
                            profile.serial_number()
                        );
                        announced = true;
                    }
                }
                log_values(&coordinator);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Logs the decoded value of every default-enabled entity.
fn log_values(coordinator: &Coordinator<SolaxHttpClient>) {
    for entity in coordinator.entities() {
        if !entity.descriptor.enabled_default {
            continue;
        }
        let Some(value) = coordinator.value(&entity) else {
            continue;
        };
        match entity.descriptor.unit_of_measurement {
            Some(unit) => info!("   {} = {value} {unit}", entity.descriptor.name),
            None => info!("   {} = {value}", entity.descriptor.name),
        }
    }
}
