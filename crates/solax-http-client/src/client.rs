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

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use solax_http_core::RegisterWrite;
use tracing::{debug, error, warn};

use crate::errors::{SolaxError, SolaxResult};
use crate::types::{REFUSED_MARKER, RealtimeResponse, realtime_body, settings_body, write_body};

/// The device-facing API, separated from the transport so the coordinator
/// can be exercised without a charger on the network.
#[async_trait]
pub trait ChargerApi: Send + Sync {
    async fn read_realtime(&self) -> SolaxResult<RealtimeResponse>;
    async fn read_settings(&self) -> SolaxResult<Vec<u16>>;
    async fn write_registers(&self, writes: &[RegisterWrite]) -> SolaxResult<()>;
}

/// Local HTTP API client of a single charger.
///
/// Every call is a POST to the device root; the serial number doubles as
/// the API password.
#[derive(Clone)]
pub struct SolaxHttpClient {
    endpoint: String,
    serial_number: String,
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl SolaxHttpClient {
    pub fn new(host: impl Into<String>, serial_number: impl Into<String>) -> SolaxResult<Self> {
        let host = host.into();
        let endpoint = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SolaxError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint,
            serial_number: serial_number.into(),
            client,
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
        })
    }

    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// POSTs a form-style body and returns the response text.
    async fn post(&self, body: String) -> SolaxResult<String> {
        let response = self
            .retry_request(|| async {
                self.client
                    .post(&self.endpoint)
                    .body(body.clone())
                    .send()
                    .await
            })
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Charger answered with status {status}");
            return Err(SolaxError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        if text.contains(REFUSED_MARKER) {
            error!("Charger refused the request: {text}");
            return Err(SolaxError::DeviceRefused(text));
        }
        debug!("Charger response: {text}");
        Ok(text)
    }

    async fn retry_request<F, Fut>(&self, mut request_fn: F) -> SolaxResult<reqwest::Response>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay;

        loop {
            attempts += 1;
            match request_fn().await {
                Ok(response) => return Ok(response),
                Err(e) if attempts >= self.max_retries => {
                    error!("Request failed after {} attempts: {}", attempts, e);
                    return Err(SolaxError::Http(e));
                }
                Err(e) => {
                    warn!(
                        "Request failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempts, self.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2; // Exponential backoff
                }
            }
        }
    }
}

#[async_trait]
impl ChargerApi for SolaxHttpClient {
    async fn read_realtime(&self) -> SolaxResult<RealtimeResponse> {
        let text = self.post(realtime_body(&self.serial_number)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn read_settings(&self) -> SolaxResult<Vec<u16>> {
        let text = self.post(settings_body(&self.serial_number)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn write_registers(&self, writes: &[RegisterWrite]) -> SolaxResult<()> {
        let body = write_body(&self.serial_number, writes);
        debug!("Writing registers: {body}");
        self.post(body).await?;
        Ok(())
    }
}
