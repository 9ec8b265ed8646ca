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

//! Full poll/classify/decode/write cycle against a mock charger.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use solax_http_client::{Coordinator, SolaxHttpClient};
use solax_http_core::EntityValue;

const SERIAL: &str = "C10701234";

fn realtime_payload() -> String {
    let mut data = vec![0_u32; 90];
    data[5] = 623; // charge current, 6.2 A after rounding
    data[12] = 57; // charge added, 5.7 kWh
    data[26] = 2; // run mode: Charging
    json!({
        "Data": data,
        "Information": [7.0, 1, SERIAL, 1.13],
    })
    .to_string()
}

fn settings_payload() -> String {
    let mut set = vec![0_u32; 20];
    set[1] = 2; // use mode: ECO
    set[19] = 113; // firmware
    json!(set).to_string()
}

async fn mock_reads(server: &mut ServerGuard) {
    server
        .mock("POST", "/")
        .match_body(Matcher::Exact(format!(
            "optType=ReadRealTimeData&pwd={SERIAL}"
        )))
        .with_status(200)
        .with_body(realtime_payload())
        .expect_at_least(1)
        .create_async()
        .await;
    server
        .mock("POST", "/")
        .match_body(Matcher::Exact(format!("optType=ReadSetData&pwd={SERIAL}")))
        .with_status(200)
        .with_body(settings_payload())
        .expect_at_least(1)
        .create_async()
        .await;
}

#[tokio::test]
async fn test_poll_classify_decode_write_cycle() {
    let mut server = Server::new_async().await;
    mock_reads(&mut server).await;

    let write_mock = server
        .mock("POST", "/")
        .match_body(Matcher::Exact(format!(
            "optType=setReg&pwd={SERIAL}&data={{\"num\":1,\"Data\":[{{\"reg\":2,\"val\":\"1\"}}]}}"
        )))
        .with_status(200)
        .with_body("OK")
        .create_async()
        .await;

    let client = SolaxHttpClient::new(server.url(), SERIAL).unwrap();
    let coordinator = Coordinator::new(client);

    coordinator.refresh().await.unwrap();

    let profile = coordinator.profile().unwrap();
    assert_eq!(profile.model(), "X1-EVC-7kW");
    assert_eq!(profile.serial_number(), SERIAL);

    // Decoded telemetry
    let current = coordinator.entity("charge_current").unwrap();
    assert_eq!(coordinator.value(&current), Some(EntityValue::Number(6.2)));

    let added = coordinator.entity("charge_added").unwrap();
    assert_eq!(coordinator.value(&added), Some(EntityValue::Number(5.7)));

    let run_mode = coordinator.entity("run_mode").unwrap();
    assert_eq!(
        coordinator.value(&run_mode),
        Some(EntityValue::Text("Charging".to_owned()))
    );

    let firmware = coordinator.entity("firmwareversion").unwrap();
    assert_eq!(
        coordinator.value(&firmware),
        Some(EntityValue::Text("1.13".to_owned()))
    );

    // The device holds "ECO"; switching to "Fast" goes out as reg 2 = 1
    let use_mode = coordinator.entity("charger_use_mode").unwrap();
    coordinator
        .write(&use_mode, &EntityValue::Text("Fast".to_owned()), false)
        .await
        .unwrap();
    write_mock.assert_async().await;
}

#[tokio::test]
async fn test_unchanged_write_never_reaches_the_device() {
    let mut server = Server::new_async().await;
    mock_reads(&mut server).await;

    let write_mock = server
        .mock("POST", "/")
        .match_body(Matcher::Regex("optType=setReg.*".to_owned()))
        .expect(0)
        .create_async()
        .await;

    let client = SolaxHttpClient::new(server.url(), SERIAL).unwrap();
    let coordinator = Coordinator::new(client);
    coordinator.refresh().await.unwrap();

    let use_mode = coordinator.entity("charger_use_mode").unwrap();
    coordinator
        .write(&use_mode, &EntityValue::Text("ECO".to_owned()), false)
        .await
        .unwrap();
    write_mock.assert_async().await;
}
