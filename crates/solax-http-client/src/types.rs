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

//! Wire types of the charger's local HTTP API.

use serde::Deserialize;
use serde_json::{Value, json};
use solax_http_core::RegisterWrite;

/// Response to `ReadRealTimeData`. The settings read returns a bare word
/// array instead and needs no dedicated type.
#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeResponse {
    #[serde(rename = "Data", default)]
    pub data: Vec<u16>,
    /// Mixed strings and numbers; the serial number sits at index 2.
    #[serde(rename = "Information", default)]
    pub information: Vec<Value>,
}

/// Marker substring the device answers with when it rejects a request.
pub(crate) const REFUSED_MARKER: &str = "failed";

pub(crate) fn realtime_body(serial_number: &str) -> String {
    format!("optType=ReadRealTimeData&pwd={serial_number}")
}

pub(crate) fn settings_body(serial_number: &str) -> String {
    format!("optType=ReadSetData&pwd={serial_number}")
}

pub(crate) fn write_body(serial_number: &str, writes: &[RegisterWrite]) -> String {
    let data: Vec<Value> = writes
        .iter()
        .map(|w| json!({ "reg": w.reg, "val": w.val }))
        .collect();
    format!(
        "optType=setReg&pwd={serial_number}&data={{\"num\":{},\"Data\":{}}}",
        writes.len(),
        Value::Array(data)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_response_with_mixed_information() {
        let raw = r#"{"Data":[2,0,2305],"Information":[7.0,1,"C10701234",1.13]}"#;
        let resp: RealtimeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data, vec![2, 0, 2305]);
        assert_eq!(resp.information[2], json!("C10701234"));
    }

    #[test]
    fn test_write_body_shape() {
        let writes = vec![RegisterWrite {
            reg: 2,
            val: "1".to_owned(),
        }];
        assert_eq!(
            write_body("C10701234", &writes),
            r#"optType=setReg&pwd=C10701234&data={"num":1,"Data":[{"reg":2,"val":"1"}]}"#
        );
    }

    #[test]
    fn test_read_bodies() {
        assert_eq!(
            realtime_body("C10701234"),
            "optType=ReadRealTimeData&pwd=C10701234"
        );
        assert_eq!(settings_body("C10701234"), "optType=ReadSetData&pwd=C10701234");
    }
}
