/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the satellite wire format and entity-to-response mapping

use chrono::NaiveDate;
use entity::{processor, satellite};
use web::endpoints::satellites::{
    ProcessorRequest, SatelliteRequest, SatelliteResponse, satellite_to_response,
};

fn example_request() -> SatelliteRequest {
    SatelliteRequest {
        name: "Sich-2".to_string(),
        country: "UA".to_string(),
        launch_date: "2011-08-17T00:00:00".to_string(),
        purpose: "Earth observation".to_string(),
        weight: 176.0,
        height: 1.0,
        is_geostationary: false,
        processor: ProcessorRequest {
            name: "X1".to_string(),
            manufacturer: "Y".to_string(),
            cores: 2,
            frequency: 1.2,
            socket: "S1".to_string(),
            production_date: "2010-01-01T00:00:00".to_string(),
            mmx_support: true,
        },
    }
}

#[test]
fn test_request_uses_camel_case_keys() {
    let json = serde_json::to_string(&example_request()).unwrap();

    assert!(json.contains("\"launchDate\":\"2011-08-17T00:00:00\""));
    assert!(json.contains("\"isGeostationary\":false"));
    assert!(json.contains("\"productionDate\":\"2010-01-01T00:00:00\""));
    assert!(json.contains("\"mmxSupport\":true"));
    assert!(!json.contains("launch_date"));
}

#[test]
fn test_request_deserialization() {
    let raw = r#"{
        "name": "Sich-2",
        "country": "UA",
        "launchDate": "2011-08-17T00:00:00",
        "purpose": "Earth observation",
        "weight": 176.0,
        "height": 1.0,
        "isGeostationary": false,
        "processor": {
            "name": "X1",
            "manufacturer": "Y",
            "cores": 2,
            "frequency": 1.2,
            "socket": "S1",
            "productionDate": "2010-01-01T00:00:00",
            "mmxSupport": true
        }
    }"#;

    let request: SatelliteRequest = serde_json::from_str(raw).unwrap();

    assert_eq!(request.name, "Sich-2");
    assert_eq!(request.country, "UA");
    assert_eq!(request.launch_date, "2011-08-17T00:00:00");
    assert_eq!(request.weight, 176.0);
    assert!(!request.is_geostationary);
    assert_eq!(request.processor.cores, 2);
    assert_eq!(request.processor.frequency, 1.2);
    assert!(request.processor.mmx_support);
}

#[test]
fn test_satellite_to_response_mapping() {
    let launch_date = NaiveDate::from_ymd_opt(2011, 8, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let production_date = NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let satellite = satellite::Model {
        id: 3,
        name: "Sich-2".to_string(),
        country: "UA".to_string(),
        launch_date,
        purpose: "Earth observation".to_string(),
        weight: 176.0,
        height: 1.0,
        geostationary: false,
        processor: 9,
    };

    let processor = processor::Model {
        id: 9,
        name: "X1".to_string(),
        manufacturer: "Y".to_string(),
        cores: 2,
        frequency: 1.2,
        socket: "S1".to_string(),
        production_date,
        mmx_support: true,
    };

    let response = satellite_to_response(&satellite, &processor);

    assert_eq!(response.id, 3);
    assert_eq!(response.name, "Sich-2");
    assert_eq!(response.launch_date, "2011-08-17T00:00:00");
    assert!(!response.is_geostationary);
    assert_eq!(response.processor.id, 9);
    assert_eq!(response.processor.production_date, "2010-01-01T00:00:00");
    assert!(response.processor.mmx_support);
}

#[test]
fn test_response_round_trip() {
    let raw = r#"{
        "id": 1,
        "name": "Sich-2",
        "country": "UA",
        "launchDate": "2011-08-17T00:00:00",
        "purpose": "Earth observation",
        "weight": 176.0,
        "height": 1.0,
        "isGeostationary": false,
        "processor": {
            "id": 2,
            "name": "X1",
            "manufacturer": "Y",
            "cores": 2,
            "frequency": 1.2,
            "socket": "S1",
            "productionDate": "2010-01-01T00:00:00",
            "mmxSupport": true
        }
    }"#;

    let response: SatelliteResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.id, 1);
    assert_eq!(response.processor.id, 2);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"launchDate\":\"2011-08-17T00:00:00\""));
    assert!(json.contains("\"mmxSupport\":true"));
}
