/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as orbit_core;
use chrono::NaiveDate;
use orbit_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("a").unwrap_err();
    assert_eq!(port, "`a` is not a port number");
}

#[test]
fn test_parse_date_time() {
    let parsed = parse_date_time("2011-08-17T00:00:00").unwrap();
    let expected = NaiveDate::from_ymd_opt(2011, 8, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(parsed, expected);

    let parsed = parse_date_time("2010-01-01T12:34:56.789").unwrap();
    let expected = NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_milli_opt(12, 34, 56, 789)
        .unwrap();
    assert_eq!(parsed, expected);

    let err = parse_date_time("2011-08-17").unwrap_err();
    assert_eq!(err, "`2011-08-17` is not an ISO-8601 date-time");

    let err = parse_date_time("not a date").unwrap_err();
    assert_eq!(err, "`not a date` is not an ISO-8601 date-time");
}

#[test]
fn test_format_date_time() {
    let date_time = NaiveDate::from_ymd_opt(2011, 8, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(format_date_time(&date_time), "2011-08-17T00:00:00");
}

#[test]
fn test_date_time_round_trip() {
    let raw = "2024-02-29T23:59:59";
    let parsed = parse_date_time(raw).unwrap();
    assert_eq!(format_date_time(&parsed), raw);
}

#[test]
fn test_load_secret() {
    let path = std::env::temp_dir().join("orbit-test-load-secret");
    std::fs::write(&path, "  super-secret \n").unwrap();

    let secret = load_secret(path.to_str().unwrap());
    assert_eq!(secret, "super-secret");

    let missing = load_secret("/nonexistent/orbit-secret");
    assert_eq!(missing, "");
}
