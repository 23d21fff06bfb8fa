/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the satellite/processor aggregate entities

use chrono::NaiveDate;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

fn launch_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2011, 8, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn production_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2010, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_satellite_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![satellite::Model {
            id: 1,
            name: "Sich-2".to_owned(),
            country: "UA".to_owned(),
            launch_date: launch_date(),
            purpose: "Earth observation".to_owned(),
            weight: 176.0,
            height: 1.0,
            geostationary: false,
            processor: 7,
        }]])
        .into_connection();

    let result = satellite::Entity::find_by_id(1).one(&db).await?;

    assert!(result.is_some());
    let satellite = result.unwrap();
    assert_eq!(satellite.name, "Sich-2");
    assert_eq!(satellite.country, "UA");
    assert_eq!(satellite.launch_date, launch_date());
    assert!(!satellite.geostationary);
    assert_eq!(satellite.processor, 7);

    Ok(())
}

#[tokio::test]
async fn test_processor_entity_basic() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![processor::Model {
            id: 7,
            name: "X1".to_owned(),
            manufacturer: "Y".to_owned(),
            cores: 2,
            frequency: 1.2,
            socket: "S1".to_owned(),
            production_date: production_date(),
            mmx_support: true,
        }]])
        .into_connection();

    let result = processor::Entity::find_by_id(7).one(&db).await?;

    assert!(result.is_some());
    let processor = result.unwrap();
    assert_eq!(processor.name, "X1");
    assert_eq!(processor.cores, 2);
    assert_eq!(processor.production_date, production_date());
    assert!(processor.mmx_support);

    Ok(())
}

#[tokio::test]
async fn test_satellite_not_found() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<satellite::Model>::new()])
        .into_connection();

    let result = satellite::Entity::find_by_id(42).one(&db).await?;

    assert!(result.is_none());

    Ok(())
}
