/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Path, State};
use axum::{Extension, Json};
use core::database::get_satellite_by_id;
use core::input::{format_date_time, parse_date_time};
use core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorRequest {
    pub name: String,
    pub manufacturer: String,
    pub cores: i32,
    pub frequency: f64,
    pub socket: String,
    pub production_date: String,
    pub mmx_support: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteRequest {
    pub name: String,
    pub country: String,
    pub launch_date: String,
    pub purpose: String,
    pub weight: f64,
    pub height: f64,
    pub is_geostationary: bool,
    pub processor: ProcessorRequest,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorResponse {
    pub id: i64,
    pub name: String,
    pub manufacturer: String,
    pub cores: i32,
    pub frequency: f64,
    pub socket: String,
    pub production_date: String,
    pub mmx_support: bool,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteResponse {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub launch_date: String,
    pub purpose: String,
    pub weight: f64,
    pub height: f64,
    pub is_geostationary: bool,
    pub processor: ProcessorResponse,
}

pub fn satellite_to_response(satellite: &MSatellite, processor: &MProcessor) -> SatelliteResponse {
    SatelliteResponse {
        id: satellite.id,
        name: satellite.name.clone(),
        country: satellite.country.clone(),
        launch_date: format_date_time(&satellite.launch_date),
        purpose: satellite.purpose.clone(),
        weight: satellite.weight,
        height: satellite.height,
        is_geostationary: satellite.geostationary,
        processor: ProcessorResponse {
            id: processor.id,
            name: processor.name.clone(),
            manufacturer: processor.manufacturer.clone(),
            cores: processor.cores,
            frequency: processor.frequency,
            socket: processor.socket.clone(),
            production_date: format_date_time(&processor.production_date),
            mmx_support: processor.mmx_support,
        },
    }
}

pub async fn get(
    State(state): State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<SatelliteResponse>>>> {
    let satellites = ESatellite::find().all(&state.db).await?;

    let mut responses = Vec::with_capacity(satellites.len());

    for satellite in satellites {
        let processor = EProcessor::find_by_id(satellite.processor)
            .one(&state.db)
            .await?
            .ok_or_else(|| {
                WebError::InternalServerError(format!(
                    "Satellite {} has no processor row",
                    satellite.id
                ))
            })?;

        responses.push(satellite_to_response(&satellite, &processor));
    }

    let res = BaseResponse {
        error: false,
        message: responses,
    };

    Ok(Json(res))
}

pub async fn get_satellite(
    State(state): State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(satellite): Path<i64>,
) -> WebResult<Json<BaseResponse<SatelliteResponse>>> {
    let (satellite, processor) = get_satellite_by_id(&state.db, satellite)
        .await?
        .ok_or_else(|| WebError::not_found("Satellite"))?;

    let res = BaseResponse {
        error: false,
        message: satellite_to_response(&satellite, &processor),
    };

    Ok(Json(res))
}

// Every call inserts a fresh row pair; there is no duplicate detection.
pub async fn post(
    State(state): State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Json(body): Json<SatelliteRequest>,
) -> WebResult<Json<BaseResponse<SatelliteResponse>>> {
    let launch_date = parse_date_time(&body.launch_date).map_err(WebError::BadRequest)?;
    let production_date =
        parse_date_time(&body.processor.production_date).map_err(WebError::BadRequest)?;

    let txn = state.db.begin().await?;

    let processor = AProcessor {
        name: Set(body.processor.name.clone()),
        manufacturer: Set(body.processor.manufacturer.clone()),
        cores: Set(body.processor.cores),
        frequency: Set(body.processor.frequency),
        socket: Set(body.processor.socket.clone()),
        production_date: Set(production_date),
        mmx_support: Set(body.processor.mmx_support),
        ..Default::default()
    };

    let processor = processor.insert(&txn).await?;

    let satellite = ASatellite {
        name: Set(body.name.clone()),
        country: Set(body.country.clone()),
        launch_date: Set(launch_date),
        purpose: Set(body.purpose.clone()),
        weight: Set(body.weight),
        height: Set(body.height),
        geostationary: Set(body.is_geostationary),
        processor: Set(processor.id),
        ..Default::default()
    };

    let satellite = satellite.insert(&txn).await?;

    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: satellite_to_response(&satellite, &processor),
    };

    Ok(Json(res))
}

// Full-replace semantics: every scalar field on both rows is overwritten,
// whether or not it changed.
pub async fn put_satellite(
    State(state): State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(satellite): Path<i64>,
    Json(body): Json<SatelliteRequest>,
) -> WebResult<Json<BaseResponse<SatelliteResponse>>> {
    let (satellite, processor) = get_satellite_by_id(&state.db, satellite)
        .await?
        .ok_or_else(|| WebError::not_found("Satellite"))?;

    let launch_date = parse_date_time(&body.launch_date).map_err(WebError::BadRequest)?;
    let production_date =
        parse_date_time(&body.processor.production_date).map_err(WebError::BadRequest)?;

    let mut asatellite: ASatellite = satellite.into();
    asatellite.name = Set(body.name.clone());
    asatellite.country = Set(body.country.clone());
    asatellite.launch_date = Set(launch_date);
    asatellite.purpose = Set(body.purpose.clone());
    asatellite.weight = Set(body.weight);
    asatellite.height = Set(body.height);
    asatellite.geostationary = Set(body.is_geostationary);

    let mut aprocessor: AProcessor = processor.into();
    aprocessor.name = Set(body.processor.name.clone());
    aprocessor.manufacturer = Set(body.processor.manufacturer.clone());
    aprocessor.cores = Set(body.processor.cores);
    aprocessor.frequency = Set(body.processor.frequency);
    aprocessor.socket = Set(body.processor.socket.clone());
    aprocessor.production_date = Set(production_date);
    aprocessor.mmx_support = Set(body.processor.mmx_support);

    let txn = state.db.begin().await?;
    let satellite = asatellite.update(&txn).await?;
    let processor = aprocessor.update(&txn).await?;
    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: satellite_to_response(&satellite, &processor),
    };

    Ok(Json(res))
}

// Returns the pre-deletion snapshot. The satellite row goes first so the
// processor row is never left referenced.
pub async fn delete_satellite(
    State(state): State<Arc<ServerState>>,
    Extension(_user): Extension<MUser>,
    Path(satellite): Path<i64>,
) -> WebResult<Json<BaseResponse<SatelliteResponse>>> {
    let (satellite, processor) = get_satellite_by_id(&state.db, satellite)
        .await?
        .ok_or_else(|| WebError::not_found("Satellite"))?;

    let snapshot = satellite_to_response(&satellite, &processor);

    let txn = state.db.begin().await?;
    let asatellite: ASatellite = satellite.into();
    asatellite.delete(&txn).await?;
    let aprocessor: AProcessor = processor.into();
    aprocessor.delete(&txn).await?;
    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: snapshot,
    };

    Ok(Json(res))
}
