/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

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

pub async fn get(config: RequestConfig) -> Result<BaseResponse<Vec<SatelliteResponse>>, String> {
    let res = get_client(config, "satellites".to_string(), RequestType::GET, true)?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn get_satellite(
    config: RequestConfig,
    satellite: i64,
) -> Result<BaseResponse<SatelliteResponse>, String> {
    let res = get_client(
        config,
        format!("satellites/{}", satellite),
        RequestType::GET,
        true,
    )?
    .send()
    .await
    .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn post(
    config: RequestConfig,
    satellite: SatelliteRequest,
) -> Result<BaseResponse<SatelliteResponse>, String> {
    let res = get_client(config, "satellites".to_string(), RequestType::POST, true)?
        .json(&satellite)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn put_satellite(
    config: RequestConfig,
    satellite: i64,
    body: SatelliteRequest,
) -> Result<BaseResponse<SatelliteResponse>, String> {
    let res = get_client(
        config,
        format!("satellites/{}", satellite),
        RequestType::PUT,
        true,
    )?
    .json(&body)
    .send()
    .await
    .map_err(|e| e.to_string())?;

    parse_response(res).await
}

pub async fn delete_satellite(
    config: RequestConfig,
    satellite: i64,
) -> Result<BaseResponse<SatelliteResponse>, String> {
    let res = get_client(
        config,
        format!("satellites/{}", satellite),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await
    .map_err(|e| e.to_string())?;

    parse_response(res).await
}
