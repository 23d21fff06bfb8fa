/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod satellites;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type RequestType = reqwest::Method;

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> Result<BaseResponse<T>, String> {
    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    match serde_json::from_slice::<BaseResponse<T>>(&bytes) {
        Ok(parsed_res) => Ok(parsed_res),
        Err(_) => match serde_json::from_slice::<BaseResponse<String>>(&bytes) {
            Ok(error_res) => Err(error_res.message),
            Err(_) => Err(String::from_utf8_lossy(&bytes).to_string()),
        },
    }
}

fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
    login: bool,
) -> Result<reqwest::RequestBuilder, String> {
    let client = reqwest::Client::new();
    let mut client = client.request(request_type, format!("{}/{}", config.server_url, endpoint));

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let token = if let Some(token) = config.token {
        token
    } else {
        return Err("Token not set. Use `orbit login` to set it.".to_string());
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

pub async fn health(config: RequestConfig) -> Result<BaseResponse<String>, String> {
    let res = get_client(config, "health".to_string(), RequestType::GET, false)?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}
