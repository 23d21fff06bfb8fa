/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;

/// Trades Basic credentials for a bearer token. The token is the response
/// message; persisting it is the caller's concern.
pub async fn post_token(
    config: RequestConfig,
    username: String,
    password: String,
) -> Result<BaseResponse<String>, String> {
    let res = get_client(config, "auth/token".to_string(), RequestType::POST, false)?
        .basic_auth(username, Some(password))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    parse_response(res).await
}
