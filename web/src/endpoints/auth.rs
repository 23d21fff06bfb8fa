/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::State;
use axum::{Extension, Json};
use core::types::*;
use std::sync::Arc;

use crate::auth::encode_jwt;
use crate::error::WebResult;

/// Issues a bearer token for the Basic-authenticated principal. No refresh,
/// no revocation; each call mints an independent token.
pub async fn post_token(
    State(state): State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<String>>> {
    let token = encode_jwt(&state, &user)?;

    let res = BaseResponse {
        error: false,
        message: token,
    };

    Ok(Json(res))
}
