/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use base64::{Engine, engine::general_purpose};
use chrono::{Duration, Utc};
use core::consts::{TOKEN_EXPIRY_SECS, TOKEN_ISSUER};
use core::database::get_user_by_username;
use core::input::load_secret;
use core::types::*;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use password_auth::verify_password;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
    pub scope: String,
}

fn auth_header<'a>(req: &'a Request, scheme: &str) -> WebResult<&'a str> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| WebError::Forbidden("Authorization header not found".to_string()))?
        .to_str()
        .map_err(|_| WebError::invalid_auth_header())?;

    match header.split_once(' ') {
        Some((s, rest)) if s == scheme => Ok(rest.trim()),
        _ => Err(WebError::invalid_auth_header()),
    }
}

/// Bearer guard for the satellite routes. Attaches the token's user as a
/// request extension.
pub async fn authorize(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response<Body>> {
    let token = auth_header(&req, "Bearer")?;

    let token_data = decode_jwt(&state, token)
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

    let current_user = get_user_by_username(&state.db, &token_data.claims.sub)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Basic-credential guard for the token endpoint: the principal must prove
/// itself against the user table before a token is issued.
pub async fn authenticate_basic(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response<Body>> {
    let payload = auth_header(&req, "Basic")?;

    let decoded = general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| WebError::invalid_auth_header())?;
    let decoded = String::from_utf8(decoded).map_err(|_| WebError::invalid_auth_header())?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(WebError::invalid_auth_header)?;

    let user = get_user_by_username(&state.db, username)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: &ServerState, user: &MUser) -> WebResult<String> {
    let now = Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now + Duration::seconds(TOKEN_EXPIRY_SECS)).timestamp() as usize;

    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user.username.clone(),
        iat,
        exp,
        scope: user.scopes.clone(),
    };

    let secret = load_secret(&state.cli.jwt_secret_file);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| WebError::failed_to_generate_token())
}

pub fn decode_jwt(
    state: &ServerState,
    jwt: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    let secret = load_secret(&state.cli.jwt_secret_file);

    let mut validation = Validation::default();
    validation.set_issuer(&[TOKEN_ISSUER]);

    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
}
