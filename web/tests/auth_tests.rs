/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for token issuance and validation

mod common;

use common::{create_mock_state, create_mock_user};
use core::consts::{TOKEN_EXPIRY_SECS, TOKEN_ISSUER};
use web::auth::{Claims, decode_jwt, encode_jwt};

#[test]
fn test_token_round_trip() {
    let state = create_mock_state();
    let user = create_mock_user();

    let token = encode_jwt(&state, &user).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let decoded = decode_jwt(&state, &token).unwrap();
    assert_eq!(decoded.claims.iss, TOKEN_ISSUER);
    assert_eq!(decoded.claims.sub, "ground-control");
    assert_eq!(decoded.claims.scope, "satellites:read satellites:write");
    assert_eq!(
        decoded.claims.exp - decoded.claims.iat,
        TOKEN_EXPIRY_SECS as usize
    );
}

#[test]
fn test_decode_rejects_garbage() {
    let state = create_mock_state();

    assert!(decode_jwt(&state, "not.a.token").is_err());
    assert!(decode_jwt(&state, "").is_err());
}

#[test]
fn test_decode_rejects_foreign_signature() {
    let state = create_mock_state();
    let user = create_mock_user();

    let claims = Claims {
        iss: TOKEN_ISSUER.to_string(),
        sub: user.username,
        iat: 0,
        exp: usize::MAX,
        scope: user.scopes,
    };

    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    assert!(decode_jwt(&state, &forged).is_err());
}

#[test]
fn test_claims_serialization() {
    let claims = Claims {
        iss: "self".to_string(),
        sub: "ground-control".to_string(),
        iat: 1700000000,
        exp: 1700003600,
        scope: "satellites:read".to_string(),
    };

    let json = serde_json::to_string(&claims).unwrap();
    assert!(json.contains("\"iss\":\"self\""));
    assert!(json.contains("\"sub\":\"ground-control\""));
    assert!(json.contains("\"scope\":\"satellites:read\""));
}
