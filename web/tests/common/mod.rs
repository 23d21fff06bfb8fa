/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    let secret_path = std::env::temp_dir().join("orbit-test-jwt-secret");
    std::fs::write(&secret_path, "test-jwt-secret").unwrap();

    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: secret_path.to_string_lossy().into_owned(),
        default_user: None,
        default_password_file: None,
        default_scopes: "satellites:read satellites:write".to_string(),
    }
}

pub fn create_mock_state() -> Arc<ServerState> {
    let cli = create_mock_cli();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    Arc::new(ServerState { db, cli })
}

pub fn create_mock_user() -> MUser {
    MUser {
        id: 1,
        username: "ground-control".to_string(),
        password: "hashed".to_string(),
        scopes: "satellites:read satellites:write".to_string(),
        created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
    }
}
