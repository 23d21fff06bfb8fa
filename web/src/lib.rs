/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn serve_web(state: Arc<ServerState>) -> anyhow::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);

    let app = Router::new()
        .route(
            "/satellites",
            get(endpoints::satellites::get).post(endpoints::satellites::post),
        )
        .route(
            "/satellites/{satellite}",
            get(endpoints::satellites::get_satellite)
                .put(endpoints::satellites::put_satellite)
                .delete(endpoints::satellites::delete_satellite),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            auth::authorize,
        ))
        .route(
            "/auth/token",
            post(endpoints::auth::post_token).route_layer(middleware::from_fn_with_state(
                Arc::clone(&state),
                auth::authenticate_basic,
            )),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await?;

    Ok(())
}
