//! HTTP routes.

pub mod activities;
pub mod health;

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::logging;
use crate::AppState;

/// Build the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    let assets_dir = state.config.assets.dir.clone();

    Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .merge(activities::router(state))
        .merge(health::router())
        .nest_service("/static", ServeDir::new(assets_dir))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging::request_logger))
}
