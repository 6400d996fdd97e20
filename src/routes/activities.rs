//! Activity listing, signup and unregister endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::Activity;
use crate::AppState;

/// Query parameters shared by signup and unregister.
#[derive(Debug, Deserialize)]
struct ParticipantQuery {
    email: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// GET /activities - the full activity table.
async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.all().await)
}

/// POST /activities/:activity_name/signup - sign a student up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>> {
    state.registry.signup(&activity_name, &query.email).await?;

    tracing::info!(activity = %activity_name, email = %query.email, "signed up participant");

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// DELETE /activities/:activity_name/signup - remove a student from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<MessageResponse>> {
    state
        .registry
        .unregister(&activity_name, &query.email)
        .await?;

    tracing::info!(activity = %activity_name, email = %query.email, "unregistered participant");

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(signup).delete(unregister),
        )
        .with_state(state)
}
