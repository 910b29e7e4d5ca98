// User lookup endpoints

use crate::core::error::{ServiceError, JSON_UTF8};
use crate::core::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Fetch a single user by numeric ID
///
/// GET /user/{id}
///
/// The ID is the last `/`-separated segment of the path. A segment that is
/// not a number (including an empty one) is looked up as ID 0.
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, ServiceError> {
    let segment = last_segment(uri.path());
    let id = parse_user_id(segment);
    let store = state.users.current();

    match store.by_id(id) {
        Some(user) => {
            debug!(user_id = id, username = %user.username, "User found");
            json_ok(user.as_ref())
        }
        None => {
            debug!(user_id = id, segment = %segment, "User not found");
            Err(ServiceError::NotFound)
        }
    }
}

/// Fetch every user in the store
///
/// GET /users
pub async fn get_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServiceError> {
    let users = state.users.current().all();
    debug!(count = users.len(), "Listing users");

    json_ok(&users)
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn parse_user_id(segment: &str) -> i64 {
    segment.parse().unwrap_or(0)
}

fn json_ok<T: Serialize + ?Sized>(value: &T) -> Result<Response, ServiceError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| ServiceError::InternalError(e.to_string()))?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, JSON_UTF8)], body).into_response())
}
