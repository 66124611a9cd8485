//! Administrative control of the university-wide feedback window.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use campus_api_types::{GlobalFeedbackStatus, SetGlobalFeedbackRequest, SetGlobalFeedbackResponse};
use campus_core::domain::{Announcement, EndDateInput};
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use super::error::ApiError;
use super::state::AppState;

pub fn create_admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/feedback/admin/status", get(get_global_status))
        .route("/api/feedback/admin/set", post(set_global_status))
}

/// Current state of the feedback window, creating a closed one on first read.
async fn get_global_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GlobalFeedbackStatus>, ApiError> {
    let window = state
        .feedback_config
        .get_or_create()
        .await
        .map_err(ApiError::internal("Failed to get feedback status"))?;

    Ok(Json(GlobalFeedbackStatus {
        is_active: window.is_active,
        end_date: window.end_date,
    }))
}

/// Opens or closes feedback collection. An accepted toggle posts an
/// announcement first and then stores the new window.
async fn set_global_status(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SetGlobalFeedbackRequest>, JsonRejection>,
) -> Result<Json<SetGlobalFeedbackResponse>, ApiError> {
    const FAILURE: &str = "Failed to update feedback status";

    let Json(request) = payload.map_err(|rejection| {
        ApiError::bad_request("Invalid request: active must be a boolean")
            .with_details(rejection.body_text())
    })?;

    let now = Utc::now();
    let current = state
        .feedback_config
        .get_or_create()
        .await
        .map_err(ApiError::internal(FAILURE))?;
    let end_date = request.end_date.and_then(end_date_input);
    let next = current.toggle(request.active, end_date.as_ref(), now)?;

    let announcement = Announcement::feedback_toggled(&next, &state.announcement_poster, now);
    state
        .announcements
        .create(&announcement)
        .await
        .map_err(ApiError::internal(FAILURE))?;

    let saved = state
        .feedback_config
        .save(next)
        .await
        .map_err(ApiError::internal(FAILURE))?;

    info!(
        is_active = saved.is_active,
        end_date = ?saved.end_date,
        announcement_id = %announcement.id,
        "feedback window updated"
    );

    Ok(Json(SetGlobalFeedbackResponse {
        message: "Feedback status updated".to_string(),
        is_active: saved.is_active,
        end_date: saved.end_date,
    }))
}

/// `null` counts as absent. Only strings and integral numbers can name a
/// date; anything else fails validation when the window is being opened.
fn end_date_input(value: Value) -> Option<EndDateInput> {
    match value {
        Value::Null => None,
        Value::String(raw) => Some(EndDateInput::Text(raw)),
        Value::Number(number) => Some(match number.as_i64() {
            Some(millis) => EndDateInput::EpochMillis(millis),
            None => EndDateInput::Unsupported(number.to_string()),
        }),
        other => Some(EndDateInput::Unsupported(other.to_string())),
    }
}
