use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::activities::core::activity::Activity;
use crate::shared::http::responses;
use crate::shell::state::AppState;

#[utoipa::path(
    get,
    path = "/activities",
    operation_id = "get_activities",
    tag = "activities",
    responses(
        (status = 200, description = "All activities keyed by name", body = std::collections::BTreeMap<String, Activity>)
    )
)]
pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list activities");
            responses::detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
