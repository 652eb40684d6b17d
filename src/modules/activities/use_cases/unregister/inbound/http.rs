use axum::{
    extract::rejection::QueryRejection,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shared::http::params::{EmailParams, email_param};
use crate::shared::http::responses::{self, ErrorResponse, MessageResponse};
use crate::shell::state::AppState;

// Also routed for POST.
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    operation_id = "unregister_from_activity",
    tag = "activities",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
        EmailParams
    ),
    responses(
        (status = 200, description = "Student unregistered", body = MessageResponse),
        (status = 400, description = "Student is not registered", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing email parameter", body = ErrorResponse)
    )
)]
pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> impl IntoResponse {
    let email = match email_param(params) {
        Ok(email) => email,
        Err(response) => return response,
    };

    let command = Unregister {
        activity_name,
        email,
    };
    let confirmation = command.confirmation();

    match state.unregister_handler.handle(command).await {
        Ok(()) => responses::message(confirmation),
        Err(e) => responses::application_error(e),
    }
}
