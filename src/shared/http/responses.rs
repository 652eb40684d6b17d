use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::activities::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn message(message: String) -> Response {
    (StatusCode::OK, Json(MessageResponse { message })).into_response()
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn application_error(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    detail(status, error.public_message())
}
