use axum::{extract::Query, extract::rejection::QueryRejection, http::StatusCode, response::Response};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::http::responses::detail;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailParams {
    /// Student email address.
    pub email: String,
}

/// A missing or unparseable `email` query is a 422, matching the JSON body rejections.
pub fn email_param(params: Result<Query<EmailParams>, QueryRejection>) -> Result<String, Response> {
    match params {
        Ok(Query(params)) => Ok(params.email),
        Err(rejection) => Err(detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            rejection.body_text(),
        )),
    }
}
