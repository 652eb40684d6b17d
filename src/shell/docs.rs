use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::{list_activities, sign_up, unregister};
use crate::shared::http::responses::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mergington High School API",
        description = "API for viewing and signing up for extracurricular activities"
    ),
    paths(
        list_activities::inbound::http::handle,
        sign_up::inbound::http::handle,
        unregister::inbound::http::handle
    ),
    components(schemas(Activity, MessageResponse, ErrorResponse)),
    tags((name = "activities", description = "Activity roster"))
)]
pub struct ApiDoc;

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Mergington High School API - Swagger UI</title>
  <meta charset="utf-8">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;

const REDOC: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Mergington High School API - ReDoc</title>
  <meta charset="utf-8">
</head>
<body>
  <redoc spec-url="/openapi.json"></redoc>
  <script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

pub async fn redoc() -> Html<&'static str> {
    Html(REDOC)
}
