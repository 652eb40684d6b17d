use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::tests::fixtures::http::{body_json, body_text, make_app, make_test_state};

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_lowercase()
}

#[fixture]
fn app() -> Router {
    make_app(make_test_state())
}

#[rstest]
#[tokio::test]
async fn it_should_redirect_the_root_to_the_front_end(app: Router) {
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, "/static/index.html");

    let followed = get(&app, location.to_str().unwrap()).await;
    assert_eq!(followed.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_html_page(app: Router) {
    let response = get(&app, "/static/index.html").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).contains("text/html"));
    let content = body_text(response).await;
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("<title>Mergington High School Activities</title>"));
    assert!(content.contains("activities-list"));
    assert!(content.contains("signup-form"));
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_stylesheet(app: Router) {
    let response = get(&app, "/static/styles.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).contains("text/css"));
    let content = body_text(response).await;
    assert!(content.contains("body"));
    assert!(content.contains("activity-card"));
    assert!(content.contains("participants-list"));
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_script(app: Router) {
    let response = get(&app, "/static/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).contains("javascript"));
    let content = body_text(response).await;
    assert!(content.contains("DOMContentLoaded"));
    assert!(content.contains("fetchActivities"));
    assert!(content.contains("unregisterParticipant"));
}

#[rstest]
#[case("/static/nonexistent.txt")]
#[case("/does-not-exist")]
#[tokio::test]
async fn it_should_return_404_for_unknown_paths(app: Router, #[case] uri: &str) {
    assert_eq!(get(&app, uri).await.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_openapi_document(app: Router) {
    let response = get(&app, "/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.get("openapi").is_some());
    assert_eq!(json["info"]["title"], "Mergington High School API");
    let paths = json["paths"].as_object().unwrap();
    assert!(paths.contains_key("/activities"));
    assert!(paths.contains_key("/activities/{activity_name}/signup"));
    assert!(paths.contains_key("/activities/{activity_name}/unregister"));
}

#[rstest]
#[case("/docs", "swagger-ui")]
#[case("/redoc", "redoc")]
#[tokio::test]
async fn it_should_serve_the_documentation_pages(
    app: Router,
    #[case] uri: &str,
    #[case] marker: &str,
) {
    let response = get(&app, uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).contains("text/html"));
    assert!(body_text(response).await.to_lowercase().contains(marker));
}

#[rstest]
#[tokio::test]
async fn it_should_serve_graphiql(app: Router) {
    let response = get(&app, "/gql").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).contains("text/html"));
}
