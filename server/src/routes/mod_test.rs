use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt as _;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let response = base_routes()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn full_app() -> Router {
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "find-your-vibe") };
    let config = ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        site_root: Some(PathBuf::from("/nonexistent/find-your-vibe-site")),
    };
    app(&config).unwrap()
}

#[tokio::test]
async fn unknown_path_renders_not_found_page_with_navbar() {
    let response = full_app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Page not found."), "body: {body}");
    assert!(body.contains("navbar"), "body: {body}");
}

#[tokio::test]
async fn known_route_renders_page() {
    let response = full_app()
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Welcome back"), "body: {body}");
}
