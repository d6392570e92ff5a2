use axum::body::Body;
use axum::http::{Request, StatusCode};
use ecclesia::router::init_router;
use ecclesia::state::AppState;
use ecclesia_auth::create_access_token;
use ecclesia_config::{CorsConfig, JwtConfig};
use ecclesia_models::{Role, default_permissions_for};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::with_secret(TEST_SECRET),
        cors_config: CorsConfig::from_list("http://localhost:5173"),
    }
}

pub fn setup_test_app() -> axum::Router {
    init_router(test_state())
}

/// Mint a token the way the identity provider would.
pub fn token_for(role: &str, permissions: Vec<String>) -> String {
    let email: String = SafeEmail().fake();
    create_access_token(
        Uuid::new_v4(),
        &email,
        role,
        permissions,
        &test_state().jwt_config,
    )
    .unwrap()
}

/// Token carrying the role's default grants
#[allow(dead_code)]
pub fn token_with_defaults(role: Role) -> String {
    token_for(role.as_str(), default_permissions_for(role))
}

#[allow(dead_code)]
pub async fn get(
    app: axum::Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    send(
        app,
        builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
    )
    .await
}

pub async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "Response is not JSON. Status: {}, Body: {:?}",
                status,
                String::from_utf8_lossy(&body)
            )
        })
    };
    (status, json)
}
