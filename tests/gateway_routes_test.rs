//! # 网关路由集成测试
//!
//! 通过 `oneshot` 直接驱动 Axum 路由器

mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use common::{BUCKET, InMemoryStore, SECRET, object, store_arc, test_config};
use jsonwebtoken::{EncodingKey, Header, encode};
use media_gateway::gateway::{AppState, GatewayServer};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

const ARN: &str = "arn:aws:execute-api:eu-central-1:123456789012:abc123/prod/GET/media";

fn router(store: InMemoryStore) -> (Arc<InMemoryStore>, Router) {
    let (store, dyn_store) = store_arc(store);
    let state = AppState::new(Arc::new(test_config()), dyn_store).unwrap();
    (store, GatewayServer::create_router(state))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let cors = response
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cors, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (_, router) = router(InMemoryStore::default());

    let (status, _, body) = send(router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_authorize_allows_signed_token() {
    let (_, router) = router(InMemoryStore::default());
    let token = encode(
        &Header::default(),
        &json!({ "sub": "viewer" }),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let (status, _, body) = send(
        router,
        post_json(
            "/authorize",
            &json!({
                "type": "TOKEN",
                "authorizationToken": format!("Bearer {token}"),
                "methodArn": ARN
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["principalId"], "user");
    assert_eq!(body["policyDocument"]["Statement"][0]["Effect"], "allow");
    assert_eq!(body["policyDocument"]["Statement"][0]["Resource"], ARN);
}

#[tokio::test]
async fn test_authorize_rejects_without_policy() {
    let (_, router) = router(InMemoryStore::default());

    let (status, _, body) = send(
        router,
        post_json(
            "/authorize",
            &json!({ "authorizationToken": "Bearer forged", "methodArn": ARN }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Unauthorized" }));
}

#[tokio::test]
async fn test_media_listing_route() {
    let (_, router) = router(InMemoryStore::with_pages(vec![vec![
        object("clip-720p.mp4", Some("\"e1\""), 3),
        object("clip-1080p.mp4", Some("\"e2\""), 4),
    ]]));

    let (status, cors, body) = send(router, get("/media?encoding=720p")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cors.as_deref(), Some("*"));
    assert_eq!(body["bucket"], BUCKET);
    assert_eq!(
        body["files"],
        json!([{ "filename": "clip-720p.mp4", "eTag": "e1", "size": 3 }])
    );
}

#[tokio::test]
async fn test_media_listing_route_not_found() {
    let (_, router) = router(InMemoryStore::with_pages(vec![]));

    let (status, cors, body) = send(router, get("/media")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(cors.as_deref(), Some("*"));
    assert_eq!(
        body,
        json!({ "code": 404, "message": "No files were found", "encoding": null })
    );
}

#[tokio::test]
async fn test_publish_route() {
    let (store, router) = router(InMemoryStore::default());
    let message = json!({
        "Records": [{
            "s3": {
                "bucket": { "name": "converted" },
                "object": { "key": "converted-my+photo.jpg" }
            }
        }]
    })
    .to_string();

    let (status, _, body) = send(
        router,
        post_json(
            "/notifications/publish",
            &json!({ "Records": [{ "Sns": { "Message": message } }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "bucket": "converted", "key": "converted-my photo.jpg" })
    );
    assert_eq!(
        store.recorded_grants(),
        vec![("converted".to_string(), "converted-my photo.jpg".to_string())]
    );
}

#[tokio::test]
async fn test_publish_route_without_records() {
    let (store, router) = router(InMemoryStore::default());

    let (status, _, body) = send(
        router,
        post_json("/notifications/publish", &json!({ "Records": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOTIFICATION_ERROR");
    assert!(store.recorded_grants().is_empty());
}

#[tokio::test]
async fn test_publish_route_store_failure() {
    let (_, router) = router(InMemoryStore::failing_grant("AccessDenied"));
    let message = json!({
        "Records": [{ "s3": { "bucket": { "name": "b" }, "object": { "key": "k" } } }]
    })
    .to_string();

    let (status, _, body) = send(
        router,
        post_json(
            "/notifications/publish",
            &json!({ "Records": [{ "Sns": { "Message": message } }] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "STORAGE_ERROR");
}
