//! 网关路由处理器

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::server::AppState;
use crate::auth::AuthorizationRequest;
use crate::error::GatewayError;
use crate::media::ListingQuery;
use crate::notifications::TopicEvent;

/// 健康检查
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// 令牌授权：成功返回策略文档，失败统一返回 401 且不带策略
pub async fn authorize(
    State(state): State<AppState>,
    Json(request): Json<AuthorizationRequest>,
) -> Response {
    match state.authorizer.authorize(&request) {
        Ok(decision) => (StatusCode::OK, Json(decision)).into_response(),
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        )
            .into_response(),
    }
}

/// 媒体列表
pub async fn list_media(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = ListingQuery::from_query_parameters(Some(&params));
    state.media.list_media(&query).await.into_response()
}

/// 处理存储通知，公开对应对象
pub async fn publish_object(
    State(state): State<AppState>,
    Json(event): Json<TopicEvent>,
) -> Response {
    match state.publisher.publish(&event).await {
        Ok(reference) => Json(json!({
            "status": "ok",
            "bucket": reference.bucket,
            "key": reference.key,
        }))
        .into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &GatewayError) -> Response {
    let (status, code) = error.to_http_response_parts();
    (
        status,
        Json(json!({ "code": code, "message": error.to_string() })),
    )
        .into_response()
}
