//! # 路由配置

use axum::Router;
use axum::routing::{get, post};

use super::handlers;
use super::server::AppState;

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // 令牌授权器
        .route("/authorize", post(handlers::authorize))
        // 媒体列表
        .route("/media", get(handlers::list_media))
        // 存储通知
        .route("/notifications/publish", post(handlers::publish_object))
        .with_state(state)
}
