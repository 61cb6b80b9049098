//! # 网关 HTTP 服务
//!
//! 以 Axum 暴露各处理器，便于在本地或测试中端到端调用

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::auth::TokenAuthorizer;
use crate::config::AppConfig;
use crate::error::{Context, GatewayError, Result};
use crate::linfo;
use crate::logging::{LogComponent, LogStage};
use crate::media::MediaListService;
use crate::notifications::AclPublisher;
use crate::storage::ObjectStore;

/// 服务共享状态
#[derive(Clone)]
pub struct AppState {
    pub authorizer: Arc<TokenAuthorizer>,
    pub media: Arc<MediaListService>,
    pub publisher: Arc<AclPublisher>,
}

impl AppState {
    /// 由配置和对象存储构建全部处理器
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn ObjectStore>) -> Result<Self> {
        let authorizer = TokenAuthorizer::new(&config.auth).context("初始化令牌授权器失败")?;

        Ok(Self {
            authorizer: Arc::new(authorizer),
            media: Arc::new(MediaListService::new(Arc::clone(&store), config)),
            publisher: Arc::new(AclPublisher::new(store)),
        })
    }
}

/// 网关服务器
pub struct GatewayServer {
    config: Arc<AppConfig>,
    router: Router,
}

impl GatewayServer {
    /// 创建服务器
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn ObjectStore>) -> Result<Self> {
        let state = AppState::new(Arc::clone(&config), store)?;
        Ok(Self {
            config,
            router: Self::create_router(state),
        })
    }

    /// 创建路由器
    pub fn create_router(state: AppState) -> Router {
        super::routes::create_routes(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// 获取路由器副本
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// 启动服务器，收到 Ctrl-C 后优雅退出
    pub async fn serve(self) -> Result<()> {
        let bind_address = self.config.bind_address();
        let addr: SocketAddr = bind_address.parse().map_err(|e| {
            GatewayError::config_with_source(format!("无效的监听地址 '{bind_address}'"), e)
        })?;

        linfo!(
            "system",
            LogStage::Startup,
            LogComponent::ServerSetup,
            "server_start",
            format!("Starting media gateway on {addr}")
        );

        let listener = TcpListener::bind(&addr).await?;

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| GatewayError::server_start_with_source("网关服务异常退出", e))?;

        linfo!(
            "system",
            LogStage::Shutdown,
            LogComponent::ServerSetup,
            "server_stopped",
            "服务已停止"
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // 无法注册信号时一直运行
        std::future::pending::<()>().await;
    }
}
